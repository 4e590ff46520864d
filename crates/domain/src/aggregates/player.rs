//! Player aggregate - the mutable progress of one save slot
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state only changes through the operations below
//! - **Valid by construction**: `from_archetype()` is the only constructor
//! - **Pure rules**: no clock, no randomness; callers decide outcomes and
//!   pass them in
//!
//! All counters saturate instead of overflowing. Energy and heat stay within
//! `0..=max` from [`GameRules`].

use serde::{Deserialize, Serialize};

use crate::entities::{
    Achievement, CharacterArchetype, EventEffect, Mission, MissionType, RandomEvent, ShopItem,
};
use crate::error::DomainError;
use crate::ids::{AchievementId, CharacterId, ItemId, StoryNodeId};
use crate::value_objects::{GameRules, Skill, SkillSet};

fn default_story_node() -> StoryNodeId {
    StoryNodeId::new("intro")
}

/// A player's full progress.
///
/// # Example
///
/// ```
/// use hacktycoon_domain::{CharacterArchetype, CharacterId, Player, SkillSet, StoryNodeId};
///
/// let ghost = CharacterArchetype {
///     id: CharacterId::new("ghost"),
///     name: "Ghost".to_string(),
///     avatar: "👻".to_string(),
///     backstory: String::new(),
///     skills: SkillSet::new(8, 9, 5, 7),
///     starting_money: 500,
/// };
/// let player = Player::from_archetype(&ghost, StoryNodeId::new("intro"));
///
/// assert_eq!(player.level(), 1);
/// assert_eq!(player.money(), 500);
/// assert_eq!(player.energy(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    // Identity
    character_id: CharacterId,
    name: String,
    avatar: String,
    #[serde(default)]
    backstory: String,

    // Progression
    skills: SkillSet,
    level: u32,
    xp: u32,

    // Resources
    energy: u32,
    money: u64,
    heat: u32,

    // Collections
    #[serde(default)]
    inventory: Vec<ItemId>,
    #[serde(default)]
    achievements: Vec<AchievementId>,

    // Mission record
    #[serde(default)]
    missions_completed: u32,
    #[serde(default)]
    legal_count: u32,
    #[serde(default)]
    illegal_count: u32,
    /// Mission types in completion order
    #[serde(default)]
    path: Vec<MissionType>,
    #[serde(default)]
    mission_streak: u32,
    #[serde(default)]
    double_reward_next: bool,

    // Story
    #[serde(default = "default_story_node")]
    current_story_node: StoryNodeId,
    #[serde(default)]
    story_path: Vec<StoryNodeId>,
}

/// What a successful mission paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionRewards {
    pub xp: u32,
    pub money: u64,
    #[serde(default)]
    pub doubled: bool,
}

/// Result of applying a successful mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionProgress {
    pub rewards: MissionRewards,
    pub level_up: bool,
    pub new_level: u32,
}

impl Player {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Fresh level 1 player with the archetype's skills and starting money.
    pub fn from_archetype(archetype: &CharacterArchetype, start: StoryNodeId) -> Self {
        Self {
            character_id: archetype.id.clone(),
            name: archetype.name.clone(),
            avatar: archetype.avatar.clone(),
            backstory: archetype.backstory.clone(),
            skills: archetype.skills,
            level: 1,
            xp: 0,
            energy: 100,
            money: archetype.starting_money,
            heat: 0,
            inventory: Vec::new(),
            achievements: Vec::new(),
            missions_completed: 0,
            legal_count: 0,
            illegal_count: 0,
            path: Vec::new(),
            mission_streak: 0,
            double_reward_next: false,
            current_story_node: start,
            story_path: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn character_id(&self) -> &CharacterId {
        &self.character_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    #[inline]
    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    #[inline]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    #[inline]
    pub fn money(&self) -> u64 {
        self.money
    }

    #[inline]
    pub fn heat(&self) -> u32 {
        self.heat
    }

    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    pub fn achievements(&self) -> &[AchievementId] {
        &self.achievements
    }

    pub fn missions_completed(&self) -> u32 {
        self.missions_completed
    }

    pub fn legal_count(&self) -> u32 {
        self.legal_count
    }

    pub fn illegal_count(&self) -> u32 {
        self.illegal_count
    }

    pub fn path(&self) -> &[MissionType] {
        &self.path
    }

    pub fn mission_streak(&self) -> u32 {
        self.mission_streak
    }

    pub fn double_reward_next(&self) -> bool {
        self.double_reward_next
    }

    pub fn current_story_node(&self) -> &StoryNodeId {
        &self.current_story_node
    }

    pub fn story_path(&self) -> &[StoryNodeId] {
        &self.story_path
    }

    /// Completed missions of one type, counted from the mission path.
    pub fn missions_of_type(&self, mission_type: MissionType) -> u32 {
        self.path.iter().filter(|t| **t == mission_type).count() as u32
    }

    pub fn owns(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    pub fn has_achievement(&self, id: &AchievementId) -> bool {
        self.achievements.contains(id)
    }

    /// Heat high enough that the authorities caught up.
    pub fn is_busted(&self, rules: &GameRules) -> bool {
        self.heat >= rules.game_over_heat
    }

    // =========================================================================
    // Missions
    // =========================================================================

    /// Percent chance of pulling off a mission.
    pub fn success_chance(&self, rules: &GameRules, mini_game_success: bool) -> u32 {
        let mut chance = rules
            .base_success
            .saturating_add(self.skills.hacking.saturating_mul(rules.success_per_hacking));
        if mini_game_success {
            chance = chance.saturating_add(rules.mini_game_bonus);
        }
        chance.min(rules.max_success)
    }

    pub fn ensure_energy_for(&self, mission: &Mission) -> Result<(), DomainError> {
        if self.energy < mission.energy {
            return Err(DomainError::InsufficientEnergy {
                needed: mission.energy,
                available: self.energy,
            });
        }
        Ok(())
    }

    /// Apply a successful mission: rewards, heat, energy, counters, and at
    /// most one level up.
    pub fn complete_mission(&mut self, mission: &Mission, rules: &GameRules) -> MissionProgress {
        let doubled = self.double_reward_next;
        let (xp_gain, money_gain) = if doubled {
            self.double_reward_next = false;
            (mission.xp.saturating_mul(2), mission.money.saturating_mul(2))
        } else {
            (mission.xp, mission.money)
        };

        let new_xp = self.xp.saturating_add(xp_gain);
        let per_level = rules.xp_per_level.max(1);
        let level_up = new_xp / per_level > self.level.saturating_sub(1);

        self.xp = new_xp;
        self.money = self.money.saturating_add(money_gain);
        self.heat = self.heat.saturating_add(mission.heat).min(rules.max_heat);
        self.energy = self.energy.saturating_sub(mission.energy);
        self.missions_completed = self.missions_completed.saturating_add(1);
        self.mission_streak = self.mission_streak.saturating_add(1);
        self.path.push(mission.mission_type);
        match mission.mission_type {
            MissionType::Legal => self.legal_count = self.legal_count.saturating_add(1),
            MissionType::Illegal => self.illegal_count = self.illegal_count.saturating_add(1),
        }

        if level_up {
            self.level = self.level.saturating_add(1);
            self.energy = rules.max_energy;
            self.xp = new_xp % per_level;
        }

        MissionProgress {
            rewards: MissionRewards {
                xp: xp_gain,
                money: money_gain,
                doubled,
            },
            level_up,
            new_level: self.level,
        }
    }

    /// Apply a failed mission: energy is still spent and part of the heat
    /// sticks. The success streak resets.
    pub fn fail_mission(&mut self, mission: &Mission, rules: &GameRules) {
        let heat_gain = mission.heat / rules.failure_heat_divisor.max(1);
        self.energy = self.energy.saturating_sub(mission.energy);
        self.heat = self.heat.saturating_add(heat_gain).min(rules.max_heat);
        self.mission_streak = 0;
    }

    pub fn apply_event(&mut self, event: &RandomEvent, rules: &GameRules) {
        match event.effect {
            EventEffect::Money(delta) => {
                self.money = if delta >= 0 {
                    self.money.saturating_add(delta.unsigned_abs())
                } else {
                    self.money.saturating_sub(delta.unsigned_abs())
                };
            }
            EventEffect::Heat(delta) => {
                self.heat = shift_clamped(self.heat, delta, rules.max_heat);
            }
            EventEffect::Energy(delta) => {
                self.energy = shift_clamped(self.energy, delta, rules.max_energy);
            }
            EventEffect::BonusXp(amount) => {
                self.xp = self.xp.saturating_add(amount);
            }
            EventEffect::DoubleRewardNext => {
                self.double_reward_next = true;
            }
        }
    }

    // =========================================================================
    // Achievements
    // =========================================================================

    /// Unlock every catalog achievement whose condition now holds. Returns
    /// the newly unlocked ones in catalog order.
    pub fn unlock_achievements(&mut self, catalog: &[Achievement]) -> Vec<Achievement> {
        let mut unlocked = Vec::new();
        for achievement in catalog {
            if self.has_achievement(&achievement.id) || !achievement.is_met(self) {
                continue;
            }
            self.achievements.push(achievement.id.clone());
            unlocked.push(achievement.clone());
        }
        unlocked
    }

    // =========================================================================
    // Economy
    // =========================================================================

    /// Buy a shop item. Returns the new level of the boosted skill.
    pub fn purchase(&mut self, item: &ShopItem) -> Result<u32, DomainError> {
        if self.owns(&item.id) {
            return Err(DomainError::AlreadyOwned(item.id.to_string()));
        }
        self.spend(item.cost)?;
        self.inventory.push(item.id.clone());
        Ok(self.skills.raise(item.effect, item.value))
    }

    /// Train one skill level. Returns `(new_level, cost)`.
    pub fn train_skill(
        &mut self,
        skill: Skill,
        rules: &GameRules,
    ) -> Result<(u32, u64), DomainError> {
        let cost = u64::from(self.skills.get(skill)).saturating_mul(rules.skill_training_cost);
        self.spend(cost)?;
        Ok((self.skills.raise(skill, 1), cost))
    }

    pub fn rest(&mut self, rules: &GameRules) {
        self.energy = self.energy.saturating_add(rules.rest_energy).min(rules.max_energy);
        self.heat = self.heat.saturating_sub(rules.rest_heat);
    }

    /// Pay to make heat go away faster than resting.
    pub fn lay_low(&mut self, rules: &GameRules) -> Result<(), DomainError> {
        self.spend(rules.lay_low_cost)?;
        self.heat = self.heat.saturating_sub(rules.lay_low_heat);
        Ok(())
    }

    fn spend(&mut self, amount: u64) -> Result<(), DomainError> {
        if self.money < amount {
            return Err(DomainError::InsufficientFunds {
                needed: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        Ok(())
    }

    // =========================================================================
    // Story
    // =========================================================================

    /// Move the story pointer, recording the node being left.
    pub fn advance_story(&mut self, next: StoryNodeId) {
        let previous = std::mem::replace(&mut self.current_story_node, next);
        self.story_path.push(previous);
    }
}

fn shift_clamped(value: u32, delta: i32, max: u32) -> u32 {
    let shifted = if delta >= 0 {
        value.saturating_add(delta.unsigned_abs())
    } else {
        value.saturating_sub(delta.unsigned_abs())
    };
    shifted.min(max)
}
