//! Tunable game balance.
//!
//! Percentages are whole numbers in `0..=100`.

/// Numbers that drive the mutation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    pub max_energy: u32,
    pub max_heat: u32,
    /// Heat at which a mission result reports the player as caught.
    pub game_over_heat: u32,
    /// XP per level step; also the modulus applied to XP on level up.
    pub xp_per_level: u32,

    pub base_success: u32,
    pub success_per_hacking: u32,
    pub mini_game_bonus: u32,
    pub max_success: u32,
    /// Failed missions add `heat / failure_heat_divisor`.
    pub failure_heat_divisor: u32,

    pub rest_energy: u32,
    pub rest_heat: u32,
    pub lay_low_cost: u64,
    pub lay_low_heat: u32,
    /// Training a skill costs `current level * skill_training_cost`.
    pub skill_training_cost: u64,

    pub random_event_chance: u32,
    pub leaderboard_size: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_energy: 100,
            max_heat: 100,
            game_over_heat: 80,
            xp_per_level: 100,
            base_success: 50,
            success_per_hacking: 5,
            mini_game_bonus: 30,
            max_success: 95,
            failure_heat_divisor: 2,
            rest_energy: 30,
            rest_heat: 5,
            lay_low_cost: 300,
            lay_low_heat: 20,
            skill_training_cost: 500,
            random_event_chance: 15,
            leaderboard_size: 10,
        }
    }
}

impl GameRules {
    pub fn with_game_over_heat(mut self, heat: u32) -> Self {
        self.game_over_heat = heat;
        self
    }

    pub fn with_random_event_chance(mut self, percent: u32) -> Self {
        self.random_event_chance = percent.min(100);
        self
    }

    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self
    }
}
