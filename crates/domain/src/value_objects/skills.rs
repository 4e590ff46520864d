//! Player skills.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four trainable skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Hacking,
    Stealth,
    Social,
    Tech,
}

impl Skill {
    pub const ALL: [Skill; 4] = [Skill::Hacking, Skill::Stealth, Skill::Social, Skill::Tech];

    pub fn as_str(self) -> &'static str {
        match self {
            Skill::Hacking => "hacking",
            Skill::Stealth => "stealth",
            Skill::Social => "social",
            Skill::Tech => "tech",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill levels, serialized as `{ "hacking": 8, "stealth": 9, ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillSet {
    pub hacking: u32,
    pub stealth: u32,
    pub social: u32,
    pub tech: u32,
}

impl SkillSet {
    pub const fn new(hacking: u32, stealth: u32, social: u32, tech: u32) -> Self {
        Self {
            hacking,
            stealth,
            social,
            tech,
        }
    }

    pub fn get(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Hacking => self.hacking,
            Skill::Stealth => self.stealth,
            Skill::Social => self.social,
            Skill::Tech => self.tech,
        }
    }

    /// Raise a skill by `amount` and return the new level.
    pub fn raise(&mut self, skill: Skill, amount: u32) -> u32 {
        let slot = match skill {
            Skill::Hacking => &mut self.hacking,
            Skill::Stealth => &mut self.stealth,
            Skill::Social => &mut self.social,
            Skill::Tech => &mut self.tech,
        };
        *slot = slot.saturating_add(amount);
        *slot
    }

    /// Highest level across all skills.
    pub fn max_level(&self) -> u32 {
        Skill::ALL
            .iter()
            .map(|skill| self.get(*skill))
            .max()
            .unwrap_or_default()
    }
}
