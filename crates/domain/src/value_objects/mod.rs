//! Value objects: immutable data without identity.

mod requirement;
mod rules;
mod skills;

pub use requirement::Requirement;
pub use rules::GameRules;
pub use skills::{Skill, SkillSet};
