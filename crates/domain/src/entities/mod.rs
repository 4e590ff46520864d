//! Static game content entities.

mod achievement;
mod character;
mod mission;
mod random_event;
mod shop_item;
mod story;

pub use achievement::{Achievement, AchievementCondition};
pub use character::CharacterArchetype;
pub use mission::{Mission, MissionType};
pub use random_event::{EventEffect, RandomEvent};
pub use shop_item::ShopItem;
pub use story::{EndingType, StoryChoice, StoryGraph, StoryNode};
