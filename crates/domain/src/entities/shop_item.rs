//! Purchasable equipment.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::value_objects::Skill;

/// Equipment raising one skill by `value` when bought. Each item can be
/// owned once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    pub id: ItemId,
    pub name: String,
    pub cost: u64,
    pub effect: Skill,
    pub value: u32,
    pub desc: String,
}
