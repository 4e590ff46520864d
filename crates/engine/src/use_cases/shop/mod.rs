//! Spending money: equipment purchases and skill training.

mod buy;
mod error;
mod train;

use std::sync::Arc;

pub use buy::BuyItem;
pub use error::ShopError;
pub use train::TrainSkill;

/// Container for shop use cases.
pub struct ShopUseCases {
    pub buy: Arc<BuyItem>,
    pub train: Arc<TrainSkill>,
}

impl ShopUseCases {
    pub fn new(buy: Arc<BuyItem>, train: Arc<TrainSkill>) -> Self {
        Self { buy, train }
    }
}
