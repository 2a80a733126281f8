//! Advisory
//!
//! User-facing explanation for a coin-gated action that was refused.

use serde::{Deserialize, Serialize};

/// Modal message; the modal is visible while the store holds one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub message: String,
}

impl Advisory {
    pub fn insufficient_coins(action: &str, required: u32, balance: u32) -> Self {
        let plural = if required == 1 { "" } else { "s" };
        Self {
            message: format!(
                "You need {required} coin{plural} to {action} this GIF, but you only have {balance}. Complete more tasks to earn coins!"
            ),
        }
    }
}
