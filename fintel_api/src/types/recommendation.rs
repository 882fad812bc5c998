//! The daily pick: a scored recommendation with price targets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Trade action attached to a recommendation. Values outside this set fail to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "WATCH")]
    Watch,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl Action {
    pub fn is_bullish(&self) -> bool {
        matches!(self, Action::StrongBuy | Action::Buy)
    }

    pub fn is_bearish(&self) -> bool {
        matches!(self, Action::Sell | Action::StrongSell)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::StrongBuy => "STRONG BUY",
            Action::Buy => "BUY",
            Action::Hold => "HOLD",
            Action::Watch => "WATCH",
            Action::Sell => "SELL",
            Action::StrongSell => "STRONG SELL",
        };
        write!(f, "{}", s)
    }
}

/// A single recommendation as scored by the service.
///
/// Scores are on a 0-10 scale. Prices are in dollars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub ticker: String,
    pub name: String,
    pub action: Action,
    pub price: f64,
    pub target: f64,
    pub stop_loss: f64,
    pub total_score: f64,
    pub technical_score: f64,
    pub fundamental_score: f64,
    pub catalyst_score: f64,
    pub reasoning: String,
    pub catalyst: String,
    /// Reward-to-risk multiple, e.g. `2.8` for 2.8x.
    pub risk_reward: f64,
    /// Suggested allocation, e.g. `3-5% of portfolio`.
    pub position_size: String,
}

impl Recommendation {
    /// Percentage gain from `price` to `target`. `None` when price is zero.
    pub fn upside_pct(&self) -> Option<f64> {
        if self.price == 0.0 {
            return None;
        }
        Some((self.target - self.price) * 100.0 / self.price)
    }

    /// Percentage loss from `price` to `stop_loss`. `None` when price is zero.
    pub fn downside_pct(&self) -> Option<f64> {
        if self.price == 0.0 {
            return None;
        }
        Some((self.price - self.stop_loss) * 100.0 / self.price)
    }
}

/// Rounds half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
