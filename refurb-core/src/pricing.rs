//! Pricing rule
//!
//! A job is priced per asset: a flat desktop charge plus a flat drive-wipe
//! charge, each applied when the matching flag is set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Asset;

/// Additive per-asset pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRule {
    /// Charged when `is_desktop` is set
    pub desktop_charge: Decimal,

    /// Charged when `is_hard_drive_wiped` is set
    pub wipe_charge: Decimal,
}

impl PricingRule {
    pub fn new(desktop_charge: Decimal, wipe_charge: Decimal) -> Self {
        Self {
            desktop_charge,
            wipe_charge,
        }
    }

    /// Cost of a single asset under this rule
    pub fn cost(&self, asset: &Asset) -> Decimal {
        let mut cost = Decimal::ZERO;
        if asset.is_desktop {
            cost += self.desktop_charge;
        }
        if asset.is_hard_drive_wiped {
            cost += self.wipe_charge;
        }
        cost
    }
}

impl Default for PricingRule {
    fn default() -> Self {
        Self::new(Decimal::new(5, 0), Decimal::new(75, 1))
    }
}

impl std::fmt::Display for PricingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "desktop {} / wipe {}",
            self.desktop_charge, self.wipe_charge
        )
    }
}
