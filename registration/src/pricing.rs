//! Pricing rules for a registration.
//!
//! Totals are recomputed from the ledger and license selection on every
//! read, never cached. Amounts stay full-precision `f64` internally;
//! rounding to two decimals happens once, in [`format_eur`], when an amount
//! is turned into text.

use crate::ledger::{LineItem, SelectionLedger};
use crate::types::LicenseConfig;
use serde::Serialize;

/// Fee for a new CSA license, in euros
pub const NEW_LICENSE_FEE: f64 = 70.0;

/// Fee for a CSA license renewal, in euros
pub const RENEWAL_LICENSE_FEE: f64 = 40.0;

/// Computed totals for a registration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    /// Sum of all section line subtotals
    pub sections_subtotal: f64,
    /// New license fees (0 when licenses are not included)
    pub new_license_fee: f64,
    /// Renewal fees (0 when licenses are not included)
    pub renewal_license_fee: f64,
    /// New plus renewal fees
    pub license_subtotal: f64,
    /// Amount due: sections plus licenses
    pub grand_total: f64,
}

impl Totals {
    /// Compute the totals for the current selection
    ///
    /// License counts are kept but not charged when `included` is false.
    #[must_use]
    pub fn compute(ledger: &SelectionLedger, license: &LicenseConfig) -> Self {
        let sections_subtotal: f64 = ledger.items().iter().map(LineItem::subtotal).sum();

        let (new_license_fee, renewal_license_fee) = if license.included {
            (
                NEW_LICENSE_FEE * f64::from(license.new_count),
                RENEWAL_LICENSE_FEE * f64::from(license.renewal_count),
            )
        } else {
            (0.0, 0.0)
        };

        let license_subtotal = new_license_fee + renewal_license_fee;

        Self {
            sections_subtotal,
            new_license_fee,
            renewal_license_fee,
            license_subtotal,
            grand_total: sections_subtotal + license_subtotal,
        }
    }
}

/// Format an amount for display: two decimals, euro sign
#[must_use]
pub fn format_eur(amount: f64) -> String {
    format!("{amount:.2}€")
}
