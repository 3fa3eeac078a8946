//! Local checkout: validate options and record a pledge receipt.
//!
//! No payment is attempted. A receipt is the donor's record of what was
//! pledged, how they intend to pay and what would be charged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::cart::Cart;
use crate::error::{CartError, CartResult};
use crate::totals::{FeeSchedule, Totals};
use crate::types::{CartOptions, DesignationKind, LineItem};

/// Record produced by a successful checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PledgeReceipt {
    /// ULID reference shown to the donor
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<LineItem>,
    pub options: CartOptions,
    pub totals: Totals,
}

impl PledgeReceipt {
    pub fn for_cart(cart: &Cart, fees: &FeeSchedule) -> Self {
        Self {
            reference: Ulid::new().to_string(),
            created_at: Utc::now(),
            items: cart.items().to_vec(),
            options: cart.options().clone(),
            totals: cart.totals(fees),
        }
    }
}

/// Check that a cart can be checked out.
pub fn validate(cart: &Cart) -> CartResult<()> {
    if cart.is_empty() {
        return Err(CartError::EmptyCart);
    }

    let options = cart.options();
    let designation = &options.donation_for;
    if designation.kind != DesignationKind::Personal && designation.name.trim().is_empty() {
        return Err(CartError::InvalidCheckout(format!(
            "a name is required when giving {}",
            designation.kind
        )));
    }

    let employer = &options.employer_match;
    if employer.enabled {
        if employer.company_name.trim().is_empty() {
            return Err(CartError::InvalidCheckout(
                "employer match needs a company name".to_string(),
            ));
        }
        if !employer.contact_email.contains('@') {
            return Err(CartError::InvalidCheckout(format!(
                "employer contact email '{}' is not valid",
                employer.contact_email
            )));
        }
    }

    Ok(())
}
