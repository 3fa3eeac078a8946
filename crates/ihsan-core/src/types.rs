//! Core types for the donation cart

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};

/// Category assigned to drafts that do not name one
pub const DEFAULT_CATEGORY: &str = "General";

/// A pledged donation to one project/category with one amount.
///
/// Line items are only ever constructed through [`ItemDraft::normalize`], so
/// every stored item has a non-empty `id` and `title` and a finite positive
/// `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Project identifier or generated token
    pub id: String,
    /// Display name of the thing being funded
    pub title: String,
    /// Free-text classification ("Zakat", "Sadaqah", "General", ...)
    #[serde(rename = "type")]
    pub category: String,
    /// Amount in major currency units
    pub amount: f64,
    /// Optional image URL carried through from the project card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl LineItem {
    /// Whether this item is keyed by the given `(id, category)` pair
    pub fn matches(&self, id: &str, category: &str) -> bool {
        self.id == id && self.category == category
    }
}

/// Amount as supplied by a caller: either already numeric or typed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftAmount {
    Number(f64),
    Text(String),
}

impl DraftAmount {
    /// Parse into a number, `None` when the text is not numeric
    pub fn parse(&self) -> Option<f64> {
        match self {
            DraftAmount::Number(n) => Some(*n),
            DraftAmount::Text(s) => s.trim().trim_start_matches('$').parse::<f64>().ok(),
        }
    }
}

impl From<f64> for DraftAmount {
    fn from(value: f64) -> Self {
        DraftAmount::Number(value)
    }
}

impl From<u32> for DraftAmount {
    fn from(value: u32) -> Self {
        DraftAmount::Number(f64::from(value))
    }
}

impl From<&str> for DraftAmount {
    fn from(value: &str) -> Self {
        DraftAmount::Text(value.to_string())
    }
}

impl From<String> for DraftAmount {
    fn from(value: String) -> Self {
        DraftAmount::Text(value)
    }
}

/// Candidate line item without validation guarantees.
///
/// Accepts the loose shapes pages and old snapshots produce: `name` in place
/// of `title`, `type` in place of `category`, and amounts as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "type")]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<DraftAmount>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ItemDraft {
    pub fn new(id: impl Into<String>, title: impl Into<String>, amount: impl Into<DraftAmount>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            amount: Some(amount.into()),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Validate and convert into a [`LineItem`].
    ///
    /// Fails with [`CartError::InvalidItem`] when the id or title is empty or
    /// the amount is missing, non-numeric, non-finite or not positive.
    pub fn normalize(self) -> CartResult<LineItem> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err(CartError::InvalidItem("missing id".to_string()));
        }

        let title = non_blank(self.title)
            .or_else(|| non_blank(self.name))
            .ok_or_else(|| CartError::InvalidItem(format!("missing title for '{}'", id)))?;

        let amount = match &self.amount {
            Some(raw) => raw
                .parse()
                .ok_or_else(|| CartError::InvalidItem(format!("non-numeric amount {:?}", raw)))?,
            None => return Err(CartError::InvalidItem(format!("missing amount for '{}'", id))),
        };
        validate_amount(amount)?;

        let category = non_blank(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(LineItem {
            id,
            title,
            category,
            amount,
            image: non_blank(self.image),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Reject non-finite and non-positive amounts
pub fn validate_amount(amount: f64) -> CartResult<()> {
    if !amount.is_finite() {
        return Err(CartError::InvalidItem(format!("amount {} is not finite", amount)));
    }
    if amount <= 0.0 {
        return Err(CartError::InvalidItem(format!("amount {} must be positive", amount)));
    }
    Ok(())
}

/// How the donor intends to pay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Credit/debit card, charged a processing fee
    #[default]
    Card,
    /// Direct bank transfer (Zelle), no processing fee
    #[serde(alias = "zelle")]
    BankTransfer,
}

impl PaymentMethod {
    /// Whether this method incurs a processing fee
    pub fn has_fee(&self) -> bool {
        matches!(self, PaymentMethod::Card)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit Card",
            PaymentMethod::BankTransfer => "Bank Transfer (Zelle)",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::BankTransfer => write!(f, "bank-transfer"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" | "credit-card" => Ok(PaymentMethod::Card),
            "bank-transfer" | "bank" | "zelle" => Ok(PaymentMethod::BankTransfer),
            other => Err(format!("unknown payment method '{}' (expected card or bank-transfer)", other)),
        }
    }
}

/// Who a donation is made for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesignationKind {
    #[default]
    #[serde(rename = "self")]
    Personal,
    #[serde(alias = "behalf")]
    OnBehalfOf,
    #[serde(alias = "memory")]
    InMemoryOf,
}

impl fmt::Display for DesignationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignationKind::Personal => write!(f, "self"),
            DesignationKind::OnBehalfOf => write!(f, "on-behalf-of"),
            DesignationKind::InMemoryOf => write!(f, "in-memory-of"),
        }
    }
}

impl FromStr for DesignationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "self" | "me" => Ok(DesignationKind::Personal),
            "on-behalf-of" | "behalf" => Ok(DesignationKind::OnBehalfOf),
            "in-memory-of" | "memory" => Ok(DesignationKind::InMemoryOf),
            other => Err(format!(
                "unknown designation '{}' (expected self, on-behalf-of or in-memory-of)",
                other
            )),
        }
    }
}

/// Designation of the donation with the honoree's name when not for self
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Designation {
    #[serde(rename = "type")]
    pub kind: DesignationKind,
    pub name: String,
}

impl Designation {
    pub fn on_behalf_of(name: impl Into<String>) -> Self {
        Self {
            kind: DesignationKind::OnBehalfOf,
            name: name.into(),
        }
    }

    pub fn in_memory_of(name: impl Into<String>) -> Self {
        Self {
            kind: DesignationKind::InMemoryOf,
            name: name.into(),
        }
    }
}

/// Metadata recorded so the donor's employer can match the gift later
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployerMatch {
    pub enabled: bool,
    #[serde(alias = "company")]
    pub company_name: String,
    #[serde(alias = "email")]
    pub contact_email: String,
}

impl EmployerMatch {
    pub fn new(company_name: impl Into<String>, contact_email: impl Into<String>) -> Self {
        Self {
            enabled: true,
            company_name: company_name.into(),
            contact_email: contact_email.into(),
        }
    }
}

/// Checkout options that travel with the cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartOptions {
    #[serde(default)]
    pub cover_fees: bool,
    #[serde(default)]
    pub donation_for: Designation,
    #[serde(default)]
    pub employer_match: EmployerMatch,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl CartOptions {
    /// Reset everything `clear()` resets; the payment method survives.
    pub fn reset(&mut self) {
        *self = Self {
            payment_method: self.payment_method,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults_category() {
        let item = ItemDraft::new("w1", "Well", 50.0).normalize().unwrap();
        assert_eq!(item.category, DEFAULT_CATEGORY);
        assert_eq!(item.amount, 50.0);
    }

    #[test]
    fn test_normalize_accepts_name_and_text_amount() {
        let draft = ItemDraft {
            id: "water-well-somalia".to_string(),
            name: Some("Water Well in Somalia".to_string()),
            category: Some("water".to_string()),
            amount: Some(DraftAmount::from(" 25.50 ")),
            ..Default::default()
        };
        let item = draft.normalize().unwrap();
        assert_eq!(item.title, "Water Well in Somalia");
        assert_eq!(item.amount, 25.5);
    }

    #[test]
    fn test_normalize_rejects_bad_drafts() {
        assert!(ItemDraft::new("", "Well", 10.0).normalize().is_err());
        assert!(ItemDraft::new("w1", "  ", 10.0).normalize().is_err());
        assert!(ItemDraft::new("w1", "Well", 0.0).normalize().is_err());
        assert!(ItemDraft::new("w1", "Well", -5.0).normalize().is_err());
        assert!(ItemDraft::new("w1", "Well", f64::NAN).normalize().is_err());
        assert!(ItemDraft::new("w1", "Well", f64::INFINITY).normalize().is_err());
        assert!(ItemDraft::new("w1", "Well", "abc").normalize().is_err());

        let no_amount = ItemDraft {
            id: "w1".to_string(),
            title: Some("Well".to_string()),
            ..Default::default()
        };
        assert!(matches!(no_amount.normalize(), Err(CartError::InvalidItem(_))));
    }

    #[test]
    fn test_draft_deserializes_type_alias() {
        let draft: ItemDraft =
            serde_json::from_str(r#"{"id":"z1","title":"Zakat","type":"Zakat","amount":"100"}"#)
                .unwrap();
        let item = draft.normalize().unwrap();
        assert_eq!(item.category, "Zakat");
        assert_eq!(item.amount, 100.0);
    }

    #[test]
    fn test_line_item_serializes_category_as_type() {
        let item = ItemDraft::new("w1", "Well", 50.0).normalize().unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "General");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!("Zelle".parse::<PaymentMethod>().unwrap(), PaymentMethod::BankTransfer);
        assert!("cheque".parse::<PaymentMethod>().is_err());
        let parsed: PaymentMethod = serde_json::from_str("\"zelle\"").unwrap();
        assert_eq!(parsed, PaymentMethod::BankTransfer);
    }

    #[test]
    fn test_designation_serde_names() {
        let json = serde_json::to_string(&Designation::default()).unwrap();
        assert_eq!(json, r#"{"type":"self","name":""}"#);
        let parsed: Designation = serde_json::from_str(r#"{"type":"memory","name":"Amina"}"#).unwrap();
        assert_eq!(parsed, Designation::in_memory_of("Amina"));
    }

    #[test]
    fn test_options_reset_keeps_payment_method() {
        let mut options = CartOptions {
            cover_fees: true,
            donation_for: Designation::on_behalf_of("Yusuf"),
            employer_match: EmployerMatch::new("Acme", "hr@acme.test"),
            payment_method: PaymentMethod::BankTransfer,
        };
        options.reset();
        assert!(!options.cover_fees);
        assert_eq!(options.donation_for, Designation::default());
        assert_eq!(options.employer_match, EmployerMatch::default());
        assert_eq!(options.payment_method, PaymentMethod::BankTransfer);
    }
}
