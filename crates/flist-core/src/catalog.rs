//! Add-item form model for the catalog view.
//!
//! Prices are entered as digits only, displayed with thousands separators
//! while typing and stored as a formatted string with a fixed currency
//! suffix, e.g. `52000` → `"52,000won"`.

use crate::error::{FlistError, FlistResult};
use crate::types::{ImageRef, Item};

/// Currency suffix appended to every stored price
pub const PRICE_SUFFIX: &str = "won";

/// Insert `,` every three digits from the right.
///
/// Expects ASCII digits only; anything else is passed through unchanged.
pub fn format_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Digits-only price field.
///
/// Holds the normalised digit string; arbitrary length so very large
/// numbers format without overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceInput {
    digits: String,
}

impl PriceInput {
    pub fn new(raw: &str) -> Self {
        let mut input = Self::default();
        input.set_raw(raw);
        input
    }

    /// Replace the value from raw text, keeping only digits.
    ///
    /// Leading zeros are dropped the way integer parsing drops them; an
    /// all-zero entry stays `"0"`.
    pub fn set_raw(&mut self, raw: &str) {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let trimmed = digits.trim_start_matches('0');
        self.digits = if trimmed.is_empty() && !digits.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Live display value, without the suffix
    pub fn display(&self) -> String {
        format_thousands(&self.digits)
    }

    /// Stored form, `"52,000won"`
    pub fn to_price_string(&self) -> FlistResult<String> {
        if self.digits.is_empty() {
            return Err(FlistError::InvalidItem("Please enter a price.".to_string()));
        }
        Ok(format!("{}{}", self.display(), PRICE_SUFFIX))
    }
}

/// Add-item form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub brand: String,
    pub name: String,
    pub price: PriceInput,
    /// Image URL typed by the user
    pub image: String,
}

impl ItemDraft {
    pub fn new(
        brand: impl Into<String>,
        name: impl Into<String>,
        price: &str,
        image: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            name: name.into(),
            price: PriceInput::new(price),
            image: image.into(),
        }
    }

    /// Check that every required field is filled in.
    pub fn validate(&self) -> FlistResult<()> {
        let missing = [
            ("brand", self.brand.trim().is_empty()),
            ("name", self.name.trim().is_empty()),
            ("price", self.price.is_empty()),
            ("image", self.image.trim().is_empty()),
        ];
        match missing.iter().find(|(_, empty)| *empty) {
            Some((field, _)) => Err(FlistError::InvalidItem(format!(
                "Please enter the item {field}."
            ))),
            None => Ok(()),
        }
    }

    /// Build the item to store, with a freshly generated id.
    pub fn into_item(self) -> FlistResult<Item> {
        self.validate()?;
        let price = self.price.to_price_string()?;
        Ok(Item::new(
            self.brand.trim(),
            self.name.trim(),
            price,
            ImageRef::new(self.image.trim()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(""), "");
        assert_eq!(format_thousands("7"), "7");
        assert_eq!(format_thousands("999"), "999");
        assert_eq!(format_thousands("1000"), "1,000");
        assert_eq!(format_thousands("52000"), "52,000");
        assert_eq!(format_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_price_input_filters_non_digits() {
        let price = PriceInput::new("52,000 won");
        assert_eq!(price.digits(), "52000");
        assert_eq!(price.display(), "52,000");
        assert_eq!(price.to_price_string().unwrap(), "52,000won");
    }

    #[test]
    fn test_price_input_leading_zeros() {
        assert_eq!(PriceInput::new("007").digits(), "7");
        assert_eq!(PriceInput::new("000").digits(), "0");
        assert_eq!(PriceInput::new("0").to_price_string().unwrap(), "0won");
    }

    #[test]
    fn test_empty_price_rejected() {
        let price = PriceInput::new("abc");
        assert!(price.is_empty());
        assert!(matches!(
            price.to_price_string(),
            Err(FlistError::InvalidItem(_))
        ));
    }

    #[test]
    fn test_huge_price_does_not_overflow() {
        let price = PriceInput::new("123456789012345678901234567890");
        assert_eq!(
            price.display(),
            "123,456,789,012,345,678,901,234,567,890"
        );
    }

    #[test]
    fn test_draft_into_item() {
        let item = ItemDraft::new(" Acne ", "Wool\ncoat", "52000", "https://img.example/coat.png")
            .into_item()
            .unwrap();
        assert_eq!(item.brand, "Acne");
        assert_eq!(item.name, "Wool\ncoat");
        assert_eq!(item.price, "52,000won");
        assert_eq!(item.image.as_str(), "https://img.example/coat.png");
        assert!(!item.id.as_str().is_empty());
    }

    #[test]
    fn test_draft_missing_field_names_it() {
        let err = ItemDraft::new("Acne", "  ", "52000", "https://img.example/a.png")
            .validate()
            .unwrap_err();
        assert_eq!(err.user_notice(), "Please enter the item name.");

        let err = ItemDraft::new("Acne", "Coat", "", "https://img.example/a.png")
            .into_item()
            .unwrap_err();
        assert_eq!(err.user_notice(), "Please enter the item price.");
    }
}
