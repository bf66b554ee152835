//! Item Record Entity
//!
//! The unit of persisted and working state: one grocery item with its
//! quantity, unit price, selection flag and baseline marker.

use serde::{Deserialize, Serialize};

/// One shopping-list entry.
///
/// Wire names match the spreadsheet payload and the persisted format
/// (`item`, `quantidade`, `valor`, `selecionado`, `fixo`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Display label, non-empty.
    #[serde(rename = "item")]
    pub name: String,
    /// Non-negative; 0 means unset.
    #[serde(rename = "quantidade")]
    pub quantity: f64,
    /// Non-negative; 0 means unset.
    #[serde(rename = "valor")]
    pub unit_price: f64,
    /// Whether the item counts toward totals and submission.
    #[serde(rename = "selecionado")]
    pub selected: bool,
    /// Baseline items come from the remote list (or fallback) and are
    /// never removed individually, only reset.
    #[serde(rename = "fixo")]
    pub baseline: bool,
}

impl ItemRecord {
    /// A fresh zero-valued, unselected baseline record.
    pub fn baseline(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 0.0,
            unit_price: 0.0,
            selected: false,
            baseline: true,
        }
    }

    /// A fresh zero-valued, unselected user-added record.
    pub fn user_added(name: impl Into<String>) -> Self {
        Self {
            baseline: false,
            ..Self::baseline(name)
        }
    }

    /// Quantity times unit price for this record.
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Lenient numeric parsing for free-text entry fields.
///
/// Takes the longest leading prefix that parses as a float, so "2,5"
/// reads as 2 and "3abc" as 3. Unparsable, non-finite or negative
/// entries read as 0 (the data model has no negative quantities or
/// prices).
pub fn parse_entry(text: &str) -> f64 {
    let trimmed = text.trim();
    for end in (1..=trimmed.len()).rev() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        if let Ok(n) = trimmed[..end].parse::<f64>() {
            if n.is_finite() && n > 0.0 {
                return n;
            }
            return 0.0;
        }
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_record_defaults() {
        let record = ItemRecord::baseline("Feijão");
        assert_eq!(record.name, "Feijão");
        assert_eq!(record.quantity, 0.0);
        assert_eq!(record.unit_price, 0.0);
        assert!(!record.selected);
        assert!(record.baseline);
    }

    #[test]
    fn test_user_added_record_is_not_baseline() {
        let record = ItemRecord::user_added("Chocolate");
        assert!(!record.baseline);
    }

    #[test]
    fn test_line_total() {
        let mut record = ItemRecord::baseline("Feijão");
        record.quantity = 2.0;
        record.unit_price = 5.5;
        assert_eq!(record.line_total(), 11.0);
    }

    #[test]
    fn test_wire_format_field_names() {
        let record = ItemRecord {
            name: "Feijão".to_string(),
            quantity: 2.0,
            unit_price: 5.5,
            selected: true,
            baseline: true,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["item"], "Feijão");
        assert_eq!(json["quantidade"], 2.0);
        assert_eq!(json["valor"], 5.5);
        assert_eq!(json["selecionado"], true);
        assert_eq!(json["fixo"], true);
    }

    #[test]
    fn test_parse_entry_plain_numbers() {
        assert_eq!(parse_entry("2"), 2.0);
        assert_eq!(parse_entry("5.50"), 5.5);
        assert_eq!(parse_entry("  3 "), 3.0);
    }

    #[test]
    fn test_parse_entry_longest_prefix() {
        assert_eq!(parse_entry("2,5"), 2.0);
        assert_eq!(parse_entry("3abc"), 3.0);
        assert_eq!(parse_entry("1.5x"), 1.5);
    }

    #[test]
    fn test_parse_entry_garbage_is_zero() {
        assert_eq!(parse_entry(""), 0.0);
        assert_eq!(parse_entry("abc"), 0.0);
        assert_eq!(parse_entry("-2"), 0.0);
    }
}
