//! Renderable Row
//!
//! The view-model a rendering surface binds to: raw entry text for the
//! quantity and price fields, display text for the total cell, and the
//! baseline marker that controls clear-all filtering.

use std::collections::HashMap;

use crate::domain::{parse_entry, ItemRecord};

/// Template id every item row is instantiated from.
pub const ITEM_ROW_TEMPLATE: &str = "template-item-fixo";

/// Prototype a table clones its rows from.
///
/// Stands in for the markup template of the original surface: the host
/// registers it once at startup, and its absence is a broken deployment.
#[derive(Debug, Clone)]
pub struct RowTemplate {
    /// Total cell text for a freshly instantiated row.
    pub initial_total: String,
}

impl Default for RowTemplate {
    fn default() -> Self {
        Self {
            initial_total: "0.00".to_string(),
        }
    }
}

/// Named row templates registered by the hosting surface.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, RowTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the standard item-row template.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ITEM_ROW_TEMPLATE, RowTemplate::default());
        registry
    }

    pub fn register(&mut self, id: impl Into<String>, template: RowTemplate) {
        self.templates.insert(id.into(), template);
    }

    pub fn get(&self, id: &str) -> Option<&RowTemplate> {
        self.templates.get(id)
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Item label.
    pub name: String,
    /// Checkbox state: whether the row counts toward totals/submission.
    pub checked: bool,
    /// Raw quantity entry text; empty means unset.
    pub quantity_entry: String,
    /// Raw unit-price entry text; empty means unset.
    pub price_entry: String,
    /// Total cell text, fixed two decimals.
    pub total_text: String,
    /// Baseline rows survive clear-all; user-added rows do not.
    pub baseline: bool,
}

impl Row {
    /// Instantiates a row from the template with the given initial values.
    pub fn from_template(
        template: &RowTemplate,
        name: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        selected: bool,
        baseline: bool,
    ) -> Self {
        Self {
            name: name.into(),
            checked: selected,
            quantity_entry: entry_text(quantity),
            price_entry: entry_text(unit_price),
            total_text: template.initial_total.clone(),
            baseline,
        }
    }

    /// Quantity as currently typed, leniently parsed.
    pub fn quantity(&self) -> f64 {
        parse_entry(&self.quantity_entry)
    }

    /// Unit price as currently typed, leniently parsed.
    pub fn unit_price(&self) -> f64 {
        parse_entry(&self.price_entry)
    }

    /// Snapshot of the row in its persisted form.
    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            name: self.name.clone(),
            quantity: self.quantity(),
            unit_price: self.unit_price(),
            selected: self.checked,
            baseline: self.baseline,
        }
    }

    /// Resets the row to template defaults: unchecked, empty entries,
    /// initial total text. Used by clear-all on baseline rows.
    pub fn reset(&mut self, template: &RowTemplate) {
        self.checked = false;
        self.quantity_entry.clear();
        self.price_entry.clear();
        self.total_text = template.initial_total.clone();
    }
}

/// Entry-field text for a stored number: zero renders empty.
pub(crate) fn entry_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format!("{}", value)
    }
}
