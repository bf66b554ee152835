//! Table View-Model and Calculation Engine
//!
//! Holds the ordered row set, the new-item input buffer and the
//! grand-total display line. `recompute` is the single calculation
//! entry point: it refreshes every total cell, accumulates the checked
//! rows into the grand total and hands back the record list to persist.

mod row;

pub use row::{Row, RowTemplate, TemplateRegistry, ITEM_ROW_TEMPLATE};

use crate::domain::{DomainError, DomainResult, ItemRecord};

/// Grand-total display for an empty or freshly cleared list.
const EMPTY_GRAND_TOTAL: &str = "Total Geral: R$ 0.00";

/// The rendered table: ordered rows plus the summary display state.
#[derive(Debug)]
pub struct TableView {
    template: RowTemplate,
    rows: Vec<Row>,
    /// Pending text in the "new item" input.
    pub new_item_entry: String,
    grand_total_text: String,
}

impl TableView {
    /// Fails with [`DomainError::MissingTemplate`] when the surface never
    /// registered the item-row template; there is nothing to instantiate
    /// rows from, so construction cannot proceed.
    pub fn new(registry: &TemplateRegistry) -> DomainResult<Self> {
        let template = registry
            .get(ITEM_ROW_TEMPLATE)
            .cloned()
            .ok_or_else(|| DomainError::MissingTemplate(ITEM_ROW_TEMPLATE.to_string()))?;
        Ok(Self {
            template,
            rows: Vec::new(),
            new_item_entry: String::new(),
            grand_total_text: EMPTY_GRAND_TOTAL.to_string(),
        })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn grand_total_text(&self) -> &str {
        &self.grand_total_text
    }

    /// Clears the row container and instantiates one zero-valued,
    /// unselected baseline row per name, in order.
    pub fn render_baseline_rows(&mut self, names: &[String]) {
        self.rows.clear();
        for name in names {
            self.rows
                .push(Row::from_template(&self.template, name.clone(), 0.0, 0.0, false, true));
        }
    }

    /// Appends a row with full recorded values.
    pub fn append_row(
        &mut self,
        name: &str,
        quantity: f64,
        unit_price: f64,
        selected: bool,
        baseline: bool,
    ) {
        self.rows.push(Row::from_template(
            &self.template,
            name,
            quantity,
            unit_price,
            selected,
            baseline,
        ));
    }

    /// Overwrites one row's editable fields from persisted values. The
    /// name and baseline marker stay as rendered.
    pub fn overwrite_values(
        &mut self,
        index: usize,
        selected: bool,
        quantity: f64,
        unit_price: f64,
    ) -> DomainResult<()> {
        let row = self.row_mut(index)?;
        row.checked = selected;
        row.quantity_entry = row::entry_text(quantity);
        row.price_entry = row::entry_text(unit_price);
        Ok(())
    }

    pub fn set_checked(&mut self, index: usize, checked: bool) -> DomainResult<()> {
        self.row_mut(index)?.checked = checked;
        Ok(())
    }

    pub fn set_quantity_entry(&mut self, index: usize, text: &str) -> DomainResult<()> {
        self.row_mut(index)?.quantity_entry = text.to_string();
        Ok(())
    }

    pub fn set_price_entry(&mut self, index: usize, text: &str) -> DomainResult<()> {
        self.row_mut(index)?.price_entry = text.to_string();
        Ok(())
    }

    /// Recomputes every line total and the checked-rows grand total,
    /// returning the full record list for persistence. Idempotent:
    /// running it twice with unchanged rows changes nothing.
    pub fn recompute(&mut self) -> Vec<ItemRecord> {
        let mut grand_total = 0.0;
        let mut records = Vec::with_capacity(self.rows.len());

        for row in &mut self.rows {
            let line_total = row.quantity() * row.unit_price();
            row.total_text = format!("{:.2}", line_total);
            if row.checked {
                grand_total += line_total;
            }
            records.push(row.to_record());
        }

        self.grand_total_text = format!("Total Geral: R$ {:.2}", grand_total);
        records
    }

    /// Clear-all on the view: drops user-added rows, resets baseline rows
    /// to template defaults and zeroes the grand-total display.
    pub fn clear(&mut self) {
        self.rows.retain(|row| row.baseline);
        for row in &mut self.rows {
            row.reset(&self.template);
        }
        self.grand_total_text = EMPTY_GRAND_TOTAL.to_string();
    }

    fn row_mut(&mut self, index: usize) -> DomainResult<&mut Row> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or_else(|| DomainError::NotFound(format!("row {} of {}", index, len)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TableView {
        TableView::new(&TemplateRegistry::with_defaults()).expect("template registered")
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let err = TableView::new(&TemplateRegistry::new()).unwrap_err();
        assert!(matches!(err, DomainError::MissingTemplate(_)));
    }

    #[test]
    fn test_render_baseline_rows_fresh_and_ordered() {
        let mut table = table();
        table.render_baseline_rows(&names(&["Feijão", "Leite"]));

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].name, "Feijão");
        assert_eq!(table.rows()[1].name, "Leite");
        assert!(table.rows().iter().all(|r| r.baseline && !r.checked));

        // Re-render replaces, never appends.
        table.render_baseline_rows(&names(&["Pão"]));
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_recompute_grand_total_counts_checked_rows_only() {
        let mut table = table();
        table.render_baseline_rows(&names(&["Feijão", "Leite"]));
        table.set_checked(0, true).unwrap();
        table.set_quantity_entry(0, "2").unwrap();
        table.set_price_entry(0, "5.50").unwrap();
        // Unchecked row with values must contribute nothing.
        table.set_quantity_entry(1, "10").unwrap();
        table.set_price_entry(1, "10").unwrap();

        table.recompute();
        assert_eq!(table.rows()[0].total_text, "11.00");
        assert_eq!(table.rows()[1].total_text, "100.00");
        assert_eq!(table.grand_total_text(), "Total Geral: R$ 11.00");
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut table = table();
        table.render_baseline_rows(&names(&["Feijão"]));
        table.set_checked(0, true).unwrap();
        table.set_quantity_entry(0, "3").unwrap();
        table.set_price_entry(0, "1.10").unwrap();

        let first = table.recompute();
        let total_after_first = table.grand_total_text().to_string();
        let second = table.recompute();

        assert_eq!(first, second);
        assert_eq!(table.grand_total_text(), total_after_first);
    }

    #[test]
    fn test_recompute_returns_ordered_records() {
        let mut table = table();
        table.render_baseline_rows(&names(&["Feijão", "Leite"]));
        table.append_row("Chocolate", 1.0, 4.0, true, false);

        let records = table.recompute();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Feijão");
        assert!(records[0].baseline);
        assert_eq!(records[2].name, "Chocolate");
        assert!(!records[2].baseline);
    }

    #[test]
    fn test_clear_keeps_baseline_rows_reset() {
        let mut table = table();
        table.render_baseline_rows(&names(&["Feijão", "Leite"]));
        table.set_checked(0, true).unwrap();
        table.set_quantity_entry(0, "2").unwrap();
        table.set_price_entry(0, "5.50").unwrap();
        table.append_row("Chocolate", 1.0, 4.0, true, false);
        table.recompute();

        table.clear();
        assert_eq!(table.rows().len(), 2);
        for row in table.rows() {
            assert!(!row.checked);
            assert_eq!(row.quantity_entry, "");
            assert_eq!(row.price_entry, "");
            assert_eq!(row.total_text, "0.00");
        }
        assert_eq!(table.grand_total_text(), "Total Geral: R$ 0.00");
    }

    #[test]
    fn test_edit_out_of_range_row() {
        let mut table = table();
        assert!(matches!(
            table.set_checked(5, true),
            Err(DomainError::NotFound(_))
        ));
    }
}
