//! Startup Reconciliation
//!
//! Runs once per load, after the baseline names are known. The merge is
//! positional: baseline row `i` takes persisted entry `i`'s editable
//! fields, and persisted entries beyond the baseline count reappear as
//! user-added rows with their full recorded values. If the baseline
//! shrank since the last save, the excess entries are kept and
//! reclassified as user-added rather than discarded.

use crate::domain::ItemRecord;
use crate::table::TableView;

/// Merges the baseline names with the previously persisted records.
///
/// The caller finishes the load by recomputing and persisting, which
/// normalizes the store to the current baseline ordering.
pub fn reconcile(table: &mut TableView, baseline_names: &[String], persisted: &[ItemRecord]) {
    // Baseline rows are always present, fresh and ordered.
    table.render_baseline_rows(baseline_names);

    let limit = baseline_names.len().min(persisted.len());
    for (index, record) in persisted[..limit].iter().enumerate() {
        // Index is in range by construction.
        let _ = table.overwrite_values(index, record.selected, record.quantity, record.unit_price);
    }

    for record in persisted.iter().skip(baseline_names.len()) {
        table.append_row(
            &record.name,
            record.quantity,
            record.unit_price,
            record.selected,
            false,
        );
    }
}
