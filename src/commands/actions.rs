//! Action Handlers
//!
//! Each handler mutates the table synchronously; only `submit_selected`
//! touches the network, and it does so with detached fire-and-forget
//! tasks.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult};
use crate::remote::{current_period, SheetClient, Submission};
use crate::repository::{KeyValueStore, ListStore};
use crate::table::TableView;

use super::prompt::UserPrompt;

/// Confirmation asked before wiping the list.
const CLEAR_ALL_PROMPT: &str =
    "Tem certeza que deseja apagar toda a lista?\n\nEssa ação não pode ser desfeita.";

/// Alert shown when the add-item input is blank.
const BLANK_ITEM_MESSAGE: &str = "Digite o nome do item.";

/// Appends a user-added row from the new-item input buffer.
///
/// A blank (after trimming) input is rejected with no state change; the
/// host surfaces the error as a blocking alert. On success the buffer is
/// cleared and the list recomputed and persisted.
pub fn add_item<S: KeyValueStore>(
    table: &mut TableView,
    store: &mut ListStore<S>,
) -> DomainResult<()> {
    let name = table.new_item_entry.trim().to_string();
    if name.is_empty() {
        return Err(DomainError::InvalidInput(BLANK_ITEM_MESSAGE.to_string()));
    }

    table.append_row(&name, 0.0, 0.0, false, false);
    table.new_item_entry.clear();

    let records = table.recompute();
    store.save(&records);
    Ok(())
}

/// Wipes the list after explicit confirmation. Returns whether it ran.
///
/// On confirm: the persisted entry is removed entirely, user-added rows
/// are dropped, baseline rows are reset to defaults and the grand total
/// display is zeroed. Declining is a no-op.
pub fn clear_all<S: KeyValueStore>(
    table: &mut TableView,
    store: &mut ListStore<S>,
    prompt: &dyn UserPrompt,
) -> bool {
    if !prompt.confirm(CLEAR_ALL_PROMPT) {
        return false;
    }

    store.clear();
    table.clear();
    true
}

/// Fires one independent submission per checked row and reports how many
/// were dispatched.
///
/// The tasks are detached: no ordering between them, no backpressure,
/// and transport failures are the client's to log. The count reflects
/// the rows checked at dispatch time regardless of later outcomes.
pub fn submit_selected(table: &TableView, client: &Arc<dyn SheetClient>) -> usize {
    let mes = current_period();
    let mut dispatched = 0;

    for row in table.rows() {
        if !row.checked {
            continue;
        }

        let quantity = row.quantity();
        let unit_price = row.unit_price();
        let submission = Submission {
            item: row.name.clone(),
            quantidade: quantity,
            valor: unit_price,
            total: quantity * unit_price,
            mes: mes.clone(),
        };

        dispatched += 1;
        let client = Arc::clone(client);
        tokio::spawn(async move {
            client.submit(submission).await;
        });
    }

    dispatched
}
