//! Application Façade
//!
//! Wires storage, table and remote clients together and owns the
//! startup sequence: baseline fetch (with fallback), reconciliation,
//! and the per-edit recompute-and-persist cycle that the surface's
//! input listeners drive.

use std::sync::Arc;

use log::warn;

use crate::commands::{self, UserPrompt};
use crate::domain::{DomainError, DomainResult, ListConfig};
use crate::reconcile::reconcile;
use crate::remote::{BaselineSource, SheetClient};
use crate::repository::{KeyValueStore, ListStore};
use crate::table::{TableView, TemplateRegistry};

/// One shopping list wired to its store, surface seams and endpoint.
pub struct ShoppingList<S: KeyValueStore> {
    config: ListConfig,
    store: ListStore<S>,
    table: TableView,
    sheet: Arc<dyn SheetClient>,
    prompt: Box<dyn UserPrompt>,
    /// Baseline names resolved at startup; immutable afterwards.
    baseline: Vec<String>,
}

impl<S: KeyValueStore> ShoppingList<S> {
    /// Fails only when the item-row template is missing from the
    /// registry (broken deployment).
    pub fn new(
        config: ListConfig,
        store: S,
        templates: &TemplateRegistry,
        sheet: Arc<dyn SheetClient>,
        prompt: Box<dyn UserPrompt>,
    ) -> DomainResult<Self> {
        let table = TableView::new(templates)?;
        let store = ListStore::new(store, config.storage_key.clone());
        Ok(Self {
            config,
            store,
            table,
            sheet,
            prompt,
            baseline: Vec::new(),
        })
    }

    /// Startup: resolves the baseline exactly once (remote attempt, then
    /// the fallback list on any failure or empty result), reconciles with
    /// the persisted records and normalizes the store.
    pub async fn init(&mut self, source: &dyn BaselineSource) {
        self.baseline = match source.fetch_names().await {
            Ok(names) if !names.is_empty() => names,
            Ok(_) => {
                warn!("remote baseline came back empty, using fallback");
                self.config.fallback_items.clone()
            }
            Err(e) => {
                warn!("could not load remote baseline ({}), using fallback", e);
                self.config.fallback_items.clone()
            }
        };

        let persisted = self.store.load();
        reconcile(&mut self.table, &self.baseline, &persisted);
        self.recompute_and_save();
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    /// Baseline names in effect for this load.
    pub fn baseline(&self) -> &[String] {
        &self.baseline
    }

    // ========================
    // Field edits (the per-row input listeners)
    // ========================

    pub fn set_checked(&mut self, index: usize, checked: bool) -> DomainResult<()> {
        self.table.set_checked(index, checked)?;
        self.recompute_and_save();
        Ok(())
    }

    pub fn set_quantity_entry(&mut self, index: usize, text: &str) -> DomainResult<()> {
        self.table.set_quantity_entry(index, text)?;
        self.recompute_and_save();
        Ok(())
    }

    pub fn set_price_entry(&mut self, index: usize, text: &str) -> DomainResult<()> {
        self.table.set_price_entry(index, text)?;
        self.recompute_and_save();
        Ok(())
    }

    /// Replaces the pending new-item input text.
    pub fn set_new_item_entry(&mut self, text: &str) {
        self.table.new_item_entry = text.to_string();
    }

    // ========================
    // Actions
    // ========================

    /// Add-item button. A blank input is alerted to the user and leaves
    /// the list untouched.
    pub fn add_item(&mut self) -> DomainResult<()> {
        match commands::add_item(&mut self.table, &mut self.store) {
            Ok(()) => Ok(()),
            Err(e) => {
                if let DomainError::InvalidInput(message) = &e {
                    self.prompt.alert(message);
                }
                Err(e)
            }
        }
    }

    /// Clear-all button. Returns whether the user confirmed.
    pub fn clear_all(&mut self) -> bool {
        commands::clear_all(&mut self.table, &mut self.store, self.prompt.as_ref())
    }

    /// Submit button: dispatches the checked rows and acknowledges the
    /// count, regardless of how the detached submissions fare later.
    pub fn submit_selected(&self) -> usize {
        let dispatched = commands::submit_selected(&self.table, &self.sheet);
        self.prompt
            .alert(&format!("Envio iniciado. Itens marcados: {}", dispatched));
        dispatched
    }

    fn recompute_and_save(&mut self) {
        let records = self.table.recompute();
        self.store.save(&records);
    }
}
