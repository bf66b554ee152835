//! List Configuration
//!
//! Immutable runtime configuration: endpoint, storage key and the
//! fallback baseline. The baseline actually in effect is resolved once
//! at startup by the loader and handed to reconciliation as a value,
//! never kept as mutable module state.

use serde::{Deserialize, Serialize};

/// Storage key the record list is persisted under.
const STORAGE_KEY: &str = "listaCompras";

/// Apps Script web-app endpoint: `doGet` answers the baseline as JSONP,
/// `doPost` appends one submitted row to the sheet.
const SHEET_URL: &str =
    "https://script.google.com/macros/s/AKfycbxxS-a5YlhyP2MOJSN_Y8FBMLlf1T5UDECAaJFi0B6HRhcbZbrEmexY8Do1ZtX1D0tASQ/exec";

/// Baseline used when the remote list is unreachable or empty.
const FALLBACK_ITEMS: &[&str] = &[
    "Feijão",
    "Macarrão",
    "Leite",
    "Flocão",
    "Milho",
    "Molho",
    "Alho",
    "Leite condensado",
    "Creme de leite",
    "Manteiga",
    "Maionese",
    "Farofa Swift",
    "Pão",
    "Ovo",
    "Frango",
    "Carne",
    "Açúcar",
    "Shampoo",
    "Condicionador",
    "Pasta",
    "Cloro",
    "Sabão",
    "Desinfetante",
    "Amaciante",
    "Areia p/ gato",
    "Desodorante",
    "Detergente",
    "Bucha",
];

/// Runtime configuration for one shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Spreadsheet endpoint, used for both the baseline fetch and the
    /// row submissions.
    pub sheet_url: String,
    /// Key the serialized record list is stored under.
    pub storage_key: String,
    /// Baseline names substituted when the remote fetch fails or comes
    /// back empty.
    pub fallback_items: Vec<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            sheet_url: SHEET_URL.to_string(),
            storage_key: STORAGE_KEY.to_string(),
            fallback_items: FALLBACK_ITEMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ListConfig::default();
        assert_eq!(config.storage_key, "listaCompras");
        assert_eq!(config.fallback_items.len(), 28);
        assert_eq!(config.fallback_items[0], "Feijão");
    }
}
