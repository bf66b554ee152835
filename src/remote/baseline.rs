//! Baseline List Loader
//!
//! Fetches the fixed item names from the spreadsheet's read endpoint.
//! The endpoint was built for a browser without CORS headers, so it
//! answers JSONP: executable content invoking a caller-chosen callback
//! with the list as its argument. The loader picks a timestamp-derived
//! callback name per request and unwraps that envelope here, keeping
//! the rest of the crate on a plain `Vec<String>` contract.

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;

use crate::domain::{DomainError, DomainResult};

/// Pluggable source for the baseline item names.
///
/// Single attempt, no retry: any failure means the caller substitutes
/// the fallback list. Hosts with proper cross-origin support can plug in
/// a plain JSON source instead of the JSONP loader.
#[async_trait]
pub trait BaselineSource: Send + Sync {
    async fn fetch_names(&self) -> DomainResult<Vec<String>>;
}

/// Loader for the Apps Script `doGet` JSONP endpoint.
pub struct JsonpBaselineLoader {
    url: String,
    client: reqwest::Client,
}

impl JsonpBaselineLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BaselineSource for JsonpBaselineLoader {
    /// Issues `GET <url>?callback=<unique>&_=<timestamp>` and unwraps the
    /// `<unique>([...])` envelope. The `_` parameter busts intermediary
    /// caches, as the browser original did.
    async fn fetch_names(&self) -> DomainResult<Vec<String>> {
        let now = Utc::now().timestamp_millis();
        let callback = format!("__cbFixos_{}", now);
        let cache_buster = now.to_string();

        let response = self
            .client
            .get(&self.url)
            .query(&[("callback", callback.as_str()), ("_", cache_buster.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::Remote(format!("baseline request failed: {}", e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Remote(format!("baseline response unreadable: {}", e)))?;

        let values = unwrap_jsonp(&callback, &body)?;
        Ok(sanitize_names(values))
    }
}

/// Extracts the callback argument and checks it is list-shaped.
fn unwrap_jsonp(callback: &str, body: &str) -> DomainResult<Vec<serde_json::Value>> {
    let pattern = format!(r"(?s)^\s*{}\((.*)\)\s*;?\s*$", regex::escape(callback));
    let re = Regex::new(&pattern)
        .map_err(|e| DomainError::Remote(format!("bad callback pattern: {}", e)))?;

    let caps = re.captures(body).ok_or_else(|| {
        DomainError::Remote("response did not invoke the expected callback".to_string())
    })?;

    let inner: serde_json::Value = serde_json::from_str(&caps[1])
        .map_err(|e| DomainError::Remote(format!("callback argument is not valid JSON: {}", e)))?;

    match inner {
        serde_json::Value::Array(values) => Ok(values),
        _ => Err(DomainError::Remote(
            "doGet response is not a list".to_string(),
        )),
    }
}

/// Trims each entry to text and discards empty, `null` and `undefined`
/// literals (the sheet hands back blank cells as those).
fn sanitize_names(values: Vec<serde_json::Value>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| match value {
            serde_json::Value::String(s) => s.trim().to_string(),
            other => other.to_string().trim().to_string(),
        })
        .filter(|name| !name.is_empty() && name != "null" && name != "undefined")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_jsonp_happy_path() {
        let body = r#"__cbFixos_1(["Feijão","Leite"])"#;
        let values = unwrap_jsonp("__cbFixos_1", body).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], "Feijão");
    }

    #[test]
    fn test_unwrap_jsonp_tolerates_padding() {
        let body = "  __cbFixos_1([\"Pão\"]) ;\n";
        let values = unwrap_jsonp("__cbFixos_1", body).unwrap();
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_unwrap_jsonp_wrong_callback() {
        let body = r#"someOtherCallback(["Feijão"])"#;
        assert!(unwrap_jsonp("__cbFixos_1", body).is_err());
    }

    #[test]
    fn test_unwrap_jsonp_non_list_payload() {
        let body = r#"__cbFixos_1({"erro":"vazio"})"#;
        let err = unwrap_jsonp("__cbFixos_1", body).unwrap_err();
        assert!(matches!(err, DomainError::Remote(_)));
    }

    #[test]
    fn test_unwrap_jsonp_garbage_body() {
        assert!(unwrap_jsonp("__cbFixos_1", "<html>error</html>").is_err());
    }

    #[test]
    fn test_sanitize_trims_and_drops_blanks() {
        let values = vec![
            serde_json::json!("  Feijão  "),
            serde_json::json!(""),
            serde_json::json!("   "),
            serde_json::json!("Leite"),
        ];
        assert_eq!(sanitize_names(values), vec!["Feijão", "Leite"]);
    }

    #[test]
    fn test_sanitize_drops_null_and_undefined_literals() {
        let values = vec![
            serde_json::Value::Null,
            serde_json::json!("null"),
            serde_json::json!("undefined"),
            serde_json::json!("Ovo"),
        ];
        assert_eq!(sanitize_names(values), vec!["Ovo"]);
    }

    #[test]
    fn test_sanitize_stringifies_non_text_cells() {
        let values = vec![serde_json::json!(42), serde_json::json!("Pão")];
        assert_eq!(sanitize_names(values), vec!["42", "Pão"]);
    }
}
