//! Markup sanitizers
//!
//! A sanitizer turns raw text into text that can be embedded in the output
//! markup without being interpreted. The sink calls it on every composed line.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Injected sanitize capability
pub type Sanitizer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Escape `& < > " '` for embedding in HTML text or attribute values.
pub fn html_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Leave text untouched (plain-text consumers, tests).
pub fn passthrough(text: &str) -> String {
    text.to_string()
}

/// Built-in sanitizers selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SanitizerKind {
    #[default]
    Html,
    None,
}

impl SanitizerKind {
    pub fn sanitizer(self) -> Sanitizer {
        match self {
            SanitizerKind::Html => Arc::new(html_encode),
            SanitizerKind::None => Arc::new(passthrough),
        }
    }
}
