//! Настройки панели табов: селекторы разметки и CSS-классы.
//!
//! В браузере читаются из необязательного объекта `window.configTabs`,
//! все поля необязательны:
//!
//! ```json
//! { "blockSelector": ".configuration-block", "activeClass": "active" }
//! ```

use super::error::TabPanelError;
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BLOCK_SELECTOR: &str = ".configuration-block";
pub const DEFAULT_HEADER_CLASS: &str = "cfg-tab";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_HEADER_HREF: &str = "javascript://";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabPanelConfig {
    /// Структурный маркер блока с табами
    pub block_selector: String,
    /// Класс сгенерированных ссылок-заголовков
    pub header_class: String,
    /// Класс активного элемента списка
    pub active_class: String,
    pub header_href: String,
}

impl Default for TabPanelConfig {
    fn default() -> Self {
        Self {
            block_selector: DEFAULT_BLOCK_SELECTOR.to_string(),
            header_class: DEFAULT_HEADER_CLASS.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            header_href: DEFAULT_HEADER_HREF.to_string(),
        }
    }
}

impl TabPanelConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("parse tab panel config")?;
        config.validate().context("validate tab panel config")?;
        Ok(config)
    }

    /// Проверяет, что селектор и классы пригодны для DOM API
    pub fn validate(&self) -> Result<(), TabPanelError> {
        if split_selector_list(&self.block_selector).is_empty() {
            return Err(TabPanelError::invalid_config("blockSelector is empty"));
        }
        for (name, class) in [
            ("headerClass", &self.header_class),
            ("activeClass", &self.active_class),
        ] {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(TabPanelError::invalid_config(format!(
                    "{} must be a single class name, got {:?}",
                    name, class
                )));
            }
        }
        Ok(())
    }

    /// Селектор списков-групп внутри блоков.
    ///
    /// `ul` добавляется к каждой части списка селекторов: `.a, .b` → `.a ul, .b ul`.
    pub fn list_selector(&self) -> String {
        split_selector_list(&self.block_selector)
            .into_iter()
            .map(|part| format!("{} ul", part))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Split a selector list on top-level commas; commas inside `:is(...)` or
/// `[attr="a,b"]` belong to their selector.
fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(&selector[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&selector[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}
