// ==========================================
// i18n
// ==========================================
// rust-i18n, Italian (default) and English.
// Note: the rust_i18n::i18n! macro is invoked in lib.rs
// ==========================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::types::{Direction, Item, Location};

/// Fixed UI captions, looked up under `ui.<key>`
pub const UI_KEYS: [&str; 21] = [
    "tab_register",
    "tab_inventory",
    "tab_history",
    "tab_report",
    "export",
    "language",
    "date",
    "location",
    "direction",
    "item",
    "balance",
    "total",
    "inbound_total",
    "outbound_total",
    "net",
    "movements",
    "quantity",
    "register",
    "undo",
    "generate",
    "collapse_all",
];

/// Every string the frontend renders, in the current locale
///
/// Enum labels are keyed by the serialized enum value (`MEAT`, `RETURNABLE_CRATE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiTexts {
    pub locale: String,
    pub title: String,
    pub items: BTreeMap<Item, String>,
    pub directions: BTreeMap<Direction, String>,
    pub locations: BTreeMap<Location, String>,
    pub confirm_undo_last: String,
    pub nothing_to_undo: String,
    pub captions: BTreeMap<String, String>,
}

/// Current locale
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Switch locale ("it" or "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate a key
///
/// # Example
/// ```no_run
/// use support_stock::i18n::t;
/// let msg = t("notice.select_location");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a key and fill `%{name}` placeholders
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

pub fn item_label(item: Item) -> String {
    t(item.label_key())
}

pub fn direction_label(direction: Direction) -> String {
    t(direction.label_key())
}

pub fn location_label(location: Location) -> String {
    t(location.label_key())
}

/// Build the frontend text bundle for the current locale
pub fn ui_texts() -> UiTexts {
    UiTexts {
        locale: current_locale(),
        title: t("app.title"),
        items: Item::ALL.into_iter().map(|i| (i, item_label(i))).collect(),
        directions: Direction::ALL
            .into_iter()
            .map(|d| (d, direction_label(d)))
            .collect(),
        locations: Location::ALL
            .into_iter()
            .map(|l| (l, location_label(l)))
            .collect(),
        confirm_undo_last: t("confirm.undo_last"),
        nothing_to_undo: t("notice.nothing_to_undo"),
        captions: UI_KEYS
            .into_iter()
            .map(|k| (k.to_string(), t(&format!("ui.{}", k))))
            .collect(),
    }
}
