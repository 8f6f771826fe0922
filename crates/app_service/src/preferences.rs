//! Preference catalogs
//!
//! The invoice form offers pick-lists for dealer names and vehicle colors.
//! Both start from a built-in default set; operators can hide defaults and
//! add their own entries. The lists persist through a small key-value port
//! (the web client kept them in browser local storage under the same keys).

use serde_json::json;
use std::collections::HashMap;

/// Dealers preloaded in the form
pub const DEFAULT_DEALERS: [&str; 8] = [
    "HIDROBO",
    "VEHICENTRO",
    "ASSA",
    "AMBACAR",
    "CIAUTO",
    "ASIAUTO",
    "PROAUTO",
    "AUTOPLEX",
];

/// Default vehicle color swatches (hex)
pub const DEFAULT_COLOR_HEXES: [&str; 6] = [
    "#FFFFFF", "#DC2626", "#2563EB", "#FACC15", "#FEF3C7", "#6B7280",
];

const KEY_CUSTOM_DEALERS: &str = "comercializadoras-personalizadas";
const KEY_HIDDEN_DEALERS: &str = "comercializadoras-ocultas";
const KEY_CUSTOM_COLORS: &str = "colores-vehiculo-hex";

/// Key-value persistence port for the catalogs
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory implementation of [`PreferenceStore`]
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// Dealer and color catalogs over a preference store
#[derive(Debug)]
pub struct Catalogs<P> {
    store: P,
}

impl<P: PreferenceStore> Catalogs<P> {
    pub fn new(store: P) -> Self {
        Self { store }
    }

    /// Dealers offered by the form: non-hidden defaults followed by custom
    /// entries
    pub fn available_dealers(&self) -> Vec<String> {
        let hidden = self.read_list(KEY_HIDDEN_DEALERS);
        let custom = self.read_list(KEY_CUSTOM_DEALERS);

        DEFAULT_DEALERS
            .iter()
            .filter(|d| !hidden.iter().any(|h| h == *d))
            .map(|d| d.to_string())
            .chain(custom)
            .collect()
    }

    /// Adds a dealer name, normalized to trimmed uppercase. Adding a hidden
    /// default un-hides it; duplicates are ignored.
    pub fn add_dealer(&mut self, name: &str) {
        let name = name.trim().to_uppercase();
        if name.is_empty() || self.available_dealers().contains(&name) {
            return;
        }

        if DEFAULT_DEALERS.contains(&name.as_str()) {
            let hidden: Vec<String> = self
                .read_list(KEY_HIDDEN_DEALERS)
                .into_iter()
                .filter(|h| h != &name)
                .collect();
            self.write_list(KEY_HIDDEN_DEALERS, &hidden);
        } else {
            let mut custom = self.read_list(KEY_CUSTOM_DEALERS);
            custom.push(name);
            self.write_list(KEY_CUSTOM_DEALERS, &custom);
        }
    }

    /// Removes a dealer from the pick-list: defaults are hidden, custom
    /// entries are deleted
    pub fn remove_dealer(&mut self, name: &str) {
        if DEFAULT_DEALERS.contains(&name) {
            let mut hidden = self.read_list(KEY_HIDDEN_DEALERS);
            if !hidden.iter().any(|h| h == name) {
                hidden.push(name.to_string());
                self.write_list(KEY_HIDDEN_DEALERS, &hidden);
            }
        } else {
            let custom: Vec<String> = self
                .read_list(KEY_CUSTOM_DEALERS)
                .into_iter()
                .filter(|c| c != name)
                .collect();
            self.write_list(KEY_CUSTOM_DEALERS, &custom);
        }
    }

    /// Color swatches offered by the form: defaults followed by custom hexes
    pub fn available_colors(&self) -> Vec<String> {
        DEFAULT_COLOR_HEXES
            .iter()
            .map(|c| c.to_string())
            .chain(self.read_list(KEY_CUSTOM_COLORS))
            .collect()
    }

    /// Adds a custom color hex; duplicates are ignored
    pub fn add_color(&mut self, hex: &str) {
        let hex = hex.trim().to_uppercase();
        if hex.is_empty() || self.available_colors().contains(&hex) {
            return;
        }
        let mut custom = self.read_list(KEY_CUSTOM_COLORS);
        custom.push(hex);
        self.write_list(KEY_CUSTOM_COLORS, &custom);
    }

    fn read_list(&self, key: &str) -> Vec<String> {
        self.store
            .get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write_list(&mut self, key: &str, values: &[String]) {
        self.store.set(key, json!(values).to_string());
    }
}
