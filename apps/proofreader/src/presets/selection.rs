#![allow(dead_code)]

//! Persisted preset selection.
//!
//! Clients keep the last model / context / instruction they used in a key-value
//! store they own. The composer never reads that store; this module only restores
//! a selection from it and repairs keys that no longer exist in the catalog.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;
use tracing::debug;

use crate::presets::catalog::PresetCatalog;

pub const MODEL_KEY: &str = "model";
pub const CONTEXT_KEY: &str = "context";
pub const INSTRUCTION_KEY: &str = "instruction";

/// Externally owned key-value storage for client state.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-process store, mainly for tests and single-user setups.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Seeds a store from optional values, skipping the absent ones.
    pub fn seeded<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> Self {
        let store = Self::default();
        for (key, value) in pairs {
            if let Some(value) = value {
                store.set(key, value);
            }
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub model: String,
    pub context: String,
    pub instruction: String,
}

impl Selection {
    /// First model, first context, first instruction.
    pub fn defaults(catalog: &PresetCatalog) -> Self {
        Self {
            model: catalog.models().first().cloned().unwrap_or_default(),
            context: catalog
                .contexts()
                .first()
                .map(|c| c.key.clone())
                .unwrap_or_default(),
            instruction: catalog
                .instructions()
                .first()
                .map(|i| i.key.clone())
                .unwrap_or_default(),
        }
    }

    /// Loads the stored selection, falling back to defaults for missing values.
    ///
    /// A stored context or instruction key that the catalog no longer knows is
    /// replaced by the default and written back. Model names are free text and
    /// kept as stored, unless blank.
    pub fn restore(store: &impl KeyValueStore, catalog: &PresetCatalog) -> Self {
        let defaults = Self::defaults(catalog);

        let model = store
            .get(MODEL_KEY)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(defaults.model);

        let context = match store.get(CONTEXT_KEY) {
            Some(key) if catalog.find_context(&key).is_some() => key,
            Some(stale) => {
                debug!("Replacing stale context selection '{stale}'");
                store.set(CONTEXT_KEY, &defaults.context);
                defaults.context
            }
            None => defaults.context,
        };

        let instruction = match store.get(INSTRUCTION_KEY) {
            Some(key) if catalog.find_instruction(&key).is_some() => key,
            Some(stale) => {
                debug!("Replacing stale instruction selection '{stale}'");
                store.set(INSTRUCTION_KEY, &defaults.instruction);
                defaults.instruction
            }
            None => defaults.instruction,
        };

        Self {
            model,
            context,
            instruction,
        }
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        store.set(MODEL_KEY, &self.model);
        store.set(CONTEXT_KEY, &self.context);
        store.set(INSTRUCTION_KEY, &self.instruction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::catalog::test_catalog;

    #[test]
    fn test_defaults_take_first_entries() {
        let selection = Selection::defaults(&test_catalog());
        assert_eq!(selection.model, "anthropic/claude-3.5-sonnet");
        assert_eq!(selection.context, "academic");
        assert_eq!(selection.instruction, "basicProofread");
    }

    #[test]
    fn test_restore_from_empty_store_uses_defaults() {
        let catalog = test_catalog();
        let store = MemoryStore::default();
        assert_eq!(
            Selection::restore(&store, &catalog),
            Selection::defaults(&catalog)
        );
        // Nothing stale, nothing written.
        assert!(store.get(CONTEXT_KEY).is_none());
    }

    #[test]
    fn test_restore_keeps_valid_selection() {
        let catalog = test_catalog();
        let store = MemoryStore::default();
        let saved = Selection {
            model: "openai/gpt-4".to_string(),
            context: "oral".to_string(),
            instruction: "trim".to_string(),
        };
        saved.save(&store);
        assert_eq!(Selection::restore(&store, &catalog), saved);
    }

    #[test]
    fn test_restore_repairs_stale_keys() {
        let catalog = test_catalog();
        let store = MemoryStore::default();
        store.set(CONTEXT_KEY, "legal");
        store.set(INSTRUCTION_KEY, "rewrite");

        let selection = Selection::restore(&store, &catalog);
        assert_eq!(selection.context, "academic");
        assert_eq!(selection.instruction, "basicProofread");
        assert_eq!(store.get(CONTEXT_KEY).as_deref(), Some("academic"));
        assert_eq!(store.get(INSTRUCTION_KEY).as_deref(), Some("basicProofread"));
    }

    #[test]
    fn test_restore_keeps_custom_model() {
        let catalog = test_catalog();
        let store = MemoryStore::default();
        store.set(MODEL_KEY, "my-local/llama");
        assert_eq!(Selection::restore(&store, &catalog).model, "my-local/llama");
    }

    #[test]
    fn test_restore_blank_model_uses_default() {
        let catalog = test_catalog();
        for blank in ["", "   "] {
            let store = MemoryStore::default();
            store.set(MODEL_KEY, blank);
            assert_eq!(
                Selection::restore(&store, &catalog).model,
                "anthropic/claude-3.5-sonnet"
            );
        }
    }
}
