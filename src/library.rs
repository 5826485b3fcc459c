//! Shared recipe library
//!
//! Owns the recipe store behind a read-write lock and rebuilds it from the
//! vault on request. Rebuilds are serialized and swap in a fully built store,
//! so a query never sees a half-loaded store.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::models::{Nutrients, ParsedIngredient, Recipe};
use crate::nutrition::UnitAliases;
use crate::parser;
use crate::store::{RecipeStore, ResolveError};
use crate::vault::{document_name, Vault, VaultResult};

/// Outcome of one store rebuild
#[derive(Debug, Clone, Serialize)]
pub struct RebuildSummary {
    /// Rows read from the nutrient table, 0 when it is missing
    pub table_rows: usize,
    pub documents_scanned: usize,
    /// Documents that contributed a recipe
    pub recipe_documents: usize,
    /// Documents that could not be read
    pub unreadable_documents: usize,
    pub total_recipes: usize,
    pub finished_at: DateTime<Utc>,
}

/// Recipe store plus the vault it is built from
pub struct RecipeLibrary {
    vault: Vault,
    table_path: PathBuf,
    aliases: UnitAliases,
    store: RwLock<RecipeStore>,
    rebuild_lock: Mutex<()>,
    last_rebuild: RwLock<Option<RebuildSummary>>,
    rebuild_count: RwLock<u64>,
}

impl RecipeLibrary {
    pub fn new(config: &Config) -> Self {
        Self {
            vault: Vault::new(config.vault_path.clone()),
            table_path: config.table_path.clone(),
            aliases: config.unit_aliases.clone(),
            store: RwLock::new(RecipeStore::new()),
            rebuild_lock: Mutex::new(()),
            last_rebuild: RwLock::new(None),
            rebuild_count: RwLock::new(0),
        }
    }

    pub fn vault_root(&self) -> &Path {
        self.vault.root()
    }

    /// Rebuild the store from the nutrient table and every vault document
    ///
    /// Idempotent. A missing table or an unreadable document is logged and
    /// skipped; only an unusable vault root fails the rebuild, leaving the
    /// previous store in place.
    pub fn update_recipes(&self) -> VaultResult<RebuildSummary> {
        let _serialized = self.rebuild_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let files = self.vault.markdown_files()?;
        let mut store = RecipeStore::new();

        let table_file = self.vault.path_of(&self.table_path);
        let table_rows = match self.vault.read(&table_file) {
            Ok(text) => store.load_table(&text, &self.aliases),
            Err(err) => {
                tracing::warn!(error = %err, "nutrient table not loaded");
                0
            }
        };

        let mut recipe_documents = 0;
        let mut unreadable_documents = 0;
        for file in &files {
            let Some(name) = document_name(file) else {
                continue;
            };
            match self.vault.read(file) {
                Ok(text) => {
                    if store.load_document(&name, &text, &self.aliases) {
                        recipe_documents += 1;
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable document");
                    unreadable_documents += 1;
                }
            }
        }

        let summary = RebuildSummary {
            table_rows,
            documents_scanned: files.len(),
            recipe_documents,
            unreadable_documents,
            total_recipes: store.len(),
            finished_at: Utc::now(),
        };

        *self.store.write().unwrap_or_else(PoisonError::into_inner) = store;
        *self.last_rebuild.write().unwrap_or_else(PoisonError::into_inner) = Some(summary.clone());
        *self.rebuild_count.write().unwrap_or_else(PoisonError::into_inner) += 1;

        tracing::info!(
            recipes = summary.total_recipes,
            table_rows = summary.table_rows,
            documents = summary.documents_scanned,
            "recipe store rebuilt"
        );
        Ok(summary)
    }

    /// Nutrients of `amount` `unit` of a recipe; all `NaN` when unresolvable
    pub fn calculate_nutrients(&self, name: &str, amount: f64, unit: &str) -> Nutrients {
        self.store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .calculate_nutrients(name, amount, unit)
    }

    /// Nutrients of a recipe, with the reason when it cannot be resolved
    pub fn resolve(&self, name: &str, amount: f64, unit: &str) -> Result<Nutrients, ResolveError> {
        self.store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .resolve(name, amount, unit)
    }

    /// Parse an inline ingredient reference with this library's unit aliases
    pub fn parse_ingredient(&self, text: &str) -> Option<ParsedIngredient> {
        parser::parse_ingredient(text, &self.aliases)
    }

    /// Normalize a unit spelling with this library's aliases
    pub fn normalize_unit(&self, unit: &str) -> String {
        self.aliases.normalize(unit)
    }

    /// Snapshot of a recipe, including anything derived so far
    pub fn recipe(&self, name: &str) -> Option<Recipe> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Sorted recipe names
    pub fn recipe_names(&self) -> Vec<String> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn recipe_count(&self) -> usize {
        self.store.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn last_rebuild(&self) -> Option<RebuildSummary> {
        self.last_rebuild
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn rebuild_count(&self) -> u64 {
        *self.rebuild_count.read().unwrap_or_else(PoisonError::into_inner)
    }
}
