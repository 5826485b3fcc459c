//! Runtime configuration
//!
//! Read once at startup from environment variables.

use std::path::PathBuf;

use thiserror::Error;

use crate::nutrition::UnitAliases;

/// Root directory of the Markdown vault
pub const VAULT_ENV: &str = "RECIPE_METRICS_VAULT";
/// Vault-relative path of the nutrient table document
pub const TABLE_ENV: &str = "RECIPE_METRICS_TABLE";
/// Extra unit aliases, `raw=canonical` pairs separated by `;`
pub const UNIT_ALIASES_ENV: &str = "RECIPE_METRICS_UNIT_ALIASES";

pub const DEFAULT_VAULT: &str = "vault";
pub const DEFAULT_TABLE: &str = "Rezepte/Ingredients.md";

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid unit alias '{0}', expected raw=canonical")]
    InvalidAlias(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub vault_path: PathBuf,
    /// Relative to `vault_path`
    pub table_path: PathBuf,
    pub unit_aliases: UnitAliases,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_path: PathBuf::from(DEFAULT_VAULT),
            table_path: PathBuf::from(DEFAULT_TABLE),
            unit_aliases: UnitAliases::default(),
        }
    }
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(vault) = lookup(VAULT_ENV).filter(|v| !v.trim().is_empty()) {
            config.vault_path = PathBuf::from(vault.trim());
        }
        if let Some(table) = lookup(TABLE_ENV).filter(|v| !v.trim().is_empty()) {
            config.table_path = PathBuf::from(table.trim());
        }
        if let Some(aliases) = lookup(UNIT_ALIASES_ENV) {
            for (raw, canonical) in parse_aliases(&aliases)? {
                config.unit_aliases.insert(raw, canonical);
            }
        }

        Ok(config)
    }
}

/// Parse `raw=canonical;raw=canonical` into pairs; empty entries are ignored
pub fn parse_aliases(list: &str) -> Result<Vec<(String, String)>, ConfigError> {
    list.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((raw, canonical)) if !raw.trim().is_empty() && !canonical.trim().is_empty() => {
                Ok((raw.trim().to_string(), canonical.trim().to_string()))
            }
            _ => Err(ConfigError::InvalidAlias(entry.to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.table_path, PathBuf::from("Rezepte/Ingredients.md"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (VAULT_ENV, "/home/me/notes"),
            (TABLE_ENV, "Food/Table.md"),
            (UNIT_ALIASES_ENV, "EL=Esslöffel; Portionen=Teller"),
        ]))
        .unwrap();
        assert_eq!(config.vault_path, PathBuf::from("/home/me/notes"));
        assert_eq!(config.table_path, PathBuf::from("Food/Table.md"));
        assert_eq!(config.unit_aliases.normalize("EL"), "Esslöffel");
        assert_eq!(config.unit_aliases.normalize("Portionen"), "Teller");
        assert_eq!(config.unit_aliases.normalize("Dosen"), "Dose");
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = Config::from_lookup(lookup(&[(VAULT_ENV, "  "), (UNIT_ALIASES_ENV, ";;")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_alias() {
        assert_eq!(
            parse_aliases("EL=Esslöffel;broken"),
            Err(ConfigError::InvalidAlias("broken".to_string()))
        );
        assert!(parse_aliases("=x").is_err());
    }
}
