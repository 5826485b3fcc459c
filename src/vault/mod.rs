//! Markdown vault access
//!
//! Lists the vault's Markdown documents and reads their text. A document's
//! recipe name is its file name without extension.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const MARKDOWN_EXTENSION: &str = "md";

/// Vault error types
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Vault directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for vault operations
pub type VaultResult<T> = Result<T, VaultError>;

/// A directory tree of Markdown documents
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a vault-relative path
    pub fn path_of(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Every Markdown document below the root, sorted by path
    ///
    /// Hidden directories (such as editor settings folders) are skipped.
    pub fn markdown_files(&self) -> VaultResult<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(VaultError::NotFound(self.root.clone()));
        }

        let mut files = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir).map_err(|source| VaultError::Io {
                path: dir.clone(),
                source,
            })?;

            for entry in entries {
                let entry = entry.map_err(|source| VaultError::Io {
                    path: dir.clone(),
                    source,
                })?;
                let path = entry.path();

                if path.is_dir() {
                    if !is_hidden(&path) {
                        pending.push(path);
                    }
                } else if is_markdown(&path) {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Read a document's text
    pub fn read(&self, path: &Path) -> VaultResult<String> {
        fs::read_to_string(path).map_err(|source| VaultError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Recipe name of a document: its file name without extension
pub fn document_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_markdown_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Rezepte/Suppen")).unwrap();
        fs::create_dir_all(dir.path().join(".obsidian")).unwrap();
        fs::write(dir.path().join("Rezepte/Suppen/Soup.md"), "- Apple - 200g").unwrap();
        fs::write(dir.path().join("Notes.md"), "hello").unwrap();
        fs::write(dir.path().join("image.png"), [0u8; 4]).unwrap();
        fs::write(dir.path().join(".obsidian/workspace.md"), "").unwrap();

        let vault = Vault::new(dir.path());
        let files = vault.markdown_files().unwrap();
        let names: Vec<String> = files.iter().filter_map(|p| document_name(p)).collect();
        assert_eq!(names, vec!["Notes", "Soup"]);
        assert_eq!(vault.read(&files[1]).unwrap(), "- Apple - 200g");
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let vault = Vault::new(dir.path().join("nope"));
        assert!(matches!(vault.markdown_files(), Err(VaultError::NotFound(_))));
    }

    #[test]
    fn test_document_name_strips_extension() {
        assert_eq!(document_name(Path::new("a/b/Kürbissuppe.md")), Some("Kürbissuppe".to_string()));
    }

    #[test]
    fn test_read_missing_file() {
        let vault = Vault::new("/nonexistent");
        let err = vault.read(Path::new("/nonexistent/x.md")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read /nonexistent/x.md"));
    }
}
