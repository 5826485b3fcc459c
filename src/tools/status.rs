//! Recipe Metrics Status Tool
//!
//! Provides runtime status information about the service.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::library::{RebuildSummary, RecipeLibrary};

/// Usage notes for MCP clients
pub const USAGE_INSTRUCTIONS: &str = r#"
# Recipe Metrics Usage

Recipes live as Markdown documents in the vault. The document's file name is
the recipe name.

## Recipe documents

```
- Ergibt 4 Portionen        declared yield (first one counts)
- Scheibe: 30 g             unit conversion local to this recipe
- Kartoffeln - 500 g        ingredient: name - amount unit
- Knoblauch - 2 Zehen
```

A document without ingredient lines is not a recipe.

## Nutrient table

`Rezepte/Ingredients.md` (configurable) holds base foods, nutrients per 100 g:

```
| Apple | 52 | 0.2 | 14 | 0.3 | Stück: 180, Tasse: 125 |
```

Columns: name, kcal, fat, carbohydrates (kh), protein (prot), unit weights.

## Tools

1. `update_recipes` after editing documents (also runs at startup).
2. `calculate_nutrients` with name, amount and unit. `Portion` is one full
   batch unless the recipe defines it or declares its yield in portions.
3. `calorie_badges` for a whole document, `parse_ingredient` for one line.
4. Nutrients that cannot be determined are null; `found: false` means the
   recipe is unknown or its ingredients reference each other in a cycle.
"#;

/// Service status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub build: BuildInfo,
    pub vault_path: PathBuf,
    pub recipe_count: usize,
    pub rebuild_count: u64,
    pub last_rebuild: Option<RebuildSummary>,
    pub uptime_seconds: u64,
}

/// Tracks process start for uptime reporting
pub struct StatusTracker {
    started: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Current status of the library
    pub fn get_status(&self, library: &RecipeLibrary) -> StatusResponse {
        StatusResponse {
            build: BuildInfo::current(),
            vault_path: library.vault_root().to_path_buf(),
            recipe_count: library.recipe_count(),
            rebuild_count: library.rebuild_count(),
            last_rebuild: library.last_rebuild(),
            uptime_seconds: self.started.elapsed().as_secs(),
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
