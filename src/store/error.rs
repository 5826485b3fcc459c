use thiserror::Error;

/// Why a nutrient query could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    /// The path starts at the first recipe of the cycle and ends with it again
    #[error("Ingredient cycle detected: {}", path.join(" -> "))]
    Cycle { path: Vec<String> },
}
