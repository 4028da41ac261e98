use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("palette grid needs {needed} dominant colors, got {found}")]
    InsufficientDominantColors { needed: usize, found: usize },

    #[error("cannot average a color box with no samples")]
    EmptyBoxAverage,
}
