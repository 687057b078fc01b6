use thiserror::Error;

pub type Result<T> = std::result::Result<T, SatError>;

#[derive(Debug, Error)]
pub enum SatError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("rectangle ({x0},{y0})-({x1},{y1}) is not inside a {width}x{height} table")]
    Rect {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        width: usize,
        height: usize,
    },

    /// Two builders disagreed on at least one cell. `index` is the first
    /// row-major position where they differ (or the shorter length when the
    /// tables differ in size).
    #[error(
        "{backend} diverges from sequential at index {index} (x={x}, y={y}): expected {expected}, got {actual}"
    )]
    Divergence {
        backend: String,
        index: usize,
        x: usize,
        y: usize,
        expected: u64,
        actual: u64,
    },

    /// Two builders produced tables of different dimensions.
    #[error(
        "{backend} produced a {actual_width}x{actual_height} table, expected {expected_width}x{expected_height}"
    )]
    ShapeDivergence {
        backend: String,
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl SatError {
    /// True when two builders disagreed, on shape or on any cell.
    pub fn is_divergence(&self) -> bool {
        matches!(
            self,
            SatError::Divergence { .. } | SatError::ShapeDivergence { .. }
        )
    }
}
