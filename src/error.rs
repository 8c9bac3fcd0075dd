use thiserror::Error;

/// Top-level error type for coil path generation and export.
#[derive(Debug, Error)]
pub enum CoilError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl CoilError {
    /// Returns `true` if the error was raised by parameter validation.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::Operation(OperationError::InvalidParameter(_)))
    }

    /// Returns `true` if the error comes from a degenerate step geometry.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::Degenerate(_)))
    }

    /// Returns `true` if generation hit its iteration cap.
    #[must_use]
    pub fn is_non_terminating(&self) -> bool {
        matches!(
            self,
            Self::Operation(OperationError::NonTerminating { .. })
        )
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to spiral operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("spiral did not reach its outer radius within {max_iterations} points")]
    NonTerminating { max_iterations: usize },
}

/// Errors raised while serializing a path.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path has no segments to export")]
    EmptyPath,

    #[error("failed to format drawing: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("failed to write drawing: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`CoilError`].
pub type Result<T> = std::result::Result<T, CoilError>;
