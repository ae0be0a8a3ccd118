//! Error types for table rendering.

use thiserror::Error;

/// Errors that can occur while laying out or rendering a table.
///
/// All variants are fatal to the render call that produced them: the engine
/// performs pure computation, so there is nothing to retry internally. The
/// caller decides whether to abort, re-render with different inputs, or
/// degrade (e.g. drop columns).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A row's cell count does not match the configured column count.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A column specification violates its preconditions.
    #[error("column {column}: {reason}")]
    InvalidColumnSpec { column: usize, reason: String },

    /// The terminal is narrower than the configured minimums, inter-column
    /// gaps, and safety buffer combined.
    #[error("terminal width {terminal_width} is below the {required} columns required by the configured layout")]
    DegenerateBudget {
        required: usize,
        terminal_width: usize,
    },
}

/// Result type for table rendering operations.
pub type Result<T> = std::result::Result<T, TableError>;
