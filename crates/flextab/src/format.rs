//! Table assembly: validation, spare-width budgeting, and rendering.

use crate::allocate::allocate;
use crate::error::{Result, TableError};
use crate::render::{border, fit};
use crate::sanitize::sanitize;
use crate::types::{ColumnSpec, TableConfig};

/// Separator between adjacent columns.
const COLUMN_GAP: &str = "  ";

/// Width of the inter-column separator in code points.
const GAP_WIDTH: usize = 2;

/// Fixed reserve subtracted from the spare width so rows never land on the
/// terminal's last column and trigger wrapping artifacts.
const SAFETY_BUFFER: usize = 3;

/// Width assumed when the terminal size cannot be queried.
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// Render `rows` as a bordered table scaled to `terminal_width`.
///
/// Pure function of its inputs: no I/O, no retained state, identical
/// arguments always produce identical output. The result is a single string
/// with embedded newlines (top border, one line per row, bottom border),
/// ready to write to standard output.
///
/// Fails with [`TableError::InvalidColumnSpec`] on malformed column specs,
/// [`TableError::RowShape`] when any row's cell count differs from the
/// column count, and [`TableError::DegenerateBudget`] when the terminal is
/// too narrow for the configured minimums; no partial output is produced.
pub fn format_table<S: AsRef<str>>(
    rows: &[Vec<S>],
    config: &TableConfig,
    terminal_width: usize,
) -> Result<String> {
    validate_columns(&config.columns)?;
    for (i, row) in rows.iter().enumerate() {
        if row.len() != config.columns.len() {
            return Err(TableError::RowShape {
                row: i,
                expected: config.columns.len(),
                actual: row.len(),
            });
        }
    }

    let reserved = reserved_width(&config.columns);
    if terminal_width < reserved {
        return Err(TableError::DegenerateBudget {
            required: reserved,
            terminal_width,
        });
    }

    let extras = allocate(terminal_width - reserved, &config.columns);
    let widths: Vec<usize> = config
        .columns
        .iter()
        .zip(&extras)
        .map(|(col, &extra)| col.min_width + extra)
        .collect();

    let border_line = border(&widths);
    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 2);
    lines.push(border_line.clone());
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| fit(&sanitize(cell.as_ref(), config.sanitize_mode), width))
            .collect();
        lines.push(cells.join(COLUMN_GAP));
    }
    lines.push(border_line);
    Ok(lines.join("\n"))
}

/// Render for the current terminal, falling back to
/// [`FALLBACK_TERMINAL_WIDTH`] when the size cannot be determined (e.g.
/// output is piped).
pub fn format_for_terminal<S: AsRef<str>>(rows: &[Vec<S>], config: &TableConfig) -> Result<String> {
    let width = terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(FALLBACK_TERMINAL_WIDTH);
    format_table(rows, config, width)
}

/// Width consumed before any spare distribution: column minimums, one gap
/// between each adjacent pair, and the safety buffer.
fn reserved_width(columns: &[ColumnSpec]) -> usize {
    let minimums: usize = columns.iter().map(|col| col.min_width).sum();
    minimums + GAP_WIDTH * columns.len().saturating_sub(1) + SAFETY_BUFFER
}

fn validate_columns(columns: &[ColumnSpec]) -> Result<()> {
    for (i, col) in columns.iter().enumerate() {
        if let Some(max) = col.max_width {
            if col.min_width > max {
                return Err(TableError::InvalidColumnSpec {
                    column: i,
                    reason: format!("min_width {} exceeds max_width {}", col.min_width, max),
                });
            }
        }
        if !col.weight.is_finite() || col.weight < 0.0 {
            return Err(TableError::InvalidColumnSpec {
                column: i,
                reason: format!("weight {} must be finite and non-negative", col.weight),
            });
        }
    }
    Ok(())
}
