//! Adaptive column layout and table rendering for variable-width terminals.
//!
//! Flextab takes ordered rows of string cells plus a per-column layout
//! configuration and produces a fixed-width, bordered, plain-text table
//! scaled to the terminal. Spare horizontal space is split among columns by
//! relative flexibility weight, with per-column minimum and maximum widths
//! (capped proportional water-filling). Cells are optionally sanitized, then
//! truncated with an ellipsis or right-padded to their exact column width.
//!
//! ```rust
//! use flextab::{format_table, ColumnSpec, SanitizeMode, TableConfig};
//!
//! let config = TableConfig::builder()
//!     .column(ColumnSpec::locked(8))                // fixed-width id column
//!     .column(ColumnSpec::bounded(4, 20, 1.0))      // name, capped at 20
//!     .column(ColumnSpec::flexible(10, 2.0))        // description takes the rest
//!     .sanitize(SanitizeMode::StripEmoji)
//!     .build();
//!
//! let rows = vec![
//!     vec!["a1b2c3d4", "espresso", "short and strong"],
//!     vec!["e5f6a7b8", "cold brew", "slow-steeped overnight, smooth"],
//! ];
//!
//! let table = format_table(&rows, &config, 80)?;
//! println!("{table}");
//! # Ok::<(), flextab::TableError>(())
//! ```
//!
//! Everything here is pure computation: the engine never queries the
//! terminal (except the explicit [`format_for_terminal`] convenience), never
//! prints, and retains no state between calls. Fetching records, filtering
//! them, and loading the configuration are the caller's concern.
//!
//! # Width model
//!
//! Widths count Unicode code points. Wide-glyph (CJK/emoji) display-column
//! measurement is out of scope by design.

mod allocate;
mod error;
mod format;
mod render;
mod sanitize;
mod types;

pub use allocate::allocate;
pub use error::{Result, TableError};
pub use format::{format_for_terminal, format_table, FALLBACK_TERMINAL_WIDTH};
pub use render::{border, fit, ELLIPSIS};
pub use sanitize::sanitize;
pub use types::{ColumnSpec, SanitizeMode, TableConfig, TableConfigBuilder};
