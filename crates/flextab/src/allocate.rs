//! Spare-width allocation for table columns.
//!
//! This module distributes the spare terminal width among columns in
//! proportion to their flexibility weights, capping each column at its
//! configured maximum: capped proportional water-filling.

use crate::types::ColumnSpec;

/// Distribute `available_extra` code points of spare width across `columns`.
///
/// Returns the extra width granted to each column, index-aligned with the
/// input; the final width of column `i` is `columns[i].min_width + extra[i]`.
///
/// Zero-weight columns are locked at their minimum and contribute nothing to
/// the weight denominator. Columns with a finite maximum whose proportional
/// share would meet or exceed `max_width - min_width` are saturated at that
/// cap and removed from further distribution; because each removal changes
/// every remaining column's share, saturation is re-checked over the whole
/// flexible set until a full pass caps nothing. The survivors then receive
/// `floor(remaining / denominator * weight)`. Any fractional remainder lost
/// to flooring stays unused.
///
/// Callers must validate the specs first (`weight` finite and non-negative,
/// `min_width <= max_width` for capped columns); `format` does so before
/// calling in.
pub fn allocate(available_extra: usize, columns: &[ColumnSpec]) -> Vec<usize> {
    let mut extras = vec![0usize; columns.len()];
    let mut flexible: Vec<usize> = Vec::new();
    let mut denominator = 0.0_f64;

    for (i, col) in columns.iter().enumerate() {
        if col.weight == 0.0 {
            continue; // locked at minimum
        }
        flexible.push(i);
        denominator += col.weight;
    }

    let mut remaining = available_extra;

    // Saturation fixed point. A pass marks every column whose share would
    // reach its cap, using the pass-constant remaining/denominator; removals
    // apply between passes.
    loop {
        let mut saturated: Vec<usize> = Vec::new();
        for &i in &flexible {
            let col = &columns[i];
            let Some(max_width) = col.max_width else {
                continue; // no cap to reach
            };
            let cap = max_width - col.min_width;
            if share(remaining, denominator, col.weight) >= cap {
                saturated.push(i);
            }
        }
        if saturated.is_empty() {
            break;
        }
        for i in saturated {
            let col = &columns[i];
            let cap = col.max_width.unwrap_or(col.min_width) - col.min_width;
            extras[i] = cap;
            remaining = remaining.saturating_sub(cap);
            denominator -= col.weight;
            flexible.retain(|&j| j != i);
        }
    }

    for &i in &flexible {
        extras[i] = share(remaining, denominator, columns[i].weight);
    }

    extras
}

/// Floor of this column's proportional share of the remaining spare width.
fn share(remaining: usize, denominator: f64, weight: f64) -> usize {
    if denominator <= 0.0 {
        return 0;
    }
    (remaining as f64 / denominator * weight).floor() as usize
}
