//! Weight sequence and protein range table generation.
//!
//! Every value goes through `f64::round` (half away from zero), so `72.5`
//! becomes `73` both in the weight column and in the gram ranges.

use crate::models::{GoalDefinition, Parameters, ProteinRow, ProteinTable};
use crate::validation::{validate, Violation};

/// Evenly spaced weights from `min_weight` to `max_weight`, rounded to whole kilograms.
/// Rounding may collapse neighbours into duplicates; they are kept.
pub fn generate_weights(min_weight: f64, max_weight: f64, row_count: usize) -> Vec<i64> {
    if row_count <= 1 {
        return vec![min_weight.round() as i64];
    }

    let step = (max_weight - min_weight) / (row_count - 1) as f64;
    (0..row_count)
        .map(|i| (min_weight + i as f64 * step).round() as i64)
        .collect()
}

pub fn format_range(g_min: f64, g_max: f64) -> String {
    format!("{} – {} g/jour", g_min.round() as i64, g_max.round() as i64)
}

pub fn build_table(weights: &[i64], goals: &[&GoalDefinition]) -> ProteinTable {
    let mut table = ProteinTable::new(goals.iter().map(|g| g.label.to_string()).collect());

    for &weight in weights {
        let w = weight as f64;
        table.add_row(ProteinRow {
            weight,
            ranges: goals
                .iter()
                .map(|g| format_range(w * g.min, w * g.max))
                .collect(),
        });
    }

    table
}

/// Result of one recomputation of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOutcome {
    pub violations: Vec<Violation>,
    pub table: ProteinTable,
}

impl TableOutcome {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validates the parameters and, when nothing blocks, builds the table.
/// Any violation leaves the table completely empty, header included.
pub fn compute(params: &Parameters) -> TableOutcome {
    let violations = validate(params);

    let table = if violations.is_empty() {
        let weights = generate_weights(params.min_weight, params.max_weight, params.rows());
        build_table(&weights, &params.selection.goals())
    } else {
        ProteinTable::empty()
    };

    TableOutcome { violations, table }
}
