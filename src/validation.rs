use thiserror::Error;
use crate::models::Parameters;
use crate::models::parameters::{MAX_ROWS, MIN_ROWS};

pub const MAX_PLAUSIBLE_WEIGHT: f64 = 400.0;

/// A blocking problem with the form. Messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Certains champs ne sont pas des nombres valides.")]
    NotANumber,
    #[error("Les poids doivent être strictement positifs.")]
    NonPositiveWeight,
    #[error("Le poids minimum doit être inférieur au poids maximum.")]
    MinNotBelowMax,
    #[error("Le nombre de lignes doit être ≥ 2.")]
    TooFewRows,
    #[error("Le nombre de lignes doit être ≤ 50 (pour garder le tableau lisible).")]
    TooManyRows,
    #[error("Sélectionne au moins un objectif.")]
    EmptySelection,
    #[error("Poids très élevé (> 400 kg). Vérifie la saisie.")]
    WeightTooHigh,
}

/// Checks every rule and reports all violations in a fixed order.
/// A non-finite field stops the numeric checks after `NotANumber`.
pub fn validate(params: &Parameters) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !params.min_weight.is_finite() || !params.max_weight.is_finite() || !params.row_count.is_finite() {
        violations.push(Violation::NotANumber);
        return violations;
    }

    if params.min_weight <= 0.0 || params.max_weight <= 0.0 {
        violations.push(Violation::NonPositiveWeight);
    }
    if params.min_weight >= params.max_weight {
        violations.push(Violation::MinNotBelowMax);
    }
    if params.row_count < MIN_ROWS {
        violations.push(Violation::TooFewRows);
    }
    if params.row_count > MAX_ROWS {
        violations.push(Violation::TooManyRows);
    }
    if params.selection.is_empty() {
        violations.push(Violation::EmptySelection);
    }
    if params.min_weight > MAX_PLAUSIBLE_WEIGHT || params.max_weight > MAX_PLAUSIBLE_WEIGHT {
        violations.push(Violation::WeightTooHigh);
    }

    violations
}
