use super::goal::Selection;

pub const DEFAULT_MIN_WEIGHT: f64 = 50.0;
pub const DEFAULT_MAX_WEIGHT: f64 = 100.0;
pub const DEFAULT_ROW_COUNT: f64 = 6.0;
pub const MIN_ROWS: f64 = 2.0;
pub const MAX_ROWS: f64 = 50.0;

/// Form values as entered. Validation decides whether they can produce a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub min_weight: f64,
    pub max_weight: f64,
    pub row_count: f64,
    pub selection: Selection,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            row_count: DEFAULT_ROW_COUNT,
            selection: Selection::from_keys(["sedentaire"]),
        }
    }
}

impl Parameters {
    pub fn with_min_weight_text(mut self, text: &str) -> Self {
        self.min_weight = parse_number(text, DEFAULT_MIN_WEIGHT);
        self
    }

    pub fn with_max_weight_text(mut self, text: &str) -> Self {
        self.max_weight = parse_number(text, DEFAULT_MAX_WEIGHT);
        self
    }

    /// Row input is clamped to the allowed range as it is typed.
    pub fn with_row_count_text(mut self, text: &str) -> Self {
        self.row_count = clamp_row_count(parse_number(text, DEFAULT_ROW_COUNT));
        self
    }

    pub fn with_toggled_goal(mut self, key: &str) -> Self {
        self.selection = self.selection.toggled(key);
        self
    }

    /// Row count as a length; fractional input is truncated.
    pub fn rows(&self) -> usize {
        if self.row_count.is_finite() && self.row_count > 0.0 {
            self.row_count as usize
        } else {
            0
        }
    }
}

/// Parses a form field. A cleared field reads as 0, anything else that is not
/// a finite number falls back.
pub fn parse_number(text: &str, fallback: f64) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => fallback,
    }
}

pub fn clamp_row_count(rows: f64) -> f64 {
    rows.clamp(MIN_ROWS, MAX_ROWS)
}
