use std::fmt;

pub const WEIGHT_HEADER: &str = "Poids (kg)";

/// A single table cell. `Empty` renders as an empty string everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Weight(i64),
    Text(String),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weight(kg) => write!(f, "{}", kg),
            Self::Text(text) => f.write_str(text),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProteinRow {
    pub weight: i64,
    /// One formatted range per selected goal, in catalog order.
    pub ranges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProteinTable {
    pub header: Vec<String>,
    pub rows: Vec<ProteinRow>,
}

impl ProteinTable {
    pub fn new(goal_labels: Vec<String>) -> Self {
        let mut header = Vec::with_capacity(goal_labels.len() + 1);
        header.push(WEIGHT_HEADER.to_string());
        header.extend(goal_labels);

        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// No header and no rows; what a blocked form produces.
    pub fn empty() -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: ProteinRow) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    pub fn goal_columns(&self) -> usize {
        self.header.len().saturating_sub(1)
    }

    /// Header followed by body rows, ready for serialization.
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut cells = Vec::with_capacity(self.rows.len() + 1);
        cells.push(self.header.iter().map(|h| Cell::Text(h.clone())).collect());

        for row in &self.rows {
            let mut line = Vec::with_capacity(row.ranges.len() + 1);
            line.push(Cell::Weight(row.weight));
            line.extend(row.ranges.iter().map(|r| Cell::Text(r.clone())));
            cells.push(line);
        }

        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Weight(72).to_string(), "72");
        assert_eq!(Cell::from("abc").to_string(), "abc");
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(Cell::from(None::<String>), Cell::Empty);
        assert_eq!(Cell::from(Some("x")), Cell::Text("x".to_string()));
    }

    #[test]
    fn test_empty_table_has_no_cells() {
        let table = ProteinTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.goal_columns(), 0);
        assert!(table.to_cells().is_empty());
        assert!(!ProteinTable::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_to_cells_puts_header_first() {
        let mut table = ProteinTable::new(vec!["Endurance".to_string()]);
        table.add_row(ProteinRow {
            weight: 70,
            ranges: vec!["84 – 112 g/jour".to_string()],
        });

        let cells = table.to_cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], vec![Cell::from(WEIGHT_HEADER), Cell::from("Endurance")]);
        assert_eq!(cells[1], vec![Cell::Weight(70), Cell::from("84 – 112 g/jour")]);
        assert_eq!(table.goal_columns(), 1);
    }
}
