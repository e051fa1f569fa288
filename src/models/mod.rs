pub mod goal;
pub mod parameters;
pub mod protein_table;

pub use goal::{find_goal, GoalDefinition, Selection, GOAL_CATALOG};
pub use parameters::Parameters;
pub use protein_table::{Cell, ProteinRow, ProteinTable, WEIGHT_HEADER};
