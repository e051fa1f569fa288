use std::collections::BTreeSet;

/// A protein intake category, in grams of protein per kilogram of body weight per day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl GoalDefinition {
    /// Chip text, e.g. `Sédentaire (0.8–1 g/kg/j)`.
    pub fn chip_label(&self) -> String {
        format!("{} ({}–{} g/kg/j)", self.label, self.min, self.max)
    }
}

pub static GOAL_CATALOG: [GoalDefinition; 4] = [
    GoalDefinition {
        key: "sedentaire",
        label: "Sédentaire",
        min: 0.8,
        max: 1.0,
    },
    GoalDefinition {
        key: "endurance",
        label: "Endurance",
        min: 1.2,
        max: 1.6,
    },
    GoalDefinition {
        key: "conservation",
        label: "Conservation de la masse musculaire",
        min: 1.6,
        max: 1.8,
    },
    GoalDefinition {
        key: "prise",
        label: "Prise de masse musculaire",
        min: 1.8,
        max: 2.2,
    },
];

pub fn find_goal(key: &str) -> Option<&'static GoalDefinition> {
    GOAL_CATALOG.iter().find(|goal| goal.key == key)
}

/// Set of selected goal keys. Column order always follows `GOAL_CATALOG`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from keys, dropping anything not in the catalog.
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            keys: keys
                .into_iter()
                .filter(|key| find_goal(key).is_some())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns a new selection with `key` added or removed.
    pub fn toggled(&self, key: &str) -> Self {
        if find_goal(key).is_none() {
            return self.clone();
        }

        let mut keys = self.keys.clone();
        if !keys.remove(key) {
            keys.insert(key.to_string());
        }
        Self { keys }
    }

    /// Selected goals in catalog order.
    pub fn goals(&self) -> Vec<&'static GoalDefinition> {
        GOAL_CATALOG
            .iter()
            .filter(|goal| self.contains(goal.key))
            .collect()
    }
}
