use serde::{Deserialize, Serialize};

/// The `target` half of a change event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTarget {
    pub name: String,
    pub value: String,
}

/// Change event emitted by formatted inputs, shaped like a native input's
/// `{ target: { name, value } }` so one handler serves both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub target: ChangeTarget,
}

impl FieldChange {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: ChangeTarget {
                name: name.into(),
                value: value.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.target.name
    }

    pub fn value(&self) -> &str {
        &self.target.value
    }
}
