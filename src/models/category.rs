use serde::{Deserialize, Serialize};

/// A menu category as declared in the fixture dataset.
///
/// The category name doubles as its lookup key when menu items are wired
/// to their category document during seeding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
