//! The static fixture dataset seeding runs are built from.
//!
//! A fixture is validated before any remote call is made: every reference
//! a menu item declares must point at a category or customization the
//! fixture itself defines, and names must be unique within each section.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::{Category, Customization, MenuItem};

/// The bundled demo catalog, used when no `--fixtures` path is given.
const BUILTIN: &str = include_str!("../../fixtures/menu.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    pub categories: Vec<Category>,
    pub customizations: Vec<Customization>,
    pub menu: Vec<MenuItem>,
}

impl Fixture {
    /// Parses the embedded default dataset.
    pub fn builtin() -> Result<Self, FixtureError> {
        serde_json::from_str(BUILTIN)
            .map_err(|e| FixtureError::ParseError("builtin fixture".to_string(), e))
    }

    /// Loads a dataset from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FixtureError::ReadError(path.to_path_buf(), e))?;
        serde_json::from_str(&contents)
            .map_err(|e| FixtureError::ParseError(path.display().to_string(), e))
    }

    /// Checks referential integrity within the dataset.
    ///
    /// Runs before seeding touches the backend, so a broken fixture fails
    /// without wiping anything.
    pub fn validate(&self) -> Result<(), FixtureError> {
        let categories = unique_names("category", self.categories.iter().map(|c| c.name.as_str()))?;
        let customizations = unique_names(
            "customization",
            self.customizations.iter().map(|c| c.name.as_str()),
        )?;
        unique_names("menu item", self.menu.iter().map(|m| m.name.as_str()))?;

        for item in &self.menu {
            if !categories.contains(item.category_name.as_str()) {
                return Err(FixtureError::UnknownCategory {
                    item: item.name.clone(),
                    name: item.category_name.clone(),
                });
            }
            for cus_name in &item.customizations {
                if !customizations.contains(cus_name.as_str()) {
                    return Err(FixtureError::UnknownCustomization {
                        item: item.name.clone(),
                        name: cus_name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn unique_names<'a>(
    entity: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, FixtureError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(FixtureError::DuplicateName {
                entity,
                name: name.to_string(),
            });
        }
    }
    Ok(seen)
}

/// Errors loading or validating a fixture dataset.
#[derive(Debug)]
pub enum FixtureError {
    ReadError(PathBuf, std::io::Error),
    ParseError(String, serde_json::Error),
    DuplicateName { entity: &'static str, name: String },
    UnknownCategory { item: String, name: String },
    UnknownCustomization { item: String, name: String },
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureError::ReadError(path, e) => {
                write!(f, "Failed to read fixture file '{}': {}", path.display(), e)
            }
            FixtureError::ParseError(source, e) => {
                write!(f, "Failed to parse {}: {}", source, e)
            }
            FixtureError::DuplicateName { entity, name } => {
                write!(f, "Duplicate {} name '{}' in fixture", entity, name)
            }
            FixtureError::UnknownCategory { item, name } => {
                write!(
                    f,
                    "Menu item '{}' references unknown category '{}'",
                    item, name
                )
            }
            FixtureError::UnknownCustomization { item, name } => {
                write!(
                    f,
                    "Menu item '{}' references unknown customization '{}'",
                    item, name
                )
            }
        }
    }
}

impl std::error::Error for FixtureError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomizationKind;
    use std::io::Write;
    use tempfile::tempdir;

    fn small_fixture() -> Fixture {
        Fixture {
            categories: vec![Category::new("Pizza", "Stone-baked.")],
            customizations: vec![Customization::new(
                "Extra Cheese",
                1.5,
                CustomizationKind::Topping,
            )],
            menu: vec![MenuItem {
                name: "Margherita".to_string(),
                description: "Tomato and mozzarella.".to_string(),
                image_url: "https://x/img.png".to_string(),
                price: 12.5,
                rating: 4.7,
                calories: 780,
                protein: 30,
                category_name: "Pizza".to_string(),
                customizations: vec!["Extra Cheese".to_string()],
            }],
        }
    }

    #[test]
    fn test_builtin_parses_and_validates() {
        let fixture = Fixture::builtin().unwrap();
        assert!(!fixture.categories.is_empty());
        assert!(!fixture.customizations.is_empty());
        assert!(!fixture.menu.is_empty());
        fixture.validate().unwrap();
    }

    #[test]
    fn test_from_path() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("menu.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "{}",
            serde_json::to_string(&small_fixture()).unwrap()
        )
        .unwrap();

        let fixture = Fixture::from_path(&path).unwrap();
        assert_eq!(fixture, small_fixture());
    }

    #[test]
    fn test_from_path_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = Fixture::from_path(&temp_dir.path().join("nope.json"));
        assert!(matches!(result, Err(FixtureError::ReadError(_, _))));
    }

    #[test]
    fn test_validate_unknown_category() {
        let mut fixture = small_fixture();
        fixture.menu[0].category_name = "Sushi".to_string();

        let err = fixture.validate().unwrap_err();
        assert!(matches!(err, FixtureError::UnknownCategory { .. }));
        assert!(err.to_string().contains("Sushi"));
    }

    #[test]
    fn test_validate_unknown_customization() {
        let mut fixture = small_fixture();
        fixture.menu[0]
            .customizations
            .push("Gold Leaf".to_string());

        let err = fixture.validate().unwrap_err();
        assert!(matches!(err, FixtureError::UnknownCustomization { .. }));
    }

    #[test]
    fn test_validate_duplicate_names() {
        let mut fixture = small_fixture();
        fixture
            .categories
            .push(Category::new("Pizza", "Again."));

        let err = fixture.validate().unwrap_err();
        assert!(matches!(
            err,
            FixtureError::DuplicateName {
                entity: "category",
                ..
            }
        ));
    }
}
