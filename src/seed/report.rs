use serde::Serialize;
use std::fmt;

/// A menu item left out of the catalog, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedItem {
    pub name: String,
    pub reason: String,
}

/// Outcome of a seeding run.
///
/// Returned to the caller so scripts can act on partial results instead
/// of scraping console output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeedReport {
    pub documents_removed: usize,
    pub files_removed: usize,
    pub categories_created: usize,
    pub customizations_created: usize,
    pub menu_items_created: usize,
    pub links_created: usize,
    pub skipped: Vec<SkippedItem>,
}

impl SeedReport {
    /// True when every fixture menu item made it into the catalog.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  ✓ wiped {} document(s) and {} image(s)",
            self.documents_removed, self.files_removed
        )?;
        writeln!(f, "  ✓ {} categories", self.categories_created)?;
        writeln!(f, "  ✓ {} customizations", self.customizations_created)?;
        writeln!(
            f,
            "  ✓ {} menu items with {} customization links",
            self.menu_items_created, self.links_created
        )?;
        for skipped in &self.skipped {
            writeln!(f, "  ✗ skipped '{}': {}", skipped.name, skipped.reason)?;
        }
        writeln!(f)?;
        if self.is_complete() {
            writeln!(f, "Seeding complete.")
        } else {
            writeln!(
                f,
                "Seeding finished with {} item(s) skipped.",
                self.skipped.len()
            )
        }
    }
}
