mod category;
mod customization;
mod fixture;
mod menu_item;

pub use category::Category;
pub use customization::{Customization, CustomizationKind};
pub use fixture::{Fixture, FixtureError};
pub use menu_item::MenuItem;
