use serde::{Deserialize, Serialize};

/// A menu item as declared in the fixture dataset.
///
/// `image_url` points at the source image to ingest; the seeded document
/// carries the backend's view URL for the uploaded copy instead.
/// `category_name` and `customizations` are names resolved to document ids
/// at seeding time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub rating: f64,
    pub calories: u32,
    pub protein: u32,
    pub category_name: String,
    #[serde(default)]
    pub customizations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_from_fixture_json() {
        let parsed: MenuItem = serde_json::from_str(
            r#"{
                "name": "Margherita",
                "description": "Tomato, fior di latte, basil.",
                "image_url": "https://x/img.png",
                "price": 12.5,
                "rating": 4.7,
                "calories": 780,
                "protein": 30,
                "category_name": "Pizzas",
                "customizations": ["Extra Cheese", "Thin Crust"]
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.name, "Margherita");
        assert_eq!(parsed.category_name, "Pizzas");
        assert_eq!(parsed.customizations.len(), 2);
    }

    #[test]
    fn test_menu_item_customizations_default_empty() {
        let parsed: MenuItem = serde_json::from_str(
            r#"{
                "name": "Plain Bowl",
                "description": "No add-ons.",
                "image_url": "https://x/bowl.png",
                "price": 8.0,
                "rating": 4.0,
                "calories": 400,
                "protein": 18,
                "category_name": "Bowls"
            }"#,
        )
        .unwrap();
        assert!(parsed.customizations.is_empty());
    }
}
