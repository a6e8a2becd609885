use serde::{Deserialize, Serialize};
use std::fmt;

/// What a customization is: topping, side, size, crust, or anything else
/// the fixture declares.
///
/// The tag set is open: the backend stores the kind as a plain string, so
/// unknown tags are carried through as `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomizationKind {
    Topping,
    Side,
    Size,
    Crust,
    Other(String),
}

impl From<String> for CustomizationKind {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "topping" => CustomizationKind::Topping,
            "side" => CustomizationKind::Side,
            "size" => CustomizationKind::Size,
            "crust" => CustomizationKind::Crust,
            _ => CustomizationKind::Other(s),
        }
    }
}

impl From<CustomizationKind> for String {
    fn from(kind: CustomizationKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for CustomizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomizationKind::Topping => write!(f, "topping"),
            CustomizationKind::Side => write!(f, "side"),
            CustomizationKind::Size => write!(f, "size"),
            CustomizationKind::Crust => write!(f, "crust"),
            CustomizationKind::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// A menu customization (add-on) as declared in the fixture dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customization {
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: CustomizationKind,
}

impl Customization {
    pub fn new(name: impl Into<String>, price: f64, kind: CustomizationKind) -> Self {
        Self {
            name: name.into(),
            price,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_known_tags() {
        assert_eq!(
            CustomizationKind::from("topping".to_string()),
            CustomizationKind::Topping
        );
        assert_eq!(
            CustomizationKind::from("CRUST".to_string()),
            CustomizationKind::Crust
        );
    }

    #[test]
    fn test_kind_open_tag_preserved() {
        let kind = CustomizationKind::from("sauce".to_string());
        assert_eq!(kind, CustomizationKind::Other("sauce".to_string()));
        assert_eq!(kind.to_string(), "sauce");
    }

    #[test]
    fn test_customization_deserializes_type_field() {
        let parsed: Customization =
            serde_json::from_str(r#"{"name": "Extra Cheese", "price": 1.5, "type": "topping"}"#)
                .unwrap();
        assert_eq!(parsed.name, "Extra Cheese");
        assert_eq!(parsed.price, 1.5);
        assert_eq!(parsed.kind, CustomizationKind::Topping);
    }

    #[test]
    fn test_customization_json_roundtrip() {
        let customization = Customization::new("Salsa Verde", 0.5, "sauce".to_string().into());
        let json = serde_json::to_string(&customization).unwrap();
        assert!(json.contains(r#""type":"sauce""#));
        let parsed: Customization = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, customization);
    }
}
