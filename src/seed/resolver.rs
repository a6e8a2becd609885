use std::collections::HashMap;

use super::SeedError;

/// Name → generated document id mapping built while seeding.
///
/// A map is local to one run and consulted when dependent entities are
/// wired to the documents created earlier in the same run. Lookups fail
/// loudly so a dangling reference can never be written.
#[derive(Debug)]
pub struct ResolverMap {
    entity: &'static str,
    ids: HashMap<String, String>,
}

impl ResolverMap {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            ids: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, id: String) {
        self.ids.insert(name.to_string(), id);
    }

    pub fn resolve(&self, name: &str) -> Result<&str, SeedError> {
        self.ids
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| SeedError::UnresolvedReference {
                entity: self.entity,
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_round_trip() {
        let mut map = ResolverMap::new("category");
        map.insert("Pizza", "abc123".to_string());

        assert_eq!(map.resolve("Pizza").unwrap(), "abc123");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_name_fails() {
        let map = ResolverMap::new("customization");
        let err = map.resolve("Gold Leaf").unwrap_err();

        assert!(matches!(
            err,
            SeedError::UnresolvedReference {
                entity: "customization",
                ..
            }
        ));
        assert!(err.to_string().contains("Gold Leaf"));
    }

    #[test]
    fn test_duplicate_insert_overwrites() {
        let mut map = ResolverMap::new("category");
        map.insert("Pizza", "first".to_string());
        map.insert("Pizza", "second".to_string());

        assert_eq!(map.resolve("Pizza").unwrap(), "second");
        assert_eq!(map.len(), 1);
    }
}
