//! Pokedex Registry
//!
//! The in-memory record of caught creatures: a guarded map from name to
//! the creature detail fetched at catch time. Same lock discipline as
//! the cache, O(1) critical sections and no I/O under the lock.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::models::Pokemon;

/// Caught-creature registry.
#[derive(Debug, Default)]
pub struct Dex {
    caught: Mutex<HashMap<String, Pokemon>>,
}

impl Dex {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught creature under its name, replacing any earlier
    /// catch of the same creature.
    pub fn add(&self, name: impl Into<String>, details: Pokemon) {
        self.caught.lock().insert(name.into(), details);
    }

    /// Returns the detail record for a caught creature, or `None` if it
    /// was never caught.
    pub fn get(&self, name: &str) -> Option<Pokemon> {
        self.caught.lock().get(name).cloned()
    }

    /// Returns the names of all caught creatures, sorted for stable
    /// listing output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.caught.lock().keys().cloned().collect();
        names.sort();
        names
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> Pokemon {
        serde_json::from_str(&format!(
            r#"{{"id": 1, "name": "{name}", "base_experience": 50, "height": 3, "weight": 40}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let dex = Dex::new();
        dex.add("caterpie", sample("caterpie"));

        let caught = dex.get("caterpie").unwrap();
        assert_eq!(caught.name, "caterpie");
    }

    #[test]
    fn test_get_uncaught_is_none() {
        let dex = Dex::new();
        assert!(dex.get("mewtwo").is_none());
    }

    #[test]
    fn test_names_are_sorted() {
        let dex = Dex::new();
        dex.add("pidgey", sample("pidgey"));
        dex.add("abra", sample("abra"));

        assert_eq!(dex.names(), vec!["abra", "pidgey"]);
    }
}
