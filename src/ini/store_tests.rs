//! Tests for the section store.

use super::{IniError, Section, Store};

fn sample_store() -> Store {
    let mut store = Store::new();
    store.set_value("owner", "name", "John Doe");
    store.set_value("database", "name", "svc");
    store.set_value("database", "server", "192.0.2.62");
    store
}

mod lookup {
    use super::*;

    #[test]
    fn get_existing_section() {
        let store = sample_store();
        let owner = store.get("owner").unwrap();

        assert_eq!(owner.get("name").map(String::as_str), Some("John Doe"));
    }

    #[test]
    fn get_missing_section() {
        let store = sample_store();

        match store.get("network") {
            Err(IniError::SectionNotFound { section }) => assert_eq!(section, "network"),
            other => panic!("Expected SectionNotFound, got {other:?}"),
        }
    }

    #[test]
    fn value_of_missing_key() {
        let store = sample_store();

        match store.value("owner", "email") {
            Err(IniError::KeyNotFound { section, key }) => {
                assert_eq!(section, "owner");
                assert_eq!(key, "email");
            }
            other => panic!("Expected KeyNotFound, got {other:?}"),
        }
    }

    #[test]
    fn value_in_missing_section() {
        let store = sample_store();
        let result = store.value("network", "name");

        assert!(matches!(result, Err(IniError::SectionNotFound { .. })));
    }

    #[test]
    fn lookup_errors_are_classified() {
        let store = sample_store();

        assert!(store.get("network").unwrap_err().is_lookup());
        assert!(store.value("owner", "email").unwrap_err().is_lookup());
        assert!(store.section_of_key("email").unwrap_err().is_lookup());
    }
}

mod section_of_key {
    use super::*;

    #[test]
    fn first_inserted_section_wins() {
        let store = sample_store();
        assert_eq!(store.section_of_key("name").unwrap(), "owner");
    }

    #[test]
    fn unique_key() {
        let store = sample_store();
        assert_eq!(store.section_of_key("server").unwrap(), "database");
    }

    #[test]
    fn missing_key() {
        let store = sample_store();

        match store.section_of_key("email") {
            Err(IniError::NoSectionForKey { key }) => assert_eq!(key, "email"),
            other => panic!("Expected NoSectionForKey, got {other:?}"),
        }
    }

    #[test]
    fn empty_store() {
        let store = Store::new();
        assert!(store.section_of_key("name").is_err());
    }
}

mod mutation {
    use super::*;

    #[test]
    fn set_value_overwrites_in_place() {
        let mut store = sample_store();
        store.set_value("database", "name", "other");

        let keys: Vec<_> = store.get("database").unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "server"]);
        assert_eq!(store.value("database", "name").unwrap(), "other");
    }

    #[test]
    fn set_value_creates_section_at_end() {
        let mut store = sample_store();
        store.set_value("config", "mode", "fast");

        let names: Vec<_> = store.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["owner", "database", "config"]);
    }

    #[test]
    fn set_replaces_section_contents() {
        let mut store = sample_store();
        let mut contents = Section::new();
        contents.insert("port".to_string(), "5432".to_string());

        store.set("database", contents);

        assert!(store.value("database", "server").is_err());
        assert_eq!(store.value("database", "port").unwrap(), "5432");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn get_mut_modifies_section() {
        let mut store = sample_store();
        store
            .get_mut("owner")
            .unwrap()
            .insert("email".to_string(), "john@example.com".to_string());

        assert_eq!(store.value("owner", "email").unwrap(), "john@example.com");
    }

    #[test]
    fn section_entry_keeps_existing_entries() {
        let mut store = sample_store();
        store.section_entry("owner");

        assert_eq!(store.value("owner", "name").unwrap(), "John Doe");
    }

    #[test]
    fn clear_removes_everything() {
        let mut store = sample_store();
        store.clear();

        assert!(store.is_empty());
        assert!(!store.contains_section("owner"));
    }
}

mod serialization {
    use super::*;

    #[test]
    fn json_keeps_section_order() {
        let store = sample_store();
        let json = serde_json::to_string(&store).unwrap();

        assert_eq!(
            json,
            r#"{"owner":{"name":"John Doe"},"database":{"name":"svc","server":"192.0.2.62"}}"#
        );
    }
}
