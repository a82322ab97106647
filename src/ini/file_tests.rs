//! Tests for the path-bound INI document.

use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use super::{IniError, IniFile, LineClassifier, Parser, Section};

fn temp_ini(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

mod loading {
    use super::*;

    #[test]
    fn new_does_not_read() {
        let file = IniFile::new("does-not-exist.ini");

        assert!(file.store().is_empty());
        assert_eq!(file.path(), std::path::Path::new("does-not-exist.ini"));
    }

    #[test]
    fn open_parses_immediately() {
        let temp = temp_ini("[owner]\nname=John Doe\n");
        let file = IniFile::open(temp.path()).unwrap();

        assert_eq!(file.get("owner").unwrap().get("name").unwrap(), "John Doe");
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = IniFile::open(dir.path().join("missing.ini"));

        assert!(matches!(result, Err(IniError::FileRead { .. })));
    }

    #[test]
    fn parse_is_repeatable() {
        let temp = temp_ini("[owner]\nname=John Doe\n");
        let mut file = IniFile::open(temp.path()).unwrap();

        file.parse().unwrap();
        file.parse().unwrap();

        assert_eq!(file.store().len(), 1);
    }

    #[test]
    fn parse_picks_up_changes() {
        let temp = temp_ini("[owner]\nname=John Doe\n");
        let mut file = IniFile::open(temp.path()).unwrap();

        fs::write(temp.path(), "[database]\nserver=localhost\n").unwrap();
        file.parse().unwrap();

        assert!(file.get("owner").is_err());
        assert_eq!(file.store().value("database", "server").unwrap(), "localhost");
    }

    #[test]
    fn failed_parse_keeps_earlier_lines() {
        let temp = temp_ini("[owner]\nname=John Doe\noops\n");
        let mut file = IniFile::new(temp.path());

        assert!(file.parse().is_err());
        assert_eq!(file.store().value("owner", "name").unwrap(), "John Doe");
    }

    #[test]
    fn custom_parser_is_used() {
        let temp = temp_ini("# note\n[owner]\nname=John\n");
        let parser = Parser::with_classifier(LineClassifier::with_comment_markers(['#']));
        let mut file = IniFile::with_parser(temp.path(), parser);

        file.parse().unwrap();
        assert_eq!(file.store().value("owner", "name").unwrap(), "John");
    }
}

mod saving {
    use super::*;

    #[test]
    fn save_without_hosts_rewrites_store() {
        let temp = temp_ini("; comment\n[owner]\n  name = John Doe ; inline\n");
        let mut file = IniFile::open(temp.path()).unwrap();

        file.save(&[]).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path()).unwrap(),
            "[owner]\nname=John Doe\n"
        );
    }

    #[test]
    fn set_section_is_persisted() {
        let temp = temp_ini("[owner]\nname=John Doe\n");
        let mut file = IniFile::open(temp.path()).unwrap();

        let mut contents = Section::new();
        contents.insert("mode".to_string(), "fast".to_string());
        file.set("config", contents);
        file.save(&[]).unwrap();

        let reopened = IniFile::open(temp.path()).unwrap();
        assert_eq!(reopened.store(), file.store());
        assert_eq!(reopened.store().value("config", "mode").unwrap(), "fast");
    }

    #[test]
    fn into_store_returns_parsed_data() {
        let temp = temp_ini("[owner]\nname=John Doe\n");
        let store = IniFile::open(temp.path()).unwrap().into_store();

        assert_eq!(store.value("owner", "name").unwrap(), "John Doe");
    }
}
