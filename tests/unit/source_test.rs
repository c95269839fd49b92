//! Tests for the property source adapters

use std::fs;

use propreport::adapters::{
    PropertySet, SourceError, load_properties, parse_definitions, parse_properties,
};
use propreport::core::models::{PropertyValue, Stringify};
use propreport::core::ports::PropertySource;
use propreport::core::services::build_model;
use tempfile::TempDir;

const SAMPLE: &str = r#"
name = "demo"
version = "1.2.0"
retries = 3
ratio = 0.5
offline = false
released = 1979-05-27T07:32:00Z
tags = ["fast", "small"]

[database]
host = "localhost"
port = 5432
"#;

// =============================================================================
// TOML files
// =============================================================================

mod toml_source {
    use super::*;

    #[test]
    fn top_level_keys_become_properties() {
        let set = parse_properties(SAMPLE).unwrap();

        let mut names: Vec<_> = set.names().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            ["database", "name", "offline", "ratio", "released", "retries", "tags", "version"]
        );
    }

    #[test]
    fn values_render_like_their_source() {
        let set = parse_properties(SAMPLE).unwrap();
        let model = build_model(&set, None);

        assert_eq!(model.get("name"), Some("demo"));
        assert_eq!(model.get("retries"), Some("3"));
        assert_eq!(model.get("ratio"), Some("0.5"));
        assert_eq!(model.get("offline"), Some("false"));
        assert_eq!(model.get("released"), Some("1979-05-27T07:32:00Z"));
        assert_eq!(model.get("tags"), Some("[fast, small]"));
        assert_eq!(model.get("database"), Some("{host=localhost, port=5432}"));
        assert_eq!(model.get("properties"), Some("{...}"));
    }

    #[test]
    fn nested_tables_keep_structure() {
        let set = parse_properties(SAMPLE).unwrap();
        let database = set.get("database").unwrap();
        assert_eq!(database.type_name(), "Table");
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("properties.toml");
        fs::write(&path, "group = \"org.example\"\n").unwrap();

        let set = load_properties(&path).unwrap();

        assert_eq!(set.len(), 1);
        assert!(set.contains("group"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let err = load_properties(&path).unwrap_err();

        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let err = parse_properties("name = ").unwrap_err();
        assert!(matches!(err, SourceError::Toml(_)));
    }
}

// =============================================================================
// Property sets and definitions
// =============================================================================

mod property_set {
    use super::*;

    #[test]
    fn set_exposes_itself_last() {
        let mut set = PropertySet::new();
        set.insert("a", PropertyValue::from(1));

        let entries = set.entries();
        let names: Vec<_> = entries.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["a", "properties"]);
        assert!(set.get("properties").is_some());
    }

    #[test]
    fn definitions_override_file_values() {
        let mut set = parse_properties("version = \"1.0\"\nname = \"demo\"\n").unwrap();

        set.merge(parse_definitions(["version=2.0", "extra=yes"]).unwrap());

        let model = build_model(&set, None);
        assert_eq!(model.get("version"), Some("2.0"));
        assert_eq!(model.get("name"), Some("demo"));
        assert_eq!(model.get("extra"), Some("yes"));
    }

    #[test]
    fn malformed_definition_rejects_all() {
        let err = parse_definitions(["ok=1", "broken"]).unwrap_err();

        assert!(matches!(err, SourceError::MalformedDefinition(ref d) if d == "broken"));
    }

    #[test]
    fn merge_overrides_in_place() {
        let mut base = PropertySet::new();
        base.insert("a", PropertyValue::from(1));
        base.insert("b", PropertyValue::from(2));
        let mut overrides = PropertySet::new();
        overrides.insert("a", PropertyValue::from(10));
        overrides.insert_null("c");

        base.merge(overrides);

        assert_eq!(base.names().collect::<Vec<_>>(), ["a", "b", "c"]);
        let model = build_model(&base, None);
        assert_eq!(model.get("a"), Some("10"));
        assert_eq!(model.get("c"), Some("null"));
    }
}
