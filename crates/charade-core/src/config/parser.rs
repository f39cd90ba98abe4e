//! Fixture file parsing (YAML/JSON).

use crate::config::error::ConfigError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fixture file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFileType {
    Yaml,
    Json,
    Unknown,
}

/// Get fixture file type from path extension
pub fn get_file_type(path: &str) -> FixtureFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => FixtureFileType::Yaml,
        "json" => FixtureFileType::Json,
        _ => FixtureFileType::Unknown,
    }
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::from)
}

/// Parse fixture content based on file type
pub fn parse_fixture<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        FixtureFileType::Yaml => parse_yaml(content),
        FixtureFileType::Json => parse_json(content),
        FixtureFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixture::FixtureFile;
    use rstest::rstest;

    #[rstest]
    #[case("users.yaml", FixtureFileType::Yaml)]
    #[case("users.YAML", FixtureFileType::Yaml)]
    #[case("users.yml", FixtureFileType::Yaml)]
    #[case("users.json", FixtureFileType::Json)]
    #[case("users.JSON", FixtureFileType::Json)]
    #[case("users.txt", FixtureFileType::Unknown)]
    #[case("users", FixtureFileType::Unknown)]
    #[case("", FixtureFileType::Unknown)]
    fn test_get_file_type(#[case] path: &str, #[case] expected: FixtureFileType) {
        assert_eq!(get_file_type(path), expected);
    }

    #[rstest]
    fn test_parse_fixture_yaml() {
        let content = "collection: Users\nrecords:\n  - id: 1\n    username: John\n";
        let fixture: FixtureFile = parse_fixture(content, "users.yaml").unwrap();
        assert_eq!(fixture.collection, "Users");
        assert_eq!(fixture.records.len(), 1);
    }

    #[rstest]
    fn test_parse_fixture_json() {
        let content = r#"{"collection": "Users", "records": [{"id": 1, "username": "John"}]}"#;
        let fixture: FixtureFile = parse_fixture(content, "users.json").unwrap();
        assert_eq!(fixture.collection, "Users");
        assert_eq!(fixture.records.len(), 1);
    }

    #[rstest]
    fn test_parse_fixture_unknown_file_type() {
        let result: Result<FixtureFile, _> = parse_fixture("{}", "users.txt");
        assert!(matches!(result, Err(ConfigError::UnknownFileType(_))));
    }

    #[rstest]
    fn test_parse_fixture_invalid_content() {
        let result: Result<FixtureFile, _> = parse_fixture("not json at all", "users.json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
