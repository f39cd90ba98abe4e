//! Asynchronous fixture loading from the filesystem.

use crate::config::error::ConfigError;
use crate::config::fixture::FixtureFile;
use crate::config::parser::parse_fixture;
use crate::storage::Collection;
use std::path::Path;

/// Read and parse one fixture file into a ready collection.
pub async fn load_fixture(path: impl AsRef<Path>) -> Result<Collection, ConfigError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;
    let fixture: FixtureFile = parse_fixture(&content, &path.to_string_lossy())?;
    fixture.into_collection()
}

/// Load every fixture file matching a glob pattern, in pattern order.
pub async fn load_fixtures(pattern: &str) -> Result<Vec<Collection>, ConfigError> {
    let mut collections = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry.map_err(glob::GlobError::into_error)?;
        collections.push(load_fixture(&path).await?);
    }
    Ok(collections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::path::PathBuf;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("charade-fixture-tests")
            .join(format!("{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_fixture_yaml() {
        let dir = fixture_dir("single");
        let path = dir.join("users.yaml");
        std::fs::write(
            &path,
            "collection: Users\nrecords:\n  - id: 1\n    username: John\n",
        )
        .unwrap();

        let collection = load_fixture(&path).await.unwrap();
        assert_eq!(collection.name(), "Users");
        assert_eq!(
            collection.get(1).unwrap().plain_data(),
            json!({"id": 1, "username": "John"})
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_fixture_missing_file() {
        let result = load_fixture("/nonexistent/users.yaml").await;
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_fixture_unknown_extension() {
        let dir = fixture_dir("unknown");
        let path = dir.join("users.txt");
        std::fs::write(&path, "collection: Users\n").unwrap();

        let result = load_fixture(&path).await;
        assert!(matches!(result, Err(ConfigError::UnknownFileType(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_fixtures_glob() {
        let dir = fixture_dir("glob");
        std::fs::write(
            dir.join("users.json"),
            r#"{"collection": "Users", "records": [{"id": 1, "username": "John"}]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("photos.yaml"),
            "collection: Photos\nrecords:\n  - id: 1\n    url: one.jpg\n",
        )
        .unwrap();

        let pattern = format!("{}/*", dir.display());
        let mut collections = load_fixtures(&pattern).await.unwrap();

        collections.sort_by(|a, b| a.name().cmp(b.name()));
        let names: Vec<&str> = collections.iter().map(Collection::name).collect();
        assert_eq!(names, vec!["Photos", "Users"]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_fixtures_invalid_pattern() {
        let result = load_fixtures("[invalid").await;
        assert!(matches!(result, Err(ConfigError::Pattern(_))));
    }
}
