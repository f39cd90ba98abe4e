//! Collection fixture files.
//!
//! Fixtures seed a [`Registry`](crate::storage::Registry) from YAML or JSON
//! files instead of code: each file names a collection and lists its seed
//! records, which pass through normal record validation on load.

pub mod error;
pub mod fixture;
pub mod loader;
pub mod parser;

pub use error::ConfigError;
pub use fixture::FixtureFile;
pub use loader::{load_fixture, load_fixtures};
pub use parser::{get_file_type, parse_fixture, FixtureFileType};
