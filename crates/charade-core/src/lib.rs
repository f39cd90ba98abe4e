//! Test-time API mocking engine.
//!
//! Charade lets a test author pre-register expected HTTP-like requests by
//! URL template and method, back them with an in-memory relational fixture
//! store, and simulate a client against the result. No network, no timers,
//! no global state.
//!
//! - [`storage`]: validated records, resettable collections, a registry
//!   that resolves cross-collection links and projects record graphs
//! - [`matching`]: `{name}` template matching and query extraction
//! - [`dispatch`]: the two dispatch disciplines, a first-match-wins
//!   [`Router`] and a LIFO [`WaiterStack`]
//! - [`config`]: YAML/JSON fixture files seeding collections

pub mod config;
pub mod dispatch;
pub mod matching;
pub mod storage;

pub use config::ConfigError;
pub use dispatch::router::{Controller, DispatchError, RequestBody, Route, Router};
pub use dispatch::waiter::{WaiterAction, WaiterConfig, WaiterStack};
pub use storage::{AssembleConfig, Collection, Field, Record, Registry, StorageError};
