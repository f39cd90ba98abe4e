//! Request dispatch engines.
//!
//! Two deliberately divergent disciplines built on the same template
//! matcher:
//! - [`router`]: append-ordered registry, first match wins, methods compared
//!   case-insensitively
//! - [`waiter`]: LIFO stack, most recent match wins, methods compared
//!   exactly, matched waiters consumed by default
//!
//! Unifying them would silently change observable behavior, so both stay.

pub mod router;
pub mod waiter;

pub use router::{DispatchError, Router};
pub use waiter::WaiterStack;
