//! Per-visitor session state.
//!
//! A session is identified by a random [`SessionId`] carried in a cookie and
//! holds the stored item sequences of both structures plus one-shot notices.
//!
//! - [`SessionStore`]: Port implemented by session storage backends
//! - [`InMemorySessionStore`]: Process-local store with idle expiry and a capacity limit
//! - [`cookie`]: Reading the session id from requests and building `Set-Cookie` values

pub mod cookie;
mod data;
mod identifier;
mod in_memory;
mod store;

pub use data::{SessionData, Structure};
pub use identifier::SessionId;
pub use in_memory::InMemorySessionStore;
pub use store::{SessionError, SessionStore};
