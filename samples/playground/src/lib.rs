//! Browser playground for the `linkline` queue and deque.
//!
//! Each visitor gets a session holding the item sequences of both
//! structures. A request rebuilds the container from its stored sequence,
//! applies at most one operation, and stores the result again.

#![forbid(unsafe_code)]

pub mod config;
pub mod errors;
pub mod handlers;
pub mod operations;
pub mod profiles;
pub mod render;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;
