//! Payload factories for Discord entity tests.
//!
//! Each factory produces a JSON payload matching the corresponding Discord
//! object schema, with auto-incremented IDs and sensible defaults that can be
//! overridden per test through a builder pattern.

pub mod connection;
pub mod guild;
pub mod helpers;
pub mod user;
