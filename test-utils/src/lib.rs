//! Tower Discord Test Utils
//!
//! Provides shared testing utilities for the tower-discord entity models. This crate
//! offers JSON payload factories with sensible defaults and a stub implementation of
//! the `DiscordApi` request capability that replays canned responses, so entity
//! behavior can be tested without network access or a simulated session.
//!
//! # Overview
//!
//! The test utilities consist of two main components:
//! - **factory**: Builders producing Discord user / guild / connection payloads
//! - **StubApi**: A `DiscordApi` implementation recording requests and replaying
//!   queued responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{factory::user::UserPayloadFactory, stub::StubApi};
//!
//! let api = StubApi::new();
//! api.push_response(Ok(Some(serde_json::json!([]))));
//!
//! let payload = UserPayloadFactory::new().username("nelly").build();
//! ```

pub mod factory;
pub mod stub;
