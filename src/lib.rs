//! Discord OAuth2 entity models for tower-sessions based web services.
//!
//! This library converts Discord REST API payloads into typed entity models and
//! issues the follow-up authenticated requests those entities need. It is a thin
//! data-binding layer: the host application owns the OAuth2 authorization flow,
//! token refresh, and the web framework; this crate owns what happens once an
//! access token exists.
//!
//! # Architecture
//!
//! - **Model Layer** (`model/`) - Typed Discord entities (`User`, `Guild`,
//!   `UserConnection`) with lazily cached sub-resources
//! - **Client Layer** (`client`) - The `DiscordApi` request capability and the
//!   reqwest-backed `DiscordClient`
//! - **Session Layer** (`session`) - Type-safe token payload storage on top of
//!   tower-sessions
//! - **Error Layer** (`error/`) - Library error types
//! - **Configuration** (`config`) - Bot credential and endpoint configuration
//!
//! # Request Flow
//!
//! A typical interaction flows through these layers:
//!
//! 1. The host application exchanges an authorization code and stores the token
//!    payload via [`DiscordOAuth2Session`]
//! 2. A handler loads the token and fetches the account with
//!    [`User::fetch_from_api`]
//! 3. Entity methods like [`User::fetch_guilds`] issue follow-up calls through
//!    the [`DiscordApi`] capability and cache the results on the entity
//!
//! Credentials are always passed explicitly; no entity operation reads ambient
//! session state, so the model layer tests against a stubbed capability without
//! a simulated session.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
mod util;

pub use client::{AuthScheme, DiscordApi, DiscordClient, Method};
pub use config::Config;
pub use error::Error;
pub use model::{Cached, Guild, User, UserConnection};
pub use session::{DiscordOAuth2Session, TokenPayload};
