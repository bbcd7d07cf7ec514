//! Discord entity models.
//!
//! Each model is constructed from a decoded JSON payload conforming to the
//! corresponding Discord object schema and exposes fetch operations that issue
//! authenticated API calls through the [`DiscordApi`](crate::client::DiscordApi)
//! capability. Fetch results are cached on the owning model; a cache only moves
//! from unfetched to fetched through its fetch call, and a failed fetch leaves
//! the previous state untouched.

pub mod connection;
pub mod guild;
pub mod user;

pub use connection::UserConnection;
pub use guild::Guild;
pub use user::User;

/// Explicit two-state cache for lazily fetched sub-resources.
///
/// An account can legitimately belong to zero guilds, so "empty collection"
/// cannot double as "not yet fetched"; this type keeps the two states apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cached<T> {
    /// No fetch has completed yet.
    #[default]
    Unfetched,
    /// A fetch completed and stored this value. Replaced wholesale by the
    /// next successful fetch.
    Fetched(T),
}

impl<T> Cached<T> {
    /// Whether a fetch has populated this cache.
    pub fn is_fetched(&self) -> bool {
        matches!(self, Cached::Fetched(_))
    }

    /// The cached value, if any fetch has completed.
    pub fn value(&self) -> Option<&T> {
        match self {
            Cached::Fetched(value) => Some(value),
            Cached::Unfetched => None,
        }
    }
}
