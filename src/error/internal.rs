use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with payload handling indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a snowflake ID from a payload value
    ///
    /// Discord serializes IDs either as numbers or as numeric strings; any
    /// other content fails here with the offending value attached.
    #[error("Failed to parse snowflake ID from '{value}': {source}")]
    ParseSnowflake {
        /// The value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A Discord API response body had a different shape than the route documents
    ///
    /// Occurs when a list route returns a non-array body. The response is not
    /// partially decoded; the whole operation fails.
    #[error("Unexpected payload shape from '{route}': expected {expected}")]
    UnexpectedPayload {
        /// The API route that produced the payload
        route: String,
        /// The JSON shape that was expected
        expected: &'static str,
    },
}
