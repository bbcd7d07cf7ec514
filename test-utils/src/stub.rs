//! Stub implementation of the Discord request capability.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;
use tower_discord::client::{AuthScheme, DiscordApi, Method};
use tower_discord::error::Error;

/// Authentication scheme of a recorded request, with the credential captured
/// as an owned string.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedAuth {
    /// User OAuth2 bearer token (the token's secret).
    Bearer(String),
    /// The configured bot credential.
    Bot,
}

/// One request issued through the stub.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub route: String,
    pub method: Method,
    pub auth: RecordedAuth,
    pub body: Option<Value>,
}

/// A `DiscordApi` implementation that records issued requests and replays
/// queued responses in order.
///
/// Queue responses with `push_response` before exercising the code under
/// test, then inspect `calls()` to assert on the requests it issued. A
/// request with no queued response panics, pointing at the missing stub.
#[derive(Default)]
pub struct StubApi {
    responses: Mutex<VecDeque<Result<Option<Value>, Error>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubApi {
    /// Creates a stub with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response for the next unanswered request.
    pub fn push_response(&self, response: Result<Option<Value>, Error>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// The requests issued so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl DiscordApi for StubApi {
    async fn request(
        &self,
        route: &str,
        method: Method,
        auth: AuthScheme<'_>,
        body: Option<&Value>,
    ) -> Result<Option<Value>, Error> {
        let auth = match auth {
            AuthScheme::Bearer(token) => RecordedAuth::Bearer(token.secret().clone()),
            AuthScheme::Bot => RecordedAuth::Bot,
        };

        self.calls.lock().unwrap().push(RecordedCall {
            route: route.to_string(),
            method: method.clone(),
            auth,
            body: body.cloned(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("StubApi has no queued response for {} {}", method, route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn records_requests_and_replays_responses_in_order() {
        let api = StubApi::new();
        api.push_response(Ok(Some(json!({ "first": true }))));
        api.push_response(Ok(None));

        let body = json!({ "access_token": "token" });
        let first = api
            .request("/guilds/1/members/2", Method::PUT, AuthScheme::Bot, Some(&body))
            .await
            .unwrap();
        let second = api
            .request("/users/@me", Method::GET, AuthScheme::Bot, None)
            .await
            .unwrap();

        assert_eq!(first, Some(json!({ "first": true })));
        assert_eq!(second, None);

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].route, "/guilds/1/members/2");
        assert_eq!(calls[0].method, Method::PUT);
        assert_eq!(calls[0].auth, RecordedAuth::Bot);
        assert_eq!(calls[0].body, Some(body));
        assert_eq!(calls[1].route, "/users/@me");
        assert!(calls[1].body.is_none());
    }

    #[tokio::test]
    async fn replays_queued_errors() {
        let api = StubApi::new();
        api.push_response(Err(Error::Unauthorized));

        let result = api
            .request("/users/@me/guilds", Method::GET, AuthScheme::Bot, None)
            .await;

        assert!(matches!(result, Err(Error::Unauthorized)));
    }

    #[tokio::test]
    #[should_panic(expected = "no queued response")]
    async fn panics_without_queued_response() {
        let api = StubApi::new();
        let _ = api
            .request("/users/@me", Method::GET, AuthScheme::Bot, None)
            .await;
    }
}
