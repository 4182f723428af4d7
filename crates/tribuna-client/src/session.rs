//! Session and token lifecycle.
//!
//! The session is an explicit value injected into every API client; there
//! is no ambient token storage. It owns the access/refresh pair behind a
//! `tokio::sync::Mutex` and implements the one retry rule the SDK has: an
//! authenticated request answered with 401 is retried exactly once after a
//! successful refresh, and a second 401 is surfaced unchanged.
//!
//! Refreshes coalesce. The mutex is held across the refresh exchange, and a
//! caller that lost the race finds the token already rotated when it gets
//! the lock, so it reuses the new token instead of issuing its own refresh.
//! Dropping a request future mid-flight never leaves the session in a
//! partial state: token rotation happens only after the refresh response is
//! decoded, inside the same task that holds the lock.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use tribuna_core::error::{Error, Result};
use tribuna_core::models::{LoginRequest, RefreshRequest, RefreshResponse, TokenPair};

use crate::config::ClientConfig;
use crate::transport::{Body, Payload, Transport};

const LOGIN_PATH: &str = "/api/auth/login/";
const REFRESH_PATH: &str = "/api/auth/refresh/";

/// Session state machine: `Anonymous -> Authenticated -> Anonymous`.
/// Expiry is observed reactively through 401 responses, not tracked by
/// timestamps.
#[derive(Debug)]
enum SessionState {
    Anonymous,
    Authenticated(TokenPair),
}

struct SessionInner {
    transport: Transport,
    state: Mutex<SessionState>,
}

/// Authenticated session against one backend.
///
/// Cheap to clone; clones share the same token state. Construct with
/// [`Session::new`] and authenticate via [`Session::login`], or re-inject a
/// persisted pair with [`Session::resume`].
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    /// Create an anonymous session.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self {
            inner: Arc::new(SessionInner {
                transport,
                state: Mutex::new(SessionState::Anonymous),
            }),
        })
    }

    /// Create a session from a previously persisted token pair. The pair is
    /// trusted until the backend rejects it.
    pub fn resume(config: ClientConfig, tokens: TokenPair) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self {
            inner: Arc::new(SessionInner {
                transport,
                state: Mutex::new(SessionState::Authenticated(tokens)),
            }),
        })
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.inner.transport
    }

    /// Authenticate with email and password. On success the session holds
    /// both tokens; on failure the backend's error detail propagates and the
    /// state is unchanged.
    #[instrument(
        skip(self, email, password),
        fields(subsystem = "session", component = "tokens", op = "login")
    )]
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let body = Body::json(&LoginRequest {
            username: email.to_string(),
            password: password.to_string(),
        })?;

        let payload = self
            .inner
            .transport
            .request(Method::POST, LOGIN_PATH, &[], body, None, None)
            .await?;
        let tokens: TokenPair = payload.decode("login response")?;

        let mut state = self.inner.state.lock().await;
        *state = SessionState::Authenticated(tokens);
        info!("Session authenticated");
        Ok(())
    }

    /// Drop both tokens and return to `Anonymous`.
    #[instrument(skip(self), fields(subsystem = "session", component = "tokens", op = "logout"))]
    pub async fn logout(&self) {
        let mut state = self.inner.state.lock().await;
        *state = SessionState::Anonymous;
        info!("Session closed");
    }

    /// Current access token, or [`Error::AuthExpired`] when there is no
    /// session to speak for.
    pub async fn access_token(&self) -> Result<String> {
        let state = self.inner.state.lock().await;
        match &*state {
            SessionState::Authenticated(pair) => Ok(pair.access.clone()),
            SessionState::Anonymous => Err(Error::AuthExpired),
        }
    }

    /// Current token pair, for embedders that persist sessions.
    pub async fn tokens(&self) -> Option<TokenPair> {
        let state = self.inner.state.lock().await;
        match &*state {
            SessionState::Authenticated(pair) => Some(pair.clone()),
            SessionState::Anonymous => None,
        }
    }

    /// Whether the session currently holds tokens.
    pub async fn is_authenticated(&self) -> bool {
        matches!(&*self.inner.state.lock().await, SessionState::Authenticated(_))
    }

    /// Exchange the refresh token for a new access token. On failure the
    /// session resets to `Anonymous` and both tokens are destroyed; the
    /// persisted session is invalid and must be re-established.
    #[instrument(skip(self), fields(subsystem = "session", component = "tokens", op = "refresh"))]
    pub async fn refresh(&self) -> Result<()> {
        let stale = self.access_token().await?;
        self.refresh_internal(&stale).await.map(drop)
    }

    /// Authenticated request with the single refresh-and-retry rule.
    ///
    /// `timeout` overrides the configured default for this call (both
    /// attempts). Dropping the returned future cancels the request without
    /// touching session state.
    #[instrument(
        skip(self, query, body, timeout),
        fields(subsystem = "session", op = "request", path = %path)
    )]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Body,
        timeout: Option<Duration>,
    ) -> Result<Payload> {
        let token = self.access_token().await?;
        let retry_body = body.try_clone();

        let result = self
            .inner
            .transport
            .request(method.clone(), path, query, body, Some(&token), timeout)
            .await;

        let err = match result {
            Ok(payload) => return Ok(payload),
            Err(e) => e,
        };
        if err.status() != Some(401) {
            return Err(err);
        }
        let retry_body = match retry_body {
            Some(b) => b,
            // Multipart bodies cannot be replayed.
            None => return Err(err),
        };

        warn!("Access token rejected; refreshing session");
        let fresh = self.refresh_internal(&token).await?;

        match self
            .inner
            .transport
            .request(method, path, query, retry_body, Some(&fresh), timeout)
            .await
        {
            Err(second) if second.status() == Some(401) => {
                let mut state = self.inner.state.lock().await;
                *state = SessionState::Anonymous;
                warn!("Second 401 after refresh; session reset");
                Err(second)
            }
            other => other,
        }
    }

    /// Convenience GET through [`Session::request`].
    pub(crate) async fn get(&self, path: &str) -> Result<Payload> {
        self.request(Method::GET, path, &[], Body::Empty, None).await
    }

    /// Convenience GET with query pairs and an optional timeout override.
    pub(crate) async fn get_with(
        &self,
        path: &str,
        query: &[(&'static str, String)],
        timeout: Option<Duration>,
    ) -> Result<Payload> {
        self.request(Method::GET, path, query, Body::Empty, timeout)
            .await
    }

    /// Convenience JSON POST through [`Session::request`].
    pub(crate) async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Payload> {
        self.request(Method::POST, path, &[], Body::json(body)?, None)
            .await
    }

    /// Refresh holding the state lock across the exchange. `stale_access`
    /// is the token whose rejection triggered this call; when the stored
    /// token already differs, a concurrent refresh won the race and its
    /// result is reused without another network call.
    async fn refresh_internal(&self, stale_access: &str) -> Result<String> {
        let mut state = self.inner.state.lock().await;

        let refresh = match &*state {
            SessionState::Authenticated(pair) => {
                if pair.access != stale_access {
                    debug!("Token already rotated by a concurrent refresh");
                    return Ok(pair.access.clone());
                }
                pair.refresh.clone()
            }
            SessionState::Anonymous => return Err(Error::AuthExpired),
        };

        let body = Body::json(&RefreshRequest { refresh })?;
        let outcome = self
            .inner
            .transport
            .request(Method::POST, REFRESH_PATH, &[], body, None, None)
            .await
            .and_then(|payload| payload.decode::<RefreshResponse>("refresh response"));

        match outcome {
            Ok(resp) => {
                if let SessionState::Authenticated(pair) = &mut *state {
                    pair.access = resp.access.clone();
                    if let Some(rotated) = resp.refresh {
                        pair.refresh = rotated;
                    }
                }
                info!("Access token refreshed");
                Ok(resp.access)
            }
            Err(e) => {
                warn!(error = %e, "Refresh failed; resetting session");
                *state = SessionState::Anonymous;
                Err(Error::AuthExpired)
            }
        }
    }
}
