//! Account client: registration and profile.

use reqwest::Method;
use tracing::{info, instrument};

use tribuna_core::error::Result;
use tribuna_core::models::{RegisterRequest, RegisterResponse, UserProfile};

use crate::session::Session;
use crate::transport::Body;

const REGISTER_PATH: &str = "/api/auth/register/";
const PROFILE_PATH: &str = "/api/auth/profile/";

/// Client for the account endpoints.
#[derive(Clone)]
pub struct AccountClient {
    session: Session,
}

impl AccountClient {
    /// Create a client over an injected session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Create an account. Runs unauthenticated; registering does not log the
    /// new user in, so follow up with [`Session::login`].
    ///
    /// [`Session::login`]: crate::session::Session::login
    #[instrument(skip(self, request), fields(subsystem = "account", component = "client", op = "register"))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        let payload = self
            .session
            .transport()
            .request(Method::POST, REGISTER_PATH, &[], Body::json(request)?, None, None)
            .await?;
        let response: RegisterResponse = payload.decode("register response")?;
        info!(user_id = response.user_id, "Account registered");
        Ok(response)
    }

    /// Fetch the authenticated user's profile. Also serves as a cheap
    /// session liveness probe: it exercises the full auth path including the
    /// refresh-and-retry rule.
    #[instrument(skip(self), fields(subsystem = "account", component = "client", op = "profile"))]
    pub async fn profile(&self) -> Result<UserProfile> {
        let payload = self.session.get(PROFILE_PATH).await?;
        payload.decode("profile response")
    }
}
