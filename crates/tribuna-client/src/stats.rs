//! Dashboard statistics client.

use tracing::instrument;

use tribuna_core::error::Result;
use tribuna_core::models::DashboardStats;

use crate::session::Session;

const DASHBOARD_PATH: &str = "/api/estatisticas/dashboard/";

/// Client for the statistics endpoints.
#[derive(Clone)]
pub struct StatsClient {
    session: Session,
}

impl StatsClient {
    /// Create a client over an injected session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Fetch the aggregated dashboard counters for the authenticated user.
    #[instrument(skip(self), fields(subsystem = "stats", component = "client", op = "dashboard"))]
    pub async fn dashboard(&self) -> Result<DashboardStats> {
        let payload = self.session.get(DASHBOARD_PATH).await?;
        payload.decode("dashboard stats")
    }
}
