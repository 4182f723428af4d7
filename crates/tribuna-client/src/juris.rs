//! Jurisprudence search and suggestion client.
//!
//! Thin orchestration of filter canonicalization, the authenticated session,
//! and envelope decoding. Two guarantees worth spelling out:
//!
//! - `items` come back exactly as the backend sent them: no reordering,
//!   filtering, or deduplication. Relevance ranking is backend truth.
//! - `provider_used`/`provider_effective` surface verbatim. The `provider`
//!   filter is a hint; the backend decides what actually runs, and a silent
//!   fallback (requested `graph`, executed `simple`) is reported, never
//!   masked.

use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{debug, instrument, warn};

use tribuna_core::error::Result;
use tribuna_core::filter::JurisFilter;
use tribuna_core::models::JurisEnvelope;

use crate::session::Session;

const SEARCH_PATH: &str = "/api/ai/jurisprudencia/search/";
const SUGGEST_PATH: &str = "/api/ai/jurisprudencia/sugestoes/";
const HEALTH_PATH: &str = "/api/ai/jurisprudencia/health/";

/// Client for the jurisprudence retrieval endpoints.
#[derive(Clone)]
pub struct JurisClient {
    session: Session,
}

impl JurisClient {
    /// Create a client over an injected session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Keyword search. An empty query is not rejected client-side; whether
    /// that is meaningful is the backend's policy.
    #[instrument(skip(self, filter), fields(
        subsystem = "juris",
        component = "client",
        op = "search",
        provider = filter.provider.map(|p| p.as_str()).unwrap_or("-")
    ))]
    pub async fn search(&self, filter: &JurisFilter) -> Result<JurisEnvelope> {
        self.fetch_envelope(SEARCH_PATH, filter.search_pairs(), None, "search envelope")
            .await
    }

    /// Keyword search with a per-call timeout override. Dropping the future
    /// cancels the request.
    #[instrument(skip(self, filter, timeout), fields(
        subsystem = "juris",
        component = "client",
        op = "search",
        provider = filter.provider.map(|p| p.as_str()).unwrap_or("-")
    ))]
    pub async fn search_with_timeout(
        &self,
        filter: &JurisFilter,
        timeout: Duration,
    ) -> Result<JurisEnvelope> {
        self.fetch_envelope(
            SEARCH_PATH,
            filter.search_pairs(),
            Some(timeout),
            "search envelope",
        )
        .await
    }

    /// Stage-aware suggestions over the fuller filter surface (`fase`,
    /// `bloco`, `dispositivo`, `tese`).
    #[instrument(skip(self, filter), fields(
        subsystem = "juris",
        component = "client",
        op = "suggest",
        provider = filter.provider.map(|p| p.as_str()).unwrap_or("-")
    ))]
    pub async fn suggest(&self, filter: &JurisFilter) -> Result<JurisEnvelope> {
        self.fetch_envelope(SUGGEST_PATH, filter.suggest_pairs(), None, "suggest envelope")
            .await
    }

    /// Suggestions with a per-call timeout override.
    #[instrument(skip(self, filter, timeout), fields(
        subsystem = "juris",
        component = "client",
        op = "suggest",
        provider = filter.provider.map(|p| p.as_str()).unwrap_or("-")
    ))]
    pub async fn suggest_with_timeout(
        &self,
        filter: &JurisFilter,
        timeout: Duration,
    ) -> Result<JurisEnvelope> {
        self.fetch_envelope(
            SUGGEST_PATH,
            filter.suggest_pairs(),
            Some(timeout),
            "suggest envelope",
        )
        .await
    }

    /// Retrieval diagnostics. The payload shape is not documented upstream,
    /// so it stays opaque JSON.
    #[instrument(skip(self), fields(subsystem = "juris", component = "client", op = "health"))]
    pub async fn health(&self) -> Result<Value> {
        let payload = self.session.get(HEALTH_PATH).await?;
        payload.into_json("juris health")
    }

    async fn fetch_envelope(
        &self,
        path: &str,
        pairs: Vec<(&'static str, String)>,
        timeout: Option<Duration>,
        context: &'static str,
    ) -> Result<JurisEnvelope> {
        let start = Instant::now();
        let payload = self.session.get_with(path, &pairs, timeout).await?;
        let envelope: JurisEnvelope = payload.decode(context)?;

        debug!(
            trace_id = %envelope.trace_id,
            provider_used = %envelope.provider_used,
            result_count = envelope.items.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Query complete"
        );
        if envelope.had_fallback() {
            warn!(
                trace_id = %envelope.trace_id,
                provider_used = %envelope.provider_used,
                provider_effective = envelope.provider_effective.as_deref().unwrap_or(""),
                "Backend fell back to a different provider"
            );
        }

        Ok(envelope)
    }
}
