//! Process (case record) client. Read and create only; document upload is
//! handled outside this crate.

use tracing::{debug, info, instrument};

use tribuna_core::error::Result;
use tribuna_core::models::{Documento, ListPayload, NovoProcesso, Processo};

use crate::session::Session;

const PROCESSOS_PATH: &str = "/api/processos/";

/// Client for the process endpoints.
#[derive(Clone)]
pub struct ProcessClient {
    session: Session,
}

impl ProcessClient {
    /// Create a client over an injected session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// List the caller's processes, in backend order.
    #[instrument(skip(self), fields(subsystem = "processos", component = "client", op = "list"))]
    pub async fn list(&self) -> Result<Vec<Processo>> {
        let payload = self.session.get(PROCESSOS_PATH).await?;
        let listing: ListPayload<Processo> = payload.decode("process list")?;
        if let Some(total) = listing.total_count() {
            debug!(result_count = total, "Listing paginated");
        }
        Ok(listing.into_items())
    }

    /// Create a process from the writable field subset.
    #[instrument(skip(self, novo), fields(subsystem = "processos", component = "client", op = "create"))]
    pub async fn create(&self, novo: &NovoProcesso) -> Result<Processo> {
        let payload = self.session.post(PROCESSOS_PATH, novo).await?;
        let processo: Processo = payload.decode("process create response")?;
        info!(processo_id = %processo.id, "Process created");
        Ok(processo)
    }

    /// Fetch one process by id.
    #[instrument(skip(self), fields(
        subsystem = "processos",
        component = "client",
        op = "get",
        processo_id = %id
    ))]
    pub async fn get(&self, id: &str) -> Result<Processo> {
        let path = format!("/api/processos/{}/", id);
        let payload = self.session.get(&path).await?;
        payload.decode("process detail")
    }

    /// List a process's documents, in backend order.
    #[instrument(skip(self), fields(
        subsystem = "processos",
        component = "client",
        op = "documentos",
        processo_id = %id
    ))]
    pub async fn documentos(&self, id: &str) -> Result<Vec<Documento>> {
        let path = format!("/api/processos/{}/documentos/", id);
        let payload = self.session.get(&path).await?;
        let listing: ListPayload<Documento> = payload.decode("document list")?;
        Ok(listing.into_items())
    }
}
