//! Analysis lifecycle client: menu, start, per-stage results, summary.

use serde_json::Value;
use tracing::{debug, info, instrument};

use tribuna_core::analysis::{AnaliseIniciada, AnalysisSelection, MenuOpcoes, ResultadoAnalise};
use tribuna_core::error::Result;
use tribuna_core::models::ListPayload;

use crate::session::Session;

const MENU_PATH: &str = "/api/menu/opcoes/";
const INICIAR_PATH: &str = "/api/analises/iniciar/";

/// Client for the analysis endpoints.
#[derive(Clone)]
pub struct AnalysisClient {
    session: Session,
}

impl AnalysisClient {
    /// Create a client over an injected session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Fetch the block/sub-stage menu. Callers keep it around: selections
    /// validate against this structure before anything goes on the wire.
    #[instrument(skip(self), fields(subsystem = "analises", component = "client", op = "menu"))]
    pub async fn menu(&self) -> Result<MenuOpcoes> {
        let payload = self.session.get(MENU_PATH).await?;
        payload.decode("menu response")
    }

    /// Validate the selection against the menu and start the analysis. The
    /// backend runs the analysis synchronously, so expect this call to take
    /// as long as the model does.
    #[instrument(skip(self, menu, selection), fields(
        subsystem = "analises",
        component = "client",
        op = "iniciar",
        modo = %selection.mode()
    ))]
    pub async fn start(
        &self,
        menu: &MenuOpcoes,
        selection: AnalysisSelection,
    ) -> Result<AnaliseIniciada> {
        let request = selection.into_request(menu)?;
        let payload = self.session.post(INICIAR_PATH, &request).await?;
        let started: AnaliseIniciada = payload.decode("analysis start response")?;
        info!(sessao_id = %started.sessao_id, tipo = %started.tipo, "Analysis started");
        Ok(started)
    }

    /// Per-stage results for a session, in backend order.
    #[instrument(skip(self), fields(
        subsystem = "analises",
        component = "client",
        op = "resultados",
        sessao_id = %sessao_id
    ))]
    pub async fn resultados(&self, sessao_id: &str) -> Result<Vec<ResultadoAnalise>> {
        let path = format!("/api/analises/{}/resultados/", sessao_id);
        let payload = self.session.get(&path).await?;
        let results: ListPayload<ResultadoAnalise> = payload.decode("analysis results")?;
        let items = results.into_items();
        debug!(result_count = items.len(), "Results fetched");
        Ok(items)
    }

    /// Aggregated summary for a session. The shape varies with the analysis
    /// mode, so it stays opaque JSON.
    #[instrument(skip(self), fields(
        subsystem = "analises",
        component = "client",
        op = "resumo",
        sessao_id = %sessao_id
    ))]
    pub async fn resumo(&self, sessao_id: &str) -> Result<Value> {
        let path = format!("/api/analises/{}/resumo/", sessao_id);
        let payload = self.session.get(&path).await?;
        payload.into_json("analysis summary")
    }
}
