//! Wire types for the Tribuna backend API.
//!
//! Field names mirror the backend's Portuguese wire format exactly; renaming
//! them client-side would break the serialized form. Backend-issued ids and
//! timestamps are carried as opaque strings; the client never interprets
//! them, only round-trips them.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

// =============================================================================
// AUTH
// =============================================================================

/// Access/refresh token pair issued by the login endpoint.
///
/// Owned by the session for the lifetime of an authenticated session;
/// replaced on login and refresh, destroyed on logout or refresh failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Login request body. The backend authenticates by email but expects it in
/// the `username` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Refresh response. `refresh` is only present when the backend rotates
/// refresh tokens; otherwise the stored one stays valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

/// Account registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub nome_completo: String,
    pub oab_numero: String,
    pub oab_estado: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escritorio: Option<String>,
}

/// Account registration response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user_id: i64,
}

/// Authenticated user profile. Fetching it doubles as the session liveness
/// check: a 401 here means the access token is stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub nome_completo: String,
    pub oab_numero: String,
    pub oab_estado: String,
    pub telefone: String,
    pub escritorio: String,
}

// =============================================================================
// JURISPRUDENCE
// =============================================================================

/// One jurisprudence result. Identity is `id`; ordering is whatever the
/// backend returned (relevance order, never re-sorted client-side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisItem {
    pub id: String,
    pub titulo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tribunal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vinculante: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispositivos_citados: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Response envelope of the search and suggestion endpoints.
///
/// `provider_used` is the strategy the backend actually executed;
/// `provider_effective` signals a silent fallback (e.g. `graph` requested,
/// `simple` executed). Both are backend-reported telemetry and surface
/// verbatim. `count` is backend-reported and need not equal `items.len()`;
/// a mismatch is informational, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisEnvelope {
    pub items: Vec<JurisItem>,
    pub provider_used: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_effective: Option<String>,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
}

impl JurisEnvelope {
    /// True when the backend reports executing a different provider than
    /// `provider_used` announces, i.e. a silent fallback happened.
    pub fn had_fallback(&self) -> bool {
        match &self.provider_effective {
            Some(effective) => effective != &self.provider_used,
            None => false,
        }
    }
}

// =============================================================================
// PROCESSES
// =============================================================================

/// Summary of the most recent analysis attached to a case record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UltimaAnalise {
    pub id: String,
    pub modo: String,
    pub status: String,
    pub data: String,
}

/// Case record as returned by the processes endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Processo {
    pub id: String,
    pub titulo: String,
    pub numero_processo: String,
    pub tipo_crime: String,
    pub comarca: String,
    pub vara: String,
    pub reu_nome: String,
    pub vitima_nome: String,
    pub status: String,
    pub observacoes: String,
    pub usuario_nome: String,
    pub total_documentos: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultima_analise: Option<UltimaAnalise>,
    pub created_at: String,
    pub updated_at: String,
}

/// Writable subset for creating a case record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NovoProcesso {
    pub titulo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_processo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_crime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comarca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vara: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reu_nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitima_nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

/// Document attached to a case record (read-only listing; uploading is the
/// embedder's concern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Documento {
    pub id: String,
    pub nome_arquivo: String,
    pub arquivo_original: String,
    pub tipo_documento: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texto_extraido: Option<String>,
    pub tamanho_arquivo: i64,
    pub tamanho_formatado: String,
    pub processo_titulo: String,
    pub tem_texto_extraido: bool,
    pub created_at: String,
    pub updated_at: String,
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Aggregate dashboard statistics for the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_processos: i64,
    pub total_documentos: i64,
    pub total_analises: i64,
    pub tokens_utilizados: i64,
    /// Backend-formatted duration string ("0:00:00" when no analyses ran).
    pub tempo_total_analises: String,
    pub processos_por_status: HashMap<String, i64>,
    pub analises_por_bloco: HashMap<u8, i64>,
    pub documentos_por_tipo: HashMap<String, i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultima_atividade: Option<String>,
    pub media_tempo_analise: f64,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Paginated list wrapper applied by the backend framework to viewset list
/// endpoints. Custom actions return bare arrays instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// List response body, accepting both the paginated wrapper and a bare
/// array. Which one arrives depends on whether the endpoint is a plain
/// viewset list or a custom action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paginated(Paginated<T>),
    Plain(Vec<T>),
}

impl<T> ListPayload<T> {
    /// Flatten into the item list, discarding pagination cursors.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Paginated(page) => page.results,
            ListPayload::Plain(items) => items,
        }
    }

    /// Backend-reported total count, when the paginated wrapper carried one.
    pub fn total_count(&self) -> Option<i64> {
        match self {
            ListPayload::Paginated(page) => Some(page.count),
            ListPayload::Plain(_) => None,
        }
    }
}

// =============================================================================
// OPAQUE PAYLOADS
// =============================================================================

/// Re-export for payloads the client deliberately leaves untyped (analysis
/// output text, retrieval diagnostics).
pub type OpaqueJson = JsonValue;
