//! Structured logging schema and field name constants for the Tribuna SDK.
//!
//! All modules use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every client subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Request failed with no recovery path |
//! | WARN  | Recoverable issue (token refresh, slow request, provider fallback) |
//! | INFO  | Session lifecycle events (login, logout, refresh) |
//! | DEBUG | Request completions, decision points, telemetry values |
//! | TRACE | Per-item iteration, raw payloads |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Backend-issued correlation id for a retrieval query.
pub const TRACE_ID: &str = "trace_id";

/// Subsystem originating the log event.
/// Values: "transport", "session", "juris", "analises", "processos",
/// "account", "stats"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "search", "suggest", "login", "refresh", "iniciar"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Retrieval provider requested by the client.
pub const PROVIDER: &str = "provider";

/// Retrieval provider the backend reports having executed.
pub const PROVIDER_USED: &str = "provider_used";

/// Case record id being operated on.
pub const PROCESSO_ID: &str = "processo_id";

/// Analysis session id.
pub const SESSAO_ID: &str = "sessao_id";

/// Request path relative to the base URL.
pub const PATH: &str = "path";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of items returned by a retrieval query.
pub const RESULT_COUNT: &str = "result_count";

/// HTTP status of the response.
pub const STATUS: &str = "status";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Slow operation threshold exceeded.
pub const SLOW: &str = "slow";
