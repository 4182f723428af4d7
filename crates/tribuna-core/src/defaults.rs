//! Centralized default constants for the Tribuna client SDK.
//!
//! **This module is the single source of truth** for all shared default
//! values. Client configuration and the analysis selector reference these
//! constants instead of defining their own magic numbers.

// =============================================================================
// BACKEND
// =============================================================================

/// Default backend base URL (local development server).
pub const BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// JURISPRUDENCE
// =============================================================================

/// Default number of results requested from the retrieval endpoints.
pub const TOPK: u32 = 10;

/// Requests slower than this are logged at WARN level.
pub const SLOW_REQUEST_MS: u128 = 5_000;

// =============================================================================
// ANALYSIS
// =============================================================================

/// Block id of the synthetic "full analysis" menu entry. It aggregates every
/// real block and is never a valid target for individual selection.
pub const FULL_ANALYSIS_BLOCK: u8 = 5;

/// Lowest valid sub-stage number within a block.
pub const SUBETAPA_MIN: u8 = 1;
