//! # tribuna-core
//!
//! Core types, filters, and error taxonomy for the Tribuna client SDK.
//!
//! This crate provides the wire types, the canonical query builder, and the
//! analysis-session selector that `tribuna-client` builds on. It performs no
//! I/O of its own.

pub mod analysis;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod provider;

// Re-export commonly used types at crate root
pub use analysis::{
    AnaliseIniciada, AnalysisMode, AnalysisSelection, IniciarAnaliseRequest, MenuBlock,
    MenuOpcoes, ResultadoAnalise,
};
pub use error::{Error, ErrorBody, Result};
pub use filter::JurisFilter;
pub use models::*;
pub use provider::Provider;
