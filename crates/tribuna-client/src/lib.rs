//! # tribuna-client
//!
//! HTTP client for the Tribuna legal-case-management backend.
//!
//! This crate provides:
//! - An injected, cheaply clonable [`Session`] owning the JWT token pair,
//!   with login, logout, explicit refresh, and a single transparent
//!   refresh-and-retry on 401
//! - The HTTP transport (JSON/text payload normalization, typed decoding,
//!   structured errors on non-2xx)
//! - The jurisprudence search/suggestion client with provider telemetry
//! - Endpoint wrappers for accounts, processes, analyses, and statistics
//! - Configuration from explicit values or `TRIBUNA_*` environment variables
//!
//! # Example
//!
//! ```rust,no_run
//! use tribuna_client::{ClientConfig, JurisClient, JurisFilter, Session};
//!
//! #[tokio::main]
//! async fn main() {
//!     let session = Session::new(ClientConfig::from_env()).unwrap();
//!     session.login("ana@exemplo.com", "senha").await.unwrap();
//!
//!     let juris = JurisClient::new(session.clone());
//!     let filter = JurisFilter::new().tema("nulidade").topk(5);
//!     let envelope = juris.suggest(&filter).await.unwrap();
//!     for item in &envelope.items {
//!         println!("{} ({})", item.titulo, envelope.provider_used);
//!     }
//! }
//! ```

pub mod account;
pub mod analises;
pub mod config;
pub mod juris;
pub mod processos;
pub mod session;
pub mod stats;
pub mod transport;

// Re-export core types
pub use tribuna_core::*;

pub use account::AccountClient;
pub use analises::AnalysisClient;
pub use config::ClientConfig;
pub use juris::JurisClient;
pub use processos::ProcessClient;
pub use session::Session;
pub use stats::StatsClient;
pub use transport::{Body, Payload, Transport};
