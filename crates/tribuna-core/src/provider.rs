//! Retrieval provider selection for jurisprudence queries.
//!
//! The backend exposes three retrieval strategies. The client only ever
//! *requests* one; the backend is authoritative and may silently fall back
//! (e.g. `graph` requested while the graph engine is disabled executes
//! `simple`). The envelope's `provider_used`/`provider_effective` fields
//! report what actually ran.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Named retrieval strategy requested from the jurisprudence endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Lexical/vector retrieval over the jurisprudence corpus.
    #[default]
    Simple,
    /// Graph-based retrieval over cited dispositivos and teses.
    Graph,
    /// Graph retrieval merged with simple retrieval as fallback.
    Hybrid,
}

impl Provider {
    /// Wire name of the provider, as sent in the `provider` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Simple => "simple",
            Provider::Graph => "graph",
            Provider::Hybrid => "hybrid",
        }
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Provider::Simple),
            "graph" => Ok(Provider::Graph),
            "hybrid" => Ok(Provider::Hybrid),
            _ => Err(Error::Validation(format!("Unknown provider: {}", s))),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
