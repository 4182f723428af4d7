//! Jurisprudence query filters and their canonical serialization.
//!
//! A filter set is a sparse collection of optional fields. Serialization is
//! canonical: fixed key order, absent and empty values omitted, numbers in
//! plain decimal form. The same filter always produces the same query, which
//! matters for caching and for test reproducibility.
//!
//! Values are kept verbatim; percent-encoding belongs to the HTTP layer.
//! The builder performs no domain validation (whether a `tribunal` is a real
//! court is the backend's call); it only guarantees structural correctness
//! of the outgoing query.

use serde::{Deserialize, Serialize};

use crate::provider::Provider;

/// Canonical key order shared by every serialization of a filter set.
const CANONICAL_KEYS: [&str; 10] = [
    "q",
    "tema",
    "tribunal",
    "vinculante",
    "fase",
    "bloco",
    "dispositivo",
    "tese",
    "topk",
    "provider",
];

/// Keys accepted by the keyword-search endpoint.
const SEARCH_KEYS: [&str; 6] = ["q", "tema", "tribunal", "vinculante", "topk", "provider"];

/// Keys accepted by the suggestion endpoint (stage-aware surface, no `q`).
const SUGGEST_KEYS: [&str; 9] = [
    "tema",
    "tribunal",
    "vinculante",
    "fase",
    "bloco",
    "dispositivo",
    "tese",
    "topk",
    "provider",
];

// =============================================================================
// FILTER SET
// =============================================================================

/// Sparse filter set for the jurisprudence endpoints.
///
/// # Example
///
/// ```
/// use tribuna_core::{JurisFilter, Provider};
///
/// let filter = JurisFilter::new()
///     .tema("nulidade")
///     .tribunal("STF")
///     .topk(10)
///     .provider(Provider::Hybrid);
///
/// assert_eq!(
///     filter.to_query_string(),
///     "tema=nulidade&tribunal=STF&topk=10&provider=hybrid"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JurisFilter {
    /// Free-text search query (keyword search only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,

    /// Legal theme, e.g. "nulidade", "legítima defesa".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tema: Option<String>,

    /// Court of origin, e.g. "STF", "STJ".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tribunal: Option<String>,

    /// Restrict to binding (vinculante) precedents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vinculante: Option<bool>,

    /// Procedural phase the case is in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fase: Option<String>,

    /// Analysis block providing stage context for suggestions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bloco: Option<u8>,

    /// Statute article cited, e.g. "CPP art. 564".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispositivo: Option<String>,

    /// Defense thesis under consideration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tese: Option<String>,

    /// Maximum number of results requested. When unset the backend applies
    /// its own default ([`crate::defaults::TOPK`] results).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topk: Option<u32>,

    /// Retrieval strategy hint; the backend is authoritative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

impl JurisFilter {
    /// Create a new empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query (keyword search only).
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Set the legal theme.
    pub fn tema(mut self, tema: impl Into<String>) -> Self {
        self.tema = Some(tema.into());
        self
    }

    /// Set the court of origin.
    pub fn tribunal(mut self, tribunal: impl Into<String>) -> Self {
        self.tribunal = Some(tribunal.into());
        self
    }

    /// Restrict to binding precedents (or explicitly include non-binding).
    pub fn vinculante(mut self, vinculante: bool) -> Self {
        self.vinculante = Some(vinculante);
        self
    }

    /// Set the procedural phase.
    pub fn fase(mut self, fase: impl Into<String>) -> Self {
        self.fase = Some(fase.into());
        self
    }

    /// Set the analysis block giving stage context.
    pub fn bloco(mut self, bloco: u8) -> Self {
        self.bloco = Some(bloco);
        self
    }

    /// Set the cited statute article.
    pub fn dispositivo(mut self, dispositivo: impl Into<String>) -> Self {
        self.dispositivo = Some(dispositivo.into());
        self
    }

    /// Set the defense thesis.
    pub fn tese(mut self, tese: impl Into<String>) -> Self {
        self.tese = Some(tese.into());
        self
    }

    /// Set the maximum number of results.
    pub fn topk(mut self, topk: u32) -> Self {
        self.topk = Some(topk);
        self
    }

    /// Set the retrieval strategy hint.
    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Check if the filter carries no effective value. Fields set to an
    /// empty string count as absent, matching the serialization rule.
    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// Canonical query pairs over the full filter surface, in fixed key
    /// order. Absent and empty-string values are omitted.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "q", &self.q);
        push_text(&mut pairs, "tema", &self.tema);
        push_text(&mut pairs, "tribunal", &self.tribunal);
        if let Some(v) = self.vinculante {
            pairs.push(("vinculante", v.to_string()));
        }
        push_text(&mut pairs, "fase", &self.fase);
        if let Some(b) = self.bloco {
            pairs.push(("bloco", b.to_string()));
        }
        push_text(&mut pairs, "dispositivo", &self.dispositivo);
        push_text(&mut pairs, "tese", &self.tese);
        if let Some(k) = self.topk {
            pairs.push(("topk", k.to_string()));
        }
        if let Some(p) = self.provider {
            pairs.push(("provider", p.as_str().to_string()));
        }
        pairs
    }

    /// Query pairs restricted to the keyword-search parameter surface.
    pub fn search_pairs(&self) -> Vec<(&'static str, String)> {
        self.restricted_pairs(&SEARCH_KEYS)
    }

    /// Query pairs restricted to the suggestion parameter surface.
    pub fn suggest_pairs(&self) -> Vec<(&'static str, String)> {
        self.restricted_pairs(&SUGGEST_KEYS)
    }

    /// Canonical query string (`k=v` joined by `&`), suitable as a cache
    /// key. Values are not percent-encoded here; the HTTP layer encodes
    /// when the pairs go on a URL.
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn restricted_pairs(&self, allowed: &[&str]) -> Vec<(&'static str, String)> {
        self.to_query_pairs()
            .into_iter()
            .filter(|(k, _)| allowed.contains(k))
            .collect()
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    debug_assert!(CANONICAL_KEYS.contains(&key));
    if let Some(v) = value {
        if !v.is_empty() {
            pairs.push((key, v.clone()));
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
