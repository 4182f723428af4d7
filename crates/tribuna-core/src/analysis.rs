//! Analysis-session selection and start-request validation.
//!
//! The backend organizes case analysis into four real blocks (inquérito,
//! first procedural phase, second procedural phase, jury debates) plus a
//! synthetic fifth entry that stands for "run everything". Selection is a
//! bounded state: sub-stages only exist within `1..=subetapas` of the chosen
//! block, and the synthetic block is never individually selectable. All
//! validation happens client-side against the fetched menu; the backend
//! re-validates on start.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::defaults::{FULL_ANALYSIS_BLOCK, SUBETAPA_MIN};
use crate::error::{Error, Result};

// =============================================================================
// MENU
// =============================================================================

/// One entry of the analysis menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuBlock {
    pub titulo: String,
    pub descricao: String,
    /// Number of sub-stages; valid selections are `1..=subetapas`.
    pub subetapas: u8,
}

/// Analysis menu keyed by block number, as served by the menu endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct MenuOpcoes(pub BTreeMap<u8, MenuBlock>);

impl MenuOpcoes {
    /// Look up a block by number.
    pub fn get(&self, bloco: u8) -> Option<&MenuBlock> {
        self.0.get(&bloco)
    }

    /// Block numbers valid for individual selection, in ascending order.
    /// The synthetic full-analysis entry is excluded.
    pub fn selectable_blocks(&self) -> Vec<u8> {
        self.0
            .keys()
            .copied()
            .filter(|b| *b != FULL_ANALYSIS_BLOCK)
            .collect()
    }
}

// =============================================================================
// MODE & SELECTION
// =============================================================================

/// Analysis execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// One block, one sub-stage.
    Individual,
    /// Every real block, sequentially.
    Completa,
    /// A caller-chosen subset of the real blocks.
    Personalizada,
}

impl AnalysisMode {
    /// Wire name as sent in `modo_analise`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Individual => "individual",
            AnalysisMode::Completa => "completa",
            AnalysisMode::Personalizada => "personalizada",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate selection, built through the mode constructors and validated
/// against a fetched menu before it becomes a start request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSelection {
    processo_id: String,
    mode: AnalysisMode,
    bloco: Option<u8>,
    subetapa: Option<u8>,
    blocos_selecionados: Option<Vec<u8>>,
}

impl AnalysisSelection {
    /// Select a single block/sub-stage run.
    pub fn individual(processo_id: impl Into<String>, bloco: u8, subetapa: u8) -> Self {
        Self {
            processo_id: processo_id.into(),
            mode: AnalysisMode::Individual,
            bloco: Some(bloco),
            subetapa: Some(subetapa),
            blocos_selecionados: None,
        }
    }

    /// Select the full sequential run over every real block.
    pub fn completa(processo_id: impl Into<String>) -> Self {
        Self {
            processo_id: processo_id.into(),
            mode: AnalysisMode::Completa,
            bloco: None,
            subetapa: None,
            blocos_selecionados: None,
        }
    }

    /// Select a custom subset of the real blocks.
    pub fn personalizada(processo_id: impl Into<String>, blocos: Vec<u8>) -> Self {
        Self {
            processo_id: processo_id.into(),
            mode: AnalysisMode::Personalizada,
            bloco: None,
            subetapa: None,
            blocos_selecionados: Some(blocos),
        }
    }

    /// The selected mode.
    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// Validate this selection against the menu.
    pub fn validate(&self, menu: &MenuOpcoes) -> Result<()> {
        match self.mode {
            AnalysisMode::Individual => {
                let bloco = self.bloco.ok_or_else(|| {
                    Error::Validation("análise individual requires bloco".to_string())
                })?;
                let subetapa = self.subetapa.ok_or_else(|| {
                    Error::Validation("análise individual requires subetapa".to_string())
                })?;
                validate_block(menu, bloco)?;
                let entry = menu.get(bloco).ok_or_else(|| {
                    Error::Validation(format!("Unknown bloco: {}", bloco))
                })?;
                if subetapa < SUBETAPA_MIN || subetapa > entry.subetapas {
                    return Err(Error::Validation(format!(
                        "subetapa {} out of range {}..={} for bloco {}",
                        subetapa, SUBETAPA_MIN, entry.subetapas, bloco
                    )));
                }
                Ok(())
            }
            AnalysisMode::Completa => Ok(()),
            AnalysisMode::Personalizada => {
                let blocos = self
                    .blocos_selecionados
                    .as_deref()
                    .filter(|b| !b.is_empty())
                    .ok_or_else(|| {
                        Error::Validation(
                            "análise personalizada requires a non-empty blocos_selecionados"
                                .to_string(),
                        )
                    })?;
                for bloco in blocos {
                    validate_block(menu, *bloco)?;
                    if menu.get(*bloco).is_none() {
                        return Err(Error::Validation(format!("Unknown bloco: {}", bloco)));
                    }
                }
                Ok(())
            }
        }
    }

    /// Validate and convert into the start-request payload. Fields that do
    /// not apply to the mode are omitted from the serialized body.
    pub fn into_request(self, menu: &MenuOpcoes) -> Result<IniciarAnaliseRequest> {
        self.validate(menu)?;
        let (bloco, subetapa, blocos_selecionados) = match self.mode {
            AnalysisMode::Individual => (self.bloco, self.subetapa, None),
            AnalysisMode::Completa => (None, None, None),
            AnalysisMode::Personalizada => (None, None, self.blocos_selecionados),
        };
        Ok(IniciarAnaliseRequest {
            processo_id: self.processo_id,
            modo_analise: self.mode,
            bloco,
            subetapa,
            blocos_selecionados,
        })
    }
}

fn validate_block(menu: &MenuOpcoes, bloco: u8) -> Result<()> {
    if bloco == FULL_ANALYSIS_BLOCK {
        return Err(Error::Validation(format!(
            "bloco {} is the full-analysis marker; select blocks individually from {:?}",
            FULL_ANALYSIS_BLOCK,
            menu.selectable_blocks()
        )));
    }
    Ok(())
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of the analysis start endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IniciarAnaliseRequest {
    pub processo_id: String,
    pub modo_analise: AnalysisMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bloco: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subetapa: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocos_selecionados: Option<Vec<u8>>,
}

/// Response of the analysis start endpoint. `resultado` is the model output
/// and stays opaque to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnaliseIniciada {
    pub sessao_id: String,
    pub tipo: AnalysisMode,
    pub resultado: JsonValue,
}

/// One per-stage result of a finished or running analysis session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultadoAnalise {
    pub id: String,
    pub bloco: u8,
    pub subetapa: u8,
    pub resposta_ia: String,
    pub tokens_total: i64,
    pub tempo_processamento: f64,
    pub modelo_usado: String,
    pub documento_nome: String,
    pub bloco_titulo: String,
    pub tempo_formatado: String,
    pub created_at: String,
}

// =============================================================================
// TESTS
// =============================================================================
