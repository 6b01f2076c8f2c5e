//! Types d'erreurs pour la génération de linkers

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkerError {
    #[error("Configuration invalide: {0}")]
    InvalidConfiguration(String),

    #[error("Séquence invalide {sequence:?}: symbole {symbol:?} hors alphabet")]
    InvalidSequence { sequence: String, symbol: char },

    #[error("Espace d'acceptation épuisé: {accepted}/{requested} barcodes acceptés après {draws} tirages")]
    AcceptanceExhausted {
        requested: usize,
        accepted: usize,
        draws: u64,
    },

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LinkerError {
    /// Construit une erreur `InvalidSequence` à partir du premier symbole fautif
    pub(crate) fn invalid_symbol(sequence: &str, symbol: u8) -> Self {
        LinkerError::InvalidSequence {
            sequence: sequence.to_string(),
            symbol: symbol as char,
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkerError>;
