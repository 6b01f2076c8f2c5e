//! Alphabet de symboles pour les barcodes

use crate::error::{LinkerError, Result};
use std::fmt;
use std::str::FromStr;

/// Alphabet nucléotidique par défaut, dans l'ordre de tirage
pub const DNA_SYMBOLS: &str = "ATCG";

/// Ensemble ordonné de symboles distincts
///
/// L'ordre est conservé tel quel: c'est l'ordre d'indexation utilisé par le
/// tirage aléatoire.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<u8>,
    inner: bio::alphabets::Alphabet,
}

impl Alphabet {
    /// Crée un alphabet depuis une chaîne de symboles
    pub fn new(symbols: &str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(LinkerError::InvalidConfiguration(
                "l'alphabet ne peut pas être vide".to_string(),
            ));
        }

        let mut seen = Vec::with_capacity(symbols.len());
        for &symbol in symbols.as_bytes() {
            if !symbol.is_ascii_graphic() {
                return Err(LinkerError::InvalidConfiguration(format!(
                    "symbole non imprimable dans l'alphabet: {:?}",
                    symbol as char
                )));
            }
            if seen.contains(&symbol) {
                return Err(LinkerError::InvalidConfiguration(format!(
                    "symbole dupliqué dans l'alphabet: {}",
                    symbol as char
                )));
            }
            seen.push(symbol);
        }

        Ok(Self {
            inner: bio::alphabets::Alphabet::new(seen.iter()),
            symbols: seen,
        })
    }

    /// Alphabet ADN standard `ATCG`
    pub fn dna() -> Self {
        Self {
            symbols: DNA_SYMBOLS.as_bytes().to_vec(),
            inner: bio::alphabets::Alphabet::new(DNA_SYMBOLS.as_bytes()),
        }
    }

    /// Symboles dans l'ordre de déclaration
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Nombre de symboles
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Toujours faux pour un alphabet construit via `new`
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Vrai si tous les symboles du mot appartiennent à l'alphabet
    pub fn is_word(&self, word: &str) -> bool {
        self.inner.is_word(word.as_bytes())
    }

    /// Valide un mot, en signalant le premier symbole étranger
    pub fn validate(&self, word: &str) -> Result<()> {
        match word.bytes().find(|b| !self.contains(*b)) {
            Some(symbol) => Err(LinkerError::invalid_symbol(word, symbol)),
            None => Ok(()),
        }
    }

    /// Nombre de mots distincts de longueur `length`
    ///
    /// `None` si la valeur dépasse `u128`.
    pub fn space_size(&self, length: usize) -> Option<u128> {
        let exp = u32::try_from(length).ok()?;
        (self.symbols.len() as u128).checked_pow(exp)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl FromStr for Alphabet {
    type Err = LinkerError;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.symbols {
            write!(f, "{}", symbol as char)?;
        }
        Ok(())
    }
}
