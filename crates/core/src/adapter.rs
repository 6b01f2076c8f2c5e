//! Mise en forme des barcodes en linkers double brin
//!
//! Structure d'un linker (brin sens, 5' → 3'):
//! `[stub 5'] [linker] [barcode] [espaceur]`
//!
//! Le brin antisens est le complément du cœur `[linker] [barcode] [espaceur]`,
//! prolongé par le stub 3' (écrit 3' → 5', sous le brin sens), puis relu
//! en 5' → 3'.

use crate::error::{LinkerError, Result};
use crate::sequence::Alphabet;
use bio::alphabets::dna;
use serde::{Deserialize, Serialize};

/// Stub 5' du brin sens (extrémité cohésive MseI)
pub const MSEI_FIVE_PRIME_STUB: &str = "TA";
/// Linker fixe placé avant le barcode
pub const MSEI_LINKER: &str = "GTCGGA";
/// Espaceur d'une base après le barcode
pub const MSEI_SPACER: &str = "G";
/// Stub 3' du brin antisens, écrit 3' → 5'
pub const MSEI_THREE_PRIME_STUB: &str = "GATC";
/// Préfixe des noms d'oligos
pub const MSEI_NAME_PREFIX: &str = "MseI-linker";

/// Brin d'un linker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn suffix(self) -> char {
        match self {
            Strand::Forward => 'F',
            Strand::Reverse => 'R',
        }
    }
}

/// Séquences flanquantes fixes d'un linker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterLayout {
    /// Préfixe des noms d'oligos
    pub name_prefix: String,
    /// Ajouté en 5' du brin sens
    pub five_prime_stub: String,
    /// Placé avant le barcode
    pub linker: String,
    /// Placé après le barcode
    pub spacer: String,
    /// Ajouté au brin antisens, écrit 3' → 5'
    pub three_prime_stub: String,
}

impl Default for AdapterLayout {
    fn default() -> Self {
        Self {
            name_prefix: MSEI_NAME_PREFIX.to_string(),
            five_prime_stub: MSEI_FIVE_PRIME_STUB.to_string(),
            linker: MSEI_LINKER.to_string(),
            spacer: MSEI_SPACER.to_string(),
            three_prime_stub: MSEI_THREE_PRIME_STUB.to_string(),
        }
    }
}

impl AdapterLayout {
    /// Nom d'un oligo: `<préfixe>-<NN>-<F|R>`, index sur au moins 2 chiffres
    pub fn label(&self, index: usize, strand: Strand) -> String {
        format!("{}-{:02}-{}", self.name_prefix, index, strand.suffix())
    }

    /// Vérifie que toutes les séquences flanquantes sont en ACGT
    pub fn validate(&self) -> Result<()> {
        let dna = Alphabet::dna();
        for flank in [
            &self.five_prime_stub,
            &self.linker,
            &self.spacer,
            &self.three_prime_stub,
        ] {
            dna.validate(flank)?;
        }
        Ok(())
    }
}

/// Paire d'oligos sens/antisens pour un barcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterPair {
    pub barcode: String,
    pub forward: String,
    pub reverse: String,
}

/// Reverse complement d'une séquence ADN (A↔T, C↔G)
pub fn reverse_complement(seq: &str) -> String {
    String::from_utf8_lossy(&dna::revcomp(seq.as_bytes())).into_owned()
}

/// Transforme un barcode en paire de linkers
#[derive(Debug, Clone)]
pub struct AdapterFormatter {
    layout: AdapterLayout,
    nucleotides: Alphabet,
}

impl AdapterFormatter {
    /// Crée un formateur avec une disposition personnalisée
    pub fn new(layout: AdapterLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self {
            layout,
            nucleotides: Alphabet::dna(),
        })
    }

    /// Formateur MseI standard
    pub fn msei() -> Self {
        Self {
            layout: AdapterLayout::default(),
            nucleotides: Alphabet::dna(),
        }
    }

    pub fn layout(&self) -> &AdapterLayout {
        &self.layout
    }

    /// Vérifie que tout mot tiré dans `alphabet` pourra être mis en forme
    pub fn check_alphabet(&self, alphabet: &Alphabet) -> Result<()> {
        match alphabet.symbols().iter().find(|&&s| !self.nucleotides.contains(s)) {
            Some(&symbol) => Err(LinkerError::InvalidConfiguration(format!(
                "symbole '{}' de l'alphabet hors de {}",
                symbol as char, self.nucleotides
            ))),
            None => Ok(()),
        }
    }

    /// Cœur double brin: linker + barcode + espaceur
    pub fn core(&self, barcode: &str) -> String {
        let mut core =
            String::with_capacity(self.layout.linker.len() + barcode.len() + self.layout.spacer.len());
        core.push_str(&self.layout.linker);
        core.push_str(barcode);
        core.push_str(&self.layout.spacer);
        core
    }

    /// Construit les brins sens et antisens
    ///
    /// Échoue avec `InvalidSequence` si le barcode contient autre chose que ACGT.
    pub fn format(&self, barcode: &str) -> Result<AdapterPair> {
        self.nucleotides.validate(barcode)?;

        let core = self.core(barcode);

        let mut forward = String::with_capacity(self.layout.five_prime_stub.len() + core.len());
        forward.push_str(&self.layout.five_prime_stub);
        forward.push_str(&core);

        // Brin antisens écrit 3' → 5', aligné sous le brin sens
        let mut bottom: Vec<u8> = core.bytes().map(dna::complement).collect();
        bottom.extend_from_slice(self.layout.three_prime_stub.as_bytes());
        bottom.reverse();

        Ok(AdapterPair {
            barcode: barcode.to_string(),
            forward,
            reverse: String::from_utf8_lossy(&bottom).into_owned(),
        })
    }
}

impl Default for AdapterFormatter {
    fn default() -> Self {
        Self::msei()
    }
}
