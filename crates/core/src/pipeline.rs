//! Pipeline complet: tirage → filtre homopolymer → distance minimale → linkers
//!
//! Chaque étage est un itérateur paresseux tiré par l'étage suivant. Rien
//! n'est calculé tant que le consommateur ne demande pas de barcode.

use crate::accumulator::MinDistanceAccumulator;
use crate::adapter::{AdapterFormatter, AdapterPair, Strand};
use crate::constraints::{HomopolymerFilter, HomopolymerFilterExt, DEFAULT_MAX_RUN};
use crate::distance::DistanceMetric;
use crate::error::{LinkerError, Result};
use crate::sequence::{Alphabet, DNA_SYMBOLS};
use crate::source::RandomSequenceSource;
use serde::{Deserialize, Serialize};

/// Paramètres d'une génération
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Longueur des barcodes
    pub length: usize,
    /// Symboles autorisés, dans l'ordre de tirage
    pub alphabet: String,
    /// Longueur max d'homopolymer tolérée
    pub max_run: usize,
    /// Deux barcodes acceptés sont à distance strictement supérieure
    pub min_distance: usize,
    /// Nombre de barcodes demandés
    pub count: usize,
    /// Métrique de distance
    pub metric: DistanceMetric,
    /// Seed du RNG (entropie système si absent)
    pub seed: Option<u64>,
    /// Plafond de tirages bruts (illimité si absent)
    pub max_draws: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            length: 8,
            alphabet: DNA_SYMBOLS.to_string(),
            max_run: DEFAULT_MAX_RUN,
            min_distance: 3,
            count: 96,
            metric: DistanceMetric::Levenshtein,
            seed: None,
            max_draws: None,
        }
    }
}

impl PipelineConfig {
    /// Vérifie la configuration avant toute génération
    pub fn validate(&self) -> Result<Alphabet> {
        if self.length == 0 {
            return Err(LinkerError::InvalidConfiguration(
                "la longueur des barcodes doit être positive".to_string(),
            ));
        }
        if self.max_run == 0 {
            return Err(LinkerError::InvalidConfiguration(
                "le seuil d'homopolymer doit être positif".to_string(),
            ));
        }
        if self.min_distance == 0 {
            return Err(LinkerError::InvalidConfiguration(
                "la distance minimale doit être positive".to_string(),
            ));
        }
        if self.count == 0 {
            return Err(LinkerError::InvalidConfiguration(
                "le nombre de barcodes demandés doit être positif".to_string(),
            ));
        }
        if self.max_draws == Some(0) {
            return Err(LinkerError::InvalidConfiguration(
                "le plafond de tirages doit être positif".to_string(),
            ));
        }

        Alphabet::new(&self.alphabet)
    }
}

/// Compteurs d'une génération
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Tirages bruts, doublons compris
    pub draws: u64,
    /// Mots distincts émis par la source
    pub distinct: usize,
    /// Candidats écartés pour homopolymer
    pub homopolymer_rejects: u64,
    /// Candidats écartés pour proximité
    pub distance_rejects: u64,
    /// Barcodes acceptés
    pub accepted: usize,
}

/// Flux paresseux des barcodes acceptés, avant troncature
pub struct BarcodeStream {
    candidates: HomopolymerFilter<RandomSequenceSource>,
    accumulator: MinDistanceAccumulator<DistanceMetric>,
}

impl BarcodeStream {
    /// Barcodes acceptés jusqu'ici
    pub fn accepted(&self) -> &[String] {
        self.accumulator.accepted()
    }

    pub fn stats(&self) -> RunStats {
        let source = self.candidates.get_ref();
        RunStats {
            draws: source.draws(),
            distinct: source.emitted(),
            homopolymer_rejects: self.candidates.rejected(),
            distance_rejects: self.accumulator.rejected(),
            accepted: self.accumulator.len(),
        }
    }
}

impl Iterator for BarcodeStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.accumulator.filter(self.candidates.by_ref()).next()
    }
}

/// Barcode numéroté et ses deux oligos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkerRecord {
    /// Rang d'acceptation, à partir de 0
    pub index: usize,
    pub forward_label: String,
    pub reverse_label: String,
    #[serde(flatten)]
    pub pair: AdapterPair,
}

/// Générateur de linkers
pub struct Pipeline {
    config: PipelineConfig,
    alphabet: Alphabet,
    formatter: AdapterFormatter,
}

impl Pipeline {
    /// Valide la configuration et prépare le pipeline MseI
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let alphabet = config.validate()?;
        let formatter = AdapterFormatter::msei();
        formatter.check_alphabet(&alphabet)?;

        if let Some(space) = alphabet.space_size(config.length) {
            if space < config.count as u128 {
                tracing::warn!(
                    space = %space,
                    requested = config.count,
                    "moins de mots possibles que de barcodes demandés"
                );
            }
        }

        Ok(Self {
            config,
            alphabet,
            formatter,
        })
    }

    /// Remplace le formateur de linkers
    ///
    /// Échoue si l'alphabet de génération sort de celui du formateur.
    pub fn with_formatter(mut self, formatter: AdapterFormatter) -> Result<Self> {
        formatter.check_alphabet(&self.alphabet)?;
        self.formatter = formatter;
        Ok(self)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn formatter(&self) -> &AdapterFormatter {
        &self.formatter
    }

    /// Construit un nouveau flux de barcodes acceptés
    pub fn stream(&self) -> BarcodeStream {
        let mut source =
            RandomSequenceSource::new(self.config.length, self.alphabet.clone(), self.config.seed);
        if let Some(max_draws) = self.config.max_draws {
            source = source.with_max_draws(max_draws);
        }

        BarcodeStream {
            candidates: source.filter_homopolymers(self.config.max_run),
            accumulator: MinDistanceAccumulator::new(self.config.metric, self.config.min_distance),
        }
    }

    /// Tire `count` barcodes du flux en appelant `on_accept` pour chacun
    ///
    /// Échoue avec `AcceptanceExhausted` si le flux s'arrête avant.
    pub fn collect_from<F>(&self, stream: &mut BarcodeStream, mut on_accept: F) -> Result<Vec<String>>
    where
        F: FnMut(&str),
    {
        let requested = self.config.count;
        let mut barcodes = Vec::with_capacity(requested);

        for barcode in stream.by_ref().take(requested) {
            on_accept(&barcode);
            barcodes.push(barcode);
        }

        let stats = stream.stats();
        tracing::info!(
            draws = stats.draws,
            distinct = stats.distinct,
            homopolymer_rejects = stats.homopolymer_rejects,
            distance_rejects = stats.distance_rejects,
            accepted = stats.accepted,
            "génération terminée"
        );

        if barcodes.len() < requested {
            return Err(LinkerError::AcceptanceExhausted {
                requested,
                accepted: barcodes.len(),
                draws: stats.draws,
            });
        }

        Ok(barcodes)
    }

    /// Génère les barcodes demandés
    pub fn generate(&self) -> Result<Vec<String>> {
        crate::log_operation!("generate", {
            let mut stream = self.stream();
            self.collect_from(&mut stream, |_| {})
        })
    }

    /// Numérote et met en forme des barcodes, dans l'ordre fourni
    pub fn format_barcodes(&self, barcodes: &[String]) -> Result<Vec<LinkerRecord>> {
        let layout = self.formatter.layout();
        barcodes
            .iter()
            .enumerate()
            .map(|(index, barcode)| {
                Ok(LinkerRecord {
                    index,
                    forward_label: layout.label(index, Strand::Forward),
                    reverse_label: layout.label(index, Strand::Reverse),
                    pair: self.formatter.format(barcode)?,
                })
            })
            .collect()
    }

    /// Génère puis met en forme les linkers
    pub fn run(&self) -> Result<Vec<LinkerRecord>> {
        let barcodes = self.generate()?;
        self.format_barcodes(&barcodes)
    }
}
