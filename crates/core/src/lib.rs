//! linkgen Core Library
//!
//! Génération de barcodes ADN aléatoires, filtrés pour les homopolymers et
//! deux à deux éloignés en distance d'édition, puis mis en forme en linkers
//! MseI double brin prêts à commander.

pub mod accumulator;
pub mod adapter;
pub mod constraints;
pub mod distance;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod sequence;
pub mod source;

// Réexportations principales
pub use accumulator::{KeepDistance, MinDistanceAccumulator};
pub use adapter::{reverse_complement, AdapterFormatter, AdapterLayout, AdapterPair, Strand};
pub use constraints::{max_homopolymer, HomopolymerFilter, HomopolymerFilterExt, DEFAULT_MAX_RUN};
pub use distance::{Distance, DistanceMetric, Hamming, Levenshtein};
pub use error::{LinkerError, Result};
pub use logging::init_logging;
// La macro log_operation est automatiquement exportée à la racine du crate
pub use pipeline::{BarcodeStream, LinkerRecord, Pipeline, PipelineConfig, RunStats};
pub use sequence::{Alphabet, DNA_SYMBOLS};
pub use source::RandomSequenceSource;
