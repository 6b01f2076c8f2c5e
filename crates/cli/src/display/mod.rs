//! Affichage des résultats

pub mod output;
pub mod stats;
