//! Métriques de distance entre barcodes

use bio::alignment::distance;
use serde::{Deserialize, Serialize};

/// Distance symétrique et positive entre deux mots
pub trait Distance {
    fn distance(&self, a: &str, b: &str) -> usize;
}

impl<F> Distance for F
where
    F: Fn(&str, &str) -> usize,
{
    fn distance(&self, a: &str, b: &str) -> usize {
        self(a, b)
    }
}

/// Distance d'édition (insertions, délétions, substitutions)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Distance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        distance::levenshtein(a.as_bytes(), b.as_bytes()) as usize
    }
}

/// Nombre de positions différentes entre deux mots de même longueur
///
/// Pour des longueurs différentes, on retombe sur la distance d'édition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Distance for Hamming {
    fn distance(&self, a: &str, b: &str) -> usize {
        if a.len() != b.len() {
            return Levenshtein.distance(a, b);
        }
        distance::hamming(a.as_bytes(), b.as_bytes()) as usize
    }
}

/// Métrique sélectionnable depuis la configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    #[default]
    Levenshtein,
    Hamming,
}

impl Distance for DistanceMetric {
    fn distance(&self, a: &str, b: &str) -> usize {
        match self {
            DistanceMetric::Levenshtein => Levenshtein.distance(a, b),
            DistanceMetric::Hamming => Hamming.distance(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(Levenshtein.distance("ACGTACGT", "ACGTACGT"), 0);
        assert_eq!(Levenshtein.distance("ACGTACGT", "ACGAACGT"), 1);
        // Un décalage coûte 2 en édition mais 8 en Hamming
        assert_eq!(Levenshtein.distance("ACGTACGT", "CGTACGTA"), 2);
        assert_eq!(Levenshtein.distance("", "ACG"), 3);
    }

    #[test]
    fn test_hamming() {
        assert_eq!(Hamming.distance("ACGTACGT", "ACGAACGT"), 1);
        assert_eq!(Hamming.distance("ACGTACGT", "CGTACGTA"), 8);
        assert_eq!(Hamming.distance("ACGT", "ACG"), 1);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("GATTACA", "TACCAGA"), ("AAAA", "TTT"), ("ACGT", "")];
        for (a, b) in pairs {
            assert_eq!(Levenshtein.distance(a, b), Levenshtein.distance(b, a));
            assert_eq!(Hamming.distance(a, b), Hamming.distance(b, a));
        }
    }

    #[test]
    fn test_closure_as_distance() {
        let length_gap = |a: &str, b: &str| a.len().abs_diff(b.len());
        assert_eq!(length_gap.distance("AAAA", "A"), 3);
    }

    #[test]
    fn test_metric_dispatch() {
        assert_eq!(DistanceMetric::default(), DistanceMetric::Levenshtein);
        assert_eq!(DistanceMetric::Levenshtein.distance("ACGTACGT", "CGTACGTA"), 2);
        assert_eq!(DistanceMetric::Hamming.distance("ACGTACGT", "CGTACGTA"), 8);
        assert_eq!(
            serde_json::to_string(&DistanceMetric::Hamming).unwrap(),
            "\"hamming\""
        );
    }
}
