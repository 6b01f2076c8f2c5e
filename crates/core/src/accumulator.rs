//! Accumulateur glouton à distance minimale
//!
//! Chaque candidat est comparé à tous les barcodes déjà acceptés. Il est
//! rejeté dès qu'une distance inférieure ou égale au seuil est trouvée,
//! sinon il rejoint l'ensemble accepté. Les décisions passées ne sont jamais
//! révisées: l'ensemble ne fait que croître, dans l'ordre d'acceptation.

use crate::distance::Distance;

/// Ensemble de barcodes deux à deux à distance > `threshold`
pub struct MinDistanceAccumulator<D> {
    distance: D,
    threshold: usize,
    accepted: Vec<String>,
    rejected: u64,
}

impl<D: Distance> MinDistanceAccumulator<D> {
    /// Crée un accumulateur vide
    pub fn new(distance: D, threshold: usize) -> Self {
        Self {
            distance,
            threshold,
            accepted: Vec::new(),
            rejected: 0,
        }
    }

    /// Pré-remplit l'ensemble accepté avant de consommer le flux
    ///
    /// Les éléments fournis sont ajoutés tels quels, sans vérification de
    /// distance entre eux.
    pub fn with_seed<I>(mut self, seed: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.accepted.extend(seed);
        self
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Barcodes acceptés, dans l'ordre d'acceptation
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Nombre de candidats rejetés pour proximité
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn into_accepted(self) -> Vec<String> {
        self.accepted
    }

    /// Vrai si le candidat est assez éloigné de tous les barcodes acceptés
    pub fn is_admissible(&self, candidate: &str) -> bool {
        self.accepted
            .iter()
            .all(|existing| self.distance.distance(candidate, existing) > self.threshold)
    }

    /// Tente d'ajouter un candidat; renvoie `true` s'il est accepté
    pub fn admit(&mut self, candidate: &str) -> bool {
        if self.is_admissible(candidate) {
            self.accepted.push(candidate.to_string());
            true
        } else {
            self.rejected += 1;
            false
        }
    }

    /// Filtre paresseux: ne laisse passer que les candidats acceptés
    pub fn filter<I>(&mut self, upstream: I) -> KeepDistance<'_, I::IntoIter, D>
    where
        I: IntoIterator<Item = String>,
    {
        KeepDistance {
            upstream: upstream.into_iter(),
            accumulator: self,
        }
    }
}

/// Itérateur produit par [`MinDistanceAccumulator::filter`]
pub struct KeepDistance<'a, I, D> {
    upstream: I,
    accumulator: &'a mut MinDistanceAccumulator<D>,
}

impl<'a, I, D> Iterator for KeepDistance<'a, I, D>
where
    I: Iterator<Item = String>,
    D: Distance,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let candidate = self.upstream.next()?;
            if self.accumulator.admit(&candidate) {
                tracing::debug!(
                    barcode = %candidate,
                    accepted = self.accumulator.len(),
                    "barcode accepté"
                );
                return Some(candidate);
            }
            tracing::trace!(candidate = %candidate, "trop proche d'un barcode accepté");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Hamming, Levenshtein};

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_candidate_always_accepted() {
        let mut acc = MinDistanceAccumulator::new(Levenshtein, 3);
        assert!(acc.admit("ACGTACGT"));
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_rejects_at_threshold() {
        let mut acc = MinDistanceAccumulator::new(Hamming, 2);
        assert!(acc.admit("AAAAAAAA"));
        // Distance 2 == seuil: rejeté
        assert!(!acc.admit("AATAAATA"));
        // Distance 3 > seuil: accepté
        assert!(acc.admit("TATAAATA"));
        assert_eq!(acc.accepted(), &words(&["AAAAAAAA", "TATAAATA"])[..]);
        assert_eq!(acc.rejected(), 1);
    }

    #[test]
    fn test_filter_is_lazy_and_ordered() {
        let mut acc = MinDistanceAccumulator::new(Levenshtein, 1);
        let upstream = words(&["ACGT", "ACGA", "TTCC", "TTCA", "GGAA"]);

        let kept: Vec<String> = acc.filter(upstream).take(2).collect();

        assert_eq!(kept, words(&["ACGT", "TTCC"]));
        // GGAA n'a jamais été tiré
        assert_eq!(acc.len(), 2);
        assert_eq!(acc.rejected(), 1);
    }

    #[test]
    fn test_short_circuit() {
        use std::cell::Cell;

        let calls = Cell::new(0usize);
        let counting = |a: &str, b: &str| {
            calls.set(calls.get() + 1);
            Levenshtein.distance(a, b)
        };

        let mut acc = MinDistanceAccumulator::new(counting, 2)
            .with_seed(words(&["AAAA", "CCCC", "GGGG"]));

        // Identique au premier élément: un seul appel de distance
        assert!(!acc.admit("AAAA"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_seeded_accumulator() {
        let mut acc = MinDistanceAccumulator::new(Levenshtein, 3).with_seed(words(&["ACGTACGT"]));

        assert!(!acc.admit("ACGTACGA"));
        assert!(acc.admit("TGCATGCA"));
        assert_eq!(acc.into_accepted(), words(&["ACGTACGT", "TGCATGCA"]));
    }

    #[test]
    fn test_pairwise_distance_invariant() {
        let mut acc = MinDistanceAccumulator::new(Levenshtein, 2);
        let upstream = words(&[
            "ACGTAC", "ACGTAA", "TTGCAG", "CAGTCA", "GTCAGT", "ACTTAC", "TGATCG",
        ]);
        let kept: Vec<String> = acc.filter(upstream).collect();

        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                assert!(Levenshtein.distance(a, b) > 2, "{} / {}", a, b);
            }
        }
    }
}
