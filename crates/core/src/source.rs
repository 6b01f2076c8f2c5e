//! Source aléatoire de barcodes candidats

use crate::sequence::Alphabet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Flux paresseux et en principe infini de mots aléatoires distincts
///
/// Chaque symbole est tiré uniformément dans l'alphabet. Un mot déjà émis
/// est retiré en silence. Le flux ne s'arrête que si un plafond de tirages
/// est atteint, ou si tous les mots possibles ont déjà été émis.
pub struct RandomSequenceSource {
    length: usize,
    alphabet: Alphabet,
    rng: ChaCha8Rng,
    emitted: HashSet<String>,
    capacity: Option<u128>,
    max_draws: Option<u64>,
    draws: u64,
}

impl RandomSequenceSource {
    /// Crée une nouvelle source
    ///
    /// Sans `seed`, le RNG est initialisé depuis l'entropie du système.
    pub fn new(length: usize, alphabet: Alphabet, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            length,
            capacity: alphabet.space_size(length),
            alphabet,
            rng,
            emitted: HashSet::new(),
            max_draws: None,
            draws: 0,
        }
    }

    /// Plafonne le nombre de tirages bruts (doublons compris)
    pub fn with_max_draws(mut self, max_draws: u64) -> Self {
        self.max_draws = Some(max_draws);
        self
    }

    /// Nombre de tirages effectués, doublons compris
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Nombre de mots distincts émis
    pub fn emitted(&self) -> usize {
        self.emitted.len()
    }

    /// Vrai si tous les mots possibles ont déjà été émis
    pub fn is_space_exhausted(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.emitted.len() as u128 >= capacity)
    }

    fn draw(&mut self) -> String {
        let symbols = self.alphabet.symbols();
        (0..self.length)
            .map(|_| symbols[self.rng.gen_range(0..symbols.len())] as char)
            .collect()
    }
}

impl Iterator for RandomSequenceSource {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if self.is_space_exhausted() {
                tracing::debug!(emitted = self.emitted.len(), "tous les mots possibles ont été émis");
                return None;
            }
            if self.max_draws.is_some_and(|max| self.draws >= max) {
                tracing::debug!(draws = self.draws, "plafond de tirages atteint");
                return None;
            }

            let candidate = self.draw();
            self.draws += 1;

            if self.emitted.insert(candidate.clone()) {
                return Some(candidate);
            }
            tracing::trace!(candidate = %candidate, "doublon retiré");
        }
    }
}
