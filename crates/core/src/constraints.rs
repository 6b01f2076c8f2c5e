//! Contraintes de qualité des barcodes (homopolymères)

/// Seuil par défaut: au plus deux bases identiques consécutives
pub const DEFAULT_MAX_RUN: usize = 2;

/// Trouve la longueur maximale d'homopolymer dans une séquence
///
/// Une séquence vide renvoie 0, une séquence uniforme renvoie sa longueur.
pub fn max_homopolymer(bases: &[u8]) -> usize {
    if bases.is_empty() {
        return 0;
    }

    let mut max_run = 1;
    let mut current_run = 1;

    for window in bases.windows(2) {
        if window[0] == window[1] {
            current_run += 1;
            max_run = max_run.max(current_run);
        } else {
            current_run = 1;
        }
    }

    max_run
}

/// Filtre paresseux des candidats contenant un homopolymer trop long
///
/// Les candidats rejetés disparaissent silencieusement du flux; seul le
/// compteur `rejected` en garde la trace.
pub struct HomopolymerFilter<I> {
    upstream: I,
    max_run: usize,
    rejected: u64,
}

impl<I> HomopolymerFilter<I>
where
    I: Iterator<Item = String>,
{
    pub fn new(upstream: I, max_run: usize) -> Self {
        Self {
            upstream,
            max_run,
            rejected: 0,
        }
    }

    /// Seuil de longueur de run toléré
    pub fn max_run(&self) -> usize {
        self.max_run
    }

    /// Flux amont
    pub fn get_ref(&self) -> &I {
        &self.upstream
    }

    /// Nombre de candidats écartés jusqu'ici
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Vrai si le candidat respecte le seuil
    pub fn accepts(&self, candidate: &str) -> bool {
        max_homopolymer(candidate.as_bytes()) <= self.max_run
    }
}

impl<I> Iterator for HomopolymerFilter<I>
where
    I: Iterator<Item = String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let candidate = self.upstream.next()?;
            if self.accepts(&candidate) {
                return Some(candidate);
            }
            self.rejected += 1;
            tracing::trace!(candidate = %candidate, "homopolymer trop long, candidat écarté");
        }
    }
}

/// Extension pour chaîner le filtre d'homopolymers sur n'importe quel flux
pub trait HomopolymerFilterExt: Iterator<Item = String> + Sized {
    fn filter_homopolymers(self, max_run: usize) -> HomopolymerFilter<Self> {
        HomopolymerFilter::new(self, max_run)
    }
}

impl<I: Iterator<Item = String>> HomopolymerFilterExt for I {}
