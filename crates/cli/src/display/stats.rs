//! Résumé de génération (sur stderr)

use console::{style, Term};
use linkgen_core::RunStats;
use std::path::Path;
use std::time::Duration;

/// Affiche les compteurs d'une génération
pub fn print_summary(stats: &RunStats, elapsed: Duration, output: Option<&Path>) -> std::io::Result<()> {
    let term = Term::stderr();

    term.write_line("")?;
    term.write_line(&format!("{}", style("📊 Résumé:").bold()))?;
    term.write_line(&format!("   Tirages:                 {:>8}", stats.draws))?;
    term.write_line(&format!("   Candidats distincts:     {:>8}", stats.distinct))?;
    term.write_line(&format!("   Rejets homopolymer:      {:>8}", stats.homopolymer_rejects))?;
    term.write_line(&format!("   Rejets distance:         {:>8}", stats.distance_rejects))?;
    term.write_line(&format!("   Barcodes acceptés:       {:>8}", stats.accepted))?;
    term.write_line(&format!("   Durée:                   {:>8.2?}", elapsed))?;

    if let Some(path) = output {
        term.write_line(&format!("   Linkers écrits dans: {}", path.display()))?;
    }

    term.write_line(&format!("\n{}", style("✅ Génération terminée!").green()))?;
    Ok(())
}
