//! CLI de génération de linkers MseI barcodés

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod display;

use commands::generate;

#[derive(Parser)]
#[command(name = "linkgen")]
#[command(about = "Génère des linkers MseI barcodés, prêts à commander", long_about = None)]
#[command(version)]
struct Cli {
    /// Nombre de barcodes à générer
    #[arg(short = 'n', long, default_value = "96")]
    count: usize,

    /// Longueur des barcodes
    #[arg(short, long, default_value = "8")]
    length: usize,

    /// Symboles autorisés, dans l'ordre de tirage
    #[arg(long, default_value = "ATCG")]
    alphabet: String,

    /// Longueur max d'homopolymer tolérée
    #[arg(long, default_value = "2")]
    max_run: usize,

    /// Distance minimale: deux barcodes sont à distance strictement supérieure
    #[arg(short = 'd', long, default_value = "3")]
    min_distance: usize,

    /// Métrique de distance
    #[arg(short, long, value_enum, default_value = "levenshtein")]
    metric: Metric,

    /// Seed du générateur aléatoire
    #[arg(short, long)]
    seed: Option<u64>,

    /// Plafond de tirages avant abandon (illimité par défaut)
    #[arg(long)]
    max_draws: Option<u64>,

    /// Format de sortie
    #[arg(short, long, value_enum, default_value = "linkers")]
    format: OutputFormat,

    /// Fichier de sortie (stdout par défaut)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Masquer la progression et le résumé
    #[arg(short, long)]
    quiet: bool,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum Metric {
    Levenshtein,
    Hamming,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    /// Deux lignes `nom<TAB>séquence` par barcode
    Linkers,
    /// Une ligne par barcode: index, barcode, linker F, linker R
    Tsv,
    /// Tableau lisible
    Table,
    /// Tableau JSON
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    linkgen_core::init_logging(cli.verbose);

    let metric = match cli.metric {
        Metric::Levenshtein => linkgen_core::DistanceMetric::Levenshtein,
        Metric::Hamming => linkgen_core::DistanceMetric::Hamming,
    };

    let config = linkgen_core::PipelineConfig {
        length: cli.length,
        alphabet: cli.alphabet,
        max_run: cli.max_run,
        min_distance: cli.min_distance,
        count: cli.count,
        metric,
        seed: cli.seed,
        max_draws: cli.max_draws,
    };

    generate::run(config, cli.format, cli.output, cli.quiet)
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    Ok(pb)
}
