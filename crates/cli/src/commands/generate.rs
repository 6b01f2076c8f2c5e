//! Commande de génération

use crate::display::{output, stats};
use crate::{create_progress_bar, OutputFormat};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use linkgen_core::{Pipeline, PipelineConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

pub fn run(
    config: PipelineConfig,
    format: OutputFormat,
    output_path: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    tracing::debug!(?config, "configuration résolue");
    let pipeline = Pipeline::new(config).context("configuration invalide")?;
    let requested = pipeline.config().count;

    // 1. Tirer les barcodes
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        create_progress_bar(requested as u64, "Sélection des barcodes...")?
    };

    let start = Instant::now();
    let mut stream = pipeline.stream();
    let result = pipeline.collect_from(&mut stream, |_| pb.inc(1));
    let run_stats = stream.stats();

    let barcodes = match result {
        Ok(barcodes) => {
            pb.finish_with_message(format!("{} barcodes acceptés", barcodes.len()));
            barcodes
        }
        Err(err) => {
            pb.abandon_with_message("génération interrompue");
            return Err(err).context("impossible d'atteindre le nombre de barcodes demandé");
        }
    };

    // 2. Mettre en forme les linkers
    let records = pipeline.format_barcodes(&barcodes)?;

    // 3. Écrire le résultat
    let mut writer: Box<dyn Write> = match &output_path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("création de {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    output::write_records(&mut writer, &records, format)?;
    writer.flush()?;

    if !quiet {
        stats::print_summary(&run_stats, start.elapsed(), output_path.as_deref())?;
    }

    Ok(())
}
