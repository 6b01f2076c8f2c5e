//! Rendu des linkers dans les différents formats de sortie

use crate::OutputFormat;
use anyhow::Result;
use linkgen_core::LinkerRecord;
use std::io::Write;

/// Écrit les linkers dans le format demandé
pub fn write_records<W: Write>(writer: &mut W, records: &[LinkerRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Linkers => write_linkers(writer, records)?,
        OutputFormat::Tsv => write_tsv(writer, records)?,
        OutputFormat::Table => write_table(writer, records)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, records)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Deux lignes par barcode: brin sens puis brin antisens
fn write_linkers<W: Write>(writer: &mut W, records: &[LinkerRecord]) -> Result<()> {
    for record in records {
        writeln!(writer, "{}\t{}", record.forward_label, record.pair.forward)?;
        writeln!(writer, "{}\t{}", record.reverse_label, record.pair.reverse)?;
    }
    Ok(())
}

fn write_tsv<W: Write>(writer: &mut W, records: &[LinkerRecord]) -> Result<()> {
    writeln!(writer, "index\tbarcode\tlinker_F\tlinker_R")?;
    for record in records {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            record.index, record.pair.barcode, record.pair.forward, record.pair.reverse
        )?;
    }
    Ok(())
}

fn write_table<W: Write>(writer: &mut W, records: &[LinkerRecord]) -> Result<()> {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct LinkerRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Barcode")]
        barcode: String,
        #[tabled(rename = "Linker F")]
        forward: String,
        #[tabled(rename = "Linker R")]
        reverse: String,
    }

    let rows: Vec<LinkerRow> = records
        .iter()
        .map(|record| LinkerRow {
            index: record.index,
            barcode: record.pair.barcode.clone(),
            forward: record.pair.forward.clone(),
            reverse: record.pair.reverse.clone(),
        })
        .collect();

    writeln!(writer, "{}", Table::new(rows))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkgen_core::{Pipeline, PipelineConfig};

    fn records() -> Vec<LinkerRecord> {
        let config = PipelineConfig {
            count: 3,
            seed: Some(42),
            ..Default::default()
        };
        Pipeline::new(config).unwrap().run().unwrap()
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, &records(), format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_linkers_format() {
        let text = render(OutputFormat::Linkers);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("MseI-linker-00-F\tTAGTCGGA"));
        assert!(lines[1].starts_with("MseI-linker-00-R\tCTAG"));
        assert!(lines[5].starts_with("MseI-linker-02-R\t"));
    }

    #[test]
    fn test_tsv_format() {
        let text = render(OutputFormat::Tsv);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "index\tbarcode\tlinker_F\tlinker_R");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].split('\t').count(), 4);
    }

    #[test]
    fn test_json_format() {
        let text = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[2]["forward_label"], "MseI-linker-02-F");
    }

    #[test]
    fn test_table_format() {
        let text = render(OutputFormat::Table);
        assert!(text.contains("Barcode"));
        assert!(text.contains("TAGTCGGA"));
    }
}
