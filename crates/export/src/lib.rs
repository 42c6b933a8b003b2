//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors raised while writing exported artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod report {
    use std::io::Write;

    use chrono::{SecondsFormat, Utc};
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use super::ExportError;

    /// CSV row for one transfer path. Missing burns are left empty.
    #[derive(Debug, Clone, Serialize)]
    pub struct ManeuverRow<'a> {
        pub scenario: &'a str,
        pub label: &'a str,
        pub kind: &'a str,
        pub dv1_km_s: Option<f64>,
        pub dv2_km_s: Option<f64>,
        pub dv3_km_s: Option<f64>,
        pub dv_total_km_s: f64,
        pub tof_s: f64,
        pub propellant_fraction: Option<f64>,
    }

    impl<'a> ManeuverRow<'a> {
        /// Build a row from up to three burn magnitudes.
        pub fn from_burns(
            scenario: &'a str,
            label: &'a str,
            kind: &'a str,
            burns: &[f64],
            dv_total_km_s: f64,
            tof_s: f64,
            propellant_fraction: Option<f64>,
        ) -> Self {
            Self {
                scenario,
                label,
                kind,
                dv1_km_s: burns.first().copied(),
                dv2_km_s: burns.get(1).copied(),
                dv3_km_s: burns.get(2).copied(),
                dv_total_km_s,
                tof_s,
                propellant_fraction,
            }
        }
    }

    /// Write maneuver rows with a header line.
    pub fn write_csv<W: Write>(writer: W, rows: &[ManeuverRow<'_>]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for row in rows {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(())
    }

    #[derive(Serialize)]
    struct Envelope<'a, T: Serialize> {
        generated_utc: String,
        report: &'a T,
    }

    /// Write `report` as pretty JSON wrapped with a generation timestamp.
    pub fn write_json<W: Write, T: Serialize>(writer: W, report: &T) -> Result<(), ExportError> {
        let envelope = Envelope {
            generated_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            report,
        };
        to_writer_pretty(writer, &envelope)?;
        Ok(())
    }
}

pub mod sweep {
    use std::io::Write;

    use serde::Serialize;

    use super::ExportError;

    pub const HEADER: [&str; 5] = [
        "apex_km",
        "bielliptic_dv_km_s",
        "hohmann_dv_km_s",
        "bielliptic_tof_s",
        "hohmann_tof_s",
    ];

    /// CSV row emitted by the apex sweep exporter.
    #[derive(Debug, Clone, Copy, Serialize)]
    pub struct SweepRow {
        pub apex_km: f64,
        pub bielliptic_dv_km_s: f64,
        pub hohmann_dv_km_s: f64,
        pub bielliptic_tof_s: f64,
        pub hohmann_tof_s: f64,
    }

    /// Write sweep rows with the standard header ordering.
    pub fn write_csv<W: Write>(writer: W, rows: &[SweepRow]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for row in rows {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(())
    }
}
