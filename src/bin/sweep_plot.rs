use clap::Parser;
use csv::ReaderBuilder;
use orbital_transfers::export::sweep::HEADER;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render bi-elliptic vs Hohmann delta-v against apex radius from a sweep CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/sweep.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 800)]
    height: u32,
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    apex_km: f64,
    bielliptic_dv: f64,
    hohmann_dv: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let samples = read_samples(&cli.input)?;
    if samples.is_empty() {
        return Err(anyhow::anyhow!("No finite sweep samples in the provided CSV"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let apex_min = samples.iter().map(|s| s.apex_km).fold(f64::INFINITY, f64::min);
    let apex_max = samples
        .iter()
        .map(|s| s.apex_km)
        .fold(f64::NEG_INFINITY, f64::max);
    let dv_min = samples
        .iter()
        .map(|s| s.bielliptic_dv.min(s.hohmann_dv))
        .fold(f64::INFINITY, f64::min);
    let dv_max = samples
        .iter()
        .map(|s| s.bielliptic_dv.max(s.hohmann_dv))
        .fold(f64::NEG_INFINITY, f64::max);
    let x_range = padded(apex_min, apex_max);
    let y_range = padded(dv_min, dv_max);

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Bi-elliptic apex sweep".to_string(), caption_font)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Apex radius (km)")
        .y_desc("Total Δv (km/s)")
        .label_style(label_font.clone())
        .x_labels(8)
        .y_labels(8)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.3}"))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.apex_km, s.bielliptic_dv)),
            BLUE.stroke_width(2),
        ))?
        .label("bi-elliptic")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.apex_km, s.hohmann_dv)),
            RED.stroke_width(2),
        ))?
        .label("Hohmann")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .label_font(label_font)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn padded(min: f64, max: f64) -> std::ops::Range<f64> {
    let span = (max - min).abs().max(1e-6);
    (min - 0.05 * span)..(max + 0.05 * span)
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn column(headers: &csv::StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
}

fn read_samples(path: &str) -> anyhow::Result<Vec<Sample>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let apex_idx = column(&headers, HEADER[0])?;
    let bi_idx = column(&headers, HEADER[1])?;
    let ho_idx = column(&headers, HEADER[2])?;

    let mut samples = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let parse = |idx: usize| r.get(idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let sample = Sample {
            apex_km: parse(apex_idx),
            bielliptic_dv: parse(bi_idx),
            hohmann_dv: parse(ho_idx),
        };
        if sample.apex_km.is_finite()
            && sample.bielliptic_dv.is_finite()
            && sample.hohmann_dv.is_finite()
        {
            samples.push(sample);
        }
    }
    samples.sort_by(|a, b| a.apex_km.total_cmp(&b.apex_km));
    Ok(samples)
}
