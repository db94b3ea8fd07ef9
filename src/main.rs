// fretscale generator — CLI entry point.
//
// Ranks the fingerings of every minor and major scale rooted in one octave
// and writes the best ones as SVG diagrams, one directory per scale.
//
// Usage:
//   cargo run --bin generate -- --octave N [--scale min,maj] [--root C,F#]
//     [--output-dir DIR] [--cutoff K] [--metric euclidean|manhattan]
//     [--json FILE] [--print-fretboard]

use std::path::PathBuf;
use std::{env, process};

use clap::Parser;
use log::LevelFilter;

use fretscale::output::WriteSummary;
use fretscale::{
    check_octave, fingerings_for_octave, write_all_diagrams, write_json, DistanceMetric, Fretboard,
    GeneratorOptions, NoteName, ScaleFingerings, ScaleKind, SCALE_CUTOFF,
};

/// Logging is controlled with RUST_LOG; see docs for the env_logger crate.
/// If RUST_LOG is not set, the log level defaults to Info.
/// Set RUST_LOG=fretscale=debug to see each scale and its ranked fingerings.
#[derive(Parser)]
#[command(version, about, long_about = None, verbatim_doc_comment)]
struct Cli {
    /// Octave of the scale roots, 2 <= octave <= 6
    #[arg(long, allow_negative_numbers = true)]
    octave: i32,

    /// Scale types to generate
    #[arg(long = "scale", value_delimiter = ',', default_value = "min,maj")]
    scales: Vec<ScaleKind>,

    /// Restrict generation to these roots (default: all twelve)
    #[arg(long = "root", value_delimiter = ',')]
    roots: Vec<NoteName>,

    /// Directory receiving one sub-directory of diagrams per scale
    #[arg(long, default_value = "svg")]
    output_dir: PathBuf,

    /// Number of fingerings kept per scale
    #[arg(long, default_value_t = SCALE_CUTOFF)]
    cutoff: usize,

    /// Distance used for the compactness score (euclidean or manhattan)
    #[arg(long, default_value = "euclidean")]
    metric: DistanceMetric,

    /// Also write the rankings as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the pitch of every string and fret before generating
    #[arg(long)]
    print_fretboard: bool,
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let mut log_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        log_builder.filter_level(LevelFilter::Info);
    }
    log_builder.init();

    let octave = match check_octave(cli.octave) {
        Ok(o) => o,
        Err(e) => {
            // Nothing is generated for a bad octave, but it is not a failure.
            log::error!("{e}");
            return Ok(());
        }
    };

    let fretboard = Fretboard::standard_guitar();
    if cli.print_fretboard {
        print!("{fretboard}");
    }

    let roots = if cli.roots.is_empty() {
        NoteName::ALL.to_vec()
    } else {
        cli.roots
    };
    let options = GeneratorOptions {
        cutoff: cli.cutoff,
        metric: cli.metric,
    };

    let mut results: Vec<ScaleFingerings> = Vec::new();
    let mut total = WriteSummary::default();
    for kind in &cli.scales {
        let batch = fingerings_for_octave(&fretboard, octave, *kind, &roots, &options);
        let summary = write_all_diagrams(&fretboard, &batch, &cli.output_dir);
        total.files += summary.files;
        total.skipped += summary.skipped;
        total.failed += summary.failed;
        results.extend(batch);
    }

    if let Some(path) = &cli.json {
        write_json(&results, path)?;
        log::info!("Wrote rankings to {}", path.display());
    }

    log::info!(
        "Wrote {} diagrams to {} ({} scales empty, {} failed)",
        total.files,
        cli.output_dir.display(),
        total.skipped,
        total.failed
    );
    if total.failed > 0 {
        return Err(format!("{} scale(s) could not be written", total.failed));
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(2);
    }
}
