//! sketch2ui - Detect UI components in a sketch analysis document
//!
//! A command line tool that reads a JSON document of canvas-space
//! rectangles (plus optional OCR annotations), runs the traceform detection
//! pipeline, and writes the detected component list as JSON.

use anyhow::Context;
use clap::{ArgAction, Parser};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use traceform_core::{AnnotationMap, CanvasSize, DetectParams, Rect, detect_components};

/// Detect UI components in a sketch analysis document and output them as
/// JSON for downstream markup generation.
#[derive(Parser, Debug)]
#[command(name = "sketch2ui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the sketch analysis JSON document, or "-" for stdin
    input: PathBuf,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Pretty-print the JSON output
    #[arg(short = 'p', long, action = ArgAction::SetTrue)]
    pretty: bool,

    // === Detection thresholds ===
    /// Minimum rectangle width/height (relative to canvas size)
    #[arg(long = "min-size-ratio", default_value = "0.05")]
    min_size_ratio: f64,

    /// Minimum rectangle area (relative to canvas area)
    #[arg(long = "min-area-ratio", default_value = "0.003")]
    min_area_ratio: f64,

    /// Row/column edge alignment tolerance (relative to max canvas dimension)
    #[arg(long = "align-ratio", default_value = "0.02")]
    align_ratio: f64,

    /// Row/column extent similarity tolerance (relative to max canvas dimension)
    #[arg(long = "size-ratio", default_value = "0.05")]
    size_ratio: f64,

    /// Maximum edge-to-edge distance for annotation matching (canvas units)
    #[arg(long = "annotation-distance", default_value = "20.0")]
    annotation_distance: f64,

    /// Overlap ratio above which components are nudged apart
    #[arg(long = "overlap-threshold", default_value = "0.7")]
    overlap_threshold: f64,

    /// Nudge offset per resolution attempt (canvas units)
    #[arg(long = "nudge-step", default_value = "20.0")]
    nudge_step: f64,

    /// Resolution attempts per component before residual overlap is accepted
    #[arg(long = "max-nudge-attempts", default_value = "5")]
    max_nudge_attempts: usize,
}

/// Input document shape: the output of an upstream sketch/OCR analysis.
#[derive(Debug, Deserialize)]
struct SketchDocument {
    canvas: CanvasSize,
    rects: Vec<Rect>,
    #[serde(default)]
    annotations: IndexMap<String, Rect>,
}

fn build_params(args: &Args) -> DetectParams {
    DetectParams {
        min_size_ratio: args.min_size_ratio,
        min_area_ratio: args.min_area_ratio,
        align_ratio: args.align_ratio,
        size_ratio: args.size_ratio,
        annotation_distance: args.annotation_distance,
        overlap_threshold: args.overlap_threshold,
        nudge_step: args.nudge_step,
        max_nudge_attempts: args.max_nudge_attempts,
        ..DetectParams::default()
    }
}

fn read_input(path: &PathBuf) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading sketch document from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading sketch document {}", path.display()))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let raw = read_input(&args.input)?;
    let document: SketchDocument =
        serde_json::from_str(&raw).context("parsing sketch document")?;

    let canvas = CanvasSize::try_new(document.canvas.width, document.canvas.height)
        .context("validating canvas size")?;

    let annotations: AnnotationMap = document.annotations;
    let params = build_params(&args);

    tracing::debug!(
        rects = document.rects.len(),
        annotations = annotations.len(),
        "running detection"
    );
    let components = detect_components(&document.rects, &canvas, &annotations, &params);

    let json = if args.pretty {
        serde_json::to_string_pretty(&components)?
    } else {
        serde_json::to_string(&components)?
    };

    if args.outfile == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("creating output file {}", args.outfile))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    Ok(())
}
