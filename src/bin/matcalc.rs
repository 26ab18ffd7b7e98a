//! Command-line host for the matrix kernel.
//!
//! Matrices are passed inline as `--matrix "1,2;3,4"` (rows separated by
//! `;`, cells by `,` or whitespace) or picked from the built-in catalog with
//! `--preset <id>`. Results print as text, or as JSON with `--json`.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{Level, debug};

use matcalc_rs::prelude::*;
use matcalc_rs::presets::{self, PRESETS, Preset};

#[derive(Parser)]
#[command(name = "matcalc")]
#[command(about = "Elementary linear algebra: echelon form, rank, inverse, structure, eigenvalues")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Off-triangle magnitude treated as zero
    #[arg(long, global = true)]
    triangular_tolerance: Option<f64>,

    /// Magnitude at or below which an entry cannot be a pivot
    #[arg(long, global = true)]
    pivot_tolerance: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Row echelon form and rank
    Echelon(MatrixInput),
    /// Rank, echelon form and inverse
    Inverse(MatrixInput),
    /// Split a square matrix into symmetric and skew-symmetric parts
    Decompose(MatrixInput),
    /// Triangular types of A, B, A^-1 and A*B
    Triangular(PairInput),
    /// Characteristic polynomial and real eigenvalues (2x2 or 3x3)
    Eigen(MatrixInput),
    /// List the built-in example matrices
    Presets,
}

#[derive(Args)]
struct MatrixInput {
    /// Inline matrix, e.g. "1,2;3,4"
    #[arg(
        short,
        long,
        conflicts_with = "preset",
        required_unless_present = "preset"
    )]
    matrix: Option<String>,

    /// Built-in example id (see `matcalc presets`)
    #[arg(short, long)]
    preset: Option<String>,
}

#[derive(Args)]
struct PairInput {
    /// Inline matrix A
    #[arg(short = 'a', long, requires = "matrix_b", conflicts_with = "preset")]
    matrix_a: Option<String>,

    /// Inline matrix B
    #[arg(short = 'b', long, requires = "matrix_a", conflicts_with = "preset")]
    matrix_b: Option<String>,

    /// Built-in triangular pair id (see `matcalc presets`)
    #[arg(short, long, required_unless_present = "matrix_a")]
    preset: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut builder = Kernel::<f64>::new();
    if let Some(tolerance) = cli.triangular_tolerance {
        builder = builder.triangular_tolerance(tolerance);
    }
    if let Some(tolerance) = cli.pivot_tolerance {
        builder = builder.pivot_tolerance(tolerance);
    }
    let kernel = builder.build()?;

    match &cli.command {
        Commands::Echelon(input) => {
            let a = input.resolve()?;
            emit(cli.json, &kernel.row_echelon(&a)?)
        }
        Commands::Inverse(input) => {
            let a = input.resolve()?;
            emit(cli.json, &kernel.rank_and_inverse(&a)?)
        }
        Commands::Decompose(input) => {
            let a = input.resolve()?;
            emit(cli.json, &kernel.decompose_symmetric_skew(&a)?)
        }
        Commands::Triangular(input) => {
            let (a, b) = input.resolve()?;
            emit(cli.json, &kernel.analyze_triangular(&a, &b)?)
        }
        Commands::Eigen(input) => {
            let a = input.resolve()?;
            emit(cli.json, &kernel.characteristic_polynomial(&a)?)
        }
        Commands::Presets => list_presets(cli.json),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn emit<R: Serialize + std::fmt::Display>(json: bool, result: &R) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", result);
    }
    Ok(())
}

fn list_presets(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(PRESETS)?);
        return Ok(());
    }
    for preset in PRESETS {
        let (rows, cols) = (preset.a.len(), preset.a.first().map_or(0, |r| r.len()));
        println!(
            "{:<18} {:<14} {}x{}  {}",
            preset.id,
            group_name(preset),
            rows,
            cols,
            preset.label
        );
    }
    Ok(())
}

fn group_name(preset: &Preset) -> &'static str {
    match preset.group {
        presets::PresetGroup::RankInverse => "rank-inverse",
        presets::PresetGroup::Eigenvalues => "eigenvalues",
        presets::PresetGroup::Decomposition => "decomposition",
        presets::PresetGroup::Triangular => "triangular",
    }
}

// ============================================================================
// Input
// ============================================================================

impl MatrixInput {
    fn resolve(&self) -> Result<Matrix<f64>> {
        match (&self.matrix, &self.preset) {
            (Some(text), _) => parse_matrix(text),
            (None, Some(id)) => Ok(lookup(id)?.matrix_a()?),
            (None, None) => bail!("either --matrix or --preset is required"),
        }
    }
}

impl PairInput {
    fn resolve(&self) -> Result<(Matrix<f64>, Matrix<f64>)> {
        if let (Some(a), Some(b)) = (&self.matrix_a, &self.matrix_b) {
            return Ok((parse_matrix(a)?, parse_matrix(b)?));
        }
        let id = self
            .preset
            .as_deref()
            .ok_or_else(|| anyhow!("either --matrix-a/--matrix-b or --preset is required"))?;
        let preset = lookup(id)?;
        let b = preset
            .matrix_b()
            .ok_or_else(|| anyhow!("preset '{}' has no matrix B", id))??;
        Ok((preset.matrix_a()?, b))
    }
}

fn lookup(id: &str) -> Result<&'static Preset> {
    presets::find_preset(id).ok_or_else(|| anyhow!("unknown preset '{}'", id))
}

/// Parse `"1,2;3,4"` into a matrix.
fn parse_matrix(text: &str) -> Result<Matrix<f64>> {
    let rows = text
        .split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(i, row)| {
            row.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|cell| !cell.is_empty())
                .map(|cell| {
                    cell.parse::<f64>()
                        .with_context(|| format!("row {}: '{}' is not a number", i, cell))
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect::<Result<Vec<Vec<f64>>>>()?;

    let matrix = Matrix::from_rows(&rows)?;
    debug!(rows = matrix.rows(), cols = matrix.cols(), "parsed matrix");
    Ok(matrix)
}
