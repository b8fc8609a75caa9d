use anyhow::Context;
use clap::Parser;
use math_audio_gauss_jordan::{
    AugmentedSystem, EliminationConfig, EliminationReport, extract_solution, format_system,
    read_system_file, write_system_file,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "gauss_jordan",
    about = "Reduce a linear system to reduced row-echelon form with Gauss-Jordan elimination"
)]
struct Cli {
    /// Text file holding `rows columns`, the coefficients, then the right-hand side
    #[arg(default_value = "TestMatrix.txt")]
    input: PathBuf,

    /// File receiving the reduced system
    #[arg(long, default_value = "solution.txt")]
    output: PathBuf,

    /// Do not write the reduced system to --output
    #[arg(long)]
    no_write: bool,

    /// Zero-pivot tolerance, relative to the largest coefficient
    #[arg(long, default_value_t = 1e-12)]
    tolerance: f64,

    /// Log progress every N columns (0 = no progress output)
    #[arg(long, default_value_t = 0)]
    print_interval: usize,

    /// Write the elimination report as JSON to this file
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Do not print the reduced system on stdout
    #[arg(long)]
    quiet: bool,
}

fn write_report_json(path: &Path, report: &EliminationReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let config = EliminationConfig {
        tolerance: args.tolerance,
        print_interval: args.print_interval,
    };

    let mut system: AugmentedSystem<f64> = read_system_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    log::info!(
        "Loaded {}x{} system from {}",
        system.nrows(),
        system.ncols(),
        args.input.display()
    );

    let report = system.reduce(&config)?;
    let (a, b) = system.into_parts();

    if !args.quiet {
        print!("{}", format_system(&a, &b));
    }

    if !args.no_write {
        write_system_file(&args.output, &a, &b)
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        log::info!("Wrote reduced system to {}", args.output.display());
    }

    if let Some(path) = &args.report_json {
        write_report_json(path, &report)?;
    }

    let solution = extract_solution(&a, &b, &report, config.tolerance)?;
    if !solution.free_columns.is_empty() {
        log::warn!(
            "No pivot in column(s) {:?}: the system is rank deficient (rank {})",
            solution.free_columns,
            report.rank()
        );
    }
    if !solution.is_consistent() {
        log::warn!(
            "Row(s) {:?} reduce to 0 = c with c != 0: the system has no solution",
            solution.inconsistent_rows
        );
    }

    Ok(())
}
