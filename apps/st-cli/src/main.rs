use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use st_core::units::degc;
use st_report::{ChartConfig, SolveReport, render_chart, render_table, to_csv, to_json};
use st_solver::{BoundaryTemperatures, CompositeSlab, solve};

/// Errors surfaced at the CLI boundary.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Solver error: {0}")]
    Solver(#[from] st_solver::SolverError),

    #[error("Report error: {0}")]
    Report(#[from] st_report::ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type AppResult<T> = Result<T, AppError>;

#[derive(Parser)]
#[command(name = "st-cli")]
#[command(about = "SlabTherm CLI - steady conduction through 1-D composite slabs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the worked three-layer brick wall example
    Demo,
    /// Solve a slab described on the command line
    Solve {
        /// First boundary face temperature (°C)
        #[arg(long)]
        t_first: f64,
        /// Last boundary face temperature (°C)
        #[arg(long)]
        t_last: f64,
        /// Layer conductivities in W/(m·K), ordered from the first face
        #[arg(long = "conductivity", required = true)]
        conductivities: Vec<f64>,
        /// Layer thicknesses in meters, same order
        #[arg(long = "thickness", required = true)]
        thicknesses: Vec<f64>,
        /// Export the profile to a file instead of charting it
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Skip the terminal chart
        #[arg(long)]
        no_chart: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => cmd_demo(),
        Commands::Solve {
            t_first,
            t_last,
            conductivities,
            thicknesses,
            output,
            format,
            no_chart,
        } => cmd_solve(
            t_first,
            t_last,
            &conductivities,
            &thicknesses,
            output.as_deref(),
            format,
            no_chart,
        ),
    }
}

fn cmd_demo() -> AppResult<()> {
    println!("Brick wall demo: plaster / brick / plaster, 150 °C to 10 °C");
    let report = build_report(150.0, 10.0, &[0.07, 0.7, 0.07], &[0.03, 0.1, 0.03])?;
    print!("{}", render_table(&report));

    let cfg = ChartConfig {
        title: "Temperature Distribution Across Brick Wall".to_string(),
        ..ChartConfig::default()
    };
    print!("{}", render_chart(&report, &cfg));
    Ok(())
}

fn cmd_solve(
    t_first: f64,
    t_last: f64,
    conductivities: &[f64],
    thicknesses: &[f64],
    output: Option<&Path>,
    format: ExportFormat,
    no_chart: bool,
) -> AppResult<()> {
    let report = build_report(t_first, t_last, conductivities, thicknesses)?;
    print!("{}", render_table(&report));

    if let Some(path) = output {
        let body = match format {
            ExportFormat::Csv => to_csv(&report),
            ExportFormat::Json => to_json(&report)?,
        };
        std::fs::write(path, body)?;
        println!(
            "✓ Exported {} profile points to {}",
            report.profile.len(),
            path.display()
        );
    } else if !no_chart {
        print!("{}", render_chart(&report, &ChartConfig::default()));
    }

    Ok(())
}

fn build_report(
    t_first: f64,
    t_last: f64,
    conductivities: &[f64],
    thicknesses: &[f64],
) -> AppResult<SolveReport> {
    let slab = CompositeSlab::from_si_arrays(conductivities, thicknesses)?;
    let bounds = BoundaryTemperatures::new(degc(t_first), degc(t_last))?;
    let solution = solve(&slab, bounds)?;
    Ok(SolveReport::from_solution(&slab, &solution)?)
}
