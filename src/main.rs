//! u-tour CLI: plan a tour through the points of a CSV file.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use env_logger::{Builder, Target};
use log::{info, Level, LevelFilter};

use u_tour::annealing::AnnealingConfig;
use u_tour::distance::DistanceMatrix;
use u_tour::io::{find_start, load_points, route_geojson, write_geojson};
use u_tour::solver::{solve, Algorithm, SolveOptions};

#[derive(Parser)]
#[command(name = "u-tour")]
#[command(about = "Solve the Traveling Salesman Problem over geographic points")]
#[command(version)]
struct Cli {
    /// CSV file with places (name, lat, lon)
    #[arg(long)]
    csv: PathBuf,

    /// Name of the start location
    #[arg(long)]
    start: String,

    /// Return to the start location
    #[arg(long)]
    should_return: bool,

    /// Algorithm to use: greedy, 2opt or simulated-annealing
    #[arg(long, default_value = "greedy")]
    algo: Algorithm,

    /// Limit number of places for faster testing
    #[arg(long)]
    limit: Option<usize>,

    /// Random seed for simulated annealing
    #[arg(long)]
    seed: Option<u64>,

    /// Initial annealing temperature
    #[arg(long, default_value_t = 10_000.0)]
    initial_temperature: f64,

    /// Multiplicative cooling rate per annealing step
    #[arg(long, default_value_t = 0.995)]
    cooling_rate: f64,

    /// Temperature at which annealing stops
    #[arg(long, default_value_t = 1e-8)]
    min_temperature: f64,

    /// GeoJSON output file
    #[arg(short, long, default_value = "route.geojson")]
    output: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let points = load_points(&cli.csv, cli.limit)?;

    let Some(start) = find_start(&points, &cli.start) else {
        return Err(format!("Start location '{}' not found in CSV.", cli.start).into());
    };

    let distances = DistanceMatrix::from_points(&points);

    let mut annealing = AnnealingConfig::default()
        .with_initial_temperature(cli.initial_temperature)
        .with_cooling_rate(cli.cooling_rate)
        .with_min_temperature(cli.min_temperature);
    if let Some(seed) = cli.seed {
        annealing = annealing.with_seed(seed);
    }
    let options = SolveOptions::default()
        .with_close_loop(cli.should_return)
        .with_annealing(annealing);

    let timer = Instant::now();
    let solution = solve(&distances, start, cli.algo, &options)?;
    info!("solved in {:.2?}", timer.elapsed());

    println!("Optimal tour:");
    for (i, &index) in solution.order().iter().enumerate() {
        println!("{}) {}", i + 1, points[index].name());
    }
    println!("Total distance: {:.2} km", solution.total_distance());

    let doc = route_geojson(&points, solution.order());
    write_geojson(&cli.output, &doc)?;
    println!("Route written to {}", cli.output.display());

    Ok(())
}

fn init_logger(level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });

    if let Err(e) = builder.try_init() {
        eprintln!("logger init failed: {e}");
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
