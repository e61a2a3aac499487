use std::path::PathBuf;

use clap::Parser;
use impl_hydro_init::{
    config::{Config, ScenarioSelector},
    hydro::init::dissipative::DissipativeInit,
    run::run,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Integer code (0-7, 9) or name, e.g. `sod-shock-tube`.
    #[arg(short, long)]
    scenario: Option<String>,

    #[arg(long)]
    nx: Option<usize>,
    #[arg(long)]
    ny: Option<usize>,
    #[arg(long)]
    nz: Option<usize>,
    #[arg(long)]
    dx: Option<f64>,
    #[arg(long)]
    dy: Option<f64>,
    #[arg(long)]
    dz: Option<f64>,

    /// Initial proper time [fm].
    #[arg(long)]
    t0: Option<f64>,

    /// One of Conformal, PureGauge, ThreeFlavor.
    #[arg(long)]
    eos: Option<String>,

    #[arg(long, value_enum)]
    dissipative: Option<DissipativeInit>,

    /// Directory receiving `info.yaml` and `fields.dat`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,impl_hydro_init=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn configure(cli: &Cli) -> impl_hydro_init::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(scenario) = &cli.scenario {
        config.initial.scenario = match scenario.trim().parse::<i64>() {
            Ok(code) => ScenarioSelector::Code(code),
            Err(_) => ScenarioSelector::Name(scenario.clone()),
        };
    }
    let lattice = &mut config.lattice;
    lattice.nx = cli.nx.unwrap_or(lattice.nx);
    lattice.ny = cli.ny.unwrap_or(lattice.ny);
    lattice.nz = cli.nz.unwrap_or(lattice.nz);
    lattice.dx = cli.dx.unwrap_or(lattice.dx);
    lattice.dy = cli.dy.unwrap_or(lattice.dy);
    lattice.dz = cli.dz.unwrap_or(lattice.dz);
    let hydro = &mut config.hydro;
    hydro.t0 = cli.t0.unwrap_or(hydro.t0);
    if let Some(eos) = &cli.eos {
        hydro.eos = eos.clone();
    }
    hydro.dissipative = cli.dissipative.unwrap_or(hydro.dissipative);
    Ok(config)
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = configure(&cli).and_then(|config| run(&config, cli.output.as_deref()));
    match result {
        Ok((_, validation)) => {
            info!(
                cells = validation.cells,
                max_normalization_error = validation.max_normalization_error,
                min_energy_density = validation.min_energy_density,
                max_shear_trace = ?validation.max_shear_trace,
                "initial conditions set"
            );
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
