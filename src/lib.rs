pub mod generator;
pub mod model;
pub mod sea_area;

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, Command};
use generator::{Generator, PlacementMode};
use log::{debug, info};
use model::{Port, Vessel};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

static PORTS_PATH: &str = "public/ports-data.json";
static OUTPUT_PATH: &str = "public/vessel-data.json";
static VESSEL_COUNT: usize = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub ports_path: PathBuf,
    pub output_path: PathBuf,
    pub count: usize,
    pub mode: PlacementMode,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ports_path: PathBuf::from(PORTS_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            count: VESSEL_COUNT,
            mode: PlacementMode::PortAwareOrSeaArea,
            seed: None,
            format: OutputFormat::Json,
        }
    }
}

fn command() -> Command {
    Command::new("vessel_gen")
        .version("0.1")
        .about("generate synthetic vessel positions [json|csv]")
        .arg(
            Arg::new("ports")
                .short('p')
                .long("ports")
                .default_value(PORTS_PATH)
                .value_parser(value_parser!(PathBuf))
                .help("ports file used to cluster vessels, optional"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value(OUTPUT_PATH)
                .value_parser(value_parser!(PathBuf))
                .help("file the vessels are written to"),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .default_value("8000")
                .value_parser(value_parser!(usize))
                .help("number of vessels to generate"),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .default_value("port-aware")
                .value_parser(["port-aware", "sea-area-only"])
                .help("placement strategy"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("seed for reproducible output"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .default_value("json")
                .value_parser(["json", "csv"])
                .help("output format"),
        )
}

pub fn get_arg() -> Result<Config> {
    get_arg_from(std::env::args_os())
}

/// Parse an explicit argument list, first item being the binary name.
pub fn get_arg_from<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;

    let path = |id: &str| {
        matches
            .get_one::<PathBuf>(id)
            .cloned()
            .ok_or_else(|| anyhow!("missing --{id}"))
    };

    let mode = match matches.get_one::<String>("mode").map(String::as_str) {
        Some("sea-area-only") => PlacementMode::SeaAreaOnly,
        _ => PlacementMode::PortAwareOrSeaArea,
    };
    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("csv") => OutputFormat::Csv,
        _ => OutputFormat::Json,
    };

    Ok(Config {
        ports_path: path("ports")?,
        output_path: path("output")?,
        count: matches
            .get_one::<usize>("count")
            .copied()
            .unwrap_or(VESSEL_COUNT),
        mode,
        seed: matches.get_one::<u64>("seed").copied(),
        format,
    })
}

pub fn run(config: Config) -> Result<()> {
    info!("config is {:?}", config);

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let vessels = generate(&config, rng);
    write_vessels(&config.output_path, config.format, &vessels)?;

    println!("Generated {} vessels", vessels.len());

    Ok(())
}

/// Build the full collection for `config` without touching the output path.
pub fn generate(config: &Config, rng: StdRng) -> Vec<Vessel> {
    let ports = match config.mode {
        PlacementMode::PortAwareOrSeaArea => load_ports_or_empty(&config.ports_path),
        PlacementMode::SeaAreaOnly => Vec::new(),
    };

    let mut generator = Generator::new(config.mode, ports, rng);
    info!(
        "placing {} vessels, mode {:?}, {} ports",
        config.count,
        generator.mode(),
        generator.ports().len()
    );

    generator.generate(config.count)
}

pub fn load_ports(path: &Path) -> Result<Vec<Port>> {
    let file = File::open(path)?;
    let ports: Vec<Port> = serde_json::from_reader(BufReader::new(file))?;
    Ok(ports)
}

/// Ports file is optional: any failure means no ports.
pub fn load_ports_or_empty(path: &Path) -> Vec<Port> {
    match load_ports(path) {
        Ok(ports) => {
            info!("loaded {} ports from {}", ports.len(), path.display());
            for port in ports.iter().filter(|p| p.name.is_some()) {
                debug!(
                    "port {} ({}) at {}, {}",
                    port.name.as_deref().unwrap_or_default(),
                    port.country.as_deref().unwrap_or("-"),
                    port.latitude,
                    port.longitude
                );
            }
            ports
        }
        Err(e) => {
            debug!("no ports from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Overwrites `path`. Missing parent directories are an error.
pub fn write_vessels(path: &Path, format: OutputFormat, vessels: &[Vessel]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;

    match format {
        OutputFormat::Json => {
            let mut out = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut out, vessels)
                .with_context(|| format!("failed to write {}", path.display()))?;
            out.flush()?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(file);
            for vessel in vessels {
                wtr.serialize(vessel)?;
            }
            wtr.flush()?;
        }
    }

    Ok(())
}
