//! rthermal - Print thermal zone state from sysfs.
//!
//! Usage:
//!   rthermal                         # table from /sys/class/thermal
//!   rthermal -f json                 # JSON for scripts
//!   rthermal --sysfs-path /host/sys  # sysfs mounted elsewhere (containers)
//!   rthermal --class-root ./fixture  # read zones from a directory directly

use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

#[cfg(target_os = "linux")]
use rthermal::collector::RealFs;
#[cfg(not(target_os = "linux"))]
use rthermal::collector::mock::MockFs;
use rthermal::collector::{FileSystem, ThermalCollector};
use rthermal::fmt::{format_millicelsius, format_mode, format_passive};
use rthermal::models::ZoneSnapshot;

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

/// Thermal zone metrics from sysfs.
#[derive(Parser)]
#[command(name = "rthermal", about = "Thermal zone metrics from sysfs", version)]
struct Args {
    /// Sysfs mount point. Zones are read from <PATH>/class/thermal.
    #[arg(long, env = "RTHERMAL_SYSFS_PATH", default_value = "/sys")]
    sysfs_path: String,

    /// Read zones from this directory instead of <sysfs-path>/class/thermal.
    #[arg(long, value_name = "PATH")]
    class_root: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// JSON document written with `--format json`.
#[derive(Serialize)]
struct Report<'a> {
    /// RFC 3339 UTC timestamp taken just before the zones were read.
    collected_at: String,
    zones: &'a [ZoneSnapshot],
}

/// Initializes the tracing subscriber on stderr so stdout stays parseable.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    match format!("rthermal={}", level).parse::<Directive>() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("invalid log directive: {}", e),
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_collector<F: FileSystem>(fs: F, args: &Args) -> ThermalCollector<F> {
    match args.class_root {
        Some(ref root) => ThermalCollector::with_class_root(fs, root),
        None => ThermalCollector::new(fs, &args.sysfs_path),
    }
}

fn print_table(zones: &[ZoneSnapshot]) {
    let type_width = zones
        .iter()
        .map(|z| z.zone_type.len())
        .chain(std::iter::once(4))
        .max()
        .unwrap_or(4);
    let policy_width = zones
        .iter()
        .map(|z| z.policy.len())
        .chain(std::iter::once(6))
        .max()
        .unwrap_or(6);

    println!(
        "{:<5} {:<tw$} {:>9} {:<pw$} {:<8} {:>9}",
        "ZONE",
        "TYPE",
        "TEMP",
        "POLICY",
        "MODE",
        "PASSIVE",
        tw = type_width,
        pw = policy_width
    );
    for zone in zones {
        println!(
            "{:<5} {:<tw$} {:>9} {:<pw$} {:<8} {:>9}",
            zone.name,
            zone.zone_type,
            format_millicelsius(zone.temperature),
            zone.policy,
            format_mode(zone.mode),
            format_passive(zone.passive_trip),
            tw = type_width,
            pw = policy_width
        );
    }
}

fn run<F: FileSystem>(collector: &ThermalCollector<F>, format: Format) -> ExitCode {
    debug!("Reading thermal zones from {}", collector.class_root().display());

    let collected_at = Utc::now().to_rfc3339();
    let zones = match collector.collect_zones() {
        Ok(zones) => zones,
        Err(e) => {
            error!("Collection failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Collected {} thermal zones", zones.len());

    match format {
        Format::Table => print_table(&zones),
        Format::Json => {
            let report = Report {
                collected_at,
                zones: &zones,
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("Failed to serialize zones: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    #[cfg(target_os = "linux")]
    let collector = build_collector(RealFs::new(), &args);
    #[cfg(not(target_os = "linux"))]
    let collector = {
        info!("Not running on Linux, showing demo zones");
        build_collector(MockFs::typical_laptop(), &args)
    };

    run(&collector, args.format)
}
