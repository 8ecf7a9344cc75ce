//! Sizing Calculator
//!
//! Command-line front end for the pricing engine: cloud provider rates,
//! Kubernetes distribution licensing, Mendix and OutSystems quotes and
//! full cluster estimates. Results are printed to stdout as JSON; logs go
//! to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_pricing::{CloudProvider, PricingError, PricingService};
use eyre::Result;
use observability::PricingMetrics;
use serde::Serialize;
use tracing::info;

mod commands;
mod config;

use commands::LicenseArgs;
use config::Config;

#[derive(Parser)]
#[command(name = "sizing-calculator")]
#[command(about = "Estimate infrastructure, Kubernetes licensing and low-code platform costs")]
struct Cli {
    /// Print Prometheus metrics after the command output
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the regions a provider prices
    Regions {
        #[arg(short, long)]
        provider: CloudProvider,
    },

    /// Show compute, storage and network rates for a provider region
    Cloud {
        #[arg(short, long)]
        provider: CloudProvider,

        /// Region code. Defaults to the provider's default region.
        #[arg(short, long)]
        region: Option<String>,

        /// Price an HA managed control plane
        #[arg(long)]
        ha: bool,
    },

    /// Annual licensing and support cost of a Kubernetes distribution
    License(LicenseArgs),

    /// Quote a Mendix subscription from a JSON request file
    Mendix {
        #[arg(short, long)]
        request: PathBuf,
    },

    /// Quote an OutSystems subscription from a JSON request file
    Outsystems {
        #[arg(short, long)]
        request: PathBuf,
    },

    /// Estimate the monthly and yearly cost of a cluster from a JSON sizing file
    Estimate {
        #[arg(short, long)]
        sizing: PathBuf,
    },
}

fn main() -> Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let cli = Cli::parse();

    if cli.metrics {
        observability::init_metrics()?;
    }

    let service = load_service(&config)?;

    match &cli.command {
        Commands::Regions { provider } => print(&commands::regions(&service, *provider))?,
        Commands::Cloud {
            provider,
            region,
            ha,
        } => print(&commands::cloud(&service, *provider, region.as_deref(), *ha))?,
        Commands::License(args) => {
            let default_tier = config.default_support_tier()?;
            print(&commands::license(&service, args, default_tier)?)?
        }
        Commands::Mendix { request } => print(&commands::mendix(&service, request)?)?,
        Commands::Outsystems { request } => print(&commands::outsystems(&service, request)?)?,
        Commands::Estimate { sizing } => print(&commands::estimate(&service, sizing)?)?,
    }

    if cli.metrics {
        print!("{}", observability::render_metrics());
    }

    Ok(())
}

fn load_service(config: &Config) -> Result<PricingService> {
    let source = config.table_source();
    let addon_policy = config.addon_policy()?;
    let service = PricingService::from_source(source.as_ref(), addon_policy)
        .inspect_err(|err| {
            if let PricingError::Data { table, .. } = err {
                PricingMetrics::record_data_error(table);
            }
        })?;

    info!(
        data_dir = ?config.pricing.data_dir,
        addon_policy = %addon_policy,
        "Pricing tables loaded"
    );
    Ok(service)
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
