use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use dotenv::dotenv;
use nft_fetch::commands::{self, AppContext};
use nft_fetch::interfaces::cli::{Cli, Request};
use nft_fetch::interfaces::config::Config;
use tracing::{error, span, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let main_span = span!(Level::TRACE, "main");
    let _main_guard = main_span.enter();

    let cli = Cli::parse();
    let command_name = cli.command.name();

    let request = match cli.command.into_request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(command_name);
            std::process::exit(1);
        }
    };

    if matches!(&request, Request::Fxhash(r) if r.partial_window) {
        warn!("Both --start and --end are needed to limit iterations, downloading all");
    }

    let config = Config::from_env().context("invalid NFT_FETCH_* configuration")?;
    let ctx = AppContext::new(config);

    if let Err(e) = commands::run(request, &ctx).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn print_usage(command_name: &str) {
    let mut cli = Cli::command();
    let usage = match cli.find_subcommand_mut(command_name) {
        Some(subcommand) => subcommand.render_help(),
        None => cli.render_help(),
    };
    println!("{}", usage);
}

fn init_tracing() {
    // Initialize the LogTracer to convert `log` records to `tracing` events
    tracing_log::LogTracer::init().expect("Setting log tracer failed.");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let fmt_layer = fmt::layer();

    let subscriber = Registry::default().with(env_filter).with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)
        .expect("Setting default subscriber failed.");
}
