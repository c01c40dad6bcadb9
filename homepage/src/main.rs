//! Homepage entry point
//!
//! `serve` runs the HTTP server; `build` renders one page from manifests on
//! disk and writes it out.

use anyhow::Context;
use clap::{Parser, Subcommand};
use shared::{HomeConfig, ProcessId, logging, process_info};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::signal;

use homepage::core::{HomeGrid, HomePage, PageSurface, Theme};
use homepage::{FsManifestSource, HomepageServer, HttpManifestSource, RealStaticFileServer};

#[derive(Parser, Debug)]
#[command(name = "homepage")]
#[command(about = "Portfolio homepage with a rotating project grid")]
struct Args {
    /// JSON config file (categories, rotation window, display count, ...)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the homepage over HTTP
    Serve {
        /// Port for HTTP server
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Static files directory (manifests and images)
        #[arg(long, default_value = "./static")]
        static_dir: PathBuf,

        /// Base URL manifests are fetched from (defaults to this server's /static/)
        #[arg(long)]
        manifest_base: Option<String>,
    },
    /// Render the homepage once into an HTML file
    Build {
        /// Directory holding `<category>/manifest.json`
        #[arg(long, default_value = "./static")]
        root: PathBuf,

        /// Output file
        #[arg(long, default_value = "./index.html")]
        out: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<HomeConfig> {
    match path {
        Some(path) => HomeConfig::from_file(path).with_context(|| format!("loading {}", path.display())),
        None => Ok(HomeConfig::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    match &args.command {
        Command::Serve { .. } => ProcessId::init_server(),
        Command::Build { .. } => ProcessId::init_builder(),
    };
    logging::init_tracing(Some(&args.log_level));

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Serve {
            port,
            static_dir,
            manifest_base,
        } => serve(config, port, static_dir, manifest_base).await,
        Command::Build { root, out } => build(config, root, out).await,
    }
}

async fn serve(config: HomeConfig, port: u16, static_dir: PathBuf, manifest_base: Option<String>) -> anyhow::Result<()> {
    logging::log_startup(ProcessId::current(), &format!("homepage server on port {port}"));

    let http_addr: SocketAddr = format!("127.0.0.1:{port}").parse().context("invalid port")?;
    let manifest_base = manifest_base.unwrap_or_else(|| format!("http://{http_addr}/static/"));

    let manifest_source = HttpManifestSource::from_config(&manifest_base, &config)?;
    process_info!(
        ProcessId::current(),
        "📚 {} categories from {}, {} cards per {}s window",
        config.categories.len(),
        manifest_source.base_url(),
        config.home_count,
        config.rotate_window().as_secs()
    );

    let static_server = RealStaticFileServer::new(static_dir);
    let server = HomepageServer::new(http_addr, config, manifest_source, static_server);

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
            Err(err) => logging::log_error(ProcessId::current(), "Signal handling", &err),
        }
    };

    server.run(shutdown).await?;

    logging::log_success(ProcessId::current(), "Homepage server stopped gracefully");
    Ok(())
}

async fn build(config: HomeConfig, root: PathBuf, out: PathBuf) -> anyhow::Result<()> {
    logging::log_startup(ProcessId::current(), &format!("static build from {}", root.display()));

    let grid = HomeGrid::new(FsManifestSource::from_config(&root, &config), &config);
    let mut surface = PageSurface::for_config(&config);
    let status = grid.initialize(&mut surface).await;

    let html = HomePage::new(&config, Theme::current(&config)).to_html(&surface);
    tokio::fs::write(&out, html)
        .await
        .with_context(|| format!("writing {}", out.display()))?;

    logging::log_success(
        ProcessId::current(),
        &format!("Wrote {} ({} of {} projects)", out.display(), status.displayed, status.loaded),
    );
    Ok(())
}
