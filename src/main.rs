use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use skillrec_api::RestApi;
use skillrec_core::Recommender;

/// Recommend related skills from a skill catalog
#[derive(Parser, Debug)]
#[command(name = "skillrec")]
#[command(about = "Related-skill recommender over a CSV catalog", long_about = None)]
struct Args {
    /// Path to the skill catalog CSV
    #[arg(short, long, default_value = "hack.csv")]
    catalog: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Number of recommendations per lookup
    #[arg(long, default_value_t = skillrec_core::DEFAULT_TOP_K)]
    top_k: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting skillrec v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);

    // Load-time failures abort startup
    let recommender = Arc::new(Recommender::from_path(&args.catalog, args.top_k)?);
    info!("Recommender initialized");

    let host = args.host.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || -> std::io::Result<()> {
        info!("Starting HTTP server on {}:{}", host, http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(RestApi::start(recommender, host, http_port))
    });

    info!("HTTP API: http://{}:{}/", args.host, args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        joined = tokio::task::spawn_blocking(move || http_handle.join()) => {
            server_exit(joined?)?;
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

/// Turn the HTTP thread's outcome into the process result so bind failures exit non-zero
fn server_exit(joined: std::thread::Result<std::io::Result<()>>) -> anyhow::Result<()> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            error!("HTTP server error: {}", e);
            Err(e.into())
        }
        Err(_) => {
            error!("HTTP server thread panicked");
            anyhow::bail!("HTTP server thread panicked")
        }
    }
}
