mod args;
mod config;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use app_api::AppContext;
use capability_client::FixtureStore;
use console_app::{AppConfig, AppState, default_rates, rates_from_env};
use console_core::PricingRates;
use http_api::HttpState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::parse_args().map_err(|err| {
        eprintln!("{err}");
        args::print_help();
        io::Error::new(io::ErrorKind::InvalidInput, "invalid arguments")
    })?;

    let config = config::load_or_create().map_err(io::Error::other)?;
    if config.created {
        println!(
            "Created config at {} (default port {}).",
            config.paths.file.display(),
            config.config.port
        );
    }

    let defaults = default_rates();
    let configured = PricingRates {
        storage_usd_per_tib_month: config
            .config
            .storage_usd_per_tib
            .unwrap_or(defaults.storage_usd_per_tib_month),
        egress_usd_per_tib: config
            .config
            .egress_usd_per_tib
            .unwrap_or(defaults.egress_usd_per_tib),
    };
    let rates = rates_from_env(configured)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let port = args.port.unwrap_or(config.config.port);
    let fixtures_dir = args.fixtures.unwrap_or(config.config.fixtures_dir);

    let fetcher = Arc::new(FixtureStore::open(&fixtures_dir));
    println!("Reading capability receipts from {}", fetcher.dir().display());

    let app_state = AppState::new(
        AppConfig {
            account: config.config.account.clone(),
            rates,
        },
        fetcher,
    );
    let context = AppContext { app_state };

    let state = HttpState::new(context);
    let run_token = state.token().to_string();
    let router = http_api::router(state);

    let (listener, actual_port, used_fallback) = bind_port(port).await?;
    let url = format!("http://127.0.0.1:{actual_port}");

    if used_fallback {
        eprintln!("Configured port {port} was unavailable; using {actual_port} for this run.");
    }

    println!("Storage Console is running at {url}");
    println!("API requests need header x-console-token: {run_token}");
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn bind_port(port: u16) -> Result<(tokio::net::TcpListener, u16, bool), io::Error> {
    if port == 0 {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_port = listener.local_addr()?.port();
        return Ok((listener, actual_port, false));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => Ok((listener, port, false)),
        Err(_) => {
            let listener =
                tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
            let actual_port = listener.local_addr()?.port();
            Ok((listener, actual_port, true))
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
