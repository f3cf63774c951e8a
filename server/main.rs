/// figure-nn server
///
/// Trains the shape classifier at startup, then serves it over HTTP with a
/// synchronous tiny_http server.
///
/// Run with:
///   cargo run --bin figure-server --release
/// Then open http://127.0.0.1:8080
///
/// Routes:
///   GET  /        - drawing page
///   POST /        - classify a JSON pixel grid
///   GET  /valid   - accuracy report on a freshly generated validation set
///   GET  /health  - liveness probe

mod state;
mod render;
mod routes;
mod handlers;

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tiny_http::Server;
use tracing::info;

use figure_nn::cli::ConfigArgs;
use figure_nn::logging::init_logging;
use figure_nn::{train_loop, DatasetGenerator, Network};

use state::AppState;

#[derive(Parser)]
#[command(version, about = "Train the shape classifier and serve predictions over HTTP")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
    /// Address to bind
    #[arg(long)]
    host: Option<String>,
    #[arg(short, long)]
    port: Option<u16>,
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    init_logging(cli.config.verbose)?;

    let mut app = cli.config.load()?;
    app.host = cli.host.or(app.host);
    app.port = cli.port.or(app.port);

    // Training finishes before the first request is accepted; afterwards the
    // network is only read.
    let data = DatasetGenerator::standard(app.dataset_config()?)?;
    let mut network = Network::new(app.network_config()?)?;
    let train_report = train_loop(&mut network, &data.train_set(), &app.train_config()?)?;

    let shared_state = Arc::new(AppState { network, data, train_report });

    let addr = format!("{}:{}", app.host(), app.port());
    let server = Server::http(&addr)?;
    info!(%addr, "listening");

    // Each request is dispatched on its own thread; handlers only read the
    // shared state.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }

    Ok(())
}
