use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::State;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod store;
mod templates;


fn main() {
    init_tracing();

    let config = Config::load();

    // 1️⃣ Create the database handle
    let db = Database::new(config.db_path.clone());

    // 2️⃣ Make sure the key-value table exists
    if let Err(e) = init_db(&db, &config.schema_path) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    // 3️⃣ Start the server
    let addr = config.addr;
    let workers = config.workers;
    let state = State::new(db, config);
    info!(%addr, workers, "starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(workers);

    // 4️⃣ Serve requests, passing the shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("civic_complaints=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
