use std::net::SocketAddr;

use tracing::{error, info};

use bookshelf::catalog::controller::build_router;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::utils::log::setup_tracing;

#[tokio::main]
async fn main() {
    setup_tracing();

    let config = Configuration::from_env();
    // an unreadable backing document means the process must not serve
    let state = match AppState::new(&config).await {
        Ok(state) => state,
        Err(err) => {
            error!("failed to open {}: {}", config.books_file.display(), err);
            std::process::exit(1);
        }
    };

    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("server listening on http://{}", addr);
    if let Err(err) = axum::Server::bind(&addr).serve(app.into_make_service()).await {
        error!("server error: {}", err);
        std::process::exit(1);
    }
}
