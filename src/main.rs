//! # Meals Crate
//!
//! `meals` serves a health check and a fixed list of meals over HTTP. See the crate README for the
//! available routes and how to configure the server.
use meals::{config, startup, telemetry};
use std::net::TcpListener;

/// Entrypoint for the application.
#[tokio::main]
async fn main() -> hyper::Result<()> {
    let subscriber = telemetry::get_subscriber("meals".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber);

    let configuration = config::get_configuration().expect("Failed to read configuration.");
    let address = configuration.application.address();
    let listener = TcpListener::bind(&address).expect("Unable to bind to port");
    tracing::info!(%address, "Listening");
    startup::run(listener)?.await
}
