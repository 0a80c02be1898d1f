use meals::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use std::net::TcpListener;

// Ensure that the `tracing` stack is only initialized once.
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Logs only reach the console when `TEST_LOG` is set. The sink is part of the type returned by
    // `get_subscriber`, so each branch builds and installs its own subscriber.
    if std::env::var("TEST_LOG").is_ok() {
        // Pipe through bunyan for readable output: `TEST_LOG=true cargo test | bunyan`
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

// Launch our application in the background on a random port.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    // We retrieve the port assigned to us by the OS.
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{port}");

    let server = meals::startup::run(listener).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp { address }
}
