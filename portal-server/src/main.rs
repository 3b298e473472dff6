use portal_server::{Config, PortalState, Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    setup_environment()?;

    print_banner();

    tracing::info!("HR portal server starting...");

    // 2. Configuration
    let config = Config::from_env();

    // 3. State with the demo seed dataset
    let state = PortalState::initialize(&config);

    // 4. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
