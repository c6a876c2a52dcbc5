use carwash_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv is best-effort; a missing .env is fine)
    let _ = dotenv::dotenv();

    print_banner();

    // 2. Load configuration, then logging (file output under work_dir/logs)
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;
    carwash_server::init_logger_with_file(None, config.logs_dir().to_str());

    tracing::info!("Carwash server starting...");

    // 3. Initialize server state (loads the registry snapshot)
    let state = ServerState::initialize(&config)?;

    // 4. Serve until shutdown
    let server = Server::with_state(config, state);
    server.run().await
}
