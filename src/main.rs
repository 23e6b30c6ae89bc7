use anyhow::Result;
use sid_url_manager::config::{init_tracing, load_from_env};
use sid_url_manager::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = load_from_env()?;
    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}
