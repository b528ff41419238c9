use show_catalog::shared::utils::init_logger;
use show_catalog::shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG may come from .env, so load it before the logger reads it
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;
    show_catalog::run(config).await
}
