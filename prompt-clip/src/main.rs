use clap::Parser;
use prompt_clip::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::parse();
    prompt_clip::run(config).await
}
