use release_asset_uploader::config::EnvInputs;
use release_asset_uploader::uploader;

#[tokio::main]
async fn main() {
    // Initialize logging; RUST_LOG=debug surfaces the per-file lines
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = uploader::run(&EnvInputs).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
