use resumelens_core::Config;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    resumelens_api::telemetry::init_telemetry();

    // Initialize the application (storage, model client, routes)
    let (_state, router) = resumelens_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    resumelens_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
