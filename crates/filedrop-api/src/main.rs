use filedrop_core::Config;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), anyhow::Error> {
    // Load configuration before the runtime exists; it decides the worker count
    let config = Config::from_env()?;

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers())
        .enable_all()
        .build()?
        .block_on(run(config))
}

async fn run(config: Config) -> Result<(), anyhow::Error> {
    // Initialize the application (telemetry, storage, routes)
    let (_state, router) = filedrop_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    filedrop_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
