use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use findercol::domain::ports::DocumentStorePort;
use findercol::infrastructure::{
    AppConfig, CatalogLoader, ClipboardService, CliArgs, FirestoreClient, FirestoreConfig,
    MemoryDocumentStore, ProfileStore, StorageManager, SystemLauncher,
};
use findercol::presentation::{App, AppServices};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn document_store(config: &AppConfig) -> Result<Arc<dyn DocumentStorePort>> {
    if !config.backend.is_offline()
        && let Some(firestore) = FirestoreConfig::from_backend(&config.backend)
    {
        info!(project = %firestore.project_id, "Using Firestore document store");
        return Ok(Arc::new(FirestoreClient::new(firestore)?));
    }

    warn!("No backend configured, registrations are kept in memory");
    Ok(Arc::new(MemoryDocumentStore::new()))
}

fn create_app() -> Result<App> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = findercol::VERSION, "Starting FINDERCOL");

    let catalog_path = config
        .catalog_path
        .clone()
        .unwrap_or_else(|| storage.catalog_path());
    let catalog = CatalogLoader::load_or_install(&catalog_path)?;

    let services = AppServices {
        catalog: Arc::new(catalog),
        document_store: document_store(&config)?,
        session_storage: Arc::new(ProfileStore::new(storage.profiles_path())),
        launcher: Arc::new(SystemLauncher::new()),
        clipboard: ClipboardService::new(),
        storage,
    };

    Ok(App::new(services, &config))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
