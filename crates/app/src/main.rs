use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use journey_core::model::DisplayName;
use services::{
    AppServices, DocumentSlot, IdentityService, LessonCatalog, ProgressService, SandboxRuntime,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://journey.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    initial_name: DisplayName,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn initial_name(&self) -> DisplayName {
        self.initial_name.clone()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn identity(&self) -> Arc<IdentityService> {
        self.services.identity()
    }

    fn sandbox(&self) -> Arc<SandboxRuntime> {
        self.services.sandbox()
    }

    fn preview(&self) -> Arc<DocumentSlot> {
        self.services.preview()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Backend {
    Sqlite(String),
    Memory,
}

struct Args {
    backend: Backend,
    lessons: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--memory] [--lessons <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  lessons: bundled catalog");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  JOURNEY_DB_URL, JOURNEY_LESSONS, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut db_url = std::env::var("JOURNEY_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut lessons = std::env::var("JOURNEY_LESSONS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut memory = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--memory" => memory = true,
                "--lessons" => {
                    lessons = Some(PathBuf::from(require_value(args, "--lessons")?));
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let backend = if memory {
            Backend::Memory
        } else {
            Backend::Sqlite(db_url)
        };
        Ok(Some(Self { backend, lessons }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim();
    let path = std::path::Path::new(trimmed.strip_prefix("sqlite:").unwrap_or(trimmed));
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_catalog(
    path: Option<&std::path::Path>,
) -> Result<LessonCatalog, Box<dyn std::error::Error>> {
    let catalog = match path {
        Some(path) => {
            info!(path = %path.display(), "loading lesson catalog");
            LessonCatalog::from_path(path)?
        }
        None => LessonCatalog::bundled()?,
    };
    Ok(catalog)
}

async fn build_services(
    backend: &Backend,
    catalog: LessonCatalog,
) -> Result<AppServices, Box<dyn std::error::Error>> {
    match backend {
        Backend::Memory => {
            info!("using in-memory storage; nothing will be persisted");
            Ok(AppServices::in_memory(catalog))
        }
        Backend::Sqlite(db_url) => {
            // Create the database file up front; sqlx will not.
            if let Err(err) = prepare_sqlite_file(db_url) {
                warn!(error = %err, db_url = %db_url, "cannot prepare database file; using memory");
                return Ok(AppServices::in_memory(catalog));
            }
            match AppServices::new_sqlite(db_url, catalog.clone()).await {
                Ok(services) => Ok(services),
                Err(err) => {
                    warn!(error = %err, db_url = %db_url, "storage unavailable; using memory");
                    Ok(AppServices::in_memory(catalog))
                }
            }
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let Some(parsed) = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    let catalog = load_catalog(parsed.lessons.as_deref())?;
    let services = build_services(&parsed.backend, catalog).await?;
    let initial_name = services.identity().load().await;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        initial_name,
        services,
    });
    let context = build_app_context(&app);

    // On macOS, tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Code Journey")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
