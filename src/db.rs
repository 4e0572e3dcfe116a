use log::info;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::PathBuf;
use tauri::Manager;
use tokio::sync::Mutex;

use crate::session::WizardSession;

pub type DbPool = SqlitePool;

/// Application state: the record store pool and the single wizard session.
pub struct AppState {
  pub db: DbPool,
  pub session: Mutex<WizardSession>,
}

impl AppState {
  pub fn new(db: DbPool) -> Self {
    Self {
      db,
      session: Mutex::new(WizardSession::default()),
    }
  }
}

/// Get the path to the database file
/// `MACRO_MATE_DB_PATH` overrides the default app-data location.
fn get_db_path<R: tauri::Runtime>(
  app: &tauri::AppHandle<R>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
  if let Ok(path) = std::env::var("MACRO_MATE_DB_PATH") {
    return Ok(PathBuf::from(path));
  }

  let data_dir = app
    .path()
    .app_data_dir()
    .map_err(|e| format!("Failed to get app data dir: {}", e))?;

  // Create directory if it doesn't exist
  fs::create_dir_all(&data_dir)?;

  Ok(data_dir.join("macro-mate.db"))
}

/// Initialize the record store connection and run migrations
pub async fn initialize_db<R: tauri::Runtime>(
  app: &tauri::AppHandle<R>,
) -> Result<DbPool, Box<dyn std::error::Error>> {
  let db_path = get_db_path(app)?;
  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

  info!("Initializing record store at: {}", db_path.display());

  // One user, one session: a single connection serves the whole process.
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .connect(&db_url)
    .await?;

  // Run migrations
  sqlx::migrate!("./migrations").run(&pool).await?;

  info!("Record store initialized successfully");

  Ok(pool)
}
