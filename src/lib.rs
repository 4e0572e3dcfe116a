mod commands;
mod db;
mod error;
mod metrics;
mod models;
mod schedule;
mod session;
mod store;
#[cfg(test)]
mod test_utils;

use db::AppState;
use log::{error, info};
use std::sync::Arc;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();
  // Console logging per log4rs.yml; without the file the app runs unlogged.
  log4rs::init_file("log4rs.yml", Default::default()).ok();

  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .setup(|app| {
      // Initialize record store
      let app_handle = app.handle().clone();
      tauri::async_runtime::block_on(async move {
        match db::initialize_db(&app_handle).await {
          Ok(pool) => {
            app_handle.manage(Arc::new(AppState::new(pool)));
            info!("Record store ready");
          }
          Err(e) => {
            error!("Failed to initialize record store: {}", e);
          }
        }
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::get_workout_text,
      commands::get_weekly_schedule,
      // Wizard commands
      commands::wizard::submit_profile,
      commands::wizard::submit_activity,
      commands::wizard::submit_phase,
      commands::wizard::update_profile_fields,
      commands::wizard::reset_session,
      commands::wizard::view_schedule,
      commands::wizard::back_to_results,
      commands::wizard::get_wizard_state,
      commands::wizard::get_result_text,
      // Record commands
      commands::records::get_records,
      commands::records::find_record,
      commands::records::delete_record,
      commands::records::phase_totals,
      commands::records::activity_level_counts,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
