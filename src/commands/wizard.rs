//! Tauri commands for the five wizard screens
//!
//! Each command locks the single wizard session, runs one guarded transition,
//! and hands the frontend either a snapshot or the computed result. The
//! Phase -> Result boundary is the only place a record is written: the session
//! only advances once the row is stored, so a store failure leaves the user on
//! the phase screen with everything intact for a retry.

use std::sync::Arc;

use log::{debug, info};
use tauri::State;

use crate::db::AppState;
use crate::error::AppError;
use crate::metrics::ComputedResult;
use crate::session::WizardSnapshot;
use crate::store;

/// Profile screen submit. All five fields arrive as raw form strings.
#[tauri::command]
pub async fn submit_profile(
  state: State<'_, Arc<AppState>>,
  name: String,
  gender: String,
  age: String,
  weight_kg: String,
  height_cm: String,
) -> Result<WizardSnapshot, AppError> {
  let mut session = state.session.lock().await;
  session.submit_profile(&name, &gender, &age, &weight_kg, &height_cm)?;

  Ok(session.snapshot())
}

/// Activity screen submit.
#[tauri::command]
pub async fn submit_activity(
  state: State<'_, Arc<AppState>>,
  label: String,
) -> Result<WizardSnapshot, AppError> {
  let mut session = state.session.lock().await;
  session.submit_activity(&label)?;

  Ok(session.snapshot())
}

/// Phase screen submit: computes the result, persists the run, and moves the
/// wizard to the result screen.
#[tauri::command]
pub async fn submit_phase(
  state: State<'_, Arc<AppState>>,
  label: String,
) -> Result<ComputedResult, AppError> {
  let mut session = state.session.lock().await;
  let run = session.submit_phase(&label)?;

  let record =
    store::upsert_record(&state.db, &run.profile, run.activity, run.phase, &run.result).await?;
  session.complete_run(&run);

  info!(
    "Completed wizard run for {} (record {})",
    run.profile.name, record.id
  );
  debug!("Result snapshot: {}", session.snapshot().to_json());

  Ok(run.result)
}

/// Result screen edit. Name and gender are locked; the record is re-upserted
/// with the recomputed result.
#[tauri::command]
pub async fn update_profile_fields(
  state: State<'_, Arc<AppState>>,
  age: Option<i64>,
  weight_kg: Option<f64>,
  height_cm: Option<f64>,
) -> Result<ComputedResult, AppError> {
  let mut session = state.session.lock().await;
  let run = session.update_profile_fields(age, weight_kg, height_cm)?;

  store::upsert_record(&state.db, &run.profile, run.activity, run.phase, &run.result).await?;
  session.apply_update(&run);

  info!("Updated record for {}", run.profile.name);

  Ok(run.result)
}

/// Clear the session and return to the profile screen. Stored records are
/// not touched.
#[tauri::command]
pub async fn reset_session(state: State<'_, Arc<AppState>>) -> Result<WizardSnapshot, AppError> {
  let mut session = state.session.lock().await;
  session.reset();

  Ok(session.snapshot())
}

/// Result screen -> schedule screen.
#[tauri::command]
pub async fn view_schedule(state: State<'_, Arc<AppState>>) -> Result<WizardSnapshot, AppError> {
  let mut session = state.session.lock().await;
  session.view_schedule()?;

  Ok(session.snapshot())
}

/// Schedule screen -> result screen.
#[tauri::command]
pub async fn back_to_results(state: State<'_, Arc<AppState>>) -> Result<WizardSnapshot, AppError> {
  let mut session = state.session.lock().await;
  session.back_to_results()?;

  Ok(session.snapshot())
}

/// Read-only snapshot of the session for rendering the current screen.
#[tauri::command]
pub async fn get_wizard_state(state: State<'_, Arc<AppState>>) -> Result<WizardSnapshot, AppError> {
  let session = state.session.lock().await;

  Ok(session.snapshot())
}

/// The greeting paragraph for the result screen.
#[tauri::command]
pub async fn get_result_text(state: State<'_, Arc<AppState>>) -> Result<String, AppError> {
  let session = state.session.lock().await;

  session.result_summary()
}
