//! Tauri commands for browsing stored wizard runs

use std::collections::HashMap;
use std::sync::Arc;

use tauri::State;

use crate::db::AppState;
use crate::error::AppError;
use crate::metrics::DietPhase;
use crate::models::{Gender, UserRecord};
use crate::store::{self, PhaseTotals};

/// All stored runs, most recently updated first.
#[tauri::command]
pub async fn get_records(state: State<'_, Arc<AppState>>) -> Result<Vec<UserRecord>, AppError> {
  store::list_all(&state.db).await
}

/// The stored run for one (name, gender) pair, if any.
#[tauri::command]
pub async fn find_record(
  state: State<'_, Arc<AppState>>,
  name: String,
  gender: String,
) -> Result<Option<UserRecord>, AppError> {
  let gender: Gender = gender.parse()?;

  store::find_by_name_gender(&state.db, &name, gender).await
}

/// Delete one stored run by id.
#[tauri::command]
pub async fn delete_record(state: State<'_, Arc<AppState>>, id: i64) -> Result<(), AppError> {
  store::delete_record(&state.db, id).await
}

/// Summed macro targets across every stored run in one diet phase.
#[tauri::command]
pub async fn phase_totals(
  state: State<'_, Arc<AppState>>,
  phase: String,
) -> Result<PhaseTotals, AppError> {
  let phase: DietPhase = phase.parse()?;

  store::aggregate_by_phase(&state.db, phase).await
}

/// Number of stored runs per activity level label.
#[tauri::command]
pub async fn activity_level_counts(
  state: State<'_, Arc<AppState>>,
) -> Result<HashMap<String, i64>, AppError> {
  store::count_by_activity_level(&state.db).await
}
