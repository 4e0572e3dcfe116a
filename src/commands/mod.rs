pub mod records;
pub mod wizard;

use std::str::FromStr;

use chrono::Weekday;
use serde::Serialize;

use crate::error::AppError;
use crate::schedule;

/// One schedule screen entry.
#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
  pub day: &'static str,
  pub workout: &'static str,
}

/// The pre-authored workout block for one weekday ("Monday".."Sunday").
#[tauri::command]
pub fn get_workout_text(day: String) -> Result<String, AppError> {
  let weekday = Weekday::from_str(&day)
    .map_err(|_| AppError::invalid_input(format!("Unknown weekday: {}", day)))?;

  Ok(schedule::workout_text(weekday).to_string())
}

/// All seven weekday plans in Monday-first order.
#[tauri::command]
pub fn get_weekly_schedule() -> Vec<DayPlan> {
  schedule::full_week()
    .into_iter()
    .map(|(day, workout)| DayPlan { day, workout })
    .collect()
}
