//! Wizard session state machine
//!
//! A single `WizardSession` walks the five screens in order. Every submit is
//! guarded: a validation failure leaves the session exactly as it was, and a
//! computed result only lands once the calling layer has persisted it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;
use crate::metrics::{ActivityLevel, ComputedResult, DietPhase};
use crate::models::{Gender, UserProfile};

/// ---------------------------------------------------------------------------
/// Validation
/// ---------------------------------------------------------------------------

const MSG_FILL_ALL: &str = "Please fill out all the information!";
const MSG_NAME_CHARSET: &str = "Name must contain letters and spaces only!";
const MSG_NUMERIC_FIELDS: &str = "Age, Weight, and Height must be numeric values!";
const MSG_POSITIVE_FIELDS: &str = "Age, Weight, and Height must be positive values!";
const MSG_REALISTIC_FIELDS: &str = "Age, Weight, and Height must be realistic values!";
const MSG_PICK_ACTIVITY: &str = "Please select an activity level!";
const MSG_PICK_PHASE: &str = "Please select a dietary phase!";

/// Human-scale bounds for the numeric fields; inputs inside these ranges keep
/// the formula output positive and every calorie total well inside i64.
const MAX_AGE_YEARS: i64 = 120;
const MIN_WEIGHT_KG: f64 = 20.0;
const MAX_WEIGHT_KG: f64 = 400.0;
const MIN_HEIGHT_CM: f64 = 100.0;
const MAX_HEIGHT_CM: f64 = 250.0;

/// Numeric checks shared by the profile submit and the result-screen edit.
fn validate_numeric_fields(age: i64, weight_kg: f64, height_cm: f64) -> Result<(), AppError> {
  if age <= 0
    || !weight_kg.is_finite()
    || weight_kg <= 0.0
    || !height_cm.is_finite()
    || height_cm <= 0.0
  {
    return Err(AppError::validation(MSG_POSITIVE_FIELDS));
  }

  if age > MAX_AGE_YEARS
    || weight_kg < MIN_WEIGHT_KG
    || weight_kg > MAX_WEIGHT_KG
    || height_cm < MIN_HEIGHT_CM
    || height_cm > MAX_HEIGHT_CM
  {
    return Err(AppError::validation(MSG_REALISTIC_FIELDS));
  }

  Ok(())
}

/// ---------------------------------------------------------------------------
/// Steps
/// ---------------------------------------------------------------------------

/// The five wizard screens, in walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
  #[default]
  Profile,
  Activity,
  Phase,
  Result,
  Schedule,
}

impl fmt::Display for WizardStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      WizardStep::Profile => "profile",
      WizardStep::Activity => "activity",
      WizardStep::Phase => "phase",
      WizardStep::Result => "result",
      WizardStep::Schedule => "schedule",
    };
    write!(f, "{}", name)
  }
}

/// ---------------------------------------------------------------------------
/// Session
/// ---------------------------------------------------------------------------

/// A validated, computed run ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedRun {
  pub profile: UserProfile,
  pub activity: ActivityLevel,
  pub phase: DietPhase,
  pub result: ComputedResult,
}

/// In-memory wizard state. Fields are private so the only way forward is
/// through the guarded transitions.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
  step: WizardStep,
  profile: Option<UserProfile>,
  activity: Option<ActivityLevel>,
  phase: Option<DietPhase>,
  result: Option<ComputedResult>,
}

impl WizardSession {
  pub fn step(&self) -> WizardStep {
    self.step
  }

  pub fn profile(&self) -> Option<&UserProfile> {
    self.profile.as_ref()
  }

  pub fn activity(&self) -> Option<ActivityLevel> {
    self.activity
  }

  pub fn phase(&self) -> Option<DietPhase> {
    self.phase
  }

  pub fn result(&self) -> Option<ComputedResult> {
    self.result
  }

  fn require_step(&self, expected: WizardStep) -> Result<(), AppError> {
    if self.step == expected {
      Ok(())
    } else {
      Err(AppError::validation(format!(
        "Not on the {} step (currently on {})",
        expected, self.step
      )))
    }
  }

  /// Profile screen submit. All five fields arrive as raw form strings;
  /// on success the wizard advances to the activity screen.
  pub fn submit_profile(
    &mut self,
    name: &str,
    gender: &str,
    age: &str,
    weight_kg: &str,
    height_cm: &str,
  ) -> Result<(), AppError> {
    self.require_step(WizardStep::Profile)?;

    let name = name.trim();
    let gender = gender.trim();
    let age = age.trim();
    let weight_kg = weight_kg.trim();
    let height_cm = height_cm.trim();

    if name.is_empty()
      || gender.is_empty()
      || age.is_empty()
      || weight_kg.is_empty()
      || height_cm.is_empty()
    {
      return Err(AppError::validation(MSG_FILL_ALL));
    }

    if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
      return Err(AppError::validation(MSG_NAME_CHARSET));
    }

    let gender: Gender = gender.parse()?;
    let age: i64 = age
      .parse()
      .map_err(|_| AppError::validation(MSG_NUMERIC_FIELDS))?;
    let weight_kg: f64 = weight_kg
      .parse()
      .map_err(|_| AppError::validation(MSG_NUMERIC_FIELDS))?;
    let height_cm: f64 = height_cm
      .parse()
      .map_err(|_| AppError::validation(MSG_NUMERIC_FIELDS))?;

    validate_numeric_fields(age, weight_kg, height_cm)?;

    self.profile = Some(UserProfile {
      name: name.to_string(),
      gender,
      age,
      weight_kg,
      height_cm,
    });
    self.step = WizardStep::Activity;
    Ok(())
  }

  /// Activity screen submit. Advances to the phase screen.
  pub fn submit_activity(&mut self, label: &str) -> Result<(), AppError> {
    self.require_step(WizardStep::Activity)?;

    if label.trim().is_empty() {
      return Err(AppError::validation(MSG_PICK_ACTIVITY));
    }
    let level: ActivityLevel = label.parse()?;

    self.activity = Some(level);
    self.step = WizardStep::Phase;
    Ok(())
  }

  /// Phase screen submit. Validates the selection and computes the run, but
  /// does not leave the phase screen; call `complete_run` once the record is
  /// persisted. A store failure therefore leaves the session untouched.
  pub fn submit_phase(&self, label: &str) -> Result<CompletedRun, AppError> {
    self.require_step(WizardStep::Phase)?;

    if label.trim().is_empty() {
      return Err(AppError::validation(MSG_PICK_PHASE));
    }
    let phase: DietPhase = label.parse()?;

    let (profile, activity) = match (&self.profile, self.activity) {
      (Some(p), Some(a)) => (p.clone(), a),
      _ => return Err(AppError::validation("Earlier wizard steps are incomplete")),
    };

    let result = ComputedResult::compute(&profile, activity, phase);
    Ok(CompletedRun {
      profile,
      activity,
      phase,
      result,
    })
  }

  /// Record a persisted first run: the wizard moves to the result screen.
  pub fn complete_run(&mut self, run: &CompletedRun) {
    self.phase = Some(run.phase);
    self.result = Some(run.result);
    self.step = WizardStep::Result;
  }

  /// Result screen edit. Name and gender are locked; only age, weight, and
  /// height may change. Recomputes with the stored activity and phase and
  /// returns the new run for persisting; call `apply_update` afterwards.
  pub fn update_profile_fields(
    &self,
    age: Option<i64>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
  ) -> Result<CompletedRun, AppError> {
    self.require_step(WizardStep::Result)?;

    let (profile, activity, phase) = match (&self.profile, self.activity, self.phase) {
      (Some(p), Some(a), Some(ph)) => (p.clone(), a, ph),
      _ => return Err(AppError::validation("No computed result to update")),
    };

    let mut updated = profile;
    if let Some(age) = age {
      updated.age = age;
    }
    if let Some(weight) = weight_kg {
      updated.weight_kg = weight;
    }
    if let Some(height) = height_cm {
      updated.height_cm = height;
    }

    validate_numeric_fields(updated.age, updated.weight_kg, updated.height_cm)?;

    let result = ComputedResult::compute(&updated, activity, phase);
    Ok(CompletedRun {
      profile: updated,
      activity,
      phase,
      result,
    })
  }

  /// Record a persisted field edit made from the result screen.
  pub fn apply_update(&mut self, run: &CompletedRun) {
    self.profile = Some(run.profile.clone());
    self.result = Some(run.result);
  }

  pub fn view_schedule(&mut self) -> Result<(), AppError> {
    self.require_step(WizardStep::Result)?;
    self.step = WizardStep::Schedule;
    Ok(())
  }

  pub fn back_to_results(&mut self) -> Result<(), AppError> {
    self.require_step(WizardStep::Schedule)?;
    self.step = WizardStep::Result;
    Ok(())
  }

  /// Clear everything and return to the profile screen. Stored records are
  /// not touched.
  pub fn reset(&mut self) {
    *self = WizardSession::default();
  }

  /// The greeting paragraph for the current result.
  pub fn result_summary(&self) -> Result<String, AppError> {
    match (&self.profile, self.activity, self.phase, self.result) {
      (Some(profile), Some(activity), Some(phase), Some(result)) => {
        Ok(result.summary(profile, activity, phase))
      }
      _ => Err(AppError::validation("No result has been computed yet")),
    }
  }

  pub fn snapshot(&self) -> WizardSnapshot {
    WizardSnapshot {
      step: self.step,
      profile: self.profile.clone(),
      activity_level: self.activity,
      diet_phase: self.phase,
      result: self.result,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Snapshot
/// ---------------------------------------------------------------------------

/// Read-only view of the session for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardSnapshot {
  pub step: WizardStep,
  pub profile: Option<UserProfile>,
  pub activity_level: Option<ActivityLevel>,
  pub diet_phase: Option<DietPhase>,
  pub result: Option<ComputedResult>,
}

impl WizardSnapshot {
  /// Serialize to JSON for debug logging.
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
