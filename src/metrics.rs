//! Deterministic metric engine for energy and macro targets
//!
//! This module computes BMR, TDEE, and macronutrient gram targets from
//! profile data. The formulas and lookup tables are fixed; the frontend only
//! presents what is computed here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::{Gender, UserProfile};

/// ---------------------------------------------------------------------------
/// Activity Level
/// ---------------------------------------------------------------------------

/// Weekly exercise volume, labelled exactly as the selection screen shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
  #[serde(rename = "Light Exercise (1-2 days/week)")]
  Light,
  #[serde(rename = "Moderate Exercise (3-5 days/week)")]
  Moderate,
  #[serde(rename = "Heavy Exercise (6-7 days/week)")]
  Heavy,
  #[serde(rename = "Intense Exercise (2x per day)")]
  Intense,
}

impl ActivityLevel {
  pub const ALL: [ActivityLevel; 4] = [
    ActivityLevel::Light,
    ActivityLevel::Moderate,
    ActivityLevel::Heavy,
    ActivityLevel::Intense,
  ];

  /// TDEE multiplier applied to BMR.
  pub fn multiplier(&self) -> f64 {
    match self {
      ActivityLevel::Light => 1.2,
      ActivityLevel::Moderate => 1.375,
      ActivityLevel::Heavy => 1.55,
      ActivityLevel::Intense => 1.725,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ActivityLevel::Light => "Light Exercise (1-2 days/week)",
      ActivityLevel::Moderate => "Moderate Exercise (3-5 days/week)",
      ActivityLevel::Heavy => "Heavy Exercise (6-7 days/week)",
      ActivityLevel::Intense => "Intense Exercise (2x per day)",
    }
  }
}

impl fmt::Display for ActivityLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for ActivityLevel {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ActivityLevel::ALL
      .iter()
      .find(|level| level.as_str() == s)
      .copied()
      .ok_or_else(|| AppError::invalid_input(format!("Unknown activity level: {}", s)))
  }
}

/// ---------------------------------------------------------------------------
/// Diet Phase
/// ---------------------------------------------------------------------------

/// Dietary goal. Each phase carries its macro ratio split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietPhase {
  Maintenance,
  Cutting,
  Bulking,
}

impl DietPhase {
  pub const ALL: [DietPhase; 3] = [
    DietPhase::Maintenance,
    DietPhase::Cutting,
    DietPhase::Bulking,
  ];

  /// Fraction of the calorie budget assigned to each macronutrient.
  /// The three fractions sum to 1 for every phase.
  pub fn ratios(&self) -> MacroRatios {
    match self {
      DietPhase::Maintenance => MacroRatios {
        protein: 0.30,
        fat: 0.25,
        carb: 0.45,
      },
      DietPhase::Cutting => MacroRatios {
        protein: 0.40,
        fat: 0.30,
        carb: 0.30,
      },
      DietPhase::Bulking => MacroRatios {
        protein: 0.25,
        fat: 0.20,
        carb: 0.55,
      },
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      DietPhase::Maintenance => "Maintenance",
      DietPhase::Cutting => "Cutting",
      DietPhase::Bulking => "Bulking",
    }
  }
}

impl fmt::Display for DietPhase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for DietPhase {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    DietPhase::ALL
      .iter()
      .find(|phase| phase.as_str() == s)
      .copied()
      .ok_or_else(|| AppError::invalid_input(format!("Unknown diet phase: {}", s)))
  }
}

/// Macro ratio split for a diet phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
  pub protein: f64,
  pub fat: f64,
  pub carb: f64,
}

/// ---------------------------------------------------------------------------
/// Formulas
/// ---------------------------------------------------------------------------

/// Calories per gram of protein and carbohydrate.
const KCAL_PER_G_PROTEIN_CARB: f64 = 4.0;
/// Calories per gram of fat.
const KCAL_PER_G_FAT: f64 = 9.0;

/// Revised Harris-Benedict basal metabolic rate in kcal/day.
pub fn compute_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: i64) -> f64 {
  let age = age as f64;
  match gender {
    Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
    Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
  }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn compute_tdee(bmr: f64, level: ActivityLevel) -> f64 {
  bmr * level.multiplier()
}

/// Unrounded gram targets for a calorie budget under the given phase.
pub fn compute_macros(tdee: f64, phase: DietPhase) -> MacroTargets {
  let ratios = phase.ratios();
  MacroTargets {
    protein_g: tdee * ratios.protein / KCAL_PER_G_PROTEIN_CARB,
    fat_g: tdee * ratios.fat / KCAL_PER_G_FAT,
    carb_g: tdee * ratios.carb / KCAL_PER_G_PROTEIN_CARB,
  }
}

/// Raw gram targets before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
  pub protein_g: f64,
  pub fat_g: f64,
  pub carb_g: f64,
}

/// ---------------------------------------------------------------------------
/// Computed Result
/// ---------------------------------------------------------------------------

/// Everything the result screen shows for one completed wizard run.
///
/// TDEE is rounded half-away-from-zero to a whole calorie before the macro
/// split, so the gram targets correspond to the displayed budget. Gram
/// targets are rounded the same way. BMR stays unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedResult {
  pub bmr: f64,
  pub tdee: i64,
  pub weekly_calories: i64,
  pub protein_g: i64,
  pub fat_g: i64,
  pub carb_g: i64,
}

impl ComputedResult {
  /// Run the full pipeline: BMR, TDEE, weekly total, and macro grams.
  pub fn compute(profile: &UserProfile, level: ActivityLevel, phase: DietPhase) -> Self {
    let bmr = compute_bmr(profile.gender, profile.weight_kg, profile.height_cm, profile.age);
    let tdee = compute_tdee(bmr, level).round() as i64;
    let macros = compute_macros(tdee as f64, phase);

    Self {
      bmr,
      tdee,
      weekly_calories: tdee * 7,
      protein_g: macros.protein_g.round() as i64,
      fat_g: macros.fat_g.round() as i64,
      carb_g: macros.carb_g.round() as i64,
    }
  }

  /// The greeting paragraph shown on the result screen.
  pub fn summary(&self, profile: &UserProfile, level: ActivityLevel, phase: DietPhase) -> String {
    format!(
      "Greetings, {}.\n\
       You are a {}-year-old {} who weighs {} kg and stands {} cm tall. \
       You train with {} and are in a {} phase. Your target intake is \
       {} calories per day ({} calories per week).\n\
       \n\
       Macronutrients\n\
       \x20 - Protein: {} grams per day\n\
       \x20 - Fats: {} grams per day\n\
       \x20 - Carbs: {} grams per day\n",
      profile.name,
      profile.age,
      profile.gender.to_string().to_lowercase(),
      profile.weight_kg,
      profile.height_cm,
      level.to_string().to_lowercase(),
      phase.to_string().to_lowercase(),
      self.tdee,
      self.weekly_calories,
      self.protein_g,
      self.fat_g,
      self.carb_g,
    )
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
