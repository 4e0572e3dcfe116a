use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Gender as used by the Harris-Benedict formula. Labels match the profile
/// screen exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
  Male,
  Female,
}

impl Gender {
  pub fn as_str(&self) -> &'static str {
    match self {
      Gender::Male => "Male",
      Gender::Female => "Female",
    }
  }
}

impl fmt::Display for Gender {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Gender {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Male" => Ok(Gender::Male),
      "Female" => Ok(Gender::Female),
      other => Err(AppError::invalid_input(format!(
        "Unknown gender label: {}",
        other
      ))),
    }
  }
}

/// Identity and body metrics collected on the first wizard screen.
///
/// `name` and `gender` key the stored record; only age, weight, and height
/// may change once a result exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
  pub name: String,
  pub gender: Gender,
  pub age: i64,
  pub weight_kg: f64,
  pub height_cm: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_gender_parses_exact_labels_only() {
    assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
    assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);

    assert!("male".parse::<Gender>().is_err());
    assert!("M".parse::<Gender>().is_err());
    assert!("".parse::<Gender>().is_err());
  }

  #[test]
  fn test_gender_display_round_trips() {
    for gender in [Gender::Male, Gender::Female] {
      assert_eq!(gender.to_string().parse::<Gender>().unwrap(), gender);
    }
  }
}
