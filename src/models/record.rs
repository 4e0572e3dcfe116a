use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted wizard run. Mirrors the flat `user_records` table;
/// (name, gender) is the upsert key. Derived figures such as the weekly
/// calorie total belong to `ComputedResult`, not the stored row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
  pub id: i64,
  pub name: String,
  pub gender: String,
  pub age: i64,
  pub weight_kg: f64,
  pub height_cm: f64,
  pub activity_level: String,
  pub diet_phase: String,
  pub tdee: i64,
  pub protein_g: i64,
  pub fat_g: i64,
  pub carb_g: i64,
  pub created_at: Option<DateTime<Utc>>,
  pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_serializes_the_stored_columns_only() {
    let record = UserRecord {
      id: 1,
      name: "Alex Doe".to_string(),
      gender: "Male".to_string(),
      age: 28,
      weight_kg: 80.0,
      height_cm: 175.0,
      activity_level: "Moderate Exercise (3-5 days/week)".to_string(),
      diet_phase: "Cutting".to_string(),
      tdee: 2531,
      protein_g: 253,
      fat_g: 84,
      carb_g: 190,
      created_at: None,
      updated_at: None,
    };

    let json = serde_json::to_value(&record).unwrap();
    let mut keys: Vec<&str> = json
      .as_object()
      .unwrap()
      .keys()
      .map(String::as_str)
      .collect();
    keys.sort_unstable();

    assert_eq!(
      keys,
      [
        "activity_level",
        "age",
        "carb_g",
        "created_at",
        "diet_phase",
        "fat_g",
        "gender",
        "height_cm",
        "id",
        "name",
        "protein_g",
        "tdee",
        "updated_at",
        "weight_kg",
      ]
    );
  }
}
