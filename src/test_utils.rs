//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Seeded wizard-run rows
//! - Sample profile factories
//! - Helper assertions

use sqlx::SqlitePool;

use crate::metrics::{ActivityLevel, ComputedResult, DietPhase};
use crate::models::{Gender, UserProfile};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  // Run migrations
  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed one completed wizard run per name (all male, moderate exercise,
/// maintenance phase, slightly different ages). Returns the inserted row ids.
pub async fn seed_test_records(pool: &SqlitePool, names: &[&str]) -> Vec<i64> {
  let mut record_ids = Vec::new();

  for (i, name) in names.iter().enumerate() {
    let mut profile = sample_profile_named(name, Gender::Male);
    profile.age += i as i64;
    let result =
      ComputedResult::compute(&profile, ActivityLevel::Moderate, DietPhase::Maintenance);

    let outcome = sqlx::query(
      r#"
      INSERT INTO user_records (
        name, gender, age, weight_kg, height_cm,
        activity_level, diet_phase, tdee, protein_g, fat_g, carb_g
      )
      VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
      "#,
    )
    .bind(&profile.name)
    .bind(profile.gender.as_str())
    .bind(profile.age)
    .bind(profile.weight_kg)
    .bind(profile.height_cm)
    .bind(ActivityLevel::Moderate.as_str())
    .bind(DietPhase::Maintenance.as_str())
    .bind(result.tdee)
    .bind(result.protein_g)
    .bind(result.fat_g)
    .bind(result.carb_g)
    .execute(pool)
    .await
    .expect("Failed to insert test record");

    record_ids.push(outcome.last_insert_rowid());
  }

  record_ids
}

/// ---------------------------------------------------------------------------
/// Sample Data Factories
/// ---------------------------------------------------------------------------

/// The profile used by the worked scenario in the metric tests.
pub fn sample_profile() -> UserProfile {
  sample_profile_named("Alex Doe", Gender::Male)
}

/// A profile with fixed body metrics and the given identity.
pub fn sample_profile_named(name: &str, gender: Gender) -> UserProfile {
  UserProfile {
    name: name.to_string(),
    gender,
    age: 28,
    weight_kg: 80.0,
    height_cm: 175.0,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name = 'user_records'",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");
    assert_eq!(tables.len(), 1);

    let indexes: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='index' AND name = 'idx_user_records_name_gender'",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query indexes");
    assert_eq!(indexes.len(), 1);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_records_returns_correct_count() {
    let pool = setup_test_db().await;

    let ids = seed_test_records(&pool, &["Alpha", "Bravo", "Charlie"]).await;
    assert_eq!(ids.len(), 3);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_records")
      .fetch_one(&pool)
      .await
      .expect("Failed to count records");
    assert_eq!(count, 3);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_unique_index_rejects_duplicate_name_gender() {
    let pool = setup_test_db().await;
    seed_test_records(&pool, &["Alpha"]).await;

    // A plain INSERT for the same (name, gender) must hit the unique index.
    let duplicate = sqlx::query(
      r#"
      INSERT INTO user_records (
        name, gender, age, weight_kg, height_cm,
        activity_level, diet_phase, tdee, protein_g, fat_g, carb_g
      )
      VALUES ('Alpha', 'Male', 30, 82.0, 176.0,
              'Light Exercise (1-2 days/week)', 'Cutting', 2400, 240, 80, 180)
      "#,
    )
    .execute(&pool)
    .await;
    assert!(duplicate.is_err());

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_sample_factories_create_valid_data() {
    let profile = sample_profile();
    assert_eq!(profile.name, "Alex Doe");
    assert_eq!(profile.gender, Gender::Male);
    assert_eq!(profile.age, 28);

    let other = sample_profile_named("Robin Gray", Gender::Female);
    assert_eq!(other.name, "Robin Gray");
    assert_eq!(other.gender, Gender::Female);
    assert_eq!(other.weight_kg, profile.weight_kg);
  }
}
