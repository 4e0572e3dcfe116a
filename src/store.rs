//! Record Store
//!
//! One row per completed wizard run, keyed by (name, gender). The same person
//! finishing the wizard again updates their row in place; the unique index on
//! (name, gender) backs the upsert.

use std::collections::HashMap;

use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::metrics::{ActivityLevel, ComputedResult, DietPhase};
use crate::models::{Gender, UserProfile, UserRecord};

// ---------------------------------------------------------------------------
/// Row Operations
// ---------------------------------------------------------------------------

/// Insert a run, or update the existing row with the same (name, gender).
/// The write is a single statement; `created_at` survives updates.
pub async fn upsert_record(
    pool: &SqlitePool,
    profile: &UserProfile,
    activity: ActivityLevel,
    phase: DietPhase,
    result: &ComputedResult,
) -> Result<UserRecord, AppError> {
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO user_records (
            name, gender, age, weight_kg, height_cm,
            activity_level, diet_phase, tdee, protein_g, fat_g, carb_g,
            created_at, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
        ON CONFLICT(name, gender) DO UPDATE SET
            age = excluded.age,
            weight_kg = excluded.weight_kg,
            height_cm = excluded.height_cm,
            activity_level = excluded.activity_level,
            diet_phase = excluded.diet_phase,
            tdee = excluded.tdee,
            protein_g = excluded.protein_g,
            fat_g = excluded.fat_g,
            carb_g = excluded.carb_g,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(&profile.name)
    .bind(profile.gender.as_str())
    .bind(profile.age)
    .bind(profile.weight_kg)
    .bind(profile.height_cm)
    .bind(activity.as_str())
    .bind(phase.as_str())
    .bind(result.tdee)
    .bind(result.protein_g)
    .bind(result.fat_g)
    .bind(result.carb_g)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    info!("Saved record for {} ({})", profile.name, profile.gender);

    find_by_name_gender(pool, &profile.name, profile.gender)
        .await?
        .ok_or_else(|| AppError::Store("Upserted row missing on readback".to_string()))
}

/// Look up the single row for a (name, gender) pair.
pub async fn find_by_name_gender(
    pool: &SqlitePool,
    name: &str,
    gender: Gender,
) -> Result<Option<UserRecord>, AppError> {
    let record = sqlx::query_as::<_, UserRecord>(
        "SELECT * FROM user_records WHERE name = ?1 AND gender = ?2",
    )
    .bind(name)
    .bind(gender.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// Delete a row by id. Deleting an id that is already gone is a no-op.
pub async fn delete_record(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let outcome = sqlx::query("DELETE FROM user_records WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if outcome.rows_affected() > 0 {
        info!("Deleted record {}", id);
    }
    Ok(())
}

/// All stored runs, most recently updated first.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<UserRecord>, AppError> {
    let records = sqlx::query_as::<_, UserRecord>(
        "SELECT * FROM user_records ORDER BY updated_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(records)
}

// ---------------------------------------------------------------------------
/// Aggregates
// ---------------------------------------------------------------------------

/// Summed macro gram targets across every stored run in one diet phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseTotals {
    pub diet_phase: String,
    pub records: i64,
    pub protein_g: i64,
    pub fat_g: i64,
    pub carb_g: i64,
}

pub async fn aggregate_by_phase(
    pool: &SqlitePool,
    phase: DietPhase,
) -> Result<PhaseTotals, AppError> {
    let row: (i64, Option<i64>, Option<i64>, Option<i64>) = sqlx::query_as(
        r#"
        SELECT COUNT(*), SUM(protein_g), SUM(fat_g), SUM(carb_g)
        FROM user_records
        WHERE diet_phase = ?1
        "#,
    )
    .bind(phase.as_str())
    .fetch_one(pool)
    .await?;

    Ok(PhaseTotals {
        diet_phase: phase.to_string(),
        records: row.0,
        protein_g: row.1.unwrap_or(0),
        fat_g: row.2.unwrap_or(0),
        carb_g: row.3.unwrap_or(0),
    })
}

/// Number of stored runs per activity level label.
pub async fn count_by_activity_level(
    pool: &SqlitePool,
) -> Result<HashMap<String, i64>, AppError> {
    let rows: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT activity_level, COUNT(*)
        FROM user_records
        GROUP BY activity_level
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().collect())
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
