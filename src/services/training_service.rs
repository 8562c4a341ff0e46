use sqlx::PgPool;
use tracing::info;

use crate::dto::training_dto::{
    CreateTrainingDataPayload, CreateTrainingEntryPayload, UpdateTrainingDataPayload,
    UpdateTrainingEntryPayload,
};
use crate::error::{Error, Result};
use crate::models::training::{TrainingData, TrainingEntry};

const ENTRY_COLUMNS: &str =
    "id, value, unit_id, machine_id, session_id, created_at, updated_at";
const DATA_COLUMNS: &str = "id, value, training_entry_id, created_at, updated_at";

#[derive(Clone)]
pub struct TrainingService {
    pool: PgPool,
}

impl TrainingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Training entries

    pub async fn create_entry(&self, payload: CreateTrainingEntryPayload) -> Result<TrainingEntry> {
        let entry = sqlx::query_as::<_, TrainingEntry>(&format!(
            "INSERT INTO training_entries (value, unit_id, machine_id, session_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {ENTRY_COLUMNS}"
        ))
        .bind(payload.value)
        .bind(payload.unit_id)
        .bind(payload.machine_id)
        .bind(payload.session_id)
        .fetch_one(&self.pool)
        .await?;
        info!(entry_id = entry.id, session_id = entry.session_id, "Training entry created");
        Ok(entry)
    }

    pub async fn list_entries_for_session(&self, session_id: i64) -> Result<Vec<TrainingEntry>> {
        let entries = sqlx::query_as::<_, TrainingEntry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM training_entries WHERE session_id = $1 ORDER BY id"
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn get_entry(&self, id: i64) -> Result<TrainingEntry> {
        let entry = sqlx::query_as::<_, TrainingEntry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM training_entries WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Training entry not found".to_string()))?;
        Ok(entry)
    }

    /// Resolves the user a training entry belongs to through its session.
    pub async fn entry_owner(&self, entry_id: i64) -> Result<i64> {
        let owner: Option<i64> = sqlx::query_scalar(
            "SELECT s.user_id FROM training_entries e
             JOIN sessions s ON s.id = e.session_id
             WHERE e.id = $1",
        )
        .bind(entry_id)
        .fetch_optional(&self.pool)
        .await?;
        owner.ok_or_else(|| Error::NotFound("Training entry not found".to_string()))
    }

    pub async fn update_entry(
        &self,
        id: i64,
        payload: UpdateTrainingEntryPayload,
    ) -> Result<TrainingEntry> {
        let entry = sqlx::query_as::<_, TrainingEntry>(&format!(
            "UPDATE training_entries
             SET value = COALESCE($1, value),
                 unit_id = COALESCE($2, unit_id),
                 machine_id = COALESCE($3, machine_id),
                 updated_at = NOW()
             WHERE id = $4
             RETURNING {ENTRY_COLUMNS}"
        ))
        .bind(payload.value)
        .bind(payload.unit_id)
        .bind(payload.machine_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Training entry not found".to_string()))?;
        Ok(entry)
    }

    pub async fn delete_entry(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM training_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Training entry not found".to_string()));
        }
        Ok(())
    }

    // Training data

    pub async fn create_data(&self, payload: CreateTrainingDataPayload) -> Result<TrainingData> {
        let data = sqlx::query_as::<_, TrainingData>(&format!(
            "INSERT INTO training_data (value, training_entry_id)
             VALUES ($1, $2)
             RETURNING {DATA_COLUMNS}"
        ))
        .bind(payload.value)
        .bind(payload.training_entry_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(data)
    }

    pub async fn list_data_for_entry(&self, entry_id: i64) -> Result<Vec<TrainingData>> {
        let data = sqlx::query_as::<_, TrainingData>(&format!(
            "SELECT {DATA_COLUMNS} FROM training_data WHERE training_entry_id = $1 ORDER BY id"
        ))
        .bind(entry_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(data)
    }

    pub async fn get_data(&self, id: i64) -> Result<TrainingData> {
        let data = sqlx::query_as::<_, TrainingData>(&format!(
            "SELECT {DATA_COLUMNS} FROM training_data WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Training data not found".to_string()))?;
        Ok(data)
    }

    /// Resolves the user a training-data row belongs to through entry and
    /// session.
    pub async fn data_owner(&self, data_id: i64) -> Result<i64> {
        let owner: Option<i64> = sqlx::query_scalar(
            "SELECT s.user_id FROM training_data d
             JOIN training_entries e ON e.id = d.training_entry_id
             JOIN sessions s ON s.id = e.session_id
             WHERE d.id = $1",
        )
        .bind(data_id)
        .fetch_optional(&self.pool)
        .await?;
        owner.ok_or_else(|| Error::NotFound("Training data not found".to_string()))
    }

    pub async fn update_data(
        &self,
        id: i64,
        payload: UpdateTrainingDataPayload,
    ) -> Result<TrainingData> {
        let data = sqlx::query_as::<_, TrainingData>(&format!(
            "UPDATE training_data SET value = $1, updated_at = NOW() WHERE id = $2
             RETURNING {DATA_COLUMNS}"
        ))
        .bind(payload.value)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Training data not found".to_string()))?;
        Ok(data)
    }

    pub async fn delete_data(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM training_data WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Training data not found".to_string()));
        }
        Ok(())
    }
}
