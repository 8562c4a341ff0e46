use sqlx::PgPool;
use tracing::info;

use crate::dto::machine_dto::NfcTagPayload;
use crate::error::{Error, Result};
use crate::models::nfc_tag::NfcTag;

#[derive(Clone)]
pub struct NfcTagService {
    pool: PgPool,
}

impl NfcTagService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: NfcTagPayload) -> Result<NfcTag> {
        let tag = sqlx::query_as::<_, NfcTag>(
            "INSERT INTO nfc_tags (nfc_id) VALUES ($1)
             RETURNING id, nfc_id, created_at, updated_at",
        )
        .bind(payload.nfc_id)
        .fetch_one(&self.pool)
        .await?;
        info!(nfc_id = %tag.nfc_id, "NFC tag created");
        Ok(tag)
    }

    pub async fn list(&self) -> Result<Vec<NfcTag>> {
        let tags = sqlx::query_as::<_, NfcTag>(
            "SELECT id, nfc_id, created_at, updated_at FROM nfc_tags ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(tags)
    }

    pub async fn get(&self, id: i64) -> Result<NfcTag> {
        let tag = sqlx::query_as::<_, NfcTag>(
            "SELECT id, nfc_id, created_at, updated_at FROM nfc_tags WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("NFC tag not found".to_string()))?;
        Ok(tag)
    }

    pub async fn update(&self, id: i64, payload: NfcTagPayload) -> Result<NfcTag> {
        let tag = sqlx::query_as::<_, NfcTag>(
            "UPDATE nfc_tags SET nfc_id = $1, updated_at = NOW() WHERE id = $2
             RETURNING id, nfc_id, created_at, updated_at",
        )
        .bind(payload.nfc_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("NFC tag not found".to_string()))?;
        Ok(tag)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM nfc_tags WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("NFC tag not found".to_string()));
        }
        Ok(())
    }
}
