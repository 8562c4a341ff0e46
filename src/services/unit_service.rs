use sqlx::PgPool;

use crate::dto::training_dto::UnitPayload;
use crate::error::{Error, Result};
use crate::models::unit::Unit;

#[derive(Clone)]
pub struct UnitService {
    pool: PgPool,
}

impl UnitService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: UnitPayload) -> Result<Unit> {
        let unit = sqlx::query_as::<_, Unit>(
            "INSERT INTO units (name) VALUES ($1)
             RETURNING id, name, created_at, updated_at",
        )
        .bind(payload.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(unit)
    }

    pub async fn list(&self) -> Result<Vec<Unit>> {
        let units = sqlx::query_as::<_, Unit>(
            "SELECT id, name, created_at, updated_at FROM units ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(units)
    }

    pub async fn get(&self, id: i64) -> Result<Unit> {
        let unit = sqlx::query_as::<_, Unit>(
            "SELECT id, name, created_at, updated_at FROM units WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Unit not found".to_string()))?;
        Ok(unit)
    }

    pub async fn update(&self, id: i64, payload: UnitPayload) -> Result<Unit> {
        let unit = sqlx::query_as::<_, Unit>(
            "UPDATE units SET name = $1, updated_at = NOW() WHERE id = $2
             RETURNING id, name, created_at, updated_at",
        )
        .bind(payload.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Unit not found".to_string()))?;
        Ok(unit)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM units WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Unit not found".to_string()));
        }
        Ok(())
    }
}
