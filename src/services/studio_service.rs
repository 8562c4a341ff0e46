use sqlx::PgPool;
use tracing::info;

use crate::dto::studio_dto::{CreateLicencePayload, CreateStudioPayload, UpdateStudioPayload};
use crate::error::{Error, Result};
use crate::models::studio::{Licence, Studio};

const STUDIO_COLUMNS: &str =
    "id, name, street, house_number, city, zip, licence_id, created_at, updated_at";

#[derive(Clone)]
pub struct StudioService {
    pool: PgPool,
}

impl StudioService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateStudioPayload) -> Result<Studio> {
        let studio = sqlx::query_as::<_, Studio>(&format!(
            "INSERT INTO studios (name, street, house_number, city, zip, licence_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {STUDIO_COLUMNS}"
        ))
        .bind(payload.name)
        .bind(payload.street)
        .bind(payload.house_number)
        .bind(payload.city)
        .bind(payload.zip)
        .bind(payload.licence_id)
        .fetch_one(&self.pool)
        .await?;
        info!(studio = %studio.name, "Studio created");
        Ok(studio)
    }

    pub async fn list(&self) -> Result<Vec<Studio>> {
        let studios =
            sqlx::query_as::<_, Studio>(&format!("SELECT {STUDIO_COLUMNS} FROM studios ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(studios)
    }

    pub async fn get(&self, id: i64) -> Result<Studio> {
        let studio = sqlx::query_as::<_, Studio>(&format!(
            "SELECT {STUDIO_COLUMNS} FROM studios WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Studio not found".to_string()))?;
        Ok(studio)
    }

    pub async fn update(&self, id: i64, payload: UpdateStudioPayload) -> Result<Studio> {
        let studio = sqlx::query_as::<_, Studio>(&format!(
            "UPDATE studios
             SET name = COALESCE($1, name),
                 street = COALESCE($2, street),
                 house_number = COALESCE($3, house_number),
                 city = COALESCE($4, city),
                 zip = COALESCE($5, zip),
                 licence_id = COALESCE($6, licence_id),
                 updated_at = NOW()
             WHERE id = $7
             RETURNING {STUDIO_COLUMNS}"
        ))
        .bind(payload.name)
        .bind(payload.street)
        .bind(payload.house_number)
        .bind(payload.city)
        .bind(payload.zip)
        .bind(payload.licence_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Studio not found".to_string()))?;
        info!(studio = %studio.name, "Studio updated");
        Ok(studio)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM studios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Studio not found".to_string()));
        }
        info!(studio_id = id, "Studio deleted");
        Ok(())
    }

    /// Grants a user studio-owner scope over a studio.
    pub async fn add_owner(&self, studio_id: i64, user_id: i64) -> Result<()> {
        // Require both sides to exist so the 404 beats a raw FK error.
        self.get(studio_id).await?;
        let user_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        if user_exists.is_none() {
            return Err(Error::NotFound("User not found".to_string()));
        }

        sqlx::query(
            "INSERT INTO user_studios (user_id, studio_id) VALUES ($1, $2)
             ON CONFLICT (user_id, studio_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(studio_id)
        .execute(&self.pool)
        .await?;
        info!(studio_id, user_id, "Studio owner assigned");
        Ok(())
    }

    pub async fn create_licence(&self, payload: CreateLicencePayload) -> Result<Licence> {
        let licence = sqlx::query_as::<_, Licence>(
            "INSERT INTO licences (name, max_machines, price)
             VALUES ($1, $2, $3)
             RETURNING id, name, max_machines, price, created_at, updated_at",
        )
        .bind(payload.name)
        .bind(payload.max_machines)
        .bind(payload.price)
        .fetch_one(&self.pool)
        .await?;
        info!(licence = %licence.name, "Licence created");
        Ok(licence)
    }

    pub async fn list_licences(&self) -> Result<Vec<Licence>> {
        let licences = sqlx::query_as::<_, Licence>(
            "SELECT id, name, max_machines, price, created_at, updated_at
             FROM licences ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(licences)
    }
}
