use sqlx::PgPool;
use tracing::info;

use crate::dto::machine_dto::{CreateMachinePayload, MachineCategoryPayload, UpdateMachinePayload};
use crate::error::{Error, Result};
use crate::models::machine::{Machine, MachineCategory};

const MACHINE_COLUMNS: &str =
    "id, name, machine_category_id, nfc_tag_id, studio_id, created_at, updated_at";

#[derive(Clone)]
pub struct MachineService {
    pool: PgPool,
}

impl MachineService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a machine, enforcing the studio licence's machine cap. The
    /// studio row is locked for the duration, so concurrent creates for the
    /// same studio serialize instead of both slipping under the cap.
    pub async fn create(&self, payload: CreateMachinePayload) -> Result<Machine> {
        let mut tx = self.pool.begin().await?;

        let max_machines: i32 = sqlx::query_scalar(
            "SELECT l.max_machines FROM studios s
             JOIN licences l ON l.id = s.licence_id
             WHERE s.id = $1
             FOR UPDATE OF s",
        )
        .bind(payload.studio_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::NotFound("Studio not found".to_string()))?;

        let current: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM machines WHERE studio_id = $1")
            .bind(payload.studio_id)
            .fetch_one(&mut *tx)
            .await?;
        if current >= max_machines as i64 {
            return Err(Error::BadRequest(
                "Machine limit for this studio's licence reached".to_string(),
            ));
        }

        let machine = sqlx::query_as::<_, Machine>(&format!(
            "INSERT INTO machines (name, machine_category_id, nfc_tag_id, studio_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {MACHINE_COLUMNS}"
        ))
        .bind(payload.name)
        .bind(payload.machine_category_id)
        .bind(payload.nfc_tag_id)
        .bind(payload.studio_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(machine = %machine.name, studio_id = machine.studio_id, "Machine created");
        Ok(machine)
    }

    pub async fn list(&self) -> Result<Vec<Machine>> {
        let machines = sqlx::query_as::<_, Machine>(&format!(
            "SELECT {MACHINE_COLUMNS} FROM machines ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(machines)
    }

    pub async fn list_for_studio(&self, studio_id: i64) -> Result<Vec<Machine>> {
        let machines = sqlx::query_as::<_, Machine>(&format!(
            "SELECT {MACHINE_COLUMNS} FROM machines WHERE studio_id = $1 ORDER BY id"
        ))
        .bind(studio_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(machines)
    }

    pub async fn get(&self, id: i64) -> Result<Machine> {
        let machine = sqlx::query_as::<_, Machine>(&format!(
            "SELECT {MACHINE_COLUMNS} FROM machines WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Machine not found".to_string()))?;
        Ok(machine)
    }

    pub async fn update(&self, id: i64, payload: UpdateMachinePayload) -> Result<Machine> {
        let machine = sqlx::query_as::<_, Machine>(&format!(
            "UPDATE machines
             SET name = COALESCE($1, name),
                 machine_category_id = COALESCE($2, machine_category_id),
                 nfc_tag_id = COALESCE($3, nfc_tag_id),
                 updated_at = NOW()
             WHERE id = $4
             RETURNING {MACHINE_COLUMNS}"
        ))
        .bind(payload.name)
        .bind(payload.machine_category_id)
        .bind(payload.nfc_tag_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Machine not found".to_string()))?;
        info!(machine = %machine.name, "Machine updated");
        Ok(machine)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM machines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Machine not found".to_string()));
        }
        info!(machine_id = id, "Machine deleted");
        Ok(())
    }

    pub async fn create_category(&self, payload: MachineCategoryPayload) -> Result<MachineCategory> {
        let category = sqlx::query_as::<_, MachineCategory>(
            "INSERT INTO machine_categories (name) VALUES ($1)
             RETURNING id, name, created_at, updated_at",
        )
        .bind(payload.name)
        .fetch_one(&self.pool)
        .await?;
        info!(category = %category.name, "Machine category created");
        Ok(category)
    }

    pub async fn list_categories(&self) -> Result<Vec<MachineCategory>> {
        let categories = sqlx::query_as::<_, MachineCategory>(
            "SELECT id, name, created_at, updated_at FROM machine_categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    pub async fn get_category(&self, id: i64) -> Result<MachineCategory> {
        let category = sqlx::query_as::<_, MachineCategory>(
            "SELECT id, name, created_at, updated_at FROM machine_categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Machine category not found".to_string()))?;
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: i64,
        payload: MachineCategoryPayload,
    ) -> Result<MachineCategory> {
        let category = sqlx::query_as::<_, MachineCategory>(
            "UPDATE machine_categories SET name = $1, updated_at = NOW() WHERE id = $2
             RETURNING id, name, created_at, updated_at",
        )
        .bind(payload.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Machine category not found".to_string()))?;
        Ok(category)
    }

    pub async fn delete_category(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM machine_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Machine category not found".to_string()));
        }
        Ok(())
    }
}
