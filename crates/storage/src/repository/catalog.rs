use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::catalog::{CreateCategoryRequest, CreateProgramRequest};
use crate::error::{Result, StorageError};
use crate::models::{Category, Program};

const PROGRAM_COLUMNS: &str = "program_id, name, description, category_id, scheduled_date, \
     scheduled_time, venue, status, created_at";

/// Categories and programs, the read-mostly catalog awards refer to
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT category_id, name, description, created_at FROM categories ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn find_category(&self, id: Uuid) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            "SELECT category_id, name, description, created_at \
             FROM categories WHERE category_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("Category"))
    }

    pub async fn create_category(&self, req: &CreateCategoryRequest) -> Result<Category> {
        let result = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, description) VALUES ($1, $2) \
             RETURNING category_id, name, description, created_at",
        )
        .bind(req.name.trim())
        .bind(&req.description)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from);

        match result {
            Err(e) if e.is_unique_violation() => Err(StorageError::ConstraintViolation(format!(
                "Category '{}' already exists",
                req.name.trim()
            ))),
            other => other,
        }
    }

    pub async fn list_programs(&self) -> Result<Vec<Program>> {
        let sql = format!(
            "SELECT {PROGRAM_COLUMNS} FROM programs \
             ORDER BY scheduled_date NULLS LAST, name"
        );

        let programs = sqlx::query_as::<_, Program>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(programs)
    }

    pub async fn find_program(&self, id: Uuid) -> Result<Program> {
        let sql = format!("SELECT {PROGRAM_COLUMNS} FROM programs WHERE program_id = $1");

        sqlx::query_as::<_, Program>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found("Program"))
    }

    pub async fn create_program(&self, req: &CreateProgramRequest) -> Result<Program> {
        let sql = format!(
            "INSERT INTO programs \
                 (name, description, category_id, scheduled_date, scheduled_time, venue, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PROGRAM_COLUMNS}"
        );

        let result = sqlx::query_as::<_, Program>(&sql)
            .bind(req.name.trim())
            .bind(&req.description)
            .bind(req.category_id)
            .bind(req.scheduled_date)
            .bind(&req.scheduled_time)
            .bind(&req.venue)
            .bind(req.status_or_default())
            .fetch_one(self.pool)
            .await
            .map_err(StorageError::from);

        match result {
            Err(e) if e.is_foreign_key_violation() => Err(StorageError::not_found("Category")),
            other => other,
        }
    }
}
