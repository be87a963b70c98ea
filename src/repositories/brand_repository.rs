use async_trait::async_trait;
use sqlx::PgPool;

use super::BrandRepository;
use crate::models::Brand;
use crate::utils::errors::AppResult;

pub struct PgBrandRepository {
    pool: PgPool,
}

impl PgBrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandRepository for PgBrandRepository {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Brand>> {
        let brand = sqlx::query_as::<_, Brand>("SELECT id, name FROM brands WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    async fn find_all(&self) -> AppResult<Vec<Brand>> {
        let brands = sqlx::query_as::<_, Brand>("SELECT id, name FROM brands ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(brands)
    }
}
