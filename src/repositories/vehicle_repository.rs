use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::VehicleRepository;
use crate::models::{Vehicle, VehicleRow};
use crate::utils::errors::AppResult;

const VEHICLE_SELECT: &str = r#"
    SELECT v.id, v.license_plate, v.kind, v.doors, v.displacement_cc,
           m.id AS model_id, m.name AS model_name, m.year AS model_year, m.version AS model_version,
           b.id AS brand_id, b.name AS brand_name
    FROM vehicles v
    JOIN models m ON m.id = v.model_id
    JOIN brands b ON b.id = m.brand_id
"#;

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let query = format!("{} WHERE v.id = $1", VEHICLE_SELECT);
        let row = sqlx::query_as::<_, VehicleRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Vehicle::try_from).transpose()
    }

    async fn find_by_model_name(&self, model_name: &str) -> AppResult<Option<Vehicle>> {
        let query = format!(
            "{} WHERE m.name = $1 ORDER BY v.license_plate LIMIT 1",
            VEHICLE_SELECT
        );
        let row = sqlx::query_as::<_, VehicleRow>(&query)
            .bind(model_name)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Vehicle::try_from).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let query = format!("{} ORDER BY v.license_plate", VEHICLE_SELECT);
        let rows = sqlx::query_as::<_, VehicleRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Vehicle::try_from).collect()
    }
}
