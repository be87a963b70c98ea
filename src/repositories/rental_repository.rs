use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::RentalRepository;
use crate::models::Rental;
use crate::utils::errors::AppResult;

const RENTAL_COLUMNS: &str = "id, vehicle_id, start_date, end_date, value, created_at, updated_at";

pub struct PgRentalRepository {
    pool: PgPool,
}

impl PgRentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RentalRepository for PgRentalRepository {
    async fn find_all(&self) -> AppResult<Vec<Rental>> {
        let query = format!("SELECT {} FROM rentals ORDER BY start_date, id", RENTAL_COLUMNS);
        let rentals = sqlx::query_as::<_, Rental>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rental>> {
        let query = format!("SELECT {} FROM rentals WHERE id = $1", RENTAL_COLUMNS);
        let rental = sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    async fn find_by_vehicle_and_date_range(
        &self,
        vehicle_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Rental>> {
        let query = format!(
            r#"
            SELECT {}
            FROM rentals
            WHERE vehicle_id = $1 AND start_date <= $3 AND end_date >= $2
            ORDER BY start_date, id
            "#,
            RENTAL_COLUMNS
        );
        let rentals = sqlx::query_as::<_, Rental>(&query)
            .bind(vehicle_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    async fn save(&self, rental: &Rental) -> AppResult<Rental> {
        let query = format!(
            r#"
            INSERT INTO rentals ({cols})
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {cols}
            "#,
            cols = RENTAL_COLUMNS
        );
        let saved = sqlx::query_as::<_, Rental>(&query)
            .bind(rental.id)
            .bind(rental.vehicle_id)
            .bind(rental.start_date)
            .bind(rental.end_date)
            .bind(rental.value)
            .bind(rental.created_at)
            .bind(rental.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(saved)
    }

    async fn update(&self, rental: &Rental) -> AppResult<Option<Rental>> {
        let query = format!(
            r#"
            UPDATE rentals
            SET vehicle_id = $2, start_date = $3, end_date = $4, value = $5, updated_at = $6
            WHERE id = $1
            RETURNING {}
            "#,
            RENTAL_COLUMNS
        );
        let updated = sqlx::query_as::<_, Rental>(&query)
            .bind(rental.id)
            .bind(rental.vehicle_id)
            .bind(rental.start_date)
            .bind(rental.end_date)
            .bind(rental.value)
            .bind(rental.updated_at)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
