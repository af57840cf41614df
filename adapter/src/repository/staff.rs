use crate::database::{model::staff::StaffRow, ConnectionPool};
use crate::repository::is_unique_violation;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::StaffId;
use kernel::model::staff::{
    event::{CreateStaff, StaffListOptions},
    Staff,
};
use kernel::repository::staff::StaffRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct StaffRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl StaffRepository for StaffRepositoryImpl {
    async fn create(&self, event: CreateStaff) -> AppResult<Staff> {
        let mut tx = self.db.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*) FROM staff WHERE email = $1
            "#,
        )
        .bind(&event.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if existing > 0 {
            return Err(AppError::Conflict(
                "Staff member with this email already exists".into(),
            ));
        }

        let row = sqlx::query_as::<_, StaffRow>(
            r#"
                INSERT INTO staff (staff_id, name, email, department, position)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING staff_id, name, email, department, position, created_at
            "#,
        )
        .bind(StaffId::new())
        .bind(&event.name)
        .bind(&event.email)
        .bind(event.department)
        .bind(&event.position)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Staff member with this email already exists".into())
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(row.into())
    }

    async fn find_all(&self, options: StaffListOptions) -> AppResult<Vec<Staff>> {
        let rows = match options.department {
            Some(department) => {
                sqlx::query_as::<_, StaffRow>(
                    r#"
                        SELECT staff_id, name, email, department, position, created_at
                        FROM staff
                        WHERE department = $1
                        ORDER BY created_at ASC
                    "#,
                )
                .bind(department)
                .fetch_all(self.db.inner_ref())
                .await
            }
            None => {
                sqlx::query_as::<_, StaffRow>(
                    r#"
                        SELECT staff_id, name, email, department, position, created_at
                        FROM staff
                        ORDER BY created_at ASC
                    "#,
                )
                .fetch_all(self.db.inner_ref())
                .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Staff::from).collect())
    }
}
