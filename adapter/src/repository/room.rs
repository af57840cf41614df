use crate::database::{model::room::RoomRow, ConnectionPool};
use crate::repository::is_unique_violation;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::RoomId;
use kernel::model::room::{
    event::{CreateRoom, RoomListOptions},
    Room,
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let mut tx = self.db.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*) FROM rooms WHERE room_number = $1
            "#,
        )
        .bind(&event.room_number)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if existing > 0 {
            return Err(AppError::Conflict("Room number already exists".into()));
        }

        // new rooms start administratively available
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
                INSERT INTO rooms (room_id, room_number, room_type)
                VALUES ($1, $2, $3)
                RETURNING room_id, room_number, room_type, status, created_at
            "#,
        )
        .bind(RoomId::new())
        .bind(&event.room_number)
        .bind(event.room_type)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Room number already exists".into())
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(row.into())
    }

    async fn find_all(&self, options: RoomListOptions) -> AppResult<Vec<Room>> {
        let rows = match options.status {
            Some(status) => {
                sqlx::query_as::<_, RoomRow>(
                    r#"
                        SELECT room_id, room_number, room_type, status, created_at
                        FROM rooms
                        WHERE status = $1
                        ORDER BY room_number ASC
                    "#,
                )
                .bind(status)
                .fetch_all(self.db.inner_ref())
                .await
            }
            None => {
                sqlx::query_as::<_, RoomRow>(
                    r#"
                        SELECT room_id, room_number, room_type, status, created_at
                        FROM rooms
                        ORDER BY room_number ASC
                    "#,
                )
                .fetch_all(self.db.inner_ref())
                .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::room::{RoomStatus, RoomType};

    #[sqlx::test(migrations = "../migrations")]
    async fn register_room_and_filter_by_status(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = RoomRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let room = repo
            .create(CreateRoom::new("101".into(), RoomType::Single))
            .await?;
        assert_eq!(room.room_number, "101");
        assert_eq!(room.status, RoomStatus::Available);

        repo.create(CreateRoom::new("102".into(), RoomType::Suite))
            .await?;

        // status changes are administrative, outside the API surface
        sqlx::query("UPDATE rooms SET status = 'maintenance' WHERE room_number = '102'")
            .execute(&pool)
            .await?;

        let all = repo.find_all(RoomListOptions::default()).await?;
        assert_eq!(all.len(), 2);

        let available = repo
            .find_all(RoomListOptions::new(Some(RoomStatus::Available)))
            .await?;
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].room_number, "101");

        let maintenance = repo
            .find_all(RoomListOptions::new(Some(RoomStatus::Maintenance)))
            .await?;
        assert_eq!(maintenance.len(), 1);
        assert_eq!(maintenance[0].room_number, "102");

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn duplicate_room_number_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = RoomRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateRoom::new("101".into(), RoomType::Single))
            .await?;

        let res = repo
            .create(CreateRoom::new("101".into(), RoomType::Double))
            .await;
        assert!(matches!(res, Err(AppError::Conflict(_))));

        let all = repo.find_all(RoomListOptions::default()).await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].room_type, RoomType::Single);

        Ok(())
    }
}
