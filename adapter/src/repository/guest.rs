use crate::database::{model::guest::GuestRow, ConnectionPool};
use crate::repository::is_unique_violation;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::guest::{event::CreateGuest, Guest};
use kernel::model::id::GuestId;
use kernel::repository::guest::GuestRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct GuestRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GuestRepository for GuestRepositoryImpl {
    async fn create(&self, event: CreateGuest) -> AppResult<Guest> {
        let mut tx = self.db.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*) FROM guests WHERE email = $1
            "#,
        )
        .bind(&event.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if existing > 0 {
            return Err(AppError::Conflict(
                "Guest with this email already exists".into(),
            ));
        }

        let row = sqlx::query_as::<_, GuestRow>(
            r#"
                INSERT INTO guests (guest_id, name, email)
                VALUES ($1, $2, $3)
                RETURNING guest_id, name, email, created_at
            "#,
        )
        .bind(GuestId::new())
        .bind(&event.name)
        .bind(&event.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Guest with this email already exists".into())
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<Guest>> {
        let rows = sqlx::query_as::<_, GuestRow>(
            r#"
                SELECT guest_id, name, email, created_at
                FROM guests
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Guest::from).collect())
    }

    async fn find_by_id(&self, guest_id: GuestId) -> AppResult<Option<Guest>> {
        let row = sqlx::query_as::<_, GuestRow>(
            r#"
                SELECT guest_id, name, email, created_at
                FROM guests
                WHERE guest_id = $1
            "#,
        )
        .bind(guest_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Guest::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn register_and_find_guest(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = GuestRepositoryImpl::new(ConnectionPool::new(pool));

        let guest = repo
            .create(CreateGuest::new(
                "John Doe".into(),
                "john.doe@example.com".into(),
            ))
            .await?;
        assert_eq!(guest.name, "John Doe");
        assert_eq!(guest.email, "john.doe@example.com");

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 1);

        // repeated listing returns the same set absent writes
        let again = repo.find_all().await?;
        assert_eq!(
            all.iter().map(|g| g.id).collect::<Vec<_>>(),
            again.iter().map(|g| g.id).collect::<Vec<_>>()
        );

        let found = repo.find_by_id(guest.id).await?;
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "john.doe@example.com");

        let missing = repo.find_by_id(GuestId::new()).await?;
        assert!(missing.is_none());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn duplicate_email_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = GuestRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateGuest::new(
            "John Doe".into(),
            "john.doe@example.com".into(),
        ))
        .await?;

        let res = repo
            .create(CreateGuest::new(
                "Jon Dough".into(),
                "john.doe@example.com".into(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::Conflict(_))));

        // the first record is untouched
        let all = repo.find_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "John Doe");

        Ok(())
    }
}
