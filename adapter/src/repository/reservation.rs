use crate::database::{
    model::{reservation::ReservationRow, room::RoomRow},
    ConnectionPool,
};
use crate::repository::is_serialization_failure;
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::id::{GuestId, ReservationId, RoomId};
use kernel::model::reservation::{
    event::CreateReservation, Reservation, ReservationGuest, ReservationRoom, ReservationStatus,
    StayPeriod,
};
use kernel::model::room::RoomStatus;
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

const RESERVATION_COLUMNS: &str = r#"
    r.reservation_id,
    r.guest_id,
    g.name AS guest_name,
    g.email AS guest_email,
    r.room_id,
    ro.room_number,
    ro.room_type,
    r.check_in,
    r.check_out,
    r.status,
    r.created_at
"#;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;

        // The existence/availability checks and the insert must act as
        // one atomic unit, otherwise two concurrent requests can both
        // pass the overlap check and double-book the room.
        set_transaction_serializable(&mut tx).await?;

        let guest = sqlx::query_as::<_, (String, String)>(
            r#"
                SELECT name, email FROM guests WHERE guest_id = $1
            "#,
        )
        .bind(event.guest_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Guest not found".into()))?;

        let room = fetch_room(&mut *tx, event.room_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Room not found".into()))?;

        let period = StayPeriod::new(event.check_in, event.check_out)?;
        period.ensure_not_past(Utc::now().date_naive())?;

        if room.status != RoomStatus::Available
            || has_active_overlap(&mut *tx, event.room_id, &period).await?
        {
            return Err(AppError::Conflict(
                "Room not available for selected dates".into(),
            ));
        }

        let reservation_id = ReservationId::new();
        let (status, created_at) = sqlx::query_as::<_, (ReservationStatus, chrono::DateTime<Utc>)>(
            r#"
                INSERT INTO reservations (reservation_id, guest_id, room_id, check_in, check_out)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING status, created_at
            "#,
        )
        .bind(reservation_id)
        .bind(event.guest_id)
        .bind(event.room_id)
        .bind(period.check_in())
        .bind(period.check_out())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_booking_error)?;

        tx.commit().await.map_err(|e| {
            if is_serialization_failure(&e) {
                AppError::Conflict("Room not available for selected dates".into())
            } else {
                AppError::TransactionError(e)
            }
        })?;

        let (guest_name, guest_email) = guest;
        Ok(Reservation {
            id: reservation_id,
            guest: ReservationGuest {
                guest_id: event.guest_id,
                name: guest_name,
                email: guest_email,
            },
            room: ReservationRoom {
                room_id: event.room_id,
                room_number: room.room_number,
                room_type: room.room_type,
            },
            check_in: period.check_in(),
            check_out: period.check_out(),
            status,
            created_at,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(&format!(
            r#"
                SELECT {RESERVATION_COLUMNS}
                FROM reservations AS r
                INNER JOIN guests AS g ON r.guest_id = g.guest_id
                INNER JOIN rooms AS ro ON r.room_id = ro.room_id
                ORDER BY r.created_at ASC
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn find_by_guest_id(&self, guest_id: GuestId) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(&format!(
            r#"
                SELECT {RESERVATION_COLUMNS}
                FROM reservations AS r
                INNER JOIN guests AS g ON r.guest_id = g.guest_id
                INNER JOIN rooms AS ro ON r.room_id = ro.room_id
                WHERE r.guest_id = $1
                ORDER BY r.created_at ASC
            "#
        ))
        .bind(guest_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn is_available(&self, room_id: RoomId, period: StayPeriod) -> bool {
        // Fail closed: a room we cannot inspect is not offered.
        let room = match fetch_room(self.db.inner_ref(), room_id).await {
            Ok(Some(room)) => room,
            _ => return false,
        };
        if room.status != RoomStatus::Available {
            return false;
        }
        match has_active_overlap(self.db.inner_ref(), room_id, &period).await {
            Ok(overlap) => !overlap,
            Err(_) => false,
        }
    }
}

async fn set_transaction_serializable(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
) -> AppResult<()> {
    sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
        .execute(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
    Ok(())
}

async fn fetch_room<'e, E>(executor: E, room_id: RoomId) -> AppResult<Option<RoomRow>>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_as::<_, RoomRow>(
        r#"
            SELECT room_id, room_number, room_type, status, created_at
            FROM rooms
            WHERE room_id = $1
        "#,
    )
    .bind(room_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::SpecificOperationError)
}

/// The half-open overlap test against active reservations on a room:
/// `existing.check_out > new.check_in AND existing.check_in < new.check_out`.
async fn has_active_overlap<'e, E>(
    executor: E,
    room_id: RoomId,
    period: &StayPeriod,
) -> AppResult<bool>
where
    E: sqlx::PgExecutor<'e>,
{
    let overlapping = sqlx::query_scalar::<_, ReservationId>(
        r#"
            SELECT reservation_id
            FROM reservations
            WHERE room_id = $1
              AND status IN ('confirmed', 'checked_in')
              AND check_out > $2
              AND check_in < $3
            LIMIT 1
        "#,
    )
    .bind(room_id)
    .bind(period.check_in())
    .bind(period.check_out())
    .fetch_optional(executor)
    .await
    .map_err(AppError::SpecificOperationError)?;

    Ok(overlapping.is_some())
}

fn map_booking_error(e: sqlx::Error) -> AppError {
    if is_serialization_failure(&e) {
        AppError::Conflict("Room not available for selected dates".into())
    } else {
        AppError::SpecificOperationError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{guest::GuestRepositoryImpl, room::RoomRepositoryImpl};
    use chrono::{Duration, NaiveDate};
    use kernel::model::guest::event::CreateGuest;
    use kernel::model::room::{event::CreateRoom, RoomType};
    use kernel::repository::{guest::GuestRepository, room::RoomRepository};
    use std::sync::Arc;

    fn days(n: i64) -> NaiveDate {
        Utc::now().date_naive() + Duration::days(n)
    }

    async fn setup(pool: &sqlx::PgPool) -> anyhow::Result<(GuestId, RoomId)> {
        let guests = GuestRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let rooms = RoomRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let guest = guests
            .create(CreateGuest::new(
                "John Doe".into(),
                "john.doe@example.com".into(),
            ))
            .await?;
        let room = rooms
            .create(CreateRoom::new("101".into(), RoomType::Single))
            .await?;
        Ok((guest.id, room.id))
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn booking_returns_denormalized_view(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (guest_id, room_id) = setup(&pool).await?;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));

        let reservation = repo
            .create(CreateReservation::new(guest_id, room_id, days(1), days(5)))
            .await?;

        assert_eq!(reservation.guest.name, "John Doe");
        assert_eq!(reservation.guest.email, "john.doe@example.com");
        assert_eq!(reservation.room.room_number, "101");
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.check_in, days(1));
        assert_eq!(reservation.check_out, days(5));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn half_open_overlap_rule(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (guest_id, room_id) = setup(&pool).await?;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateReservation::new(guest_id, room_id, days(1), days(5)))
            .await?;

        // overlapping interval is rejected
        let overlapping = repo
            .create(CreateReservation::new(guest_id, room_id, days(4), days(6)))
            .await;
        assert!(matches!(overlapping, Err(AppError::Conflict(_))));

        // touching boundary is same-day turnover, accepted
        repo.create(CreateReservation::new(guest_id, room_id, days(5), days(8)))
            .await?;

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 2);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn validation_order_first_match_wins(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (guest_id, room_id) = setup(&pool).await?;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));

        // unknown guest wins over everything else
        let res = repo
            .create(CreateReservation::new(
                GuestId::new(),
                room_id,
                days(5),
                days(1),
            ))
            .await;
        match res {
            Err(AppError::EntityNotFound(msg)) => assert_eq!(msg, "Guest not found"),
            other => panic!("expected guest not-found, got {other:?}"),
        }

        // unknown room is reported before the invalid interval
        let res = repo
            .create(CreateReservation::new(
                guest_id,
                RoomId::new(),
                days(5),
                days(1),
            ))
            .await;
        match res {
            Err(AppError::EntityNotFound(msg)) => assert_eq!(msg, "Room not found"),
            other => panic!("expected room not-found, got {other:?}"),
        }

        // empty interval
        let res = repo
            .create(CreateReservation::new(guest_id, room_id, days(1), days(1)))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        // check-in yesterday
        let res = repo
            .create(CreateReservation::new(guest_id, room_id, days(-1), days(2)))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        // check-in today is fine
        repo.create(CreateReservation::new(guest_id, room_id, days(0), days(2)))
            .await?;

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn blocked_room_status_rejects_booking(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (guest_id, room_id) = setup(&pool).await?;
        sqlx::query("UPDATE rooms SET status = 'maintenance' WHERE room_id = $1")
            .bind(room_id)
            .execute(&pool)
            .await?;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo
            .create(CreateReservation::new(guest_id, room_id, days(1), days(3)))
            .await;
        assert!(matches!(res, Err(AppError::Conflict(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn checked_in_reservations_also_block(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (guest_id, room_id) = setup(&pool).await?;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let reservation = repo
            .create(CreateReservation::new(guest_id, room_id, days(1), days(5)))
            .await?;
        sqlx::query("UPDATE reservations SET status = 'checked_in' WHERE reservation_id = $1")
            .bind(reservation.id)
            .execute(&pool)
            .await?;

        let res = repo
            .create(CreateReservation::new(guest_id, room_id, days(2), days(4)))
            .await;
        assert!(matches!(res, Err(AppError::Conflict(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn availability_check_fails_closed(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (guest_id, room_id) = setup(&pool).await?;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let period = StayPeriod::new(days(1), days(5))?;

        // free and available
        assert!(repo.is_available(room_id, period).await);

        // unknown room reads as unavailable, not as an error
        assert!(!repo.is_available(RoomId::new(), period).await);

        repo.create(CreateReservation::new(guest_id, room_id, days(1), days(5)))
            .await?;
        assert!(!repo.is_available(room_id, period).await);

        // touching boundary stays available
        assert!(
            repo.is_available(room_id, StayPeriod::new(days(5), days(8))?)
                .await
        );

        // administratively blocked room is unavailable for any dates
        sqlx::query("UPDATE rooms SET status = 'occupied' WHERE room_id = $1")
            .bind(room_id)
            .execute(&pool)
            .await?;
        assert!(
            !repo
                .is_available(room_id, StayPeriod::new(days(10), days(12))?)
                .await
        );

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn reservations_are_listed_per_guest(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (guest_id, room_id) = setup(&pool).await?;
        let guests = GuestRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let other_guest = guests
            .create(CreateGuest::new(
                "Jane Roe".into(),
                "jane.roe@example.com".into(),
            ))
            .await?;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateReservation::new(guest_id, room_id, days(1), days(3)))
            .await?;
        repo.create(CreateReservation::new(
            other_guest.id,
            room_id,
            days(3),
            days(5),
        ))
        .await?;

        let mine = repo.find_by_guest_id(guest_id).await?;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].guest.guest_id, guest_id);

        let nobody = repo.find_by_guest_id(GuestId::new()).await?;
        assert!(nobody.is_empty());

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 2);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn concurrent_overlapping_bookings_cannot_both_win(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let (guest_id, room_id) = setup(&pool).await?;
        let repo = Arc::new(ReservationRepositoryImpl::new(ConnectionPool::new(
            pool.clone(),
        )));

        let first = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.create(CreateReservation::new(guest_id, room_id, days(1), days(5)))
                    .await
            })
        };
        let second = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.create(CreateReservation::new(guest_id, room_id, days(1), days(5)))
                    .await
            })
        };

        let (first, second) = tokio::join!(first, second);
        let successes = [first?, second?].into_iter().filter(Result::is_ok).count();
        assert!(successes <= 1, "double-booking slipped through");

        let stored = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reservations")
            .fetch_one(&pool)
            .await?;
        assert_eq!(stored as usize, successes);

        Ok(())
    }
}
