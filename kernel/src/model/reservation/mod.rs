pub mod event;

use crate::model::id::{GuestId, ReservationId, RoomId};
use crate::model::room::RoomType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "reservation_status", rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    CheckedIn,
}

impl ReservationStatus {
    /// Statuses that count against room availability.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }
}

/// A half-open stay interval `[check_in, check_out)`. The exclusive
/// check-out date lets a checkout and a check-in share the same
/// calendar date without conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayPeriod {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> AppResult<Self> {
        if check_in >= check_out {
            return Err(AppError::UnprocessableEntity(
                "Check-out must be after check-in".into(),
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Half-open interval intersection. Touching boundaries do not
    /// overlap: `[a, b)` and `[b, c)` are compatible stays.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        other.check_out > self.check_in && other.check_in < self.check_out
    }

    pub fn ensure_not_past(&self, today: NaiveDate) -> AppResult<()> {
        if self.check_in < today {
            return Err(AppError::UnprocessableEntity(
                "Check-in cannot be in the past".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest: ReservationGuest,
    pub room: ReservationRoom,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ReservationGuest {
    pub guest_id: GuestId,
    pub name: String,
    pub email: String,
}

#[derive(Debug)]
pub struct ReservationRoom {
    pub room_id: RoomId,
    pub room_number: String,
    pub room_type: RoomType,
}
