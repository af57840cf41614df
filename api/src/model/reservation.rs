use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    id::{GuestId, ReservationId, RoomId},
    reservation::{event::CreateReservation, Reservation, ReservationStatus},
    room::RoomType,
};
use serde::{Deserialize, Serialize};

// Date ordering and the not-in-the-past rule are checked inside the
// creation flow, after guest/room existence, to keep the documented
// failure-mode order.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub guest_id: GuestId,
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(skip)]
    pub check_in: NaiveDate,
    #[garde(skip)]
    pub check_out: NaiveDate,
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
            guest_id,
            room_id,
            check_in,
            check_out,
        } = value;
        CreateReservation {
            guest_id,
            room_id,
            check_in,
            check_out,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub guest_name: String,
    pub guest_email: String,
    pub room_number: String,
    pub room_type: RoomType,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            guest,
            room,
            check_in,
            check_out,
            status,
            created_at,
        } = value;
        Self {
            id,
            guest_name: guest.name,
            guest_email: guest.email,
            room_number: room.room_number,
            room_type: room.room_type,
            check_in,
            check_out,
            status,
            created_at,
        }
    }
}

/// Guest-scoped listing omits the guest's own columns.
#[derive(Debug, Serialize)]
pub struct GuestReservationResponse {
    pub id: ReservationId,
    pub room_number: String,
    pub room_type: RoomType,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for GuestReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            guest: _,
            room,
            check_in,
            check_out,
            status,
            created_at,
        } = value;
        Self {
            id,
            room_number: room.room_number,
            room_type: room.room_type,
            check_in,
            check_out,
            status,
            created_at,
        }
    }
}
