use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    id::{GuestId, ReservationId, RoomId},
    reservation::{Reservation, ReservationGuest, ReservationRoom, ReservationStatus},
    room::RoomType,
};

/// Joined view over reservations, guests and rooms. Guest and room
/// columns are denormalized at read time, never at storage time.
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub guest_id: GuestId,
    pub guest_name: String,
    pub guest_email: String,
    pub room_id: RoomId,
    pub room_number: String,
    pub room_type: RoomType,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            reservation_id,
            guest_id,
            guest_name,
            guest_email,
            room_id,
            room_number,
            room_type,
            check_in,
            check_out,
            status,
            created_at,
        } = value;
        Reservation {
            id: reservation_id,
            guest: ReservationGuest {
                guest_id,
                name: guest_name,
                email: guest_email,
            },
            room: ReservationRoom {
                room_id,
                room_number,
                room_type,
            },
            check_in,
            check_out,
            status,
            created_at,
        }
    }
}
