use crate::model::id::{GuestId, RoomId};
use chrono::NaiveDate;
use derive_new::new;

// Raw dates on purpose: guest/room existence is checked before the
// interval itself is validated, so the period is only constructed
// inside the creation flow.
#[derive(Debug, new)]
pub struct CreateReservation {
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}
