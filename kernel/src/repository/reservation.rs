use crate::model::id::{GuestId, RoomId};
use crate::model::reservation::{event::CreateReservation, Reservation, StayPeriod};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Book a room. Checks guest/room existence, interval validity and
    /// availability in order, atomically with respect to concurrent
    /// bookings on the same room.
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;
    async fn find_by_guest_id(&self, guest_id: GuestId) -> AppResult<Vec<Reservation>>;
    /// Pure availability decision: the room must be administratively
    /// available and free of active overlapping reservations. Fails
    /// closed, so a store error reads as "not available".
    async fn is_available(&self, room_id: RoomId, period: StayPeriod) -> bool;
}
