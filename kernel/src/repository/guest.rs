use crate::model::guest::{event::CreateGuest, Guest};
use crate::model::id::GuestId;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn create(&self, event: CreateGuest) -> AppResult<Guest>;
    async fn find_all(&self) -> AppResult<Vec<Guest>>;
    async fn find_by_id(&self, guest_id: GuestId) -> AppResult<Option<Guest>>;
}
