use crate::model::room::{
    event::{CreateRoom, RoomListOptions},
    Room,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, event: CreateRoom) -> AppResult<Room>;
    async fn find_all(&self, options: RoomListOptions) -> AppResult<Vec<Room>>;
}
