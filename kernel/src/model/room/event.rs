use super::{RoomStatus, RoomType};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateRoom {
    pub room_number: String,
    pub room_type: RoomType,
}

#[derive(Debug, Default, new)]
pub struct RoomListOptions {
    pub status: Option<RoomStatus>,
}
