use chrono::{DateTime, Utc};
use kernel::model::{
    id::RoomId,
    room::{Room, RoomStatus, RoomType},
};

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub room_number: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            room_number,
            room_type,
            status,
            created_at,
        } = value;
        Room {
            id: room_id,
            room_number,
            room_type,
            status,
            created_at,
        }
    }
}
