pub mod event;

use crate::model::id::RoomId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "room_type", rename_all = "snake_case")]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

/// Administrative room state. Booking never flips this flag;
/// occupancy is derived from reservation intervals alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "room_status", rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

#[derive(Debug)]
pub struct Room {
    pub id: RoomId,
    pub room_number: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}
