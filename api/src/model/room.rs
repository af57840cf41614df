use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, RoomListOptions},
        Room, RoomStatus, RoomType,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[garde(length(min = 1, max = 10))]
    pub room_number: String,
    #[garde(skip)]
    pub room_type: RoomType,
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(value: CreateRoomRequest) -> Self {
        let CreateRoomRequest {
            room_number,
            room_type,
        } = value;
        CreateRoom {
            room_number,
            room_type,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RoomListQuery {
    pub status: Option<RoomStatus>,
}

impl From<RoomListQuery> for RoomListOptions {
    fn from(value: RoomListQuery) -> Self {
        RoomListOptions {
            status: value.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: RoomId,
    pub room_number: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            room_number,
            room_type,
            status,
            created_at,
        } = value;
        Self {
            id,
            room_number,
            room_type,
            status,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_enums_use_wire_names() {
        let req: CreateRoomRequest =
            serde_json::from_str(r#"{"room_number": "101", "room_type": "suite"}"#).unwrap();
        assert_eq!(req.room_type, RoomType::Suite);

        // unknown enum values are rejected at deserialization
        let bad = serde_json::from_str::<CreateRoomRequest>(
            r#"{"room_number": "101", "room_type": "penthouse"}"#,
        );
        assert!(bad.is_err());

        assert_eq!(
            serde_json::to_value(RoomStatus::Maintenance).unwrap(),
            serde_json::json!("maintenance")
        );
    }
}
