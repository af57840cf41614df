use crate::model::{
    room::{CreateRoomRequest, RoomListQuery, RoomResponse},
    ApiResponse,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn register_room(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RoomResponse>>)> {
    req.validate(&())?;

    registry
        .room_repository()
        .create(req.into())
        .await
        .map(RoomResponse::from)
        .map(|room| {
            (
                StatusCode::CREATED,
                Json(ApiResponse::success("Room created successfully", room)),
            )
        })
}

pub async fn show_room_list(
    Query(query): Query<RoomListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ApiResponse<Vec<RoomResponse>>>> {
    registry
        .room_repository()
        .find_all(query.into())
        .await
        .map(|rooms| rooms.into_iter().map(RoomResponse::from).collect())
        .map(|rooms| Json(ApiResponse::success("Rooms retrieved successfully", rooms)))
}
