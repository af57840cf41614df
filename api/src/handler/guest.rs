use crate::model::{
    guest::{CreateGuestRequest, GuestResponse},
    ApiResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::GuestId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_guest(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateGuestRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<GuestResponse>>)> {
    req.validate(&())?;

    registry
        .guest_repository()
        .create(req.into())
        .await
        .map(GuestResponse::from)
        .map(|guest| {
            (
                StatusCode::CREATED,
                Json(ApiResponse::success("Guest created successfully", guest)),
            )
        })
}

pub async fn show_guest_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ApiResponse<Vec<GuestResponse>>>> {
    registry
        .guest_repository()
        .find_all()
        .await
        .map(|guests| guests.into_iter().map(GuestResponse::from).collect())
        .map(|guests| {
            Json(ApiResponse::success(
                "Guests retrieved successfully",
                guests,
            ))
        })
}

pub async fn show_guest(
    Path(guest_id): Path<GuestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ApiResponse<GuestResponse>>> {
    registry
        .guest_repository()
        .find_by_id(guest_id)
        .await
        .and_then(|guest| match guest {
            Some(guest) => Ok(Json(ApiResponse::success(
                "Guest retrieved successfully",
                guest.into(),
            ))),
            None => Err(AppError::EntityNotFound("Guest not found".into())),
        })
}
