use crate::model::{
    reservation::{CreateReservationRequest, GuestReservationResponse, ReservationResponse},
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
use shared::error::AppResult;

pub async fn register_reservation(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ReservationResponse>>)> {
    req.validate(&())?;

    registry
        .reservation_repository()
        .create(req.into())
        .await
        .map(ReservationResponse::from)
        .map(|reservation| {
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    "Reservation created successfully",
                    reservation,
                )),
            )
        })
}

pub async fn show_reservation_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ApiResponse<Vec<ReservationResponse>>>> {
    registry
        .reservation_repository()
        .find_all()
        .await
        .map(|reservations| {
            reservations
                .into_iter()
                .map(ReservationResponse::from)
                .collect()
        })
        .map(|reservations| {
            Json(ApiResponse::success(
                "Reservations retrieved successfully",
                reservations,
            ))
        })
}

pub async fn show_guest_reservations(
    Path(guest_id): Path<GuestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ApiResponse<Vec<GuestReservationResponse>>>> {
    registry
        .reservation_repository()
        .find_by_guest_id(guest_id)
        .await
        .map(|reservations| {
            reservations
                .into_iter()
                .map(GuestReservationResponse::from)
                .collect()
        })
        .map(|reservations| {
            Json(ApiResponse::success(
                "Guest reservations retrieved successfully",
                reservations,
            ))
        })
}
