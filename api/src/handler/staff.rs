use crate::model::{
    staff::{CreateStaffRequest, StaffListQuery, StaffResponse},
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

pub async fn register_staff(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateStaffRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<StaffResponse>>)> {
    req.validate(&())?;

    registry
        .staff_repository()
        .create(req.into())
        .await
        .map(StaffResponse::from)
        .map(|staff| {
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    "Staff member created successfully",
                    staff,
                )),
            )
        })
}

pub async fn show_staff_list(
    Query(query): Query<StaffListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ApiResponse<Vec<StaffResponse>>>> {
    registry
        .staff_repository()
        .find_all(query.into())
        .await
        .map(|staff| staff.into_iter().map(StaffResponse::from).collect())
        .map(|staff| Json(ApiResponse::success("Staff retrieved successfully", staff)))
}
