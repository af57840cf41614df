pub mod guest;
pub mod reservation;
pub mod room;
pub mod staff;

use serde::Serialize;

pub const STATUS_SUCCESS: i32 = 1;

/// The uniform response envelope. Success and error share the shape;
/// the embedded `status_code` is the authoritative outcome signal
/// (`1` success, `2` error — the error side is rendered by
/// `shared::error`), independent of the HTTP status.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status_code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: STATUS_SUCCESS,
            message: message.into(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let res = ApiResponse::success("Guests retrieved successfully", vec!["a", "b"]);
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["status_code"], 1);
        assert_eq!(json["message"], "Guests retrieved successfully");
        assert_eq!(json["data"], serde_json::json!(["a", "b"]));
    }
}
