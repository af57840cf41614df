use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    guest::{event::CreateGuest, Guest},
    id::GuestId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGuestRequest {
    #[garde(length(min = 1, max = 100))]
    pub name: String,
    #[garde(email)]
    pub email: String,
}

impl From<CreateGuestRequest> for CreateGuest {
    fn from(value: CreateGuestRequest) -> Self {
        let CreateGuestRequest { name, email } = value;
        CreateGuest { name, email }
    }
}

#[derive(Debug, Serialize)]
pub struct GuestResponse {
    pub id: GuestId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Guest> for GuestResponse {
    fn from(value: Guest) -> Self {
        let Guest {
            id,
            name,
            email,
            created_at,
        } = value;
        Self {
            id,
            name,
            email,
            created_at,
        }
    }
}
