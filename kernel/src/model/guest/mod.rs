pub mod event;

use crate::model::id::GuestId;
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
