pub mod event;

use crate::model::id::StaffId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "staff_department", rename_all = "snake_case")]
pub enum Department {
    Housekeeping,
    FrontDesk,
    Maintenance,
}

#[derive(Debug)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub position: String,
    pub created_at: DateTime<Utc>,
}
