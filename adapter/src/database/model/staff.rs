use chrono::{DateTime, Utc};
use kernel::model::{
    id::StaffId,
    staff::{Department, Staff},
};

#[derive(sqlx::FromRow)]
pub struct StaffRow {
    pub staff_id: StaffId,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub position: String,
    pub created_at: DateTime<Utc>,
}

impl From<StaffRow> for Staff {
    fn from(value: StaffRow) -> Self {
        let StaffRow {
            staff_id,
            name,
            email,
            department,
            position,
            created_at,
        } = value;
        Staff {
            id: staff_id,
            name,
            email,
            department,
            position,
            created_at,
        }
    }
}
