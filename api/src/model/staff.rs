use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::StaffId,
    staff::{
        event::{CreateStaff, StaffListOptions},
        Department, Staff,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStaffRequest {
    #[garde(length(min = 1, max = 100))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub department: Department,
    #[garde(length(min = 1, max = 50))]
    pub position: String,
}

impl From<CreateStaffRequest> for CreateStaff {
    fn from(value: CreateStaffRequest) -> Self {
        let CreateStaffRequest {
            name,
            email,
            department,
            position,
        } = value;
        CreateStaff {
            name,
            email,
            department,
            position,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StaffListQuery {
    pub department: Option<Department>,
}

impl From<StaffListQuery> for StaffListOptions {
    fn from(value: StaffListQuery) -> Self {
        StaffListOptions {
            department: value.department,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub id: StaffId,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub position: String,
    pub created_at: DateTime<Utc>,
}

impl From<Staff> for StaffResponse {
    fn from(value: Staff) -> Self {
        let Staff {
            id,
            name,
            email,
            department,
            position,
            created_at,
        } = value;
        Self {
            id,
            name,
            email,
            department,
            position,
            created_at,
        }
    }
}
