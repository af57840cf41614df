use crate::model::staff::{
    event::{CreateStaff, StaffListOptions},
    Staff,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait StaffRepository: Send + Sync {
    async fn create(&self, event: CreateStaff) -> AppResult<Staff>;
    async fn find_all(&self, options: StaffListOptions) -> AppResult<Vec<Staff>>;
}
