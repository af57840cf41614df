use super::Department;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateStaff {
    pub name: String,
    pub email: String,
    pub department: Department,
    pub position: String,
}

#[derive(Debug, Default, new)]
pub struct StaffListOptions {
    pub department: Option<Department>,
}
