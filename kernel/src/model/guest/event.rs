use derive_new::new;

#[derive(Debug, new)]
pub struct CreateGuest {
    pub name: String,
    pub email: String,
}
