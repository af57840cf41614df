pub mod guest;
pub mod id;
pub mod reservation;
pub mod room;
pub mod staff;
