pub mod guest;
pub mod health;
pub mod reservation;
pub mod room;
pub mod staff;

/// Unique-constraint violations back the application-level duplicate
/// check, so a concurrent insert on the same natural key still
/// surfaces as a conflict instead of a 500.
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// SQLSTATE 40001. Under SERIALIZABLE isolation the losing side of two
/// concurrent bookings aborts with this code; it is reported as a
/// booking conflict, not an internal error.
pub(crate) fn is_serialization_failure(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.code().as_deref() == Some("40001"))
}
