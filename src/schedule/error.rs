use chrono::NaiveDate;
use thiserror::Error;

use crate::models::appointments::Appointment;

/// Why a slot could not be selected or booked.
///
/// Every variant is correctable by the user; none of them is fatal.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

impl BookingError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::Invalid(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

/// The candidate slot is held by an existing appointment.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error(
    "{date} {hour:02}:00 is taken: {owner} is booked from {start_hour:02}:00 for {duration_minutes} min"
)]
pub struct ConflictError {
    pub barber_id: String,
    pub date: NaiveDate,
    pub hour: u32,
    pub owner: String,
    pub start_hour: u32,
    pub duration_minutes: u32,
    pub appointment_id: u64,
}

impl ConflictError {
    pub fn new(hour: u32, blocking: &Appointment) -> Self {
        Self {
            barber_id: blocking.barber_id.clone(),
            date: blocking.date,
            hour,
            owner: blocking.client_name.clone(),
            start_hour: blocking.start_hour,
            duration_minutes: blocking.duration_minutes,
            appointment_id: blocking.id,
        }
    }
}
