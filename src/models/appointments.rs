use chrono::NaiveDate;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub id: u64,
    pub barber_id: String,
    pub date: NaiveDate,
    pub start_hour: u32,
    pub duration_minutes: u32,
    pub client_name: String,
    pub service_id: Option<String>,
    pub notes: String,
}

impl Appointment {
    /// Whole hours blocked by this appointment, rounded up.
    pub fn blocked_hours(&self) -> u32 {
        crate::schedule::overlap::hours_for(self.duration_minutes)
    }

    /// First hour no longer blocked by this appointment.
    pub fn end_hour(&self) -> u32 {
        self.start_hour.saturating_add(self.blocked_hours())
    }
}

/// A cell the user is about to book. Never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSlot {
    pub barber_id: String,
    pub date: Option<NaiveDate>,
    pub hour: Option<u32>,
}

impl CandidateSlot {
    pub fn new<S: Into<String>>(barber_id: S, date: NaiveDate, hour: u32) -> Self {
        Self {
            barber_id: barber_id.into(),
            date: Some(date),
            hour: Some(hour),
        }
    }
}
