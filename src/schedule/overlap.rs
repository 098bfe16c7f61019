//! Conflict detection for hour-granular bookings.
//!
//! Durations are rounded up to whole hours, so a 30 minute service still
//! blocks the full hour cell. Intervals are half-open: an appointment ending
//! at 10 does not conflict with one starting at 10.

use chrono::NaiveDate;

use super::store::AppointmentStore;
use crate::models::appointments::Appointment;

/// Whole hours covered by `minutes`, rounded up.
pub fn hours_for(minutes: u32) -> u32 {
    minutes.saturating_add(59) / 60
}

/// Whether `[a_start, a_end)` and `[b_start, b_end)` intersect.
pub fn intervals_overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && a_end > b_start
}

impl AppointmentStore {
    /// First stored appointment (in insertion order) that blocks a candidate
    /// of `candidate_minutes` starting at `hour`.
    ///
    /// An empty `barber_id` never conflicts: nothing is shown as taken
    /// before a barber is picked.
    pub fn find_conflict(
        &self,
        date: NaiveDate,
        hour: u32,
        barber_id: &str,
        candidate_minutes: u32,
    ) -> Option<&Appointment> {
        if barber_id.is_empty() {
            return None;
        }

        let candidate_end = hour.saturating_add(hours_for(candidate_minutes));
        self.iter()
            .filter(|a| a.barber_id == barber_id && a.date == date)
            .find(|a| intervals_overlap(hour, candidate_end, a.start_hour, a.end_hour()))
    }

    pub fn is_occupied(
        &self,
        date: NaiveDate,
        hour: u32,
        barber_id: &str,
        candidate_minutes: u32,
    ) -> bool {
        self.find_conflict(date, hour, barber_id, candidate_minutes)
            .is_some()
    }
}
