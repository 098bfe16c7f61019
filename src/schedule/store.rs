use chrono::NaiveDate;

use crate::models::appointments::Appointment;

/// Booked appointments, in insertion order. Lives as long as the process.
///
/// The no-overlap invariant is only enforced by [`AppointmentStore::commit`];
/// [`AppointmentStore::insert_unchecked`] bypasses it.
#[derive(Clone, Debug, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_appointments(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    /// Identifier for the next appointment. Nothing is ever removed, so this
    /// keeps increasing.
    pub fn next_id(&self) -> u64 {
        self.appointments.len() as u64 + 1
    }

    /// Appointments of one barber on one day, ordered by start hour.
    pub fn on_day(&self, barber_id: &str, date: NaiveDate) -> Vec<&Appointment> {
        let mut res: Vec<_> = self
            .appointments
            .iter()
            .filter(|a| a.barber_id == barber_id && a.date == date)
            .collect();
        res.sort_by_key(|a| a.start_hour);
        res
    }

    /// Appointments whose date lies in `[from, to]`, ordered by date and hour.
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Appointment> {
        let mut res: Vec<_> = self
            .appointments
            .iter()
            .filter(|a| a.date >= from && a.date <= to)
            .collect();
        res.sort_by_key(|a| (a.date, a.start_hour, a.id));
        res
    }

    /// Appends without checking for overlaps.
    pub fn insert_unchecked(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }
}
