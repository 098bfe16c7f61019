use chrono::NaiveDate;
use serde::Serialize;

use super::{
    error::{BookingError, ConflictError},
    store::AppointmentStore,
};
use crate::models::{
    appointments::{Appointment, CandidateSlot},
    barbers::Barber,
    services::Service,
};

/// What the client fills in besides the slot itself.
#[derive(Clone, Debug, Default)]
pub struct BookingDetails {
    pub client_name: String,
    pub notes: String,
}

/// Summary handed back after a successful booking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub appointment_id: u64,
    pub barber_id: String,
    pub barber_name: String,
    pub specialty: String,
    pub service_name: String,
    pub price: u32,
    pub duration_minutes: u32,
    pub date: NaiveDate,
    pub hour: u32,
    pub client_name: String,
    pub notes: String,
}

impl AppointmentStore {
    /// Books `slot` if it is still free.
    ///
    /// The slot is checked again against the current contents of the store,
    /// since it may have been taken after it was selected. The store is left
    /// untouched on any error.
    pub fn commit(
        &mut self,
        slot: &CandidateSlot,
        barber: Option<&Barber>,
        service: Option<&Service>,
        details: &BookingDetails,
    ) -> Result<BookingConfirmation, BookingError> {
        let barber = match barber {
            Some(barber) if !slot.barber_id.is_empty() => barber,
            _ => return Err(BookingError::MissingField("barber")),
        };
        let service = service.ok_or(BookingError::MissingField("service"))?;
        let date = slot.date.ok_or(BookingError::MissingField("date"))?;
        let hour = slot.hour.ok_or(BookingError::MissingField("hour"))?;
        if details.client_name.trim().is_empty() {
            return Err(BookingError::MissingField("client_name"));
        }
        if barber.id != slot.barber_id {
            return Err(BookingError::Invalid(format!(
                "Slot belongs to barber '{}', not '{}'",
                slot.barber_id, barber.id
            )));
        }

        if let Some(blocking) = self.find_conflict(date, hour, &barber.id, service.duration_minutes)
        {
            let conflict = ConflictError::new(hour, blocking);
            log::warn!("Rejected booking for {}: {}", details.client_name, conflict);
            return Err(conflict.into());
        }

        let appointment = Appointment {
            id: self.next_id(),
            barber_id: barber.id.clone(),
            date,
            start_hour: hour,
            duration_minutes: service.duration_minutes,
            client_name: details.client_name.trim().to_string(),
            service_id: Some(service.id.clone()),
            notes: details.notes.clone(),
        };
        let confirmation = BookingConfirmation {
            appointment_id: appointment.id,
            barber_id: barber.id.clone(),
            barber_name: barber.name.clone(),
            specialty: barber.specialty.clone(),
            service_name: service.name.clone(),
            price: service.price,
            duration_minutes: service.duration_minutes,
            date,
            hour,
            client_name: appointment.client_name.clone(),
            notes: appointment.notes.clone(),
        };

        log::info!(
            "Booked appointment {} with {} on {} at {:02}:00",
            appointment.id,
            barber.name,
            date,
            hour
        );
        self.insert_unchecked(appointment);
        Ok(confirmation)
    }
}
