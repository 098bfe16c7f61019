use chrono::NaiveDate;

use super::{
    commit::{BookingConfirmation, BookingDetails},
    error::{BookingError, ConflictError},
    store::AppointmentStore,
};
use crate::models::{appointments::CandidateSlot, barbers::Barber, services::Service};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NoResource,
    ResourceChosen,
    ServiceChosen,
    SlotSelected,
    Committed,
}

/// One customer's way through picking a barber, a service and a slot.
///
/// Going back is always allowed: choosing another barber or service drops
/// the selected slot.
#[derive(Clone, Debug, Default)]
pub struct BookingSession {
    barber: Option<Barber>,
    service: Option<Service>,
    slot: Option<(NaiveDate, u32)>,
    committed: bool,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.committed {
            SessionState::Committed
        } else if self.barber.is_none() {
            SessionState::NoResource
        } else if self.service.is_none() {
            SessionState::ResourceChosen
        } else if self.slot.is_none() {
            SessionState::ServiceChosen
        } else {
            SessionState::SlotSelected
        }
    }

    pub fn barber(&self) -> Option<&Barber> {
        self.barber.as_ref()
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn selected(&self) -> Option<(NaiveDate, u32)> {
        self.slot
    }

    pub fn choose_barber(&mut self, barber: Barber) {
        self.barber = Some(barber);
        self.slot = None;
        self.committed = false;
    }

    pub fn choose_service(&mut self, service: Service) {
        self.service = Some(service);
        self.slot = None;
        self.committed = false;
    }

    pub fn clear_service(&mut self) {
        self.service = None;
        self.slot = None;
        self.committed = false;
    }

    /// Selects a cell. Occupied cells are refused with the holder's details.
    pub fn select_slot(
        &mut self,
        store: &AppointmentStore,
        date: NaiveDate,
        hour: u32,
    ) -> Result<(), BookingError> {
        let barber = self
            .barber
            .as_ref()
            .ok_or(BookingError::MissingField("barber"))?;
        let service = self
            .service
            .as_ref()
            .ok_or(BookingError::MissingField("service"))?;

        if let Some(blocking) = store.find_conflict(date, hour, &barber.id, service.duration_minutes)
        {
            return Err(ConflictError::new(hour, blocking).into());
        }

        self.slot = Some((date, hour));
        self.committed = false;
        Ok(())
    }

    pub fn candidate(&self) -> CandidateSlot {
        CandidateSlot {
            barber_id: self
                .barber
                .as_ref()
                .map(|b| b.id.clone())
                .unwrap_or_default(),
            date: self.slot.map(|(date, _)| date),
            hour: self.slot.map(|(_, hour)| hour),
        }
    }

    /// Commits the selected slot. On failure the selection is kept so the
    /// user can look at it and pick another one.
    pub fn commit(
        &mut self,
        store: &mut AppointmentStore,
        details: &BookingDetails,
    ) -> Result<BookingConfirmation, BookingError> {
        if self.committed {
            return Err(BookingError::Invalid(
                "This booking was already confirmed".to_string(),
            ));
        }

        let confirmation = store.commit(
            &self.candidate(),
            self.barber.as_ref(),
            self.service.as_ref(),
            details,
        )?;
        self.slot = None;
        self.committed = true;
        Ok(confirmation)
    }

    /// Starts the next booking, keeping the chosen barber and service.
    pub fn start_over(&mut self) {
        self.slot = None;
        self.committed = false;
    }
}
