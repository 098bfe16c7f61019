use serde::Serialize;

use crate::{
    models::{appointments::Appointment, catalog::Catalog},
    schedule::error::BookingError,
};

#[derive(Debug, Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
    pub kind: String,
}

impl SimpleResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }
}

/// Tells the client whether it should pick another slot (`conflict`), fill in
/// something it left out (`validation`), or fix the request itself.
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<BookingError>() {
        Some(e) if e.is_conflict() => "conflict",
        Some(_) => "validation",
        None => "request",
    }
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err(err: &anyhow::Error) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        kind: $crate::protocol::error_kind(err).to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct AppointItem {
    pub id: u64,
    pub barber_id: String,
    pub barber_name: String,
    pub service_name: String,
    pub date: String,
    pub hour: u32,
    pub duration_minutes: u32,
    pub client_name: String,
    pub notes: String,
}

impl AppointItem {
    pub fn new(appointment: &Appointment, catalog: &Catalog) -> Self {
        Self {
            id: appointment.id,
            barber_id: appointment.barber_id.clone(),
            barber_name: catalog
                .barber(&appointment.barber_id)
                .map(|b| b.name.clone())
                .unwrap_or_default(),
            service_name: appointment
                .service_id
                .as_deref()
                .and_then(|id| catalog.service(id))
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            date: crate::utils::format_date_str(&appointment.date),
            hour: appointment.start_hour,
            duration_minutes: appointment.duration_minutes,
            client_name: appointment.client_name.clone(),
            notes: appointment.notes.clone(),
        }
    }
}

