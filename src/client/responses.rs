use serde::Serialize;

use crate::{
    models::{barbers::Barber, services::Service},
    protocol::AppointItem,
    schedule::{
        commit::BookingConfirmation,
        grid::{CellHolder, SlotGrid},
    },
};

#[derive(Debug, Default, Serialize)]
pub struct SearchBarberResponse {
    pub success: bool,
    pub err: String,
    pub kind: String,
    pub barbers: Vec<Barber>,
}

#[derive(Debug, Default, Serialize)]
pub struct SearchServiceResponse {
    pub success: bool,
    pub err: String,
    pub kind: String,
    pub services: Vec<Service>,
}

#[derive(Debug, Default, Serialize)]
pub struct ViewWeekResponse {
    pub success: bool,
    pub err: String,
    pub kind: String,
    pub grid: Option<SlotGrid>,
    pub notice: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CheckSlotResponse {
    pub success: bool,
    pub err: String,
    pub kind: String,
    pub occupied: bool,
    pub holder: Option<CellHolder>,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct AppointResponse {
    pub success: bool,
    pub err: String,
    pub kind: String,
    pub confirmation: Option<BookingConfirmation>,
}

#[derive(Debug, Default, Serialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub kind: String,
    pub appointments: Vec<AppointItem>,
}

crate::impl_err_response! {
    SearchBarberResponse,
    SearchServiceResponse,
    ViewWeekResponse,
    CheckSlotResponse,
    AppointResponse,
    SearchAppointResponse,
}
