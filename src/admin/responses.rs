use serde::Serialize;

use crate::{models::barbers::Barber, protocol::AppointItem};

#[derive(Default, Serialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub kind: String,
    pub appointments: Vec<AppointItem>,
}

#[derive(Default, Serialize)]
pub struct ViewAgendaResponse {
    pub success: bool,
    pub err: String,
    pub kind: String,
    pub barber: Option<Barber>,
    pub date: String,
    pub appointments: Vec<AppointItem>,
}

crate::impl_err_response! {
    SearchAppointResponse,
    ViewAgendaResponse,
}
