use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchBarberRequest {
    pub name: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct SearchServiceRequest {
    pub name: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ViewWeekRequest {
    #[serde(default)]
    pub barber_id: String,
    pub service_id: Option<String>,
    #[serde(default)]
    pub week_offset: i64,
    pub selected_date: Option<String>,
    pub selected_hour: Option<u32>,
}

#[derive(Deserialize)]
pub struct CheckSlotRequest {
    #[serde(default)]
    pub barber_id: String,
    pub date: String,
    pub hour: u32,
    pub service_id: Option<String>,
    pub duration_minutes: Option<u32>,
}

#[derive(Deserialize)]
pub struct AppointRequest {
    #[serde(default)]
    pub barber_id: String,
    #[serde(default)]
    pub service_id: String,
    pub date: Option<String>,
    pub hour: Option<u32>,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub client_name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}
