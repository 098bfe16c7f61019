use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddBarberRequest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialty: String,
}

#[derive(Deserialize)]
pub struct AddServiceRequest {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub duration_minutes: u32,
}

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub barber_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ViewAgendaRequest {
    pub barber_id: String,
    pub date: String,
}
