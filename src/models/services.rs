use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub duration_minutes: u32,
}

impl Service {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        id: S1,
        name: S2,
        price: u32,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            duration_minutes,
        }
    }
}
