use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Barber {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

impl Barber {
    pub fn new<S1, S2, S3>(id: S1, name: S2, specialty: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}
