use anyhow::{bail, Context};

use crate::models::{barbers::Barber, catalog::Catalog, services::Service};

pub fn assert_barber(catalog: &Catalog, barber_id: &str) -> anyhow::Result<Barber> {
    if barber_id.is_empty() {
        bail!("No barber selected");
    }
    catalog
        .barber(barber_id)
        .cloned()
        .with_context(|| format!("No such barber '{}'", barber_id))
}

pub fn assert_service(catalog: &Catalog, service_id: &str) -> anyhow::Result<Service> {
    if service_id.is_empty() {
        bail!("No service selected");
    }
    catalog
        .service(service_id)
        .cloned()
        .with_context(|| format!("No such service '{}'", service_id))
}
