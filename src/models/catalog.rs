use anyhow::bail;

use super::{barbers::Barber, services::Service};

/// Reference data the booking flow reads from: who can be booked and for what.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    barbers: Vec<Barber>,
    services: Vec<Service>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn barbers(&self) -> &[Barber] {
        &self.barbers
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn barber(&self, id: &str) -> Option<&Barber> {
        self.barbers.iter().find(|b| b.id == id)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn add_barber(&mut self, barber: Barber) -> anyhow::Result<()> {
        if barber.id.trim().is_empty() {
            bail!("Barber id must not be empty");
        }
        if barber.name.trim().is_empty() {
            bail!("Barber name must not be empty");
        }
        if self.barber(&barber.id).is_some() {
            bail!("Duplicate barber id '{}'", barber.id);
        }
        self.barbers.push(barber);
        Ok(())
    }

    pub fn add_service(&mut self, service: Service) -> anyhow::Result<()> {
        if service.id.trim().is_empty() {
            bail!("Service id must not be empty");
        }
        if service.name.trim().is_empty() {
            bail!("Service name must not be empty");
        }
        if service.duration_minutes == 0 {
            bail!("Service duration must be positive");
        }
        if self.service(&service.id).is_some() {
            bail!("Duplicate service id '{}'", service.id);
        }
        self.services.push(service);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let mut catalog = Catalog::new();
        catalog
            .add_barber(Barber::new("1", "Carlos", "Fades"))
            .unwrap();
        catalog
            .add_service(Service::new("cut", "Haircut", 150, 30))
            .unwrap();

        assert_eq!(catalog.barber("1").unwrap().name, "Carlos");
        assert_eq!(catalog.service("cut").unwrap().duration_minutes, 30);
        assert!(catalog.barber("2").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut catalog = Catalog::new();
        catalog.add_barber(Barber::new("1", "Carlos", "")).unwrap();
        let err = catalog
            .add_barber(Barber::new("1", "Luis", ""))
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
        assert_eq!(catalog.barbers().len(), 1);
    }

    #[test]
    fn rejects_zero_duration_service() {
        let mut catalog = Catalog::new();
        assert!(catalog
            .add_service(Service::new("x", "Nothing", 0, 0))
            .is_err());
        assert!(catalog.services().is_empty());
    }
}
