//! Demo data so a freshly started server has something to show.
//!
//! Dates are derived from the `today` passed in, never from the clock.

use chrono::{Duration, NaiveDate};

use crate::models::{
    appointments::Appointment, barbers::Barber, catalog::Catalog, services::Service,
};

pub fn demo_catalog() -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::new();
    catalog.add_barber(Barber::new("1", "Carlos Mendoza", "Fades and skin fades"))?;
    catalog.add_barber(Barber::new("2", "Miguel Torres", "Classic cuts"))?;
    catalog.add_barber(Barber::new("3", "Andrés Ruiz", "Beards and shaves"))?;

    catalog.add_service(Service::new("1", "Haircut", 150, 30))?;
    catalog.add_service(Service::new("2", "Haircut and beard", 250, 60))?;
    catalog.add_service(Service::new("3", "Hot towel shave", 180, 45))?;
    catalog.add_service(Service::new("4", "Full grooming", 400, 90))?;
    Ok(catalog)
}

pub fn seed_demo_appointments(today: NaiveDate) -> Vec<Appointment> {
    let tomorrow = today + Duration::days(1);
    let day_after = today + Duration::days(2);

    let rows: [(&str, NaiveDate, u32, u32, &str, &str); 7] = [
        ("1", today, 9, 60, "Juan Pérez", "2"),
        ("1", today, 14, 30, "Roberto Díaz", "1"),
        ("2", today, 10, 90, "Fernando López", "4"),
        ("3", today, 16, 45, "Jorge Castillo", "3"),
        ("1", tomorrow, 11, 60, "Pedro Gómez", "2"),
        ("2", tomorrow, 15, 30, "Luis Herrera", "1"),
        ("3", day_after, 9, 90, "Ricardo Silva", "4"),
    ];

    rows.iter()
        .zip(1..)
        .map(
            |(&(barber_id, date, start_hour, duration_minutes, client_name, service_id), id)| {
                Appointment {
                    id,
                    barber_id: barber_id.to_string(),
                    date,
                    start_hour,
                    duration_minutes,
                    client_name: client_name.to_string(),
                    service_id: Some(service_id.to_string()),
                    notes: String::new(),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{overlap::intervals_overlap, tests::date};

    #[test]
    fn seed_is_relative_to_today() {
        let today = date(2025, 6, 10);
        let seed = seed_demo_appointments(today);

        assert!(!seed.is_empty());
        assert!(seed
            .iter()
            .all(|a| a.date >= today && a.date <= date(2025, 6, 12)));
        assert_eq!(seed_demo_appointments(today), seed);

        let ids: Vec<u64> = seed.iter().map(|a| a.id).collect();
        assert_eq!(ids, (1..=seed.len() as u64).collect::<Vec<_>>());
    }

    #[test]
    fn seed_has_no_overlaps() {
        let seed = seed_demo_appointments(date(2025, 6, 10));
        for (i, a) in seed.iter().enumerate() {
            for b in &seed[i + 1..] {
                if a.barber_id == b.barber_id && a.date == b.date {
                    assert!(!intervals_overlap(
                        a.start_hour,
                        a.end_hour(),
                        b.start_hour,
                        b.end_hour()
                    ));
                }
            }
        }
    }

    #[test]
    fn seed_refers_to_catalog_entries() {
        let catalog = demo_catalog().unwrap();
        for a in seed_demo_appointments(date(2025, 6, 10)) {
            assert!(catalog.barber(&a.barber_id).is_some());
            let service = catalog.service(a.service_id.as_deref().unwrap()).unwrap();
            assert_eq!(service.duration_minutes, a.duration_minutes);
        }
    }
}
