//! Weekly availability grid (Monday to Saturday, one cell per business hour).

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::{
    error::{BookingError, ConflictError},
    store::AppointmentStore,
};
use crate::models::{appointments::CandidateSlot, services::Service};

/// Monday to Saturday.
pub const BOOKABLE_DAYS: i64 = 6;

/// Inclusive window of bookable start hours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusinessHours {
    pub open: u32,
    pub close: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self { open: 8, close: 20 }
    }
}

impl BusinessHours {
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.open && hour <= self.close
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.open..=self.close
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    Disabled,
    Occupied,
    Selected,
    Available,
}

/// Who holds an occupied cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellHolder {
    pub appointment_id: u64,
    pub client_name: String,
    pub start_hour: u32,
    pub duration_minutes: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotCell {
    pub hour: u32,
    pub status: CellStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<CellHolder>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub cells: Vec<SlotCell>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotGrid {
    pub barber_id: String,
    pub week_start: NaiveDate,
    pub days: Vec<DayColumn>,
}

#[derive(Clone, Copy, Debug)]
pub struct GridQuery<'a> {
    pub barber_id: &'a str,
    pub service: Option<&'a Service>,
    pub week_offset: i64,
    pub selected: Option<(NaiveDate, u32)>,
}

/// Monday to Saturday of the week containing `today`, moved by `week_offset`
/// whole weeks. A Sunday belongs to the week that started the Monday before.
pub fn week_days(today: NaiveDate, week_offset: i64) -> Result<Vec<NaiveDate>, BookingError> {
    let monday = week_start(today, week_offset)?;
    (0..BOOKABLE_DAYS)
        .map(|i| {
            monday
                .checked_add_signed(Duration::days(i))
                .ok_or_else(|| out_of_range(week_offset))
        })
        .collect()
}

pub fn week_start(today: NaiveDate, week_offset: i64) -> Result<NaiveDate, BookingError> {
    let this_monday = today
        .checked_sub_signed(Duration::days(i64::from(
            today.weekday().num_days_from_monday(),
        )))
        .ok_or_else(|| out_of_range(week_offset))?;
    Duration::try_weeks(week_offset)
        .and_then(|shift| this_monday.checked_add_signed(shift))
        .ok_or_else(|| out_of_range(week_offset))
}

fn out_of_range(week_offset: i64) -> BookingError {
    BookingError::Invalid(format!("Week offset {} is out of range", week_offset))
}

pub fn build_week_grid(
    store: &AppointmentStore,
    query: &GridQuery,
    today: NaiveDate,
    hours: BusinessHours,
) -> Result<SlotGrid, BookingError> {
    let days = week_days(today, query.week_offset)?;
    let week_start = days[0];

    let days = days
        .into_iter()
        .map(|date| DayColumn {
            date,
            cells: hours
                .hours()
                .map(|hour| build_cell(store, query, date, hour))
                .collect(),
        })
        .collect();

    Ok(SlotGrid {
        barber_id: query.barber_id.to_string(),
        week_start,
        days,
    })
}

fn build_cell(store: &AppointmentStore, query: &GridQuery, date: NaiveDate, hour: u32) -> SlotCell {
    let service = match query.service {
        Some(service) => service,
        None => {
            return SlotCell {
                hour,
                status: CellStatus::Disabled,
                holder: None,
            }
        }
    };

    if query.selected == Some((date, hour)) {
        return SlotCell {
            hour,
            status: CellStatus::Selected,
            holder: None,
        };
    }

    match store.find_conflict(date, hour, query.barber_id, service.duration_minutes) {
        Some(blocking) => SlotCell {
            hour,
            status: CellStatus::Occupied,
            holder: Some(CellHolder {
                appointment_id: blocking.id,
                client_name: blocking.client_name.clone(),
                start_hour: blocking.start_hour,
                duration_minutes: blocking.duration_minutes,
            }),
        },
        None => SlotCell {
            hour,
            status: CellStatus::Available,
            holder: None,
        },
    }
}

impl SlotGrid {
    pub fn cell(&self, date: NaiveDate, hour: u32) -> Option<&SlotCell> {
        self.days
            .iter()
            .find(|d| d.date == date)
            .and_then(|d| d.cells.iter().find(|c| c.hour == hour))
    }

    /// Resolves a click on a cell into a candidate slot.
    ///
    /// Occupied cells answer with who holds them instead of being ignored.
    pub fn click(&self, date: NaiveDate, hour: u32) -> Result<CandidateSlot, BookingError> {
        let cell = self.cell(date, hour).ok_or_else(|| {
            BookingError::Invalid(format!("{} {:02}:00 is not on this week's grid", date, hour))
        })?;

        match (&cell.status, &cell.holder) {
            (CellStatus::Disabled, _) => Err(BookingError::MissingField("service")),
            (CellStatus::Occupied, Some(holder)) => Err(ConflictError {
                barber_id: self.barber_id.clone(),
                date,
                hour,
                owner: holder.client_name.clone(),
                start_hour: holder.start_hour,
                duration_minutes: holder.duration_minutes,
                appointment_id: holder.appointment_id,
            }
            .into()),
            _ => Ok(CandidateSlot::new(self.barber_id.clone(), date, hour)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::tests::{appointment, date};
    use chrono::Weekday;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> AppointmentStore {
        AppointmentStore::from_appointments(vec![
            appointment(1, "1", date(2025, 6, 10), 9, 60, "Ana"),
            appointment(2, "1", date(2025, 6, 12), 14, 90, "Beto"),
            appointment(3, "2", date(2025, 6, 10), 11, 60, "Caro"),
        ])
    }

    fn haircut() -> Service {
        Service::new("cut", "Haircut", 150, 45)
    }

    #[rstest]
    #[case(date(2025, 6, 9))]
    #[case(date(2025, 6, 11))]
    #[case(date(2025, 6, 14))]
    #[case(date(2025, 6, 15))]
    fn week_starts_on_monday(#[case] today: NaiveDate) {
        let days = week_days(today, 0).unwrap();
        assert_eq!(days.len(), 6);
        assert_eq!(days[0], date(2025, 6, 9));
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[5].weekday(), Weekday::Sat);
    }

    #[rstest]
    #[case(1, date(2025, 6, 16))]
    #[case(-1, date(2025, 6, 2))]
    #[case(4, date(2025, 7, 7))]
    fn week_offset_moves_whole_weeks(#[case] offset: i64, #[case] monday: NaiveDate) {
        assert_eq!(week_days(date(2025, 6, 11), offset).unwrap()[0], monday);
    }

    #[rstest]
    #[case(100_000_000)]
    #[case(-100_000_000)]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    fn far_week_offset_is_rejected(store: AppointmentStore, #[case] offset: i64) {
        let service = haircut();
        let query = GridQuery {
            barber_id: "1",
            service: Some(&service),
            week_offset: offset,
            selected: None,
        };
        let err = build_week_grid(&store, &query, date(2025, 6, 10), BusinessHours::default())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(week_days(date(2025, 6, 10), offset).is_err());
    }

    #[rstest]
    fn no_service_disables_everything(store: AppointmentStore) {
        let query = GridQuery {
            barber_id: "1",
            service: None,
            week_offset: 0,
            selected: Some((date(2025, 6, 10), 10)),
        };
        let grid = build_week_grid(&store, &query, date(2025, 6, 10), BusinessHours::default()).unwrap();

        assert!(grid
            .days
            .iter()
            .flat_map(|d| d.cells.iter())
            .all(|c| c.status == CellStatus::Disabled));
        assert_eq!(
            grid.click(date(2025, 6, 10), 9),
            Err(BookingError::MissingField("service"))
        );
    }

    #[rstest]
    fn marks_occupied_selected_and_available(store: AppointmentStore) {
        let service = haircut();
        let query = GridQuery {
            barber_id: "1",
            service: Some(&service),
            week_offset: 0,
            selected: Some((date(2025, 6, 10), 11)),
        };
        let grid = build_week_grid(&store, &query, date(2025, 6, 10), BusinessHours::default()).unwrap();

        assert_eq!(grid.week_start, date(2025, 6, 9));
        assert_eq!(grid.days[0].cells.len(), 13);

        let status = |d, h| grid.cell(d, h).unwrap().status;
        assert_eq!(status(date(2025, 6, 10), 9), CellStatus::Occupied);
        assert_eq!(status(date(2025, 6, 10), 10), CellStatus::Available);
        assert_eq!(status(date(2025, 6, 10), 11), CellStatus::Selected);
        assert_eq!(status(date(2025, 6, 12), 14), CellStatus::Occupied);
        assert_eq!(status(date(2025, 6, 12), 15), CellStatus::Occupied);
        assert_eq!(status(date(2025, 6, 12), 16), CellStatus::Available);

        let holder = grid.cell(date(2025, 6, 12), 15).unwrap().holder.clone();
        assert_eq!(holder.unwrap().client_name, "Beto");
    }

    #[rstest]
    fn selected_wins_over_occupied(store: AppointmentStore) {
        let service = haircut();
        let query = GridQuery {
            barber_id: "1",
            service: Some(&service),
            week_offset: 0,
            selected: Some((date(2025, 6, 10), 9)),
        };
        let grid = build_week_grid(&store, &query, date(2025, 6, 10), BusinessHours::default()).unwrap();
        assert_eq!(
            grid.cell(date(2025, 6, 10), 9).unwrap().status,
            CellStatus::Selected
        );
    }

    #[rstest]
    fn serializes_for_clients(store: AppointmentStore) {
        let service = haircut();
        let query = GridQuery {
            barber_id: "1",
            service: Some(&service),
            week_offset: 0,
            selected: None,
        };
        let grid = build_week_grid(&store, &query, date(2025, 6, 10), BusinessHours::default()).unwrap();
        let json = serde_json::to_value(&grid).unwrap();

        assert_eq!(json["week_start"], "2025-06-09");
        let tuesday_nine = &json["days"][1]["cells"][1];
        assert_eq!(tuesday_nine["hour"], 9);
        assert_eq!(tuesday_nine["status"], "occupied");
        assert_eq!(tuesday_nine["holder"]["client_name"], "Ana");
        assert!(json["days"][1]["cells"][2].get("holder").is_none());
    }

    #[rstest]
    fn regeneration_is_idempotent(store: AppointmentStore) {
        let service = haircut();
        let query = GridQuery {
            barber_id: "1",
            service: Some(&service),
            week_offset: 0,
            selected: None,
        };
        let first = build_week_grid(&store, &query, date(2025, 6, 10), BusinessHours::default()).unwrap();
        let second = build_week_grid(&store, &query, date(2025, 6, 10), BusinessHours::default()).unwrap();
        assert_eq!(first, second);
    }

    #[rstest]
    fn clicking_occupied_cell_explains_conflict(store: AppointmentStore) {
        let service = haircut();
        let query = GridQuery {
            barber_id: "1",
            service: Some(&service),
            week_offset: 0,
            selected: None,
        };
        let grid = build_week_grid(&store, &query, date(2025, 6, 10), BusinessHours::default()).unwrap();

        match grid.click(date(2025, 6, 10), 9) {
            Err(BookingError::Conflict(conflict)) => {
                assert_eq!(conflict.owner, "Ana");
                assert_eq!(conflict.start_hour, 9);
            }
            other => panic!("expected conflict, got {:?}", other),
        }

        let slot = grid.click(date(2025, 6, 10), 10).unwrap();
        assert_eq!(slot, CandidateSlot::new("1", date(2025, 6, 10), 10));

        assert!(grid.click(date(2025, 6, 15), 10).unwrap_err().is_validation());
    }
}
