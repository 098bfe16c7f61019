mod requests;
mod responses;

use crate::{
    models::appointments::CandidateSlot,
    protocol::AppointItem,
    schedule::{
        commit::BookingDetails,
        error::{BookingError, ConflictError},
        grid::{build_week_grid, CellHolder, GridQuery},
        session::BookingSession,
    },
    state::{assert, lock_store, read_catalog, AppState},
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::bail;

use self::{requests::*, responses::*};

const DEFAULT_SLOT_MINUTES: u32 = 60;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_barber)
        .service(search_service)
        .service(view_week)
        .service(check_slot)
        .service(appoint)
        .service(search_appoint);
}

crate::post_funcs! {
    (search_barber, "/search_barber", SearchBarberRequest, SearchBarberResponse),
    (search_service, "/search_service", SearchServiceRequest, SearchServiceResponse),
    (view_week, "/view_week", ViewWeekRequest, ViewWeekResponse),
    (check_slot, "/check_slot", CheckSlotRequest, CheckSlotResponse),
    (appoint, "/appoint", AppointRequest, AppointResponse),
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
}

fn search_barber_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchBarberRequest>,
) -> anyhow::Result<SearchBarberResponse> {
    let info = info.into_inner();
    let catalog = read_catalog(&state)?;

    let barbers = catalog
        .barbers()
        .iter()
        .filter(|b| crate::utils::matches_pattern_opt(&b.name, info.name.as_ref()))
        .cloned();

    Ok(SearchBarberResponse {
        success: true,
        barbers: crate::utils::paginate(barbers, info.first_index, info.limit),
        ..Default::default()
    })
}

fn search_service_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchServiceRequest>,
) -> anyhow::Result<SearchServiceResponse> {
    let info = info.into_inner();
    let catalog = read_catalog(&state)?;

    let services = catalog
        .services()
        .iter()
        .filter(|s| crate::utils::matches_pattern_opt(&s.name, info.name.as_ref()))
        .cloned();

    Ok(SearchServiceResponse {
        success: true,
        services: crate::utils::paginate(services, info.first_index, info.limit),
        ..Default::default()
    })
}

fn view_week_impl(
    state: web::Data<AppState>,
    info: web::Json<ViewWeekRequest>,
) -> anyhow::Result<ViewWeekResponse> {
    let info = info.into_inner();
    let catalog = read_catalog(&state)?;

    if !info.barber_id.is_empty() {
        assert::assert_barber(&catalog, &info.barber_id)?;
    }
    let service = match info.service_id.as_deref() {
        Some(id) if !id.is_empty() => Some(assert::assert_service(&catalog, id)?),
        _ => None,
    };
    let selected_date = crate::utils::parse_date_str_opt(info.selected_date)?;

    let mut query = GridQuery {
        barber_id: &info.barber_id,
        service: service.as_ref(),
        week_offset: info.week_offset,
        selected: None,
    };
    let today = state.today();
    let hours = state.settings.hours;
    let store = lock_store(&state)?;
    let mut grid = build_week_grid(&store, &query, today, hours)?;

    // A selection is a click on the grid: taken cells explain who holds them.
    let mut notice = String::new();
    if let Some((date, hour)) = selected_date.zip(info.selected_hour) {
        match grid.click(date, hour) {
            Ok(_) => {
                query.selected = Some((date, hour));
                grid = build_week_grid(&store, &query, today, hours)?;
            }
            Err(err) => notice = err.to_string(),
        }
    }

    Ok(ViewWeekResponse {
        success: true,
        grid: Some(grid),
        notice,
        ..Default::default()
    })
}

fn check_slot_impl(
    state: web::Data<AppState>,
    info: web::Json<CheckSlotRequest>,
) -> anyhow::Result<CheckSlotResponse> {
    let info = info.into_inner();
    let catalog = read_catalog(&state)?;

    if !info.barber_id.is_empty() {
        assert::assert_barber(&catalog, &info.barber_id)?;
    }
    let minutes = match info.service_id.as_deref() {
        Some(id) if !id.is_empty() => assert::assert_service(&catalog, id)?.duration_minutes,
        // Every booking blocks at least one hour.
        _ => info
            .duration_minutes
            .unwrap_or(DEFAULT_SLOT_MINUTES)
            .max(1),
    };
    let date = crate::utils::parse_date_str(&info.date)?;

    let store = lock_store(&state)?;
    let res = match store.find_conflict(date, info.hour, &info.barber_id, minutes) {
        Some(blocking) => CheckSlotResponse {
            success: true,
            occupied: true,
            holder: Some(CellHolder {
                appointment_id: blocking.id,
                client_name: blocking.client_name.clone(),
                start_hour: blocking.start_hour,
                duration_minutes: blocking.duration_minutes,
            }),
            message: ConflictError::new(info.hour, blocking).to_string(),
            ..Default::default()
        },
        None => CheckSlotResponse {
            success: true,
            ..Default::default()
        },
    };
    Ok(res)
}

fn appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<AppointRequest>,
) -> anyhow::Result<AppointResponse> {
    let info = info.into_inner();
    let catalog = read_catalog(&state)?;

    let mut session = BookingSession::new();
    if !info.barber_id.is_empty() {
        session.choose_barber(assert::assert_barber(&catalog, &info.barber_id)?);
    }
    if !info.service_id.is_empty() {
        session.choose_service(assert::assert_service(&catalog, &info.service_id)?);
    }
    let date = crate::utils::parse_date_str_opt(info.date)?;
    if let Some(hour) = info.hour {
        let hours = state.settings.hours;
        if !hours.contains(hour) {
            return Err(BookingError::Invalid(format!(
                "Hour {} is outside business hours ({}-{})",
                hour, hours.open, hours.close
            ))
            .into());
        }
    }

    let details = BookingDetails {
        client_name: info.client_name,
        notes: info.notes,
    };

    // Selecting and committing under one lock, so the slot cannot be taken in between.
    let mut store = lock_store(&state)?;
    let confirmation = match (date, info.hour) {
        (Some(date), Some(hour)) => {
            session.select_slot(&store, date, hour)?;
            session.commit(&mut store, &details)?
        }
        // Incomplete slot: the commit checks name the first missing field.
        (date, hour) => {
            let slot = CandidateSlot {
                barber_id: session.barber().map(|b| b.id.clone()).unwrap_or_default(),
                date,
                hour,
            };
            store.commit(&slot, session.barber(), session.service(), &details)?
        }
    };

    Ok(AppointResponse {
        success: true,
        confirmation: Some(confirmation),
        ..Default::default()
    })
}

fn search_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    let info = info.into_inner();
    let client_name = info.client_name.trim().to_lowercase();
    if client_name.is_empty() {
        bail!("Client name must not be empty");
    }
    let (start_date, end_date) =
        crate::utils::parse_date_pair_str_opt(info.start_date, info.end_date)?;

    let catalog = read_catalog(&state)?;
    let store = lock_store(&state)?;
    let appos = store
        .between(start_date, end_date)
        .into_iter()
        .filter(|a| a.client_name.to_lowercase() == client_name)
        .map(|a| AppointItem::new(a, &catalog));

    Ok(SearchAppointResponse {
        success: true,
        appointments: crate::utils::paginate(appos, info.first_index, info.limit),
        ..Default::default()
    })
}
