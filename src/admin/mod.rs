mod requests;
mod responses;

use crate::{
    models::{barbers::Barber, services::Service},
    protocol::{AppointItem, SimpleResponse},
    state::{assert, lock_store, read_catalog, write_catalog, AppState},
};
use actix_web::{post, web, HttpResponse, Responder};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add_barber)
        .service(add_service)
        .service(search_appoint)
        .service(view_agenda);
}

crate::post_funcs! {
    (add_barber, "/add_barber", AddBarberRequest, SimpleResponse),
    (add_service, "/add_service", AddServiceRequest, SimpleResponse),
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
    (view_agenda, "/view_agenda", ViewAgendaRequest, ViewAgendaResponse),
}

fn add_barber_impl(
    state: web::Data<AppState>,
    info: web::Json<AddBarberRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    let barber = Barber::new(info.id.trim(), info.name.trim(), info.specialty.trim());

    write_catalog(&state)?.add_barber(barber)?;
    log::info!("Added barber '{}'", info.id.trim());

    Ok(SimpleResponse::ok())
}

fn add_service_impl(
    state: web::Data<AppState>,
    info: web::Json<AddServiceRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    let service = Service::new(
        info.id.trim(),
        info.name.trim(),
        info.price,
        info.duration_minutes,
    );

    write_catalog(&state)?.add_service(service)?;
    log::info!("Added service '{}'", info.id.trim());

    Ok(SimpleResponse::ok())
}

fn search_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    let info = info.into_inner();
    let (start_date, end_date) =
        crate::utils::parse_date_pair_str_opt(info.start_date, info.end_date)?;

    let catalog = read_catalog(&state)?;
    let barber_id = match info.barber_id.as_deref() {
        Some(id) if !id.is_empty() => Some(assert::assert_barber(&catalog, id)?.id),
        _ => None,
    };

    let store = lock_store(&state)?;
    let appos = store
        .between(start_date, end_date)
        .into_iter()
        .filter(|a| barber_id.as_ref().map_or(true, |id| &a.barber_id == id))
        .map(|a| AppointItem::new(a, &catalog));

    Ok(SearchAppointResponse {
        success: true,
        appointments: crate::utils::paginate(appos, info.first_index, info.limit),
        ..Default::default()
    })
}

fn view_agenda_impl(
    state: web::Data<AppState>,
    info: web::Json<ViewAgendaRequest>,
) -> anyhow::Result<ViewAgendaResponse> {
    let info = info.into_inner();
    let date = crate::utils::parse_date_str(&info.date)?;

    let catalog = read_catalog(&state)?;
    let barber = assert::assert_barber(&catalog, &info.barber_id)?;

    let store = lock_store(&state)?;
    let appointments = store
        .on_day(&barber.id, date)
        .into_iter()
        .map(|a| AppointItem::new(a, &catalog))
        .collect();

    Ok(ViewAgendaResponse {
        success: true,
        barber: Some(barber),
        date: crate::utils::format_date_str(&date),
        appointments,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Settings, schedule::tests::date};
    use rstest::{fixture, rstest};

    #[fixture]
    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::with_demo_data(Settings::default(), date(2025, 6, 10)).unwrap())
    }

    #[rstest]
    fn adds_barber_once(state: web::Data<AppState>) {
        let req = || AddBarberRequest {
            id: "4".to_string(),
            name: " Diego Vargas ".to_string(),
            specialty: "Kids".to_string(),
        };
        add_barber_impl(state.clone(), web::Json(req())).unwrap();
        assert!(add_barber_impl(state.clone(), web::Json(req())).is_err());

        let catalog = read_catalog(&state).unwrap();
        assert_eq!(catalog.barber("4").unwrap().name, "Diego Vargas");
    }

    #[rstest]
    fn rejects_service_without_duration(state: web::Data<AppState>) {
        let err = add_service_impl(
            state,
            web::Json(AddServiceRequest {
                id: "9".to_string(),
                name: "Free advice".to_string(),
                price: 0,
                duration_minutes: 0,
            }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("duration"));
    }

    #[rstest]
    #[case(None, None, None, 7)]
    #[case(Some("1"), None, None, 3)]
    #[case(None, Some("2025-06-11"), None, 3)]
    #[case(Some("3"), Some("2025-06-11"), Some("2025-06-12"), 1)]
    fn filters_appointments(
        state: web::Data<AppState>,
        #[case] barber_id: Option<&str>,
        #[case] start_date: Option<&str>,
        #[case] end_date: Option<&str>,
        #[case] expected: usize,
    ) {
        let res = search_appoint_impl(
            state,
            web::Json(SearchAppointRequest {
                barber_id: barber_id.map(str::to_string),
                start_date: start_date.map(str::to_string),
                end_date: end_date.map(str::to_string),
                first_index: None,
                limit: None,
            }),
        )
        .unwrap();
        assert_eq!(res.appointments.len(), expected);
    }

    #[rstest]
    fn agenda_is_ordered_by_hour(state: web::Data<AppState>) {
        let res = view_agenda_impl(
            state,
            web::Json(ViewAgendaRequest {
                barber_id: "1".to_string(),
                date: "2025-06-10".to_string(),
            }),
        )
        .unwrap();
        let hours: Vec<u32> = res.appointments.iter().map(|a| a.hour).collect();
        assert_eq!(hours, vec![9, 14]);
        assert_eq!(res.barber.unwrap().name, "Carlos Mendoza");
    }
}
