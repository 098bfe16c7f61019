#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    state: web::Data<AppState>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](state, info) {
                        Ok(response) => response,
                        Err(err) => {
                            log::debug!("{} failed: {:#}", $url, err);
                            <$response>::err(&err)
                        }
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::Context;
use chrono::NaiveDate;

const DATE_FMT: &str = "%Y-%m-%d";
const DEFAULT_PAGE_LIMIT: i64 = 30;

pub fn parse_date_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDate> {
    let s = s.as_ref();
    NaiveDate::parse_from_str(s.trim(), DATE_FMT)
        .with_context(|| format!("Wrong date format '{}', expected YYYY-MM-DD", s))
}

pub fn parse_date_str_opt<S: AsRef<str>>(s: Option<S>) -> anyhow::Result<Option<NaiveDate>> {
    s.map(parse_date_str).transpose()
}

pub fn parse_date_pair_str_opt<S1: AsRef<str>, S2: AsRef<str>>(
    start_date: Option<S1>,
    end_date: Option<S2>,
) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    let start_date = parse_date_str_opt(start_date)
        .context("Wrong format on 'start_date'")?
        .unwrap_or(NaiveDate::MIN);
    let end_date = parse_date_str_opt(end_date)
        .context("Wrong format on 'end_date'")?
        .unwrap_or(NaiveDate::MAX);
    if start_date > end_date {
        anyhow::bail!("'start_date' is after 'end_date'");
    }
    Ok((start_date, end_date))
}

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

/// Case-insensitive substring match; no pattern matches everything.
pub fn matches_pattern_opt<S: AsRef<str>>(haystack: &str, pattern: Option<S>) -> bool {
    match pattern {
        Some(p) => haystack
            .to_lowercase()
            .contains(&p.as_ref().trim().to_lowercase()),
        None => true,
    }
}

pub fn paginate<T, I>(items: I, first_index: Option<i64>, limit: Option<i64>) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let first_index = first_index.unwrap_or(0).max(0) as usize;
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(0) as usize;
    items.into_iter().skip(first_index).take(limit).collect()
}
