use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use barbershop_server::{
    admin, client,
    config::Settings,
    state::{lock_store, AppState},
};
use chrono::Local;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env().context("Failed to read settings")?;
    let bind = settings.bind_addr.clone();
    let state = web::Data::new(AppState::with_demo_data(
        settings,
        Local::now().date_naive(),
    )?);
    log::info!(
        "Loaded {} appointments, listening on {}",
        lock_store(&state)?.len(),
        bind
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            // client
            .service(web::scope("/client").configure(client::config))
            // administrator
            .service(web::scope("/admin").configure(admin::config))
    })
    .bind(&bind)
    .with_context(|| format!("Failed to bind {}", bind))?
    .run()
    .await
    .context("Server error")
}
