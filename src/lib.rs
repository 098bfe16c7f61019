//! Barbershop booking server: barber catalog, weekly availability and
//! appointment booking over JSON-over-POST endpoints.

pub mod admin;
pub mod client;
pub mod config;
pub mod models;
pub mod protocol;
pub mod schedule;
pub mod state;
pub mod utils;
