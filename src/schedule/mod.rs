//! Appointment book and slot availability for barbers.

pub mod commit;
pub mod error;
pub mod grid;
pub mod overlap;
pub mod seed;
pub mod session;
pub mod store;
