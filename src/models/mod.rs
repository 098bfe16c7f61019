pub mod appointments;
pub mod barbers;
pub mod catalog;
pub mod services;
