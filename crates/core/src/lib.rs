//! # Padelbook Core
//!
//! Domain logic for publishing and reserving hourly padel court slots
//! ("available matches"). Storage and the business directory are reached
//! only through the traits in [`store`], so everything here runs without a
//! database.

pub mod booking;
pub mod errors;
pub mod factory;
pub mod models;
pub mod registration;
pub mod reservation;
pub mod store;
pub mod verification;
