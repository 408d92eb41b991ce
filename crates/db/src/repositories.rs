pub mod available_match;
pub mod business;
pub mod padel_court;
