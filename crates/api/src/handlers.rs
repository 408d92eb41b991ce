/// Handlers for available matches
pub mod available_matches;
/// Handlers for businesses and their courts
pub mod businesses;
