/// Available match publishing, listing, reservation and removal
pub mod available_matches;
/// Business and court registration
pub mod businesses;
/// Liveness and version endpoints
pub mod health;
