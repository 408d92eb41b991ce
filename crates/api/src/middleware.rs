/// Caller identity extraction
pub mod caller;
/// Domain error to HTTP response mapping
pub mod error_handling;
