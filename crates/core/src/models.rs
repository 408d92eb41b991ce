pub mod business;
pub mod slot;
