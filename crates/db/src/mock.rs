//! Test doubles for the persistence traits.

pub mod memory;

pub use memory::{MemoryAvailabilityStore, MemoryDirectory};
