//! Infrastructure Layer - Flat-file implementations

pub mod json_store;
pub mod uploads;
