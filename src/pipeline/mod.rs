pub mod coerce;
pub mod error;
pub mod filtering;
pub mod partition;
pub mod scale;
