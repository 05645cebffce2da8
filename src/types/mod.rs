pub mod bucket;
pub mod interval_scheme;
pub mod layout;
pub mod timestamp;
