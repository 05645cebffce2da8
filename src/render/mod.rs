pub mod error;
pub mod palette;
pub mod plot;
pub mod rose;
