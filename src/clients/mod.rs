//! Client modules for external API interactions

pub mod geocoder;
pub mod traces;

pub use geocoder::Geocoder;
pub use traces::TracesClient;
