pub mod bytes_unit;
pub mod error;
pub mod http;
pub mod integrity;
pub mod pipeline;
pub mod ranges;
