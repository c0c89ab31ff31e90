//! Meridian DNS Model Layer
pub mod answer;
pub mod errors;
pub mod meta;
pub mod rdata;

pub use answer::Answer;
pub use errors::ModelError;
pub use meta::Meta;
pub use rdata::RdataValue;
