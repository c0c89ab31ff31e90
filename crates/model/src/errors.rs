use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unsupported rdata value: {0}")]
    UnsupportedRdataValue(String),
}
