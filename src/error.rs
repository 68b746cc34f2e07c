use thiserror::Error;

#[derive(Error, Debug)]
/// Gateway error
pub enum GatewayError {
    #[error("Failed to write XML: {0}")]
    XmlWrite(String),

    #[error("Failed to read XML: {0}")]
    XmlRead(String),
}
