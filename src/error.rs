use thiserror::Error;

pub type RigResult<T> = Result<T, RigError>;

#[derive(Debug, Error)]
pub enum RigError {
    #[error("invalid scroll geometry: scroll_width={scroll_width}, client_width={client_width}")]
    InvalidGeometry {
        scroll_width: f64,
        client_width: f64,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
