pub mod color;
pub mod errors;
pub mod validate;

pub use color::Color;
pub use errors::{ConfigError, OpsdeckError};
pub use validate::{parse_color, validate_color};

pub type Result<T> = std::result::Result<T, OpsdeckError>;
