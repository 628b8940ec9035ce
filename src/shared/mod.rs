pub mod error;
pub mod macros;
pub mod structs;

pub use error::ConfigError;
pub use error::RequestError;
pub use structs::CabinState;
pub use structs::Direction;
pub use structs::Request;
