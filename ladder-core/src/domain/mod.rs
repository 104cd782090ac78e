//! Domain value types for the ladder game

pub mod error;
pub mod height;
pub mod name;
pub mod outcome;
pub mod width;

pub use error::{NotFoundError, ValidationError};
pub use height::Height;
pub use name::{Name, Roster};
pub use outcome::Outcome;
pub use width::Width;
