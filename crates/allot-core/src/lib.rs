pub mod constants;
pub mod error;
pub mod types;
pub mod output;

pub use constants::*;
pub use error::AllotError;
pub use types::*;
pub use output::*;
