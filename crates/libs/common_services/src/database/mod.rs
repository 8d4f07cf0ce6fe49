mod error;
mod tables;
mod utils;
mod repositories;

pub use error::*;
pub use tables::*;
pub use utils::*;
pub use repositories::*;
