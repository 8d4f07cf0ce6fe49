mod participant;
mod trip;

pub use participant::*;
pub use trip::*;
