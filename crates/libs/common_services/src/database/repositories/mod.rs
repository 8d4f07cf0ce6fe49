#[cfg(any(test, feature = "test-support"))]
mod memory_trip_store;
mod pg_trip_store;
mod trip_store;

#[cfg(any(test, feature = "test-support"))]
pub use memory_trip_store::*;
pub use pg_trip_store::*;
pub use trip_store::*;
