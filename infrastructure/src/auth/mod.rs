//! Authentication adapters

mod simulated;

pub use simulated::SimulatedAuthProvider;
