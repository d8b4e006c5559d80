//! Conflict risk scoring and simulation.
//!
//! Facade over the layered crates so binaries depend on a single package.

pub use application;
pub use domain;
pub use infrastructure;
