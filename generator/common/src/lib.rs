pub mod error;
pub mod generator;
pub mod output;
pub mod params;
pub mod random;

pub use generator_core::command::{Command, Directive};
pub use generator_core::path::{Edge, PathGraph};
pub use generator_core::{DEFAULT_EDGES, DEFAULT_VERTICES};
