//! The core of the input generator.
//!
//! This crate implements the vocabulary shared by everything else:
//! the path topology, the line protocol understood by the MST server and the weight bounds.
//! It does no I/O and does not depend on `std`.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod path;
pub mod weight;

/// Node count written by the packaged default invocation.
pub const DEFAULT_VERTICES: u64 = 5000;

/// Edge count requested by the packaged default invocation.
pub const DEFAULT_EDGES: u64 = 5000;
