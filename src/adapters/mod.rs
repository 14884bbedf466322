//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory ports for tests and scaffold wiring
//! - `fs` - Filesystem artifact store
//! - `process` - Shell-process bot runtime

pub mod fs;
pub mod memory;
pub mod process;
