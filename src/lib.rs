//! Text-buffer backbone for an editor: an AVL-balanced rope plus the
//! collaborators that fill it from a file and print its structure.

#[macro_use]
mod macros;

pub mod cli;
pub mod error;
pub mod rope;
pub mod util;

pub use self::error::{RopeError, RopeResult};
pub use self::rope::{Rope, RopeBuilder};
