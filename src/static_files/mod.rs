//! Mapping request paths onto the static content root and loading files.

pub mod reader;
pub mod resolver;

pub use reader::read_resource;
pub use resolver::{resolve, ResolvedPath};
