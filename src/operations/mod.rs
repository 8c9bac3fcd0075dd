pub mod creation;

pub use creation::{generate, MakeSpiral};
