mod make_spiral;

pub use make_spiral::{generate, MakeSpiral};
