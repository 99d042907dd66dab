pub mod commentary;
pub mod world;

pub use commentary::*;
pub use world::*;
