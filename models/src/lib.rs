pub mod card;
pub mod dungeon;
pub mod element;
pub mod health;
pub mod owner;
pub mod text;
pub mod world;

pub use card::*;
pub use dungeon::*;
pub use element::*;
pub use health::*;
pub use owner::*;
pub use text::*;
pub use world::*;
