pub mod batch;
pub mod command;
pub mod export;
pub mod log;
pub mod save;

pub use batch::*;
pub use command::*;
pub use export::*;
pub use log::*;
pub use save::*;
