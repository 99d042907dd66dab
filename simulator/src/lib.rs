pub mod battle;
pub mod combat_event;
pub mod dispatch;
pub mod result;
pub mod reward;
pub mod roll;
pub mod statics;
pub mod summary;

pub use battle::*;
pub use combat_event::*;
pub use dispatch::*;
pub use result::*;
pub use reward::*;
pub use roll::*;
pub use statics::*;
pub use summary::*;
