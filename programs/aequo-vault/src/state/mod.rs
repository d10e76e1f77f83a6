pub mod vault;
pub mod user_position;
pub mod association;

pub use vault::*;
pub use user_position::*;
pub use association::*;
