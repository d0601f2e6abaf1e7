//! Console core: restaurant context and notices

pub mod context;
pub mod notice;

pub use context::{ContextState, RestaurantContext};
pub use notice::{Notice, NoticeLevel, NoticeLog};
