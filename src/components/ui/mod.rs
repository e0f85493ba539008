pub mod notice;
pub mod textarea;

pub use notice::*;
pub use textarea::*;
