//! Profile normalization: raw payload in, `FishingStats` out.

pub mod extract;
pub mod level;
pub mod types;

pub use extract::*;
pub use level::*;
pub use types::*;
