//! Derived statistics: trophy fish, sea creatures, recommendations.

pub mod recommend;
pub mod sea_creatures;
pub mod trophy;
pub mod types;

pub use recommend::*;
pub use sea_creatures::*;
pub use trophy::*;
pub use types::*;
