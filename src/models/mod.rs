pub mod recommendation;
pub mod soil_profile;

pub use recommendation::*;
pub use soil_profile::*;
