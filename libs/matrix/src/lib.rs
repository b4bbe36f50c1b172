///! Matrix and transform utilities.
mod mat_3;

pub use mat_3::*;
