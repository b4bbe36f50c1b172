///! Vector types similar to OpenGL's.
mod dvec;
mod ivec;
mod number;
mod vec;
mod vector2;
mod vector3;

pub use dvec::*;
pub use ivec::*;
pub use number::*;
pub use vec::*;
pub use vector2::*;
pub use vector3::*;
