pub use matrix::*;
pub use vector::*;

pub use crate::boundingbox::*;
pub use crate::grid::*;
pub use crate::ray::*;
pub use crate::tracer::*;
pub use crate::triangle::*;

pub type HashMap<K, V> = fnv::FnvHashMap<K, V>;
pub type HashSet<T> = fnv::FnvHashSet<T>;
