pub use any_result::*;
pub use matrix::*;
pub use raytrace::*;
pub use vector::*;

pub use serde::{Deserialize, Serialize};

pub type HashMap<K, V> = fnv::FnvHashMap<K, V>;
pub type HashSet<T> = fnv::FnvHashSet<T>;

pub use rand::{Rng, SeedableRng};

pub use crate::config::*;
pub use crate::intensity::*;
pub use crate::lamp::*;
pub use crate::pathogen::*;
pub use crate::photon::*;
pub use crate::sampler::*;
pub use crate::scene::*;
pub use crate::simulation::*;
pub use crate::survival::*;
pub use crate::util::*;

pub use std::path::Path;
pub use std::path::PathBuf;

/// Shorthand for `Default::default()`.
#[inline]
pub fn default<T: Default>() -> T {
	T::default()
}
