mod internal;

mod config;
mod intensity;
mod lamp;
mod pathogen;
mod photon;
mod sampler;
mod scene;
mod simulation;
mod survival;
mod util;

pub use config::*;
pub use intensity::*;
pub use lamp::*;
pub use pathogen::*;
pub use photon::*;
pub use sampler::*;
pub use scene::*;
pub use simulation::*;
pub use survival::*;
