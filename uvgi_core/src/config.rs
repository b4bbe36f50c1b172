use super::internal::*;

fn default_photons_per_light() -> usize {
	10_000
}
fn default_max_bounces() -> u32 {
	1
}
fn default_kernel_radius() -> f64 {
	1.0
}
fn default_roulette_threshold() -> f64 {
	0.01
}
fn default_epsilon() -> f64 {
	1e-6
}
fn default_num_points() -> usize {
	100
}
fn default_distance_threshold() -> f64 {
	1.0
}
fn default_normal_similarity_threshold() -> f64 {
	0.9
}
fn default_surface_offset() -> f64 {
	0.01
}
fn default_exposure_time() -> f64 {
	60.0
}
fn default_true() -> bool {
	true
}

/// Top-level configuration for a simulation run: where to find the scene and
/// reference data, and the tuning knobs for measurement-point generation and
/// photon tracing. Loaded once from a JSON file at session start.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
	pub scene_file: PathBuf,
	pub lamps_file: PathBuf,
	pub lamp_profiles_file: Option<PathBuf>,
	pub pathogens_file: Option<PathBuf>,
	pub output_file: PathBuf,

	#[serde(default = "default_num_points")]
	pub num_points: usize,
	#[serde(default = "default_distance_threshold")]
	pub distance_threshold: f64,
	#[serde(default = "default_normal_similarity_threshold")]
	pub normal_similarity_threshold: f64,
	#[serde(default = "default_surface_offset")]
	pub surface_offset: f64,
	pub sampler_seed: Option<u64>,

	#[serde(default = "default_max_bounces")]
	pub max_bounces: u32,
	#[serde(default = "default_photons_per_light")]
	pub photons_per_light: usize,
	#[serde(default = "default_kernel_radius")]
	pub kernel_radius: f64,
	#[serde(default = "default_epsilon")]
	pub epsilon: f64,
	#[serde(default = "default_true")]
	pub use_russian_roulette: bool,
	#[serde(default = "default_roulette_threshold")]
	pub roulette_threshold: f64,
	#[serde(default)]
	pub clustering_distance: f64,
	#[serde(default = "default_true")]
	pub parallel: bool,
	pub photon_seed: Option<u64>,

	#[serde(default = "default_exposure_time")]
	pub exposure_time: f64,
}

impl Config {
	pub fn parse(path: &Path) -> Result<Self> {
		parse_json(path)
	}

	pub fn photon_tracer_config(&self) -> PhotonTracerConfig {
		PhotonTracerConfig {
			max_bounces: self.max_bounces,
			photons_per_light: self.photons_per_light,
			kernel_radius: self.kernel_radius,
			epsilon: self.epsilon,
			use_russian_roulette: self.use_russian_roulette,
			roulette_threshold: self.roulette_threshold,
			clustering_distance: self.clustering_distance,
			parallel: self.parallel,
			seed: self.photon_seed,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn defaults_fill_in_missing_fields() {
		let json = r#"{"scene_file": "room.json", "lamps_file": "lamps.json", "output_file": "result.json"}"#;
		let config: Config = serde_json::from_str(json).unwrap();
		assert_eq!(config.num_points, 100);
		assert_eq!(config.max_bounces, 1);
		assert!((config.kernel_radius - 1.0).abs() < 1e-9);
		assert!(config.use_russian_roulette);
		assert!(config.parallel);
	}
}
