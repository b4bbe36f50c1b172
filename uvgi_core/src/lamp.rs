use super::internal::*;
use std::collections::BTreeMap;

/// Angular emission profile of a UV lamp: measured intensity as a function of
/// the off-axis angle, normalized by the lamp's forward (on-axis) intensity.
#[derive(Clone, Debug)]
pub struct LampProfile {
	pub name: String,
	pub wavelength_nm: f64,
	pub forward_intensity: f64,
	samples: Vec<(f64, f64)>,
}

impl LampProfile {
	pub fn new(name: impl Into<String>, wavelength_nm: f64, samples_by_angle: BTreeMap<i64, f64>, forward_intensity: Option<f64>) -> Self {
		let forward_intensity = forward_intensity.unwrap_or_else(|| *samples_by_angle.get(&0).unwrap_or(&1.0));
		let samples = samples_by_angle.into_iter().map(|(deg, v)| (deg as f64, v)).collect();
		Self { name: name.into(), wavelength_nm, forward_intensity, samples }
	}

	/// Measured intensity at `angle_degrees` off axis, clamped to [0, 90] and
	/// linearly interpolated between the nearest tabulated angles.
	pub fn intensity_at_angle(&self, angle_degrees: f64) -> f64 {
		let angle = clamp(angle_degrees, 0.0, 90.0);
		interpolate_clamped(angle, &self.samples)
	}

	/// Ratio of the measured intensity at `angle_degrees` to the forward
	/// intensity. 1.0 on-axis for a well-formed profile.
	pub fn intensity_ratio(&self, angle_degrees: f64) -> f64 {
		if self.forward_intensity <= 0.0 {
			return 1.0;
		}
		self.intensity_at_angle(angle_degrees) / self.forward_intensity
	}
}

/// Table of named lamp profiles, loaded once from a JSON file and treated as
/// immutable reference data for the remainder of a run.
#[derive(Clone, Debug, Default)]
pub struct LampProfileTable {
	profiles: HashMap<String, LampProfile>,
}

#[derive(Deserialize)]
struct RawLampProfile {
	#[serde(default)]
	wavelength_nm: f64,
	#[serde(default)]
	forward_intensity: Option<f64>,
	#[serde(default, rename = "intensity_samples_at_angle_deg")]
	samples_at_angle_deg: Option<BTreeMap<String, f64>>,
	#[serde(default, rename = "intensity_samples_at_phi_0deg")]
	samples_at_phi_0deg: Option<BTreeMap<String, f64>>,
}

impl LampProfileTable {
	pub fn load(path: &Path) -> Result<Self> {
		let raw: HashMap<String, RawLampProfile> = parse_json(path)?;
		let mut profiles = HashMap::default();
		for (id, entry) in raw {
			let samples = entry
				.samples_at_angle_deg
				.or(entry.samples_at_phi_0deg)
				.ok_or_else(|| error(format!("lamp profile {:?}: missing intensity samples", id)))?;
			let mut by_angle = BTreeMap::new();
			for (k, v) in samples {
				let deg: i64 = k.parse().map_err(|_| error(format!("lamp profile {:?}: invalid angle key {:?}", id, k)))?;
				by_angle.insert(deg, v);
			}
			let profile = LampProfile::new(id.clone(), entry.wavelength_nm, by_angle, entry.forward_intensity);
			profiles.insert(id, profile);
		}
		Ok(Self { profiles })
	}

	pub fn get(&self, lamp_id: &str) -> Option<&LampProfile> {
		self.profiles.get(lamp_id)
	}

	pub fn insert(&mut self, id: impl Into<String>, profile: LampProfile) {
		self.profiles.insert(id.into(), profile);
	}

	/// Intensity ratio at `angle_degrees` for `lamp_id`. Unknown lamp ids fall
	/// back to a uniform (isotropic) emitter: ratio 1.0 at every angle, logged
	/// once at the call site rather than treated as a hard error.
	pub fn intensity_ratio(&self, lamp_id: &str, angle_degrees: f64) -> f64 {
		match self.profiles.get(lamp_id) {
			Some(profile) => profile.intensity_ratio(angle_degrees),
			None => {
				eprintln!("warning: unknown lamp profile {:?}, falling back to isotropic emission", lamp_id);
				1.0
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn profile() -> LampProfile {
		let mut samples = BTreeMap::new();
		samples.insert(0, 100.0);
		samples.insert(45, 60.0);
		samples.insert(90, 0.0);
		LampProfile::new("test", 254.0, samples, None)
	}

	#[test]
	fn forward_intensity_defaults_to_angle_zero_sample() {
		assert_eq!(profile().forward_intensity, 100.0);
	}

	#[test]
	fn exact_sample_matches() {
		let p = profile();
		assert_eq!(p.intensity_at_angle(45.0), 60.0);
	}

	#[test]
	fn interpolates_between_samples() {
		let p = profile();
		assert!((p.intensity_at_angle(22.5) - 80.0).abs() < 1e-9);
	}

	#[test]
	fn clamps_out_of_range_angles() {
		let p = profile();
		assert_eq!(p.intensity_at_angle(-10.0), 100.0);
		assert_eq!(p.intensity_at_angle(200.0), 0.0);
	}

	#[test]
	fn ratio_is_one_on_axis() {
		let p = profile();
		assert!((p.intensity_ratio(0.0) - 1.0).abs() < 1e-9);
	}

	#[test]
	fn unknown_lamp_id_falls_back_to_isotropic() {
		let table = LampProfileTable::default();
		assert_eq!(table.intensity_ratio("nonexistent", 30.0), 1.0);
	}
}
