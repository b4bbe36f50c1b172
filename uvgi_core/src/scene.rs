use super::internal::*;

fn default_reflectivity() -> f64 {
	0.5
}

/// Wire format for a single triangle in a scene file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TriangleInput {
	pub v0: dvec3,
	pub v1: dvec3,
	pub v2: dvec3,
	#[serde(default = "default_reflectivity")]
	pub reflectivity: f64,
}

impl From<&Triangle> for TriangleInput {
	fn from(t: &Triangle) -> Self {
		Self { v0: t.v0, v1: t.v1, v2: t.v2, reflectivity: t.reflectivity }
	}
}

/// An enclosure's geometry, as loaded from a scene JSON file:
/// `{"triangles":[{"v0":{x,y,z},"v1":{...},"v2":{...},"reflectivity":float}]}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scene {
	pub triangles: Vec<TriangleInput>,
}

impl Scene {
	pub fn load(path: &Path) -> Result<Self> {
		parse_json(path)
	}

	/// Build the immutable `Triangle` list used by the raytracer.
	pub fn build_triangles(&self) -> Result<Vec<Triangle>> {
		if self.triangles.is_empty() {
			return Err(error("scene has no triangles"));
		}
		let mut triangles = Vec::with_capacity(self.triangles.len());
		for t in &self.triangles {
			for v in [t.v0, t.v1, t.v2] {
				if !v.is_finite() {
					return Err(error("scene triangle has non-finite vertex"));
				}
			}
			triangles.push(Triangle::new(t.v0, t.v1, t.v2, clamp(t.reflectivity, 0.0, 1.0)));
		}
		Ok(triangles)
	}
}

fn default_direction() -> dvec3 {
	-dvec3::EY
}

/// A lamp specification as it appears in a simulation request: position,
/// optional pointing direction (default straight down), and a lamp-type tag
/// selecting an angular profile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LampSpec {
	pub position: dvec3,
	#[serde(default = "default_direction")]
	pub direction: dvec3,
	pub intensity: f64,
	pub lamp_type: String,
}

/// A fully resolved light source ready for tracing: position, normalized
/// pointing direction, forward radiant intensity, and its lamp-type tag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Light {
	pub position: dvec3,
	pub direction: dvec3,
	pub intensity: f64,
	pub lamp_type: String,
}

impl LampSpec {
	pub fn load_list(path: &Path) -> Result<Vec<Self>> {
		parse_json(path)
	}
}

impl From<LampSpec> for Light {
	fn from(spec: LampSpec) -> Self {
		Self { position: spec.position, direction: spec.direction.safe_normalized(), intensity: spec.intensity, lamp_type: spec.lamp_type }
	}
}

/// A position on a surface at which irradiance is measured, carrying the
/// outward normal of its source triangle for self-occlusion avoidance.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MeasurementPoint {
	pub position: dvec3,
	pub normal: dvec3,
}

/// A pathogen's survival outcome at a single measurement point.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathogenRecord {
	pub pathogen_name: String,
	pub k1: f64,
	pub k2: f64,
	pub percent_resistant: f64,
	pub fluence: f64,
	pub survival_rate: f64,
	pub ech_uv: f64,
}

/// A full per-point result: the direct/indirect/total irradiance and the
/// survival outcome for every pathogen the request asked about.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointResult {
	pub position: dvec3,
	pub direct_intensity: f64,
	pub indirect_intensity: f64,
	pub total_intensity: f64,
	pub pathogens: Vec<PathogenRecord>,
}

/// The object a simulation request returns: one record per measurement point.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationResult {
	pub points: Vec<PointResult>,
}

impl SimulationResult {
	pub fn save(&self, path: &Path) -> Result<()> {
		write_json(path, self)
	}

	pub fn load(path: &Path) -> Result<Self> {
		parse_json(path)
	}
}

/// Optional full-session snapshot: geometry, pathogens, lights and results,
/// suitable for replaying or auditing a past run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedResults {
	pub triangles: Vec<TriangleInput>,
	pub pathogens: Vec<Pathogen>,
	pub lights: Vec<Light>,
	pub points: Vec<PointResult>,
}

impl PersistedResults {
	pub fn save(&self, path: &Path) -> Result<()> {
		write_json(path, self)
	}

	pub fn load(path: &Path) -> Result<Self> {
		parse_json(path)
	}
}
