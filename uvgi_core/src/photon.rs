use super::internal::*;
use rand::Rng;
use rayon::prelude::*;
use std::sync::Mutex;
use std::f64::consts::FRAC_PI_2;

/// Tuning knobs for forward photon tracing. Defaults mirror the reference
/// values used throughout the original indirect-exposure studies.
#[derive(Clone, Debug)]
pub struct PhotonTracerConfig {
	pub max_bounces: u32,
	pub photons_per_light: usize,
	pub kernel_radius: f64,
	pub epsilon: f64,
	pub use_russian_roulette: bool,
	pub roulette_threshold: f64,
	/// Merge measurement points within this distance into a single
	/// deposition target before tracing. `0.0` disables clustering.
	pub clustering_distance: f64,
	/// Run photons on a rayon worker pool with per-worker RNG streams.
	/// Set `false` (together with a fixed `seed`) for bit-reproducible runs.
	pub parallel: bool,
	pub seed: Option<u64>,
}

impl Default for PhotonTracerConfig {
	fn default() -> Self {
		Self {
			max_bounces: 1,
			photons_per_light: 10_000,
			kernel_radius: 1.0,
			epsilon: 1e-6,
			use_russian_roulette: true,
			roulette_threshold: 0.01,
			clustering_distance: 0.0,
			parallel: true,
			seed: None,
		}
	}
}

fn point_to_cell(p: dvec3, cell_size: f64) -> ivec3 {
	ivec3::new((p.x / cell_size).floor() as i32, (p.y / cell_size).floor() as i32, (p.z / cell_size).floor() as i32)
}

/// Spatial index over deposition targets, used to find every target within
/// the kernel radius of a photon hit without scanning the whole list.
struct DepositionGrid {
	cell_size: f64,
	radius: f64,
	cells: HashMap<ivec3, Vec<usize>>,
}

impl DepositionGrid {
	fn build(targets: &[MeasurementPoint], radius: f64) -> Self {
		let cell_size = f64::max(0.1, radius / 2.0);
		let mut cells: HashMap<ivec3, Vec<usize>> = HashMap::default();
		for (i, p) in targets.iter().enumerate() {
			cells.entry(point_to_cell(p.position, cell_size)).or_default().push(i);
		}
		Self { cell_size, radius, cells }
	}

	fn nearby(&self, q: dvec3) -> Vec<usize> {
		let cell = point_to_cell(q, self.cell_size);
		let r = (self.radius / self.cell_size).ceil() as i32;
		let mut out = Vec::new();
		for dx in -r..=r {
			for dy in -r..=r {
				for dz in -r..=r {
					if let Some(members) = self.cells.get(&ivec3::new(cell.x + dx, cell.y + dy, cell.z + dz)) {
						out.extend_from_slice(members);
					}
				}
			}
		}
		out
	}
}

/// Greedy proximity clustering: scan points in order, each unclustered point
/// opens a new cluster and absorbs every later unclustered point within
/// `distance`. A cluster's deposition target is the arithmetic mean of its
/// members' positions and normals, not the seed point itself. O(n^2) but
/// points are few relative to photon counts, which is where the cost of
/// this module actually lives.
fn cluster_points(points: &[MeasurementPoint], distance: f64) -> (Vec<MeasurementPoint>, Vec<usize>) {
	let mut membership = vec![usize::MAX; points.len()];
	let mut members: Vec<Vec<usize>> = Vec::new();

	for i in 0..points.len() {
		if membership[i] != usize::MAX {
			continue;
		}
		let cluster_idx = members.len();
		membership[i] = cluster_idx;
		members.push(vec![i]);

		for j in (i + 1)..points.len() {
			if membership[j] != usize::MAX {
				continue;
			}
			if (points[i].position - points[j].position).len() < distance {
				membership[j] = cluster_idx;
				members[cluster_idx].push(j);
			}
		}
	}

	let centers = members
		.iter()
		.map(|idxs| {
			let n = idxs.len() as f64;
			let position = idxs.iter().map(|&i| points[i].position).fold(dvec3::ZERO, |a, b| a + b) / n;
			let normal = idxs.iter().map(|&i| points[i].normal).fold(dvec3::ZERO, |a, b| a + b).safe_normalized();
			MeasurementPoint { position, normal }
		})
		.collect();

	(centers, membership)
}

/// Forward photon tracer: emits photons from each lamp and deposits their
/// bounced flux onto measurement points via kernel density estimation.
///
/// First-hit flux is never deposited: it corresponds to direct illumination,
/// already accounted for analytically by the intensity calculator.
pub struct PhotonTracer<'a> {
	points: &'a [MeasurementPoint],
	targets: Vec<MeasurementPoint>,
	membership: Vec<usize>,
	grid: DepositionGrid,
	config: PhotonTracerConfig,
	cache: Mutex<Option<(usize, usize, Vec<f64>)>>,
}

impl<'a> PhotonTracer<'a> {
	pub fn build(points: &'a [MeasurementPoint], config: PhotonTracerConfig) -> Result<Self> {
		if config.kernel_radius <= 0.0 {
			return Err(error("kernel_radius must be positive"));
		}
		let (targets, membership) = if config.clustering_distance > 0.0 {
			cluster_points(points, config.clustering_distance)
		} else {
			(points.to_vec(), (0..points.len()).collect())
		};
		let grid = DepositionGrid::build(&targets, config.kernel_radius);
		Ok(Self { points, targets, membership, grid, config, cache: Mutex::new(None) })
	}

	/// Indirect exposure at every measurement point, one entry per input
	/// point (clustering, if enabled, is transparent to the caller). Results
	/// for an unchanged `lights` slice are served from cache.
	pub fn trace(&self, triangles: &[Triangle], tracer: &Tracer, lights: &[Light], profiles: &LampProfileTable) -> Vec<f64> {
		let key = (lights.as_ptr() as usize, lights.len());
		if let Some((cached_ptr, cached_len, cached)) = &*self.cache.lock().unwrap() {
			if (*cached_ptr, *cached_len) == key {
				return cached.clone();
			}
		}

		let per_target = self.trace_targets(triangles, tracer, lights, profiles);
		let broadcast: Vec<f64> = self.membership.iter().map(|&c| per_target[c]).collect();

		*self.cache.lock().unwrap() = Some((key.0, key.1, broadcast.clone()));
		broadcast
	}

	fn trace_targets(&self, triangles: &[Triangle], tracer: &Tracer, lights: &[Light], profiles: &LampProfileTable) -> Vec<f64> {
		let n = self.targets.len();
		if lights.is_empty() || n == 0 {
			return vec![0.0; n];
		}

		let tasks: Vec<usize> = (0..lights.len()).flat_map(|l| std::iter::repeat(l).take(self.config.photons_per_light)).collect();

		if self.config.parallel {
			tasks
				.into_par_iter()
				.enumerate()
				.fold(
					|| vec![0.0; n],
					|mut acc, (task_idx, lamp_idx)| {
						let mut rng = self.rng_for_task(task_idx as u64);
						self.trace_one_photon(&lights[lamp_idx], triangles, tracer, profiles, &mut rng, &mut acc);
						acc
					},
				)
				.reduce(
					|| vec![0.0; n],
					|mut a, b| {
						for i in 0..n {
							a[i] += b[i];
						}
						a
					},
				)
		} else {
			let mut acc = vec![0.0; n];
			let mut rng = self.rng_for_task(0);
			for &lamp_idx in &tasks {
				self.trace_one_photon(&lights[lamp_idx], triangles, tracer, profiles, &mut rng, &mut acc);
			}
			acc
		}
	}

	fn rng_for_task(&self, task_idx: u64) -> rand::rngs::StdRng {
		match self.config.seed {
			Some(seed) => rand::rngs::StdRng::seed_from_u64(seed.wrapping_add(task_idx)),
			None => rand::rngs::StdRng::from_entropy(),
		}
	}

	fn trace_one_photon(&self, light: &Light, triangles: &[Triangle], tracer: &Tracer, profiles: &LampProfileTable, rng: &mut impl Rng, acc: &mut [f64]) {
		let phi0 = light.intensity / self.config.photons_per_light as f64;
		let direction = biased_cone(rng.gen(), rng.gen(), light.direction, FRAC_PI_2);

		let Some(first_hit) = tracer.closest_hit(light.position, direction) else { return };
		let theta_l = clamp(light.direction.dot(direction), -1.0, 1.0).acos().to_degrees();
		let ratio = profiles.intensity_ratio(&light.lamp_type, theta_l);
		let phi_prime = phi0 * ratio;
		let first_tri = &triangles[first_hit.triangle_index];

		let mut flux = phi_prime * first_tri.reflectivity;
		let mut point = first_hit.point;
		let mut normal = first_tri.normal;
		let mut b = 1u32;

		while b <= self.config.max_bounces {
			if self.config.use_russian_roulette && flux < self.config.roulette_threshold {
				let q = flux / self.config.roulette_threshold;
				if rng.gen::<f64>() >= q {
					return;
				}
				flux /= q;
			}
			if flux < self.config.epsilon {
				return;
			}

			let dir = cosine_sphere(rng.gen(), rng.gen(), normal);
			let origin = point + normal * 1e-3;
			let Some(hit) = tracer.closest_hit(origin, dir) else { return };

			for j in self.grid.nearby(hit.point) {
				let d = (hit.point - self.targets[j].position).len();
				let w = f64::max(0.0, 1.0 - d / self.config.kernel_radius);
				if w > 0.0 {
					acc[j] += w * flux;
				}
			}

			let hit_tri = &triangles[hit.triangle_index];
			let mut next_flux = flux * hit_tri.reflectivity;
			if hit_tri.reflectivity < 0.1 {
				let rho = hit_tri.reflectivity;
				if rng.gen::<f64>() >= rho {
					return;
				}
				next_flux /= rho;
			}
			if next_flux < self.config.epsilon {
				return;
			}

			point = hit.point;
			normal = hit_tri.normal;
			flux = next_flux;
			b += 1;
		}
	}

	pub fn points(&self) -> &[MeasurementPoint] {
		self.points
	}
}
