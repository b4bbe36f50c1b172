use super::internal::*;
use rand::Rng;

/// Default number of candidates drawn per target point before pruning.
pub const DEFAULT_OVERSAMPLE: usize = 10;

fn point_to_cell(p: dvec3, cell_size: f64) -> ivec3 {
	ivec3::new((p.x / cell_size).floor() as i32, (p.y / cell_size).floor() as i32, (p.z / cell_size).floor() as i32)
}

/// Samples a uniformly-distributed point on `triangle`'s surface using the
/// square-root barycentric method, offset `offset` along the triangle normal.
pub fn sample_point_on_triangle(triangle: &Triangle, rng: &mut impl Rng, offset: f64) -> dvec3 {
	let r1: f64 = rng.gen();
	let r2: f64 = rng.gen();
	let sqrt_r1 = r1.sqrt();
	let u = 1.0 - sqrt_r1;
	let v = sqrt_r1 * (1.0 - r2);
	let w = sqrt_r1 * r2;
	let point = triangle.v0 * u + triangle.v1 * v + triangle.v2 * w;
	point + triangle.normal * offset
}

fn points_are_similar(p1: dvec3, n1: dvec3, p2: dvec3, n2: dvec3, distance_threshold: f64, normal_threshold: f64) -> bool {
	if (p1 - p2).len() > distance_threshold {
		return false;
	}
	n1.dot(n2) >= normal_threshold
}

/// Generates well-distributed measurement points on a triangular mesh:
/// area-weighted random sampling followed by proximity+normal pruning.
///
/// See module `sampler` invariants: fails on empty `triangles`, non-positive
/// `num_points` or `distance_threshold`, `normal_similarity_threshold`
/// outside `[0, 1]`, or a mesh with zero total surface area.
pub fn generate_measurement_points(
	triangles: &[Triangle],
	num_points: usize,
	distance_threshold: f64,
	normal_similarity_threshold: f64,
	seed: Option<u64>,
	surface_offset: f64,
) -> Result<Vec<MeasurementPoint>> {
	generate_measurement_points_with_oversample(triangles, num_points, distance_threshold, normal_similarity_threshold, DEFAULT_OVERSAMPLE, seed, surface_offset)
}

pub fn generate_measurement_points_with_oversample(
	triangles: &[Triangle],
	num_points: usize,
	distance_threshold: f64,
	normal_similarity_threshold: f64,
	oversample: usize,
	seed: Option<u64>,
	surface_offset: f64,
) -> Result<Vec<MeasurementPoint>> {
	if triangles.is_empty() {
		return Err(error("cannot generate measurement points on an empty mesh"));
	}
	if num_points == 0 {
		return Err(error("num_points must be positive"));
	}
	if distance_threshold <= 0.0 {
		return Err(error("distance_threshold must be positive"));
	}
	if !(0.0..=1.0).contains(&normal_similarity_threshold) {
		return Err(error("normal_similarity_threshold must be in [0, 1]"));
	}

	let areas: Vec<f64> = triangles.iter().map(Triangle::area).collect();
	let total_area: f64 = areas.iter().sum();
	if total_area <= 0.0 {
		return Err(error("total mesh area is zero"));
	}

	let mut cumulative = Vec::with_capacity(areas.len());
	let mut running = 0.0;
	for a in &areas {
		running += a;
		cumulative.push(running / total_area);
	}

	let mut rng = match seed {
		Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
		None => rand::rngs::StdRng::from_entropy(),
	};

	let max_attempts = num_points * oversample;
	let mut candidates: Vec<(dvec3, dvec3)> = Vec::with_capacity(max_attempts);
	for _ in 0..max_attempts {
		let r: f64 = rng.gen();
		let idx = cumulative.partition_point(|&c| c < r).min(triangles.len() - 1);
		let tri = &triangles[idx];
		let point = sample_point_on_triangle(tri, &mut rng, surface_offset);
		candidates.push((point, tri.normal));
	}

	let cell_size = f64::max(distance_threshold, 0.1);
	let mut grid: HashMap<ivec3, Vec<usize>> = HashMap::default();
	for (i, (point, _)) in candidates.iter().enumerate() {
		grid.entry(point_to_cell(*point, cell_size)).or_default().push(i);
	}

	let mut used = vec![false; candidates.len()];
	let mut accepted = Vec::new();

	for i in 0..candidates.len() {
		if used[i] {
			continue;
		}
		let (point, normal) = candidates[i];
		accepted.push(MeasurementPoint { position: point, normal });
		used[i] = true;

		let cell = point_to_cell(point, cell_size);
		for dx in -2..=2 {
			for dy in -2..=2 {
				for dz in -2..=2 {
					let neighbor = ivec3::new(cell.x + dx, cell.y + dy, cell.z + dz);
					let Some(members) = grid.get(&neighbor) else { continue };
					for &j in members {
						if j <= i || used[j] {
							continue;
						}
						let (other_point, other_normal) = candidates[j];
						if points_are_similar(point, normal, other_point, other_normal, distance_threshold, normal_similarity_threshold) {
							used[j] = true;
						}
					}
				}
			}
		}

		if accepted.len() >= num_points {
			break;
		}
	}

	Ok(accepted)
}
