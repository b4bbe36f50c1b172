use super::internal::*;

/// Uniform spatial grid bucketing triangles by axis-aligned cell,
/// supporting 3D-DDA ray traversal for candidate lookup.
///
/// The grid does not own its triangles; it stores indices into a
/// caller-supplied slice and refers back into it on every query.
pub struct Grid {
	cell_size: f64,
	cells: HashMap<ivec3, Vec<u32>>,
}

impl Grid {
	/// Default cell size heuristic: 2.5x the mean triangle AABB diagonal,
	/// clamped to [0.1, 100].
	pub fn default_cell_size(triangles: &[Triangle]) -> f64 {
		if triangles.is_empty() {
			return 1.0;
		}
		let mean_diag: f64 = triangles
			.iter()
			.map(|t| {
				let bb = t.bounds();
				(bb.max - bb.min).len()
			})
			.sum::<f64>() / (triangles.len() as f64);
		(2.5 * mean_diag).clamp(0.1, 100.0)
	}

	pub fn build(triangles: &[Triangle], cell_size: f64) -> Self {
		let mut cells: HashMap<ivec3, Vec<u32>> = HashMap::default();
		for (idx, tri) in triangles.iter().enumerate() {
			let bb = tri.bounds();
			let min = cell_of(bb.min, cell_size);
			let max = cell_of(bb.max, cell_size);
			for i in min.x..=max.x {
				for j in min.y..=max.y {
					for k in min.z..=max.z {
						cells.entry(ivec3::new(i, j, k)).or_default().push(idx as u32);
					}
				}
			}
		}
		Self { cell_size, cells }
	}

	pub fn cell_size(&self) -> f64 {
		self.cell_size
	}

	pub fn triangles_in_cell(&self, cell: ivec3) -> &[u32] {
		self.cells.get(&cell).map(|v| v.as_slice()).unwrap_or(&[])
	}

	/// 3D-DDA walk starting at the cell containing `ray.start`, stepping into
	/// whichever neighbour cell the ray reaches first, until the stepping `t`
	/// exceeds `max_t`. Returns the deduplicated union of triangle indices
	/// found in every cell visited.
	pub fn triangles_along_ray(&self, ray: &DRay, max_t: f64) -> Vec<u32> {
		let cs = self.cell_size;
		let mut cell = cell_of(ray.start, cs);
		let dir = ray.dir;

		let step = ivec3::new(axis_step(dir.x), axis_step(dir.y), axis_step(dir.z));
		let mut t_max = dvec3::new(
			axis_t_max(ray.start.x, dir.x, cell.x, cs),
			axis_t_max(ray.start.y, dir.y, cell.y, cs),
			axis_t_max(ray.start.z, dir.z, cell.z, cs),
		);
		let t_delta = dvec3::new(axis_t_delta(dir.x, cs), axis_t_delta(dir.y, cs), axis_t_delta(dir.z, cs));

		let mut seen: HashSet<u32> = HashSet::default();
		let mut out = Vec::new();

		loop {
			for &idx in self.triangles_in_cell(cell) {
				if seen.insert(idx) {
					out.push(idx);
				}
			}

			let axis = if t_max.x <= t_max.y && t_max.x <= t_max.z {
				0
			} else if t_max.y <= t_max.z {
				1
			} else {
				2
			};

			if t_max[axis] > max_t {
				break;
			}

			match axis {
				0 => {
					cell.x += step.x;
					t_max.x += t_delta.x;
				}
				1 => {
					cell.y += step.y;
					t_max.y += t_delta.y;
				}
				_ => {
					cell.z += step.z;
					t_max.z += t_delta.z;
				}
			}
		}

		out
	}
}

fn cell_of(p: dvec3, cell_size: f64) -> ivec3 {
	ivec3::new((p.x / cell_size).floor() as i32, (p.y / cell_size).floor() as i32, (p.z / cell_size).floor() as i32)
}

fn axis_step(dir: f64) -> i32 {
	if dir > 0.0 {
		1
	} else if dir < 0.0 {
		-1
	} else {
		0
	}
}

fn axis_t_max(start: f64, dir: f64, cell: i32, cell_size: f64) -> f64 {
	if dir == 0.0 {
		f64::INFINITY
	} else if dir > 0.0 {
		((cell + 1) as f64 * cell_size - start) / dir
	} else {
		(cell as f64 * cell_size - start) / dir
	}
}

fn axis_t_delta(dir: f64, cell_size: f64) -> f64 {
	if dir == 0.0 {
		f64::INFINITY
	} else {
		(cell_size / dir).abs()
	}
}
