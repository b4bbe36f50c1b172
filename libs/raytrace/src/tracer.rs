use super::internal::*;

/// Default cutoff for `closest_hit` when the caller does not need a tighter bound.
pub const DEFAULT_MAX_T: f64 = 1e4;

#[derive(Clone, Copy, Debug)]
pub struct Hit {
	pub t: f64,
	pub point: dvec3,
	pub triangle_index: usize,
}

/// Wraps a triangle array and its spatial grid, exposing occlusion
/// and closest-hit queries. Triangles are immutable once built.
pub struct Tracer<'a> {
	triangles: &'a [Triangle],
	grid: Grid,
}

impl<'a> Tracer<'a> {
	pub fn build(triangles: &'a [Triangle]) -> Self {
		let cell_size = Grid::default_cell_size(triangles);
		Self::build_with_cell_size(triangles, cell_size)
	}

	pub fn build_with_cell_size(triangles: &'a [Triangle], cell_size: f64) -> Self {
		Self { triangles, grid: Grid::build(triangles, cell_size) }
	}

	pub fn triangles(&self) -> &[Triangle] {
		self.triangles
	}

	/// True iff `origin` and `target` can see each other: no triangle produces
	/// a hit strictly closer than `target`. Points closer than EPSILON are
	/// always mutually visible.
	pub fn is_path_clear(&self, origin: dvec3, target: dvec3) -> bool {
		let delta = target - origin;
		let max_t = delta.len();
		if max_t < EPSILON {
			return true;
		}
		let dir = delta / max_t;
		let ray = DRay::new(origin, dir);
		let candidates = self.grid.triangles_along_ray(&ray, max_t);
		for idx in candidates {
			if let Some(t) = self.triangles[idx as usize].intersect(&ray) {
				if t < max_t - EPSILON {
					return false;
				}
			}
		}
		true
	}

	/// Closest hit along `direction` from `origin`, within `DEFAULT_MAX_T`.
	pub fn closest_hit(&self, origin: dvec3, direction: dvec3) -> Option<Hit> {
		self.closest_hit_within(origin, direction, DEFAULT_MAX_T)
	}

	pub fn closest_hit_within(&self, origin: dvec3, direction: dvec3, max_t: f64) -> Option<Hit> {
		let ray = DRay::new(origin, direction);
		let candidates = self.grid.triangles_along_ray(&ray, max_t);
		let mut best: Option<(f64, u32)> = None;
		for idx in candidates {
			if let Some(t) = self.triangles[idx as usize].intersect(&ray) {
				if t <= max_t && best.map_or(true, |(best_t, _)| t < best_t) {
					best = Some((t, idx));
				}
			}
		}
		best.map(|(t, idx)| Hit { t, point: ray.at(t), triangle_index: idx as usize })
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn box_triangles() -> Vec<Triangle> {
		// A single floor quad (two triangles) spanning [0,10]x{0}x[0,10], facing +Y.
		let a = dvec3(0., 0., 0.);
		let b = dvec3(10., 0., 0.);
		let c = dvec3(10., 0., 10.);
		let d = dvec3(0., 0., 10.);
		vec![Triangle::new(a, b, c, 0.5), Triangle::new(a, c, d, 0.5)]
	}

	#[test]
	fn closest_hit_finds_the_floor() {
		let tris = box_triangles();
		let tracer = Tracer::build(&tris);
		let hit = tracer.closest_hit(dvec3(5., 5., 5.), -dvec3::EY).unwrap();
		assert!((hit.t - 5.0).abs() < 1e-9);
		assert!((hit.point.y).abs() < 1e-9);
	}

	#[test]
	fn occlusion_symmetry() {
		let tris = box_triangles();
		let tracer = Tracer::build(&tris);
		let a = dvec3(2., 3., 2.);
		let b = dvec3(8., 3., 8.);
		assert_eq!(tracer.is_path_clear(a, b), tracer.is_path_clear(b, a));
	}

	#[test]
	fn occluded_path_blocked_by_floor() {
		let tris = box_triangles();
		let tracer = Tracer::build(&tris);
		// straight line through the floor plane is blocked.
		assert!(!tracer.is_path_clear(dvec3(5., 5., 5.), dvec3(5., -5., 5.)));
	}
}
