use super::internal::*;

/// Parallel-ray guard for the Moller-Trumbore determinant.
pub const EPSILON: f64 = 1e-6;

/// Barycentric slack admitted at triangle edges, so grazing rays
/// that land exactly on a shared edge count as a hit exactly once.
pub const EDGE_TOL: f64 = 1e-4;

/// A triangle with counter-clockwise winding (viewed from the outward side),
/// a reflectivity/albedo in [0, 1], and a precomputed outward unit normal.
#[derive(Clone, Debug)]
pub struct Triangle {
	pub v0: dvec3,
	pub v1: dvec3,
	pub v2: dvec3,
	pub reflectivity: f64,
	pub normal: dvec3,
}

impl Triangle {
	pub fn new(v0: dvec3, v1: dvec3, v2: dvec3, reflectivity: f64) -> Self {
		let normal = (v1 - v0).cross(v2 - v0).safe_normalized();
		Self { v0, v1, v2, reflectivity, normal }
	}

	pub fn centroid(&self) -> dvec3 {
		(self.v0 + self.v1 + self.v2) / 3.0
	}

	/// Axis-aligned bounds, computed on demand.
	pub fn bounds(&self) -> BoundingBox64 {
		BoundingBox64::new(self.v0, self.v0).add(self.v1).add(self.v2)
	}

	pub fn area(&self) -> f64 {
		0.5 * (self.v1 - self.v0).cross(self.v2 - self.v0).len()
	}

	/// Moller-Trumbore intersection with edge tolerance and one-sided facing test.
	/// Returns the ray parameter `t` of the hit, or `None` on a miss.
	pub fn intersect(&self, r: &DRay) -> Option<f64> {
		let edge1 = self.v1 - self.v0;
		let edge2 = self.v2 - self.v0;
		let pvec = r.dir.cross(edge2);
		let det = edge1.dot(pvec);
		if det.abs() < EPSILON {
			return None;
		}
		let inv_det = 1.0 / det;

		let tvec = r.start - self.v0;
		let u = tvec.dot(pvec) * inv_det;
		if u < -EDGE_TOL || u > 1.0 + EDGE_TOL {
			return None;
		}

		let qvec = tvec.cross(edge1);
		let v = r.dir.dot(qvec) * inv_det;
		if v < -EDGE_TOL || u + v > 1.0 + EDGE_TOL {
			return None;
		}

		let t = edge2.dot(qvec) * inv_det;
		if t < EPSILON {
			return None;
		}

		// Back-faces do not occlude and do not count as hits.
		let to_center = (self.centroid() - r.start).safe_normalized();
		if self.normal.dot(to_center) < 0.0 {
			return None;
		}

		Some(t)
	}

	pub fn intersects(&self, r: &DRay) -> bool {
		self.intersect(r).is_some()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn ray(start: (f64, f64, f64), dir: dvec3) -> DRay {
		DRay::new(start.into(), dir)
	}

	/*
			 * (3,4,-1)
			/|
		   / |
		  /  |
	(1,2,-1)*---* (3,2,-1)

	outward normal points toward -Z.
	*/
	fn facing_triangle() -> Triangle {
		Triangle::new(dvec3(1., 2., -1.), dvec3(3., 2., -1.), dvec3(3., 4., -1.), 0.5)
	}

	#[test]
	fn intersects_from_the_front() {
		let t = facing_triangle();
		assert!(t.normal.dot(-dvec3::EZ) > 0.0);
		assert!(t.intersects(&ray((2., 3., 0.), -dvec3::EZ)));
	}

	#[test]
	fn misses_outside_the_triangle() {
		let t = facing_triangle();
		assert!(!t.intersects(&ray((4., 3., 0.), -dvec3::EZ)));
		assert!(!t.intersects(&ray((2., -3., 0.), -dvec3::EZ)));
	}

	#[test]
	fn backfaces_do_not_count_as_hits() {
		let t = facing_triangle();
		// approaching from behind the triangle's outward side
		assert!(!t.intersects(&ray((2., 3., -2.), -dvec3::EZ)));
		assert!(t.intersects(&ray((2., 3., -2.), dvec3::EZ)));
	}

	#[test]
	fn rejects_hits_behind_the_origin() {
		let t = facing_triangle();
		assert!(!t.intersects(&ray((2., 3., -2.), -dvec3::EZ)));
	}

	#[test]
	fn normal_is_unit_length() {
		let t = facing_triangle();
		assert!((t.normal.len() - 1.0).abs() < 1e-12);
	}

	#[test]
	fn edge_tolerance_admits_grazing_ray() {
		let t = facing_triangle();
		// ray aimed exactly at vertex (1,2,-1): barycentric u=v=0 up to rounding.
		assert!(t.intersects(&ray((1., 2., 0.), -dvec3::EZ)));
	}
}
