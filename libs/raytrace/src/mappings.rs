use super::internal::*;
use std::f64::consts::PI;

/// Maps a point (u,v) from the unit square to the unit disk, preserving uniformity.
pub fn uniform_disk(u: f64, v: f64) -> (f64, f64) {
	let theta = (2.0 * PI) * u;
	let r = f64::sqrt(v);
	(r * f64::cos(theta), r * f64::sin(theta))
}

/// Transforms a point (u,v) from the unit square to a vector on the hemisphere
/// around `normal`, cosine weighted (Lambertian scattering).
///
/// Uses Malley's method (disk-to-hemisphere projection), which is the same
/// cosine-weighted distribution as sampling directly in polar form.
pub fn cosine_sphere(u: f64, v: f64, normal: dvec3) -> dvec3 {
	let (x, y) = uniform_disk(u, v);
	let z = f64::sqrt(f64::max(0.0, 1.0 - (x * x + y * y)));
	stable_basis(normal) * dvec3::new(x, y, z)
}

/// Samples a direction inside a cone of half-angle `max_theta` around `axis`,
/// biased toward the axis center (uniform in cos(theta) rather than solid angle).
pub fn biased_cone(u: f64, v: f64, axis: dvec3, max_theta: f64) -> dvec3 {
	let phi = (2.0 * PI) * u;
	let cos_max = f64::cos(max_theta);
	// U drawn uniformly in [cos(max_theta), 1]; c = sqrt(U).
	let uu = cos_max + (1.0 - cos_max) * v;
	let c = f64::sqrt(f64::max(0.0, uu));
	let sin_theta = f64::sqrt(f64::max(0.0, 1.0 - c * c));
	let local = dvec3::new(sin_theta * f64::cos(phi), sin_theta * f64::sin(phi), c);
	make_basis(axis) * local
}

/// Orthonormal basis with given z-axis, following Shirley's axis-pick rule:
/// cross the smallest-magnitude component of `ez`, set to 1, against `ez`.
pub fn make_basis(ez: dvec3) -> Matrix3<f64> {
	let mut t = ez;
	let mut i = 0;
	let mut min = f64::abs(t[i]);
	if f64::abs(t[1]) < min {
		i = 1;
		min = f64::abs(t[1]);
	}
	if f64::abs(t[2]) < min {
		i = 2;
	}
	t[i] = 1.0;

	let ex = t.cross(ez).normalized();
	let ey = ex.cross(ez);

	Matrix3::from([ex, ey, ez])
}

/// Tangent/bitangent pair for `normal`, chosen via a fixed axis-pick rule so
/// the basis is stable (no discontinuity) across the whole sphere of normals.
pub fn stable_basis(normal: dvec3) -> Matrix3<f64> {
	let tangent = if normal.x.abs() < 0.9 {
		dvec3::new(0.0, normal.z, -normal.y).safe_normalized()
	} else {
		dvec3::new(-normal.z, 0.0, normal.x).safe_normalized()
	};
	let bitangent = normal.cross(tangent);
	Matrix3::from([tangent, bitangent, normal])
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn cosine_sphere_stays_in_hemisphere() {
		let n = dvec3(0., 1., 0.).normalized();
		for i in 0..50 {
			let u = (i as f64 + 0.5) / 50.0;
			let v = ((i * 7 + 3) % 50) as f64 / 50.0;
			let d = cosine_sphere(u, v, n);
			assert!(d.dot(n) >= -1e-9);
			assert!((d.len() - 1.0).abs() < 1e-9);
		}
	}

	#[test]
	fn biased_cone_respects_opening_angle() {
		let axis = dvec3(0., -1., 0.);
		for i in 0..50 {
			let u = (i as f64 + 0.5) / 50.0;
			let v = ((i * 11 + 5) % 50) as f64 / 50.0;
			let d = biased_cone(u, v, axis, PI / 2.0);
			let cos_theta = d.dot(axis);
			assert!(cos_theta >= -1e-9);
		}
	}

	#[test]
	fn stable_basis_is_orthonormal() {
		for n in [dvec3(1., 0., 0.), dvec3(0., 1., 0.), dvec3(0., 0., 1.), dvec3(1., 1., 1.).normalized()] {
			let b = stable_basis(n);
			let (t, bt, nn) = (b[0], b[1], b[2]);
			assert!((t.len() - 1.0).abs() < 1e-9);
			assert!((bt.len() - 1.0).abs() < 1e-9);
			assert!(t.dot(nn).abs() < 1e-9);
			assert!(t.dot(bt).abs() < 1e-9);
			assert!(bt.dot(nn).abs() < 1e-9);
		}
	}
}
