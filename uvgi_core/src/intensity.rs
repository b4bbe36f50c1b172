use super::internal::*;
use std::f64::consts::PI;

/// Minimum lamp-to-point distance for which direct irradiance is defined.
/// Points effectively coincident with a lamp (`d < 1e-6`) receive zero.
pub const MIN_DISTANCE: f64 = 1e-6;

/// Direct (line-of-sight, inverse-square) irradiance contributed by a single
/// lamp at a single point: `I(theta) / (4 pi d^2)`, gated on visibility.
///
/// `theta` is the angle between the lamp's pointing direction and the ray
/// from the lamp toward `point`.
pub fn direct_irradiance(point: dvec3, lamp: &Light, profiles: &LampProfileTable, tracer: &Tracer) -> f64 {
	let delta = point - lamp.position;
	let d = delta.len();
	if d < MIN_DISTANCE {
		return 0.0;
	}
	if !tracer.is_path_clear(point, lamp.position) {
		return 0.0;
	}
	let dir_to_point = delta / d;
	let cos_theta = clamp(lamp.direction.dot(dir_to_point), -1.0, 1.0);
	let theta_deg = cos_theta.acos().to_degrees();
	let ratio = profiles.intensity_ratio(&lamp.lamp_type, theta_deg);
	ratio * lamp.intensity / (4.0 * PI * d * d)
}

/// Total direct irradiance at `point` from every lamp, additive across lamps.
pub fn total_direct_irradiance(point: dvec3, lights: &[Light], profiles: &LampProfileTable, tracer: &Tracer) -> f64 {
	lights.iter().map(|l| direct_irradiance(point, l, profiles, tracer)).sum()
}

/// Direct irradiance at every measurement point, for every lamp, summed.
/// The companion indirect pass (photon tracer) is invoked separately so the
/// two halves of total irradiance are computed exactly once each, in batch.
pub fn compute_direct_batch(points: &[MeasurementPoint], lights: &[Light], profiles: &LampProfileTable, tracer: &Tracer) -> Vec<f64> {
	points.iter().map(|p| total_direct_irradiance(p.position, lights, profiles, tracer)).collect()
}
