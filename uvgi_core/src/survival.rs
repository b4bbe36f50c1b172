use super::internal::*;

/// Outcome of applying a pathogen's disinfection parameters to a measured
/// UV exposure: the delivered fluence and the resulting survival fraction
/// and equivalent air changes per hour.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SurvivalResult {
	pub fluence: f64,
	pub survival_rate: f64,
	pub ech_uv: f64,
}

/// Two-population (resistant/susceptible) Chick-Watson-style survival model.
///
/// `intensity` is the total (direct + indirect) irradiance at a point
/// (W/m^2), `exposure_time` the exposure duration (s).
pub fn compute_survival(pathogen: &Pathogen, intensity: f64, exposure_time: f64) -> SurvivalResult {
	let fluence = intensity * exposure_time;
	let survival_rate = 10f64.powf(-pathogen.k1 * fluence);
	let f = pathogen.percent_resistant / 100.0;
	let k_effective = pathogen.k1 * (1.0 - f) + pathogen.k2 * f;
	let ech_uv = k_effective * fluence * 3.6;
	SurvivalResult { fluence, survival_rate, ech_uv }
}

/// A single wavelength band's intensity and matching disinfection parameters,
/// for combining multiple UV sources with wavelength-dependent efficacy.
pub struct WavelengthBand {
	pub pathogen: Pathogen,
	pub intensity: f64,
}

/// Combine the survival effect of several wavelength bands illuminating the
/// same point for the same `exposure_time`: fluence and eACH-UV sum across
/// bands, survival fractions multiply (independent log-kills).
pub fn compute_survival_multi_wavelength(bands: &[WavelengthBand], exposure_time: f64) -> SurvivalResult {
	let mut total_fluence = 0.0;
	let mut total_ech_uv = 0.0;
	let mut survival_rate = 1.0;

	for band in bands {
		let r = compute_survival(&band.pathogen, band.intensity, exposure_time);
		total_fluence += r.fluence;
		total_ech_uv += r.ech_uv;
		survival_rate *= r.survival_rate;
	}

	SurvivalResult { fluence: total_fluence, survival_rate, ech_uv: total_ech_uv }
}

#[cfg(test)]
mod test {
	use super::*;

	// S5 from the scenario suite: intensity = 1 W/m^2, exposure = 6 s,
	// k1 = 0.1, k2 = 0, percent_resistant = 0.
	#[test]
	fn scenario_s5_single_population() {
		let pathogen = Pathogen::new("test", 0.1, 0.0, 0.0);
		let r = compute_survival(&pathogen, 1.0, 6.0);
		assert!((r.fluence - 6.0).abs() < 1e-9);
		assert!((r.survival_rate - 0.2512).abs() < 1e-3);
		assert!((r.ech_uv - 2.16).abs() < 1e-6);
	}

	#[test]
	fn zero_exposure_time_yields_full_survival() {
		let pathogen = Pathogen::new("test", 0.5, 0.1, 10.0);
		let r = compute_survival(&pathogen, 10.0, 0.0);
		assert_eq!(r.fluence, 0.0);
		assert!((r.survival_rate - 1.0).abs() < 1e-9);
		assert_eq!(r.ech_uv, 0.0);
	}

	#[test]
	fn multi_wavelength_survival_multiplies() {
		let bands = vec![
			WavelengthBand { pathogen: Pathogen::new("a", 0.1, 0.0, 0.0), intensity: 1.0 },
			WavelengthBand { pathogen: Pathogen::new("b", 0.2, 0.0, 0.0), intensity: 1.0 },
		];
		let combined = compute_survival_multi_wavelength(&bands, 1.0);
		let a = compute_survival(&bands[0].pathogen, 1.0, 1.0);
		let b = compute_survival(&bands[1].pathogen, 1.0, 1.0);
		assert!((combined.survival_rate - a.survival_rate * b.survival_rate).abs() < 1e-12);
		assert!((combined.fluence - (a.fluence + b.fluence)).abs() < 1e-12);
	}
}
