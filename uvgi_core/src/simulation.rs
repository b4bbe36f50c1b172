use super::internal::*;

/// Already-resolved inputs to a simulation request: the boundary layer is
/// responsible for parsing scene files, lamp specs and pathogen tables into
/// these types before handing them to `run_simulation`.
pub struct SimulationInputs<'a> {
	pub triangles: &'a [Triangle],
	pub lights: &'a [Light],
	pub pathogens: &'a [Pathogen],
	pub points: &'a [MeasurementPoint],
	pub exposure_time: f64,
}

/// Runs one full simulation: direct irradiance analytically, indirect
/// irradiance via photon tracing, then pathogen survival for every
/// requested pathogen at every measurement point.
pub fn run_simulation(inputs: &SimulationInputs, profiles: &LampProfileTable, photon_config: PhotonTracerConfig) -> Result<SimulationResult> {
	if inputs.points.is_empty() {
		return Err(error("no measurement points to evaluate"));
	}

	let tracer = Tracer::build(inputs.triangles);
	let direct = compute_direct_batch(inputs.points, inputs.lights, profiles, &tracer);
	let photon_tracer = PhotonTracer::build(inputs.points, photon_config)?;
	let indirect = photon_tracer.trace(inputs.triangles, &tracer, inputs.lights, profiles);

	let mut points = Vec::with_capacity(inputs.points.len());
	for (i, p) in inputs.points.iter().enumerate() {
		let direct_intensity = direct[i];
		let indirect_intensity = indirect[i];
		let total_intensity = direct_intensity + indirect_intensity;

		let pathogens = inputs
			.pathogens
			.iter()
			.map(|pathogen| {
				let r = compute_survival(pathogen, total_intensity, inputs.exposure_time);
				PathogenRecord {
					pathogen_name: pathogen.name.clone(),
					k1: pathogen.k1,
					k2: pathogen.k2,
					percent_resistant: pathogen.percent_resistant,
					fluence: r.fluence,
					survival_rate: r.survival_rate,
					ech_uv: r.ech_uv,
				}
			})
			.collect();

		points.push(PointResult { position: p.position, direct_intensity, indirect_intensity, total_intensity, pathogens });
	}

	Ok(SimulationResult { points })
}
