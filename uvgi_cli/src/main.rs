use any_result::*;
use std::path::PathBuf;
use structopt::StructOpt;
use uvgi_core::*;

#[derive(StructOpt)]
#[structopt(name = "uvgi", about = "Simulate UV germicidal irradiance inside an enclosure")]
struct Opts {
	/// Path to a simulation config JSON file.
	config: PathBuf,
}

fn main() {
	run(Opts::from_args()).unwrap_or_else(|err| exit(err));
}

fn run(opts: Opts) -> Result<()> {
	let config = Config::parse(&opts.config)?;

	let scene = Scene::load(&config.scene_file)?;
	let triangles = scene.build_triangles()?;

	let lamp_specs = LampSpec::load_list(&config.lamps_file)?;
	let lights: Vec<Light> = lamp_specs.into_iter().map(Light::from).collect();

	let profiles = match &config.lamp_profiles_file {
		Some(path) => LampProfileTable::load(path)?,
		None => LampProfileTable::default(),
	};

	let pathogens: Vec<Pathogen> = match &config.pathogens_file {
		Some(path) => PathogenTable::load(path)?.iter().cloned().collect(),
		None => Vec::new(),
	};

	let points = generate_measurement_points(&triangles, config.num_points, config.distance_threshold, config.normal_similarity_threshold, config.sampler_seed, config.surface_offset)?;

	let inputs = SimulationInputs { triangles: &triangles, lights: &lights, pathogens: &pathogens, points: &points, exposure_time: config.exposure_time };

	let result = run_simulation(&inputs, &profiles, config.photon_tracer_config())?;

	println!("evaluated {} measurement points", result.points.len());
	result.save(&config.output_file)
}

fn exit(err: Error) -> ! {
	eprintln!("uvgi: {}", err);
	std::process::exit(1);
}
