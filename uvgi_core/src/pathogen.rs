use super::internal::*;

/// Disinfection rate constants for a single pathogen, as used by the
/// two-population inactivation model (see `survival`).
///
/// `k1` and `percent_resistant` are clamped on construction so a malformed
/// input table can never produce a non-physical survival curve: `k1` must be
/// strictly positive, `k2` non-negative, `percent_resistant` in [0, 100].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pathogen {
	pub name: String,
	pub k1: f64,
	pub k2: f64,
	pub percent_resistant: f64,
}

impl Pathogen {
	pub fn new(name: impl Into<String>, k1: f64, k2: f64, percent_resistant: f64) -> Self {
		Self {
			name: name.into(),
			k1: if k1 > 0.0 { f64::max(k1, 1e-6) } else { 1e-6 },
			k2: if k2 > 0.0 { k2 } else { 0.0 },
			percent_resistant: clamp(percent_resistant, 0.0, 100.0),
		}
	}
}

/// Simple by-name pathogen table, loaded from a JSON array of
/// `{name, k1, k2, percent_resistant}` records.
#[derive(Clone, Debug, Default)]
pub struct PathogenTable {
	by_name: HashMap<String, Pathogen>,
}

impl PathogenTable {
	pub fn load(path: &Path) -> Result<Self> {
		let records: Vec<Pathogen> = parse_json(path)?;
		let mut by_name = HashMap::default();
		for r in records {
			by_name.insert(r.name.clone(), Pathogen::new(r.name, r.k1, r.k2, r.percent_resistant));
		}
		Ok(Self { by_name })
	}

	pub fn get(&self, name: &str) -> Option<&Pathogen> {
		self.by_name.get(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Pathogen> {
		self.by_name.values()
	}

	pub fn insert(&mut self, pathogen: Pathogen) {
		self.by_name.insert(pathogen.name.clone(), pathogen);
	}
}

/// One wavelength-resolved disinfection data point for a single species/strain.
#[derive(Clone, Debug)]
struct WavelengthRecord {
	strain: String,
	wavelength_nm: f64,
	k1: f64,
	k2: f64,
	percent_resistant: f64,
}

/// Wavelength-resolved disinfection data, loaded from a CSV with columns
/// `Species, Strain, wavelength [nm], k1 [cm2/mJ], k2 [cm2/mJ], % resistant`.
///
/// Only the first strain encountered for each species is retained: a species
/// with multiple strains in the source data is treated as a single curve,
/// keyed by whichever strain appears first in the file.
#[derive(Clone, Debug, Default)]
pub struct WavelengthPathogenTable {
	by_species: HashMap<String, Vec<WavelengthRecord>>,
}

impl WavelengthPathogenTable {
	pub fn load_csv(path: &Path) -> Result<Self> {
		let mut reader = csv::Reader::from_reader(open(path)?);
		let mut first_strain: HashMap<String, String> = HashMap::default();
		let mut by_species: HashMap<String, Vec<WavelengthRecord>> = HashMap::default();

		for result in reader.deserialize() {
			let row: RawRow = match result {
				Ok(row) => row,
				Err(_) => continue,
			};
			let (species, strain, wavelength_nm, k1, k2, percent_resistant) =
				match (row.species, row.strain, row.wavelength_nm, row.k1, row.k2, row.percent_resistant) {
					(Some(a), Some(b), Some(c), Some(d), Some(e), Some(f)) => (a, b, c, d, e, f),
					_ => continue,
				};

			let strain_for_species = first_strain.entry(species.clone()).or_insert_with(|| strain.clone());
			if *strain_for_species != strain {
				continue;
			}

			by_species.entry(species).or_default().push(WavelengthRecord {
				strain,
				wavelength_nm,
				k1: if k1 > 0.0 { f64::max(k1, 1e-6) } else { 1e-6 },
				k2: if k2 > 0.0 { k2 } else { 0.0 },
				percent_resistant: clamp(percent_resistant, 0.0, 100.0),
			});
		}

		for records in by_species.values_mut() {
			records.sort_by(|a, b| a.wavelength_nm.partial_cmp(&b.wavelength_nm).unwrap());
		}

		Ok(Self { by_species })
	}

	/// Interpolated disinfection parameters for `species` at `wavelength_nm`.
	/// `None` if the species is not present in the table.
	pub fn parameters_at(&self, species: &str, wavelength_nm: f64) -> Option<Pathogen> {
		let records = self.by_species.get(species)?;
		if records.is_empty() {
			return None;
		}
		let k1_points: Vec<(f64, f64)> = records.iter().map(|r| (r.wavelength_nm, r.k1)).collect();
		let k2_points: Vec<(f64, f64)> = records.iter().map(|r| (r.wavelength_nm, r.k2)).collect();
		let pr_points: Vec<(f64, f64)> = records.iter().map(|r| (r.wavelength_nm, r.percent_resistant)).collect();

		Some(Pathogen::new(
			species,
			interpolate_clamped(wavelength_nm, &k1_points),
			interpolate_clamped(wavelength_nm, &k2_points),
			interpolate_clamped(wavelength_nm, &pr_points),
		))
	}
}

#[derive(Deserialize)]
struct RawRow {
	#[serde(rename = "Species")]
	species: Option<String>,
	#[serde(rename = "Strain")]
	strain: Option<String>,
	#[serde(rename = "wavelength [nm]")]
	wavelength_nm: Option<f64>,
	#[serde(rename = "k1 [cm2/mJ]")]
	k1: Option<f64>,
	#[serde(rename = "k2 [cm2/mJ]")]
	k2: Option<f64>,
	#[serde(rename = "% resistant")]
	percent_resistant: Option<f64>,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn negative_k1_clamps_to_epsilon() {
		let p = Pathogen::new("x", -1.0, -1.0, -10.0);
		assert_eq!(p.k1, 1e-6);
		assert_eq!(p.k2, 0.0);
		assert_eq!(p.percent_resistant, 0.0);
	}

	#[test]
	fn percent_resistant_clamps_to_100() {
		let p = Pathogen::new("x", 1.0, 0.5, 150.0);
		assert_eq!(p.percent_resistant, 100.0);
	}

	#[test]
	fn table_lookup_by_name() {
		let mut table = PathogenTable::default();
		table.insert(Pathogen::new("sars-cov-2", 0.377, 0.0, 0.0));
		assert!(table.get("sars-cov-2").is_some());
		assert!(table.get("missing").is_none());
	}
}
