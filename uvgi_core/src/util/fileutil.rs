use crate::internal::*;

use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;

/// BufReader for reading a file, with a more descriptive message on error.
pub fn open(file: &Path) -> Result<impl Read> {
	Ok(BufReader::new(File::open(file).map_err(|err| error(format!("open {:?}: {}", file, err)))?))
}

/// BufWriter for writing a file, with a more descriptive message on error.
pub fn create(file: &Path) -> Result<impl Write> {
	Ok(BufWriter::new(File::create(file).map_err(|err| error(format!("create {:?}: {}", file, err)))?))
}

/// Parse a JSON file at `path` into `T`, with the path included in any error.
pub fn parse_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
	serde_json::from_reader(open(path)?).map_err(|err| error(format!("{}: {}", path.to_string_lossy(), err)))
}

/// Write `value` as pretty-printed JSON to `path`.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
	serde_json::to_writer_pretty(create(path)?, value).map_err(|err| error(format!("{}: {}", path.to_string_lossy(), err)))
}
