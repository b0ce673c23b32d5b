//! JSON export of generated world models
//!
//! Serializes the complete model (tiles, neighbor table, border flags) so
//! a rendering layer or external tool can consume a run's output.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

use crate::world::WorldModel;

/// Write the model as pretty-printed JSON to `path`.
pub fn export_json(model: &WorldModel, path: &str) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, model)?;
    Ok(())
}

/// Serialize the model to a JSON string (used by tests and embedding).
pub fn to_json_string(model: &WorldModel) -> Result<String, serde_json::Error> {
    serde_json::to_string(model)
}
