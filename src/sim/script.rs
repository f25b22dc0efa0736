//! Transaction script loading.
//!
//! Scripts are JSON arrays of register transactions, e.g.:
//!
//! ```json
//! [
//!   { "op": "write", "addr": 18, "value": 3735928559 },
//!   { "op": "read", "addr": 18 }
//! ]
//! ```

use serde::Deserialize;
use std::fs;

/// One scripted link transaction.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ScriptOp {
    Write { addr: u8, value: u32 },
    Read { addr: u8 },
}

/// Loads a transaction script from a JSON file.
pub fn load_script(path: &str) -> Result<Vec<ScriptOp>, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    serde_json::from_str(&content).map_err(|e| format!("{}: {}", path, e))
}
