//! `cadence validate` -- offline validation of a definition request file.

use std::fs;
use std::path::Path;

use cadence_core::{validate_definition, DefinitionRequest};

/// Read a definition request from `path` and print the verdict.
///
/// Exit codes: 0 well-formed, 1 structurally invalid, 2 unreadable file or
/// not JSON at all.
pub(crate) fn run_validate(path: &Path) -> i32 {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", path.display(), e);
            return 2;
        }
    };

    let request: DefinitionRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(e) => {
            eprintln!(
                "error: {} is not a definition request: {}",
                path.display(),
                e
            );
            return 2;
        }
    };

    match validate_definition(&request) {
        Ok(()) => {
            println!("ok: workflow definition '{}' is well-formed", request.id);
            0
        }
        Err(e) => {
            eprintln!("invalid: {}", e);
            1
        }
    }
}
