//! services/api/src/bin/openapi.rs
//!
//! Dumps the activity tracker's OpenAPI document so the browser client can be
//! generated against it. Usage: `openapi [OUTPUT]`, where `OUTPUT` defaults to
//! `openapi.json` and `-` writes to stdout.

use api_lib::{error::ApiError, web::rest::ApiDoc};
use std::io::Write;
use utoipa::OpenApi;

const DEFAULT_OUTPUT: &str = "openapi.json";

fn render() -> Result<String, ApiError> {
    let mut doc = ApiDoc::openapi();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc.to_pretty_json()
        .map_err(|e| ApiError::Internal(format!("Failed to serialize OpenAPI document: {}", e)))
}

fn main() -> Result<(), ApiError> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let document = render()?;

    if output == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.write_all(b"\n")?;
        return Ok(());
    }

    std::fs::write(&output, document)?;
    let routes = ApiDoc::openapi().paths.paths.len();
    eprintln!("Wrote {} routes to {}", routes, output);
    Ok(())
}
