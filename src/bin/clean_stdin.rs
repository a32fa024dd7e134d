//! Simple CLI that reads HTML from stdin and writes a JSON result to stdout.
//! Used by host-editor plugins that shell out instead of linking the crate.
//!
//! An optional argument names a JSON settings file overriding the default
//! configuration. A parse failure is data, not an exit code: the output
//! carries the untouched input plus the failure detail for the host to
//! surface.

use std::io::{self, Read};

use email_safe_html::{clean_bytes_with_config, CleanResult, Config};

fn load_config() -> Result<Config, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let settings = std::fs::read_to_string(&path)
                .map_err(|err| format!("cannot read {path}: {err}"))?;
            Config::from_json(&settings).map_err(|err| err.to_string())
        }
        None => Ok(Config::default()),
    }
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(detail) => {
            eprintln!("{detail}");
            std::process::exit(2);
        }
    };

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let result: CleanResult = clean_bytes_with_config(&html, &config);

    println!("{}", serde_json::to_string(&result).unwrap_or_default());
}
