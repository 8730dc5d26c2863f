use super::{exit_code_for, json_pretty, Verdict, EXIT_SUCCESS};
use otk_parse::Omnifest;
use std::path::Path;
use tracing::debug;

pub fn run(path: &Path, ensure: bool, json: bool) -> Result<u8, String> {
    if !path.exists() {
        return Err(format!("no such omnifest: {}", path.display()));
    }

    debug!("validating omnifest at {}", path.display());
    let result = if ensure {
        Omnifest::from_yaml_path(path)
    } else {
        Omnifest::from_yaml_path_unchecked(path)
    };

    match result {
        Ok(_) => {
            if json {
                println!("{}", json_pretty(&Verdict::ok(path))?);
            } else {
                println!("{}: ok", path.display());
            }
            Ok(EXIT_SUCCESS)
        }
        Err(err) => {
            if json {
                println!("{}", json_pretty(&Verdict::fail(path, &err))?);
            } else {
                eprintln!("error: {err}");
            }
            Ok(exit_code_for(&err))
        }
    }
}
