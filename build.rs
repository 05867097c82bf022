use std::env;
use std::fs;
use std::path::Path;

/// Keys read with `option_env!` by the app.
const CONFIG_KEYS: [&str; 5] = [
    "API_URL",
    "API_URL_DEVELOPMENT",
    "API_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
];

/// `KEY=VALUE` with optional surrounding quotes; blank lines and `#` comments yield `None`.
fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file, using the default API URL (see .env.example)");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_env_line) {
        // A variable already set in the build environment wins over .env
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
