use std::env;
use std::fs;
use std::path::Path;

/// Settings read through `option_env!` in `src/config.rs`
const KEYS: [&str; 5] = ["BASE_URL", "API_PATH", "TOKEN_COOKIE", "LANGUAGE", "LOG_LEVEL"];
const LANGUAGES: [&str; 2] = ["ZH", "EN"];
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let settings = read_dotenv(Path::new(".env"));
    for (key, value) in &settings {
        if !KEYS.contains(&key.as_str()) {
            println!("cargo:warning=.env: unknown key {} ignored", key);
            continue;
        }
        // The process environment wins over .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }

    let lookup = |key: &str| {
        env::var(key)
            .ok()
            .or_else(|| settings.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()))
            .filter(|v| !v.is_empty())
    };

    for problem in validate(lookup) {
        println!("cargo:warning={}", problem);
    }
}

/// `KEY=value` pairs in file order; a missing file yields nothing
fn read_dotenv(path: &Path) -> Vec<(String, String)> {
    let Ok(contents) = fs::read_to_string(path) else {
        println!("cargo:warning=No .env file found; copy .env.example to .env and set API_PATH");
        return Vec::new();
    };

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().trim_matches('"').to_string()))
        .collect()
}

fn validate(lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
    let mut problems = Vec::new();

    if lookup("API_PATH").is_none() {
        problems.push("API_PATH is not set; product requests will fail".to_string());
    }
    if let Some(base_url) = lookup("BASE_URL") {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            problems.push(format!("BASE_URL '{}' is not an http(s) origin", base_url));
        }
        if base_url.ends_with('/') {
            problems.push(format!("BASE_URL '{}' must not end with '/'", base_url));
        }
    }
    if let Some(language) = lookup("LANGUAGE") {
        if !LANGUAGES.contains(&language.to_uppercase().as_str()) {
            problems.push(format!("LANGUAGE '{}' is not one of {:?}", language, LANGUAGES));
        }
    }
    if let Some(level) = lookup("LOG_LEVEL") {
        if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            problems.push(format!("LOG_LEVEL '{}' is not one of {:?}", level, LOG_LEVELS));
        }
    }
    if let Some(cookie) = lookup("TOKEN_COOKIE") {
        if cookie.contains([';', '=', ' ']) {
            problems.push(format!("TOKEN_COOKIE '{}' is not a valid cookie name", cookie));
        }
    }

    problems
}
