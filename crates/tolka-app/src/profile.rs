use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tolka_config::Config;

/// `$TOLKA_HOME`, else `$HOME/.config/tolka`
fn tolka_root() -> PathBuf {
    if let Ok(home) = env::var("TOLKA_HOME") {
        return PathBuf::from(home);
    }

    env::var("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("tolka"))
        .unwrap_or_else(|_| PathBuf::from(".tolka"))
}

fn profiles_dir() -> PathBuf {
    tolka_root().join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Plain config JSON, environment overrides applied on top
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;

    Ok(config.with_env())
}

/// Initialize the profiles folder and main profile if missing
pub fn init_user_config() -> anyhow::Result<PathBuf> {
    init_profiles_in(&profiles_dir())
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    Ok(load_profile_from(&profiles_dir(), name)?.with_env())
}

/// Add a new profile cloned from main (or defaults if main missing)
pub fn add_profile_from_default(new_name: &str) -> anyhow::Result<PathBuf> {
    add_profile_in(&profiles_dir(), new_name)
}

fn init_profiles_in(dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let main_profile = dir.join("main.json");
    if !main_profile.exists() {
        write_profile(&main_profile, "main", Config::default())?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(main_profile)
}

fn load_profile_from(dir: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = dir.join(format!("{name}.json"));
    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    if name != "main" {
        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
    }

    let main_file = dir.join("main.json");
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        Ok(Config::default())
    }
}

fn add_profile_in(dir: &Path, new_name: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let config = load_profile_from(dir, "main")?;
    let file = dir.join(format!("{new_name}.json"));
    write_profile(&file, new_name, config)?;
    tracing::info!("Created new profile: {new_name}");

    Ok(file)
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}

fn write_profile(path: &Path, name: &str, value: Config) -> anyhow::Result<()> {
    let profile = Profile {
        name: name.into(),
        value,
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    Ok(())
}
