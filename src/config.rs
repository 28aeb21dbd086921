use std::{env, path::PathBuf, time::Duration};

use crate::tuning::ASSET_DIR;

// Runtime settings (not gameplay tuning), read from the environment.

/// Frame pacing of the host loop.
pub const FRAME: Duration = Duration::from_micros(1_000_000 / 60);

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub lighting: bool,
    pub sound: bool,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub asset_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            lighting: flag("SHOOTER_LIGHTING", false),
            sound: flag("SHOOTER_SOUND", true),
            seed: env::var("SHOOTER_SEED").ok().and_then(|v| v.trim().parse().ok()),
            log_file: env::var("SHOOTER_LOG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("sprite_explosion.log")),
            asset_dir: env::var("SHOOTER_ASSETS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(ASSET_DIR)),
        }
    }
}

fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    #[test]
    fn parses_common_spellings() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool(" ON "), Some(true));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
