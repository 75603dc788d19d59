use sculptor::{AppAuthor, FileIO, ProjectInfo, impl_serde_str_toml};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Conf {
    pub random: RandomConf,
    pub view: ViewConf,
}

/// Bounds for randomly generated intervals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RandomConf {
    /// how many intervals `random` adds when no count is given
    pub count: usize,
    pub lower: f64,
    pub upper: f64,
    /// shortest interval generated
    pub min_span: f64,
    /// fixed seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for RandomConf {
    fn default() -> Self {
        Self { count: 8, lower: -10.0, upper: 10.0, min_span: 0.5, seed: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConf {
    /// columns used by the text plot
    pub width: usize,
}

impl Default for ViewConf {
    fn default() -> Self {
        Self { width: 64 }
    }
}

impl_serde_str_toml!(Conf);

impl AppAuthor for Conf {
    fn app_name() -> &'static str {
        "Stab"
    }

    fn author() -> &'static str {
        "The Stab Project Developers"
    }
}

impl Conf {
    pub fn path() -> PathBuf {
        Conf::config_dir().join("stab.toml")
    }

    /// Reads the user configuration, falling back to (and writing out) the defaults.
    pub fn load() -> Self {
        let path = Self::path();
        let file_conf = FileIO::new(path.clone());
        file_conf.load().unwrap_or_else(|_| {
            log::warn!("Using default configuration; suppose to find one at `{}`.", path.display());
            let conf: Conf = Default::default();
            if let Err(err) = file_conf.save(&conf) {
                log::warn!("Failed to write default configuration: {}", err);
            }
            conf
        })
    }
}
