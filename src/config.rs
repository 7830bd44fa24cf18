use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use json::JsonValue;

use crate::error::{ColourIdError, Result};

pub const DEFAULT_ASSET_ROOT: &str = "./public";
pub const DEFAULT_BUTTON_SUFFIX: &str = ".v2.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    /// Directory the manifest paths are relative to.
    pub asset_root: PathBuf,
    /// Appended to a button's file name to build its output path.
    pub button_suffix: String,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        ProcessConfig {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            button_suffix: String::from(DEFAULT_BUTTON_SUFFIX),
        }
    }
}

impl ProcessConfig {
    /// Missing keys fall back to [ProcessConfig::default].
    fn to_config(json_string: &str) -> Result<ProcessConfig> {
        let json = json::parse(json_string)?;
        if !json.is_object() {
            return config_error("expected a json object");
        }

        let defaults = ProcessConfig::default();

        let asset_root = match &json["asset_root"] {
            JsonValue::Null => defaults.asset_root,
            value => match value.as_str() {
                Some(val) => PathBuf::from(val),
                None => return config_error("Couldn't parse asset_root"),
            },
        };
        let button_suffix = match &json["button_suffix"] {
            JsonValue::Null => defaults.button_suffix,
            value => match value.as_str() {
                Some(val) if !val.is_empty() => val.to_string(),
                Some(_) => return config_error("button_suffix must not be empty"),
                None => return config_error("Couldn't parse button_suffix"),
            },
        };

        Ok(ProcessConfig {
            asset_root,
            button_suffix,
        })
    }

    fn to_json(config: &ProcessConfig) -> String {
        let mut data = json::JsonValue::new_object();

        data["asset_root"] = config.asset_root.to_string_lossy().into_owned().into();
        data["button_suffix"] = config.button_suffix.as_str().into();

        data.pretty(2)
    }

    pub fn read_config(path: &Path) -> Result<ProcessConfig> {
        let mut file = File::open(path)?;
        let mut buff: Vec<u8> = Vec::new();
        let _ = file.read_to_end(&mut buff)?;

        let json_string =
            String::from_utf8(buff).map_err(|e| ColourIdError::Config(e.to_string()))?;

        ProcessConfig::to_config(&json_string)
    }

    pub fn write_config(&self, path: &Path) -> Result {
        let string = ProcessConfig::to_json(self);
        let mut file = File::create(path)?;
        file.write_all(string.as_bytes())?;
        Ok(())
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.asset_root.join(relative)
    }

    /// `icons/back.png` -> `icons/back.png.v2.png` with the default suffix.
    pub fn button_output(&self, source: &Path) -> PathBuf {
        let mut name = source.as_os_str().to_owned();
        name.push(&self.button_suffix);
        PathBuf::from(name)
    }
}

fn config_error<T>(msg: &str) -> Result<T> {
    Err(ColourIdError::Config(String::from(msg)))
}
