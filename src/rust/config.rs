// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::fail::Fail;
use ::std::{
    fs::File,
    io::Read,
    ops::Index,
    str::FromStr,
};
use ::yaml_rust::{
    Yaml,
    YamlLoader,
};

//======================================================================================================================
// Constants
//======================================================================================================================

// Options of the frame dump tool.
mod frame_dump_config {
    pub const SECTION_NAME: &str = "frame_dump";
    pub const INPUT_FORMAT: &str = "input_format";
    pub const PRINT_LINK_LAYER: &str = "print_link_layer";
    pub const MAX_FRAMES: &str = "max_frames";
}

//======================================================================================================================
// Structures
//======================================================================================================================

/// How frames are stored in an input file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// One frame per line, written as hex (`0x1f`) or decimal (`31`) bytes separated by spaces or commas.
    Hex,
    /// The whole file is a single raw frame.
    Binary,
}

/// Frame dump configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Yaml);

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Config {
    /// Reads a configuration file into a [Config] object.
    pub fn new(config_path: &str) -> Result<Self, Fail> {
        let mut config_s: String = String::new();
        File::open(config_path)?.read_to_string(&mut config_s)?;
        Self::from_str(&config_s)
    }

    /// Builds a configuration with no options set, so every option takes its default value.
    pub fn empty() -> Self {
        Self(Yaml::Hash(Default::default()))
    }

    /// Input format: Reads the environment variable first and then the underlying configuration file. Defaults
    /// to [InputFormat::Hex].
    pub fn input_format(&self) -> Result<InputFormat, Fail> {
        if let Some(format) = Self::get_typed_env_option(frame_dump_config::INPUT_FORMAT)? {
            return Ok(format);
        }
        match self.get_frame_dump_option(frame_dump_config::INPUT_FORMAT)? {
            Some(option) => Self::get_typed_str_option(option, frame_dump_config::INPUT_FORMAT, |val: &str| {
                InputFormat::from_str(val).ok()
            }),
            None => Ok(InputFormat::Hex),
        }
    }

    /// Whether the link-layer header is printed. Defaults to true.
    pub fn print_link_layer(&self) -> Result<bool, Fail> {
        if let Some(print) = Self::get_typed_env_option(frame_dump_config::PRINT_LINK_LAYER)? {
            return Ok(print);
        }
        match self.get_frame_dump_option(frame_dump_config::PRINT_LINK_LAYER)? {
            Some(option) => Self::get_typed_option(option, frame_dump_config::PRINT_LINK_LAYER, &Yaml::as_bool),
            None => Ok(true),
        }
    }

    /// Maximum number of frames to decode. Returns None when unlimited.
    pub fn max_frames(&self) -> Result<Option<usize>, Fail> {
        if let Some(max) = Self::get_typed_env_option(frame_dump_config::MAX_FRAMES)? {
            return Ok(Some(max));
        }
        match self.get_frame_dump_option(frame_dump_config::MAX_FRAMES)? {
            Some(option) => {
                let val: i64 = Self::get_typed_option(option, frame_dump_config::MAX_FRAMES, &Yaml::as_i64)?;
                match usize::try_from(val) {
                    Ok(val) => Ok(Some(val)),
                    _ => {
                        let message: String = format!("parameter \"{}\" is out of range", frame_dump_config::MAX_FRAMES);
                        Err(Fail::new(libc::ERANGE, message.as_str()))
                    },
                }
            },
            None => Ok(None),
        }
    }

    /// Looks up an option in the frame dump section. A missing section or option is not an error.
    fn get_frame_dump_option(&self, index: &str) -> Result<Option<&Yaml>, Fail> {
        let section: &Yaml = self.0.index(frame_dump_config::SECTION_NAME);
        match section {
            Yaml::BadValue => return Ok(None),
            Yaml::Hash(_) => (),
            _ => {
                let message: String = format!("parameter \"{}\" has unexpected type", frame_dump_config::SECTION_NAME);
                return Err(Fail::new(libc::EINVAL, message.as_str()));
            },
        };
        match section.index(index) {
            Yaml::BadValue => Ok(None),
            value => Ok(Some(value)),
        }
    }

    /// Applies `receiver` to `option`, failing if it does not return Some(_).
    fn get_typed_option<'a, T, Fn>(option: &'a Yaml, index: &str, receiver: Fn) -> Result<T, Fail>
    where
        Fn: FnOnce(&'a Yaml) -> Option<T>,
    {
        match receiver(option) {
            Some(value) => Ok(value),
            None => {
                let message: String = format!("parameter \"{}\" has unexpected type", index);
                Err(Fail::new(libc::EINVAL, message.as_str()))
            },
        }
    }

    fn get_typed_str_option<T, Fn>(option: &Yaml, index: &str, parser: Fn) -> Result<T, Fail>
    where
        Fn: FnOnce(&str) -> Option<T>,
    {
        if let Some(value) = option.as_str() {
            if let Some(value) = parser(value) {
                return Ok(value);
            }
        }
        let message: String = format!("parameter {} has unexpected type", index);
        Err(Fail::new(libc::EINVAL, message.as_str()))
    }

    /// Get value where the environment value overrides the config file if it exists.
    fn get_typed_env_option<T: FromStr>(index: &str) -> Result<Option<T>, Fail> {
        // Check for the environment variable.
        if let Ok(var) = ::std::env::var(index.to_uppercase()) {
            if let Ok(value) = var.as_str().parse() {
                return Ok(Some(value));
            } else {
                let message: String = format!("parameter {} has unexpected type", index);
                return Err(Fail::new(libc::EINVAL, message.as_str()));
            }
        }
        Ok(None)
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl FromStr for Config {
    type Err = Fail;

    fn from_str(config_s: &str) -> Result<Self, Fail> {
        let config: Vec<Yaml> = match YamlLoader::load_from_str(config_s) {
            Ok(config) => config,
            Err(e) => {
                let message: String = format!("malformed configuration: {}", e);
                return Err(Fail::new(libc::EINVAL, message.as_str()));
            },
        };
        match &config[..] {
            [c] => Ok(Self(c.clone())),
            [] => Ok(Self::empty()),
            _ => Err(Fail::new(libc::EINVAL, "Wrong number of config objects")),
        }
    }
}

impl FromStr for InputFormat {
    type Err = Fail;

    fn from_str(s: &str) -> Result<Self, Fail> {
        match s {
            "hex" => Ok(InputFormat::Hex),
            "binary" => Ok(InputFormat::Binary),
            _ => Err(Fail::new(libc::EINVAL, "input format must be \"hex\" or \"binary\"")),
        }
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
