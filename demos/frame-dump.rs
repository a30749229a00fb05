// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(clippy::all)]

//==============================================================================
// Imports
//==============================================================================

use ::anyhow::Result;
use ::clap::{
    Arg,
    ArgMatches,
    Command,
};
use ::ethdecode::{
    config::{
        Config,
        InputFormat,
    },
    decode,
    runtime::logging,
    DecodedFrame,
    IpHeader,
    TransportHeader,
};
use ::log::warn;
use ::std::{
    fs,
    str::FromStr,
};

//==============================================================================
// Program Arguments
//==============================================================================

/// Program Arguments
#[derive(Debug)]
struct ProgramArguments {
    /// Path to the file holding the frames.
    input: String,
    /// Path to the configuration file.
    config: Option<String>,
    /// Input format, overriding the configuration.
    format: Option<InputFormat>,
}

/// Associate functions for Program Arguments
impl ProgramArguments {
    /// Parses the program arguments from the command line interface.
    pub fn new(app_name: &'static str, app_author: &'static str, app_about: &'static str) -> Result<Self> {
        let matches: ArgMatches = Command::new(app_name)
            .author(app_author)
            .about(app_about)
            .arg(
                Arg::new("input")
                    .long("input")
                    .value_parser(clap::value_parser!(String))
                    .required(true)
                    .value_name("FILE")
                    .help("Sets the file to read frames from"),
            )
            .arg(
                Arg::new("config")
                    .long("config")
                    .value_parser(clap::value_parser!(String))
                    .required(false)
                    .value_name("FILE")
                    .help("Sets the configuration file"),
            )
            .arg(
                Arg::new("format")
                    .long("format")
                    .value_parser(["hex", "binary"])
                    .required(false)
                    .value_name("FORMAT")
                    .help("Sets the input format"),
            )
            .get_matches();

        let input: String = match matches.get_one::<String>("input") {
            Some(input) => input.to_string(),
            None => anyhow::bail!("missing input file"),
        };

        let mut args: ProgramArguments = ProgramArguments {
            input,
            config: None,
            format: None,
        };

        // Configuration file.
        if let Some(config) = matches.get_one::<String>("config") {
            args.config = Some(config.to_string());
        }

        // Input format.
        if let Some(format) = matches.get_one::<String>("format") {
            args.set_format(format)?;
        }

        Ok(args)
    }

    /// Sets the input format parameter in the target program arguments.
    fn set_format(&mut self, format: &str) -> Result<()> {
        self.format = Some(InputFormat::from_str(format)?);
        Ok(())
    }
}

//==============================================================================
// Application
//==============================================================================

/// Application
struct Application {
    /// Frames read from the input file.
    frames: Vec<Vec<u8>>,
    /// Print the ethernet header?
    print_link_layer: bool,
}

/// Associated Functions for the Application
impl Application {
    /// Instantiates the application.
    pub fn new(args: &ProgramArguments) -> Result<Self> {
        let config: Config = match &args.config {
            Some(path) => Config::new(path)?,
            None => Config::empty(),
        };

        let format: InputFormat = match args.format {
            Some(format) => format,
            None => config.input_format()?,
        };

        let mut frames: Vec<Vec<u8>> = match format {
            InputFormat::Hex => Self::parse_hex(&fs::read_to_string(&args.input)?)?,
            InputFormat::Binary => vec![fs::read(&args.input)?],
        };
        if let Some(max_frames) = config.max_frames()? {
            frames.truncate(max_frames);
        }

        println!("Input: {} ({} frames)", args.input, frames.len());

        Ok(Self {
            frames,
            print_link_layer: config.print_link_layer()?,
        })
    }

    /// Runs the target application.
    pub fn run(&self) -> Result<()> {
        let mut ndecoded: usize = 0;
        for (i, buf) in self.frames.iter().enumerate() {
            let frame: DecodedFrame = match decode(buf) {
                Ok(frame) => frame,
                Err(e) if e.is_truncated_frame() => {
                    warn!("skipping frame {} ({} bytes): {:?}", i, buf.len(), e);
                    continue;
                },
                Err(e) => anyhow::bail!("failed to decode frame {}: {:?}", i, e),
            };
            ndecoded += 1;

            if self.print_link_layer {
                println!("{}: {}", i, frame);
            } else {
                println!("{}: {}", i, Self::summarize_network(frame.ip(), frame.transport()));
            }
        }
        println!("{} of {} frames decoded", ndecoded, self.frames.len());
        Ok(())
    }

    /// Formats the headers above the link layer.
    fn summarize_network(ip: &IpHeader, transport: &TransportHeader) -> String {
        match (ip, transport) {
            (IpHeader::Absent, _) => ip.to_string(),
            (_, TransportHeader::Absent) => ip.to_string(),
            _ => format!("{} | {}", ip, transport),
        }
    }

    /// Parses one frame per line. Bytes are separated by spaces or commas and written either as hex with a `0x`
    /// prefix or as decimal. Empty lines and lines starting with `#` are skipped.
    fn parse_hex(text: &str) -> Result<Vec<Vec<u8>>> {
        let mut frames: Vec<Vec<u8>> = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line: &str = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut frame: Vec<u8> = Vec::new();
            for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
                if token.is_empty() {
                    continue;
                }
                let byte: u8 = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
                    Some(hex) => u8::from_str_radix(hex, 16),
                    None => token.parse::<u8>(),
                }
                .map_err(|e| anyhow::anyhow!("bad byte {:?} on line {}: {}", token, lineno + 1, e))?;
                frame.push(byte);
            }
            frames.push(frame);
        }
        Ok(frames)
    }
}

//==============================================================================

/// Drives the application.
fn main() -> Result<()> {
    logging::initialize();

    let args: ProgramArguments = ProgramArguments::new(
        "frame-dump",
        "Microsoft Corporation",
        "Decodes the Ethernet, IP and transport headers of captured frames.",
    )?;

    Application::new(&args)?.run()
}
