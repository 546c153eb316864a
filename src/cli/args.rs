//! Command-line argument parsing.
//!
//! Flags are single characters and may be clustered (`-f7` is `-f -7`).
//! `-D` consumes the following argument as the dictionary path.  The two
//! positional arguments are input and output; `-` selects stdin/stdout.

use anyhow::{anyhow, bail};

use crate::cli::constants::{display_level, set_display_level};
use crate::cli::help::print_help;
use crate::config::CLEVEL_DEFAULT;
use crate::io::file_io::{STDIN_MARK, STDOUT_MARK};

/// The operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    Compress,
    Decompress,
}

/// Everything `main` needs after argument parsing.
#[derive(Debug)]
pub struct ParsedArgs {
    pub op_mode: OpMode,
    /// Compression level 0 to 9.
    pub level: u32,
    /// Overwrite an existing output file.
    pub overwrite: bool,
    /// Emit the legacy frame format.
    pub legacy_format: bool,
    /// Path of an optional dictionary file.
    pub dictionary_filename: Option<String>,
    pub input_filename: Option<String>,
    pub output_filename: Option<String>,
    /// `-h` was given: help is printed, exit with success.
    pub exit_early: bool,
}

impl Default for ParsedArgs {
    fn default() -> Self {
        ParsedArgs {
            op_mode: OpMode::Compress,
            level: CLEVEL_DEFAULT,
            overwrite: false,
            legacy_format: false,
            dictionary_filename: None,
            input_filename: None,
            output_filename: None,
            exit_early: false,
        }
    }
}

/// Parses the argument list (without the program name).
pub fn parse_args<I>(args: I) -> anyhow::Result<ParsedArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = ParsedArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        // A lone "-" is a positional stdio marker, not a flag cluster.
        if arg.starts_with('-') && arg.len() > 1 {
            let mut chars = arg[1..].chars();
            while let Some(c) = chars.next() {
                match c {
                    'h' => {
                        print_help();
                        parsed.exit_early = true;
                        return Ok(parsed);
                    }
                    'f' => parsed.overwrite = true,
                    'd' => parsed.op_mode = OpMode::Decompress,
                    'l' => parsed.legacy_format = true,
                    'q' => set_display_level(display_level().saturating_sub(1)),
                    'v' => set_display_level(display_level() + 1),
                    '0'..='9' => parsed.level = c as u32 - '0' as u32,
                    'D' => {
                        // The rest of this cluster would be ambiguous.
                        if chars.next().is_some() {
                            bail!("-D must be the last flag in its group");
                        }
                        let path = args
                            .next()
                            .ok_or_else(|| anyhow!("-D requires a dictionary file"))?;
                        parsed.dictionary_filename = Some(path);
                    }
                    other => bail!("unknown flag '-{}'", other),
                }
            }
        } else if parsed.input_filename.is_none() {
            parsed.input_filename = Some(map_stdio(arg, STDIN_MARK));
        } else if parsed.output_filename.is_none() {
            parsed.output_filename = Some(map_stdio(arg, STDOUT_MARK));
        } else {
            bail!("too many arguments: '{}'", arg);
        }
    }

    Ok(parsed)
}

fn map_stdio(arg: String, mark: &str) -> String {
    if arg == "-" {
        mark.to_owned()
    } else {
        arg
    }
}
