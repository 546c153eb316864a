//! Binary entry point for the `lz4opt` command-line tool.

use lz4opt::cli::args::{parse_args, OpMode, ParsedArgs};
use lz4opt::cli::constants::PROG_NAME;
use lz4opt::frame::compress::{max_chain_length_for_level, CompressPrefs};
use lz4opt::io::codec::{compress_filename, decompress_filename};
use lz4opt::io::file_io::{STDIN_MARK, STDOUT_MARK};

/// Execute the parsed operation.  Returns the process exit code.
fn run(args: ParsedArgs) -> i32 {
    let input = args.input_filename.unwrap_or_else(|| STDIN_MARK.to_owned());
    let output = args
        .output_filename
        .unwrap_or_else(|| STDOUT_MARK.to_owned());

    // Load the dictionary up front so a bad path fails before any output
    // file is created.
    let dictionary: Option<Vec<u8>> = match &args.dictionary_filename {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                eprintln!("{}: {}: {}", PROG_NAME, path, e);
                return 1;
            }
        },
        None => None,
    };

    match args.op_mode {
        OpMode::Compress => {
            let prefs = CompressPrefs {
                max_chain_length: max_chain_length_for_level(args.level),
                use_legacy_format: args.legacy_format,
                dictionary,
            };
            match compress_filename(&input, &output, &prefs, args.overwrite) {
                Ok(_) => 0,
                Err(e) => {
                    eprintln!("{}: {}", PROG_NAME, e);
                    1
                }
            }
        }
        OpMode::Decompress => {
            match decompress_filename(&input, &output, dictionary.as_deref(), args.overwrite) {
                Ok(_) => 0,
                Err(e) => {
                    eprintln!("{}: {}", PROG_NAME, e);
                    1
                }
            }
        }
    }
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: {}", PROG_NAME, e);
            std::process::exit(1);
        }
    };

    if args.exit_early {
        std::process::exit(0);
    }

    std::process::exit(run(args));
}
