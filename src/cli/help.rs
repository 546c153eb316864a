//! Help screen.

use crate::cli::constants::PROG_NAME;
use crate::VERSION;

/// Prints the usage text to stdout.
pub fn print_help() {
    println!(
        "{prog} {version}: LZ4 compressor with optimal parsing\n\
         \n\
         Usage:\n\
         \x20 {prog} [flags] [input] [output]\n\
         \n\
         Reads from STDIN when no input is given and writes to STDOUT when\n\
         no output is given; '-' stands for either explicitly.\n\
         \n\
         Examples:\n\
         \x20 {prog}    < abc.txt > abc.txt.lz4    # STDIN to STDOUT\n\
         \x20 {prog}      abc.txt   abc.txt.lz4    # file to file\n\
         \x20 {prog} -6   abc.txt   abc.txt.lz4    # compression level 6\n\
         \x20 {prog} -f7  abc.txt   abc.txt.lz4    # level 7, overwrite output\n\
         \x20 {prog} -d   abc.txt.lz4 abc.txt      # decompress\n\
         \n\
         Flags:\n\
         \x20 -0 ... -9   Compression level (default: 9)\n\
         \x20 -d          Decompress\n\
         \x20 -f          Overwrite an existing output file\n\
         \x20 -l          Use the legacy frame format (8 MiB blocks)\n\
         \x20 -D FILE     Use FILE as a compression dictionary\n\
         \x20 -q / -v     Quieter / more verbose\n\
         \x20 -h          Show this help\n\
         \n\
         Compression levels:\n\
         \x20 -0          No compression (blocks stored in the frame wrapper)\n\
         \x20 -1 ... -3   Greedy search, check 1 to 3 match candidates\n\
         \x20 -4 ... -8   Cost-optimized parsing over a bounded candidate chain\n\
         \x20 -9          Optimal parsing, check all possible matches",
        prog = PROG_NAME,
        version = VERSION,
    );
}
