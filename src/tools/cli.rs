use clap::Parser;

/// Command Line Interpretation - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman-codes a text file into fixed-width integer chunks",
    long_about = "
    Builds an optimal prefix code from the character frequencies of the input
    file, packs the encoded bitstream into fixed-width integer chunks, and
    reports the weighted path length, entropy-like term, and efficiency of
    the resulting code. Chunking and coding are fully deterministic, so the
    packed output can be verified by rebuilding the tree and decoding."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    pub filename: String,

    /// Width of each packed chunk in bits (1-64)
    #[clap(short = 'c', long = "chunk-bits", default_value_t = 64)]
    pub chunk_bits: usize,

    /// Decode the packed chunks again and verify they match the input
    #[clap(short = 't', long = "test")]
    pub test: bool,

    /// Print the per-symbol code table
    #[clap(long = "table")]
    pub table: bool,

    /// Sets verbosity. -v 1 shows very little, -v 5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    pub v: u8,
}

/// Parse the command line and set the global log level from the -v count.
pub fn init() -> Args {
    let args = Args::parse();
    match args.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };
    args
}
