//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs;

use log::{debug, error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffpack::bitstream::bitpacker::compress;
use huffpack::bitstream::bitunpacker::{decode, reassemble};
use huffpack::error::HuffError;
use huffpack::huffman_coding::huffman::build_tree;
use huffpack::tools::cli;
use huffpack::tools::freq_count::frequencies;
use huffpack::tools::stats::stats;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), HuffError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let args = cli::init();

    // The host supplies the symbol sequence; here it is the chars of a file.
    let text = fs::read_to_string(&args.filename)?;
    let data: Vec<char> = text.chars().collect();
    info!("Read {} symbols from {}", data.len(), &args.filename);

    let (table, chunks) = compress(&data, args.chunk_bits)?;

    if args.table {
        let mut entries: Vec<_> = table.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.frequency.cmp(&a.1.frequency).then(a.0.cmp(b.0)));
        for (symbol, entry) in entries {
            println!(
                "{:?}: frequency {:>8}  code {}",
                symbol, entry.frequency, entry.code
            );
        }
    }

    let report = stats(&table);
    info!(
        "Weighted path length is {:.4} bits/symbol",
        report.weighted_path_length
    );
    info!("Entropy-like term is {:.4}", report.entropy_like);
    info!("Efficiency is {:.4}", report.efficiency);

    let packed_bits: usize = chunks.iter().map(|chunk| chunk.bits as usize).sum();
    info!(
        "Packed {} chunks of up to {} bits: {} bytes from {} bytes of input",
        chunks.len(),
        args.chunk_bits,
        (packed_bits + 7) / 8,
        text.len()
    );

    if args.test {
        // Coding is deterministic, so the decode side can rebuild the same
        // tree from recounted frequencies instead of shipping it.
        let tree = build_tree(&frequencies(&data)?)?;
        let stream = reassemble(&chunks)?;
        debug!("Reassembled {} bits from {} chunks", stream.len(), chunks.len());
        let decoded = decode(&stream, &tree)?;
        if decoded == data {
            info!("Round trip verified: decoded output matches the input.");
        } else {
            error!("Round trip failed: decoded output differs from the input.");
            return Err(HuffError::decode("round trip mismatch"));
        }
    }

    info!("Done.\n");
    Ok(())
}
