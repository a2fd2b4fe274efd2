use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::{ProgressLog, ProgressLogger};
use huffman_hff::hff::{decompress_file, EXTENSION};

#[derive(Parser, Debug)]
#[command(about = "Decompresses a file written by hffcomp", long_about = None)]
struct Args {
    /// The compressed file.
    input: PathBuf,

    /// Where to store the decompressed file. Defaults to the input path without its `.hff`
    /// extension, or followed by `.out` if it has a different one.
    output: Option<PathBuf>,

    /// Logs more details, can be repeated.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let output = args.output.unwrap_or_else(|| {
        if args.input.extension().is_some_and(|ext| ext == EXTENSION) {
            args.input.with_extension("")
        } else {
            let mut name = args.input.clone().into_os_string();
            name.push(".out");
            PathBuf::from(name)
        }
    });

    let mut pl = ProgressLogger::default();
    pl.item_name("byte");
    pl.start(format!(
        "Decompressing {} into {}...",
        args.input.display(),
        output.display()
    ));
    let written = decompress_file(&args.input, &output)?;
    pl.update_with_count(written);
    pl.done();

    Ok(())
}
