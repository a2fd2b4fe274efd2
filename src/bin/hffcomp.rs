use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::{ProgressLog, ProgressLogger};
use huffman_hff::hff::{compress_file, EXTENSION};

#[derive(Parser, Debug)]
#[command(about = "Compresses a file with Huffman coding", long_about = None)]
struct Args {
    /// The file to compress.
    input: PathBuf,

    /// Where to store the compressed file. Defaults to the input path followed by `.hff`.
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
        let mut name = args.input.clone().into_os_string();
        name.push(".");
        name.push(EXTENSION);
        PathBuf::from(name)
    });

    let mut pl = ProgressLogger::default();
    pl.item_name("bit");
    pl.start(format!(
        "Compressing {} into {}...",
        args.input.display(),
        output.display()
    ));
    let written = compress_file(&args.input, &output)?;
    pl.update_with_count(written);
    pl.done();

    Ok(())
}
