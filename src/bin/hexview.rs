//! General-purpose canonical hex dump of one or more files.

use std::fs::File;
use std::io;

use clap::Parser;

use snes_rom_info::hexdump::render_canonical;
use snes_rom_info::reader::read_range;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The file(s) you wish to hexdump
    #[clap(value_parser, num_args = 1..)]
    file_paths: Vec<String>,

    /// Output n bytes of output
    #[clap(short, value_name = "BYTES")]
    n: Option<u64>,

    /// Skip n bytes before dumping
    #[clap(short, value_name = "BYTES", default_value_t = 0)]
    s: u64,
}

fn dump_file(path: &str, skip: u64, limit: Option<u64>) -> io::Result<String> {
    let mut file = File::open(path)?;
    let data = read_range(&mut file, skip, limit)?;
    Ok(render_canonical(&data, skip))
}

fn main() {
    let cli = Cli::parse();
    let mut had_error = false;

    for path in &cli.file_paths {
        match dump_file(path, cli.s, cli.n) {
            Ok(rendered) => print!("{}", rendered),
            Err(e) => {
                eprintln!("{}: {}", path, e);
                had_error = true;
            }
        }
    }

    if had_error {
        std::process::exit(1);
    }
}
