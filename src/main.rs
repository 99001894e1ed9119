use clap::{ArgAction, Parser};
use log::{LevelFilter, error, info};
use rayon::prelude::*;

use snes_rom_info::analyze_rom_file;
use snes_rom_info::error::RomInfoError;
use snes_rom_info::report::RomReport;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Full path(s) to a ROM file(s)
    #[clap(value_parser, num_args = 1..)]
    file_paths: Vec<String>,

    /// Verbosity level (-vv for most verbose)
    #[clap(short, action = ArgAction::Count)]
    verbose: u8,

    /// Silence all output except errors
    #[clap(short, long, action = ArgAction::SetTrue)]
    quiet: bool,

    /// Format output as JSON (suppresses everything except STDERR)
    #[clap(short, long, action = ArgAction::SetTrue)]
    json: bool,

    /// Number of threads to use for parallel processing (0 or omitted uses all available threads)
    #[clap(long, value_name = "N")]
    threads: Option<usize>,
}

fn get_log_level(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        LevelFilter::Error // Only show errors if --quiet is passed.
    } else {
        match verbose {
            0 => LevelFilter::Info,  // (no -v): Show Info messages
            1 => LevelFilter::Debug, // -v: Show Debug messages
            _ => LevelFilter::Trace, // -vv or more: Show everything (Trace)
        }
    }
}

/// Processes a list of file paths in parallel, returning a vector of results.
/// Each result is a report on success, or a RomInfoError on failure.
/// Results are returned in the same order as the input file paths.
fn process_files_parallel(file_paths: &[String]) -> Vec<Result<RomReport, RomInfoError>> {
    file_paths
        .par_iter()
        .map(|file_path| match analyze_rom_file(file_path) {
            Ok(report) => Ok(report),
            Err(e) => {
                // Convert NotFound IO errors to FileNotFound (no wrapping needed, path is included)
                // Wrap other errors with WithPath for context
                let err = match e {
                    RomInfoError::IoError(io_err)
                        if io_err.kind() == std::io::ErrorKind::NotFound =>
                    {
                        RomInfoError::FileNotFound(file_path.clone())
                    }
                    other => RomInfoError::WithPath(file_path.clone(), Box::new(other)),
                };
                Err(err)
            }
        })
        .collect()
}

fn main() {
    let cli = Cli::parse();

    if let Some(num_threads) = cli.threads
        && num_threads != 0
    {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .unwrap_or_else(|e| {
                eprintln!("Failed to set thread pool: {}", e);
                std::process::exit(1);
            });
    }

    let default_log_level = get_log_level(cli.quiet, cli.verbose);

    env_logger::Builder::new()
        .filter_level(default_log_level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_level(false)
        .format_target(false)
        .init();

    let mut had_error = false;

    let mut json_results: Vec<RomReport> = Vec::new();

    let results = process_files_parallel(&cli.file_paths);

    for result in results {
        match result {
            Ok(report) => {
                if cli.json {
                    json_results.push(report);
                } else {
                    info!("{}", report.print());
                }
            }
            Err(e) => {
                error!("{}", e);
                had_error = true;
            }
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&json_results) {
            Ok(json_output) => {
                println!("{}", json_output);
            }
            Err(e) => {
                eprintln!("Error serializing combined JSON output: {}", e);
                had_error = true;
            }
        }
    }

    if had_error {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Minimal LoROM image with an OR-consistent checksum pair.
    fn lorom_image() -> Vec<u8> {
        let mut data = vec![0u8; 0x8000];
        data[0x7FC0..0x7FC0 + 20].copy_from_slice(b"TEST GAME TITLE     ");
        data[0x7FC0 + 21] = 32;
        data[0x7FC0 + 28..0x7FC0 + 30].copy_from_slice(&0x5555u16.to_le_bytes());
        data[0x7FC0 + 30..0x7FC0 + 32].copy_from_slice(&0xAAAAu16.to_le_bytes());
        data
    }

    #[test]
    fn test_get_log_level_quiet() {
        assert_eq!(get_log_level(true, 0), LevelFilter::Error);
        assert_eq!(get_log_level(true, 1), LevelFilter::Error);
    }

    #[test]
    fn test_get_log_level_verbose_levels() {
        assert_eq!(get_log_level(false, 0), LevelFilter::Info);
        assert_eq!(get_log_level(false, 1), LevelFilter::Debug);
        assert_eq!(get_log_level(false, 2), LevelFilter::Trace);
        assert_eq!(get_log_level(false, 10), LevelFilter::Trace);
    }

    #[test]
    fn test_process_files_parallel_non_existent_file() {
        let non_existent = ["non_existent_file.sfc".to_string()];
        let results = process_files_parallel(&non_existent);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
        match &results[0] {
            Err(RomInfoError::FileNotFound(path)) => {
                assert_eq!(path, "non_existent_file.sfc");
            }
            _ => panic!("Expected FileNotFound error, but got {:?}", results[0]),
        }
    }

    #[test]
    fn test_process_files_parallel_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.sfc");
        fs::write(&file_path, lorom_image()).unwrap();
        let file_path_str = file_path.to_str().unwrap().to_string();
        let results = process_files_parallel(&[file_path_str.clone()]);
        assert_eq!(results.len(), 1);
        match &results[0] {
            Ok(report) => {
                assert_eq!(report.source_name, file_path_str);
                assert_eq!(report.metadata.game_title, "TEST GAME TITLE");
            }
            Err(e) => panic!("Expected Ok, but got error: {:?}", e),
        }
    }

    #[test]
    fn test_process_files_parallel_mixed_files() {
        let dir = tempdir().unwrap();
        let valid_file = dir.path().join("valid.sfc");
        fs::write(&valid_file, lorom_image()).unwrap();
        let file_paths = vec![
            valid_file.to_str().unwrap().to_string(),
            "invalid.sfc".to_string(),
        ];
        let results = process_files_parallel(&file_paths);
        let ok_count = results.iter().filter(|r| r.is_ok()).count();
        let err_count = results.iter().filter(|r| r.is_err()).count();
        assert_eq!(results.len(), 2);
        assert_eq!(ok_count, 1);
        assert_eq!(err_count, 1);
    }

    #[test]
    fn test_process_files_parallel_empty_input() {
        let results = process_files_parallel(&[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_process_files_parallel_order_preserved() {
        let dir = tempdir().unwrap();
        let image = lorom_image();
        let file_paths: Vec<String> = ["a.sfc", "b.sfc", "c.sfc"]
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                fs::write(&path, &image).unwrap();
                path.to_str().unwrap().to_string()
            })
            .collect();
        let results = process_files_parallel(&file_paths);

        assert_eq!(results.len(), 3);
        for (i, result) in results.iter().enumerate() {
            match result {
                Ok(report) => assert_eq!(report.source_name, file_paths[i]),
                Err(e) => panic!("Expected Ok, but got error: {:?}", e),
            }
        }
    }

    #[test]
    fn test_process_files_parallel_headerless_wrapped_with_path() {
        // A readable file with no valid header gets wrapped with WithPath.
        let dir = tempdir().unwrap();
        let invalid_file = dir.path().join("invalid.sfc");
        fs::write(&invalid_file, vec![0u8; 0x100000]).unwrap();

        let file_paths = vec![invalid_file.to_str().unwrap().to_string()];
        let results = process_files_parallel(&file_paths);

        assert_eq!(results.len(), 1);
        match &results[0] {
            Err(RomInfoError::WithPath(path, inner)) => {
                assert_eq!(path, invalid_file.to_str().unwrap());
                assert!(matches!(**inner, RomInfoError::NoValidHeader));
            }
            other => panic!("Expected WithPath error, but got {:?}", other),
        }
    }
}
