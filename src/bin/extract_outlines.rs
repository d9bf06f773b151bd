//! Derive outlines for every document dump in a directory.
//!
//! Usage:
//!
//!   cargo run --release --bin extract_outlines
//!   cargo run --release --bin extract_outlines -- --input-dir dumps --output-dir outlines
//!
//! Directories fall back to the INPUT_DIR / OUTPUT_DIR environment
//! variables, then to `input` / `output`.

use doc_outline::batch;
use doc_outline::OutlineConfig;
use std::path::PathBuf;
use std::time::Instant;

struct DriverConfig {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl DriverConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut input_dir = std::env::var("INPUT_DIR").unwrap_or_else(|_| "input".to_string());
        let mut output_dir = std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "output".to_string());

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--input-dir" => {
                    i += 1;
                    if i < args.len() {
                        input_dir = args[i].clone();
                    }
                },
                "--output-dir" => {
                    i += 1;
                    if i < args.len() {
                        output_dir = args[i].clone();
                    }
                },
                _ => {},
            }
            i += 1;
        }

        Self {
            input_dir: PathBuf::from(input_dir),
            output_dir: PathBuf::from(output_dir),
        }
    }
}

fn main() {
    env_logger::init();

    let driver = DriverConfig::from_args();

    println!("Document Outline Extractor");
    println!("Input directory:  {}", driver.input_dir.display());
    println!("Output directory: {}", driver.output_dir.display());

    let start_time = Instant::now();
    let summary = match batch::run(&driver.input_dir, &driver.output_dir, &OutlineConfig::default())
    {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Batch run failed: {}", e);
            std::process::exit(1);
        },
    };

    if summary.processed == 0 {
        eprintln!("\nNo documents found in {}", driver.input_dir.display());
        std::process::exit(1);
    }

    let elapsed = start_time.elapsed();

    println!("\n{}", "=".repeat(60));
    println!("EXTRACTION COMPLETE");
    println!("{}", "=".repeat(60));
    println!("Total documents: {}", summary.processed);
    println!("✓ Written:       {}", summary.written);
    println!("- Skipped:       {}", summary.skipped);
    println!("✗ Failed:        {}", summary.failed);
    println!("Time:            {:.2}s", elapsed.as_secs_f64());
    println!("Output:          {}", driver.output_dir.display());
    println!("{}", "=".repeat(60));

    if summary.failed > 0 {
        std::process::exit(1);
    }
}
