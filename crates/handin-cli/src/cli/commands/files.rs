//! `handin files <exercise>` – dry run listing required files and their checksums.

use anyhow::Result;
use handin_core::config::HandinConfig;
use handin_core::exercises;
use handin_core::submission;
use std::path::Path;

pub fn run_files(cfg: &HandinConfig, work_dir: &Path, exercise: &str) -> Result<()> {
    let request = exercises::require(exercise)?;
    let report = submission::inspect(&request, work_dir, &cfg.source_suffix)?;

    println!("Exercise {} (uploaded as {})", request.key, request.upload_tag());
    println!("{:<24} {:<10} {}", "FILE", "SIZE", "SHA-256");
    let mut missing = 0;
    for status in &report {
        match &status.found {
            Some((size, digest)) => println!("{:<24} {:<10} {}", status.file_name, size, digest),
            None => {
                missing += 1;
                println!("{:<24} {:<10} -", status.file_name, "missing");
            }
        }
    }
    if missing > 0 {
        println!("{} file(s) missing in {}", missing, work_dir.display());
    }
    Ok(())
}
