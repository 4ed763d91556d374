//! `handin exercises` – list known exercise keys.

use anyhow::Result;
use handin_core::exercises;

pub fn run_exercises() -> Result<()> {
    println!("{:<16} {}", "EXERCISE", "FILES");
    for (key, files) in exercises::all() {
        println!("{:<16} {}", key, files.join(", "));
    }
    Ok(())
}
