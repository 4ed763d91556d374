//! `handin logout` – delete the cached credential.

use anyhow::Result;
use handin_core::config::HandinConfig;
use handin_core::credentials::CredentialStore;
use std::path::Path;

pub fn run_logout(cfg: &HandinConfig, work_dir: &Path) -> Result<()> {
    let store = CredentialStore::new(cfg.credential_path(work_dir));
    if !store.path().exists() {
        println!("No cached credential in {}", work_dir.display());
        return Ok(());
    }
    store.invalidate()?;
    println!("Removed {}", store.path().display());
    Ok(())
}
