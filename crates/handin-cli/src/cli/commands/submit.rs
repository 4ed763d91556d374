//! `handin submit <exercise>` – run the credential, consent and upload workflow.

use anyhow::{Context, Result};
use handin_core::config::HandinConfig;
use handin_core::exercises;
use handin_core::prompt::LinePrompter;
use handin_core::transport::CurlTransport;
use handin_core::workflow::{Workflow, WorkflowOutcome};
use std::path::Path;
use std::time::Duration;

const UNREACHABLE_HINT: &str =
    "test server unreachable; check your network connection (the server may only answer from the university network or VPN)";

pub fn run_submit(cfg: &HandinConfig, work_dir: &Path, exercise: &str) -> Result<()> {
    let request = exercises::require(exercise)?;
    let transport = CurlTransport::new()
        .with_connect_timeout(cfg.connect_timeout_secs.map(Duration::from_secs));
    let mut workflow = Workflow::from_config(cfg, work_dir, transport, LinePrompter::stdio());

    let outcome = match workflow.run(&request) {
        Ok(outcome) => outcome,
        Err(e) if e.is_unreachable() => {
            tracing::warn!(exercise = %request.key, error = %e, "test server unreachable");
            return Err(anyhow::Error::new(e).context(UNREACHABLE_HINT));
        }
        Err(e) => return Err(e).with_context(|| format!("submit {}", request.key)),
    };
    match &outcome {
        WorkflowOutcome::Done { accepted, .. } => {
            tracing::info!(exercise = %request.key, accepted, "submit finished")
        }
        WorkflowOutcome::Aborted(reason) => {
            tracing::info!(exercise = %request.key, ?reason, "submit aborted")
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn refused_connection_reports_unreachable_server() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let cfg = HandinConfig {
            consent_url: format!("http://127.0.0.1:{}/gdpr.php", port),
            upload_url: format!("http://127.0.0.1:{}/upload.php", port),
            ..HandinConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Die.java"), "class Die {}").unwrap();
        fs::write(dir.path().join("DieCup.java"), "class DieCup {}").unwrap();
        fs::write(dir.path().join("upload-data.dat"), "au1 42\n").unwrap();

        let err = run_submit(&cfg, dir.path(), "dc1").unwrap_err();

        assert_eq!(err.to_string(), UNREACHABLE_HINT);
        assert!(dir.path().join("upload-data.dat").exists());
    }

    #[test]
    fn missing_file_error_names_exercise() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_submit(&HandinConfig::default(), dir.path(), "dc1").unwrap_err();
        assert_eq!(err.to_string(), "submit dc1");
        assert!(format!("{:#}", err).contains("Die.java"));
    }
}
