use fvcast::{AppCommand, ProjectionRequest};
use std::fs;
use tracing::info;

fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.yaml");
    fs::write(&path, content).expect("Failed to write config file");
    path
}

#[test_log::test]
fn sip_flow_with_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(
        &dir,
        r#"
currency: "INR"
defaults:
  amount: 2000.0
  rate: 10.0
  years: 5
"#,
    );

    let result = fvcast::run_command(
        AppCommand::Sip(ProjectionRequest::default()),
        Some(config_path.to_str().unwrap()),
    );
    assert!(result.is_ok(), "SIP flow failed: {:?}", result.err());
}

#[test_log::test]
fn lumpsum_flow_with_explicit_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&dir, "currency: \"USD\"\n");

    let request = ProjectionRequest {
        amount: Some(10_000.0),
        rate: Some(7.5),
        years: Some(20),
        export: false,
    };
    let result = fvcast::run_command(
        AppCommand::Lumpsum(request),
        Some(config_path.to_str().unwrap()),
    );
    assert!(result.is_ok(), "Lumpsum flow failed: {:?}", result.err());
}

#[test_log::test]
fn export_writes_mode_named_pdf_reports() {
    let dir = tempfile::tempdir().unwrap();
    let export_dir = tempfile::tempdir().unwrap();
    let config_content = format!(
        "currency: \"INR\"\nexport_dir: \"{}\"\n",
        export_dir.path().display()
    );
    let config_path = write_config(&dir, &config_content);

    let request = ProjectionRequest {
        amount: Some(1000.0),
        rate: Some(12.0),
        years: Some(1),
        export: true,
    };

    for (command, file_name) in [
        (AppCommand::Sip(request), "SIP-Investment-Data.pdf"),
        (AppCommand::Lumpsum(request), "Lumpsum-Investment-Data.pdf"),
    ] {
        let result = fvcast::run_command(command, Some(config_path.to_str().unwrap()));
        assert!(result.is_ok(), "Export flow failed: {:?}", result.err());

        let report_path = export_dir.path().join(file_name);
        info!("Checking report at {}", report_path.display());
        assert!(report_path.exists(), "missing report {file_name}");

        let bytes = fs::read(&report_path).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "not a PDF: {file_name}");
    }
}

#[test_log::test]
fn out_of_range_arguments_are_clamped_not_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&dir, "currency: \"INR\"\n");

    // Each value is far outside the default bounds; the presentation layer
    // clamps before the engine ever sees them.
    let request = ProjectionRequest {
        amount: Some(0.0),
        rate: Some(1000.0),
        years: Some(0),
        export: false,
    };
    let result = fvcast::run_command(AppCommand::Sip(request), Some(config_path.to_str().unwrap()));
    assert!(result.is_ok(), "Clamped flow failed: {:?}", result.err());
}

#[test_log::test]
fn missing_config_file_is_an_error_when_given_explicitly() {
    let result = fvcast::run_command(
        AppCommand::Sip(ProjectionRequest::default()),
        Some("/nonexistent/fvcast-config.yaml"),
    );
    assert!(result.is_err());
}

#[test_log::test]
fn malformed_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&dir, "currency: [not, a, string\n");

    let result = fvcast::run_command(
        AppCommand::Sip(ProjectionRequest::default()),
        Some(config_path.to_str().unwrap()),
    );
    assert!(result.is_err());
}
