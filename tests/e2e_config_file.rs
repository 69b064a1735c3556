/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample")
}

/// Write a config file pointing at the sample manifest, plus extra YAML.
fn write_config(path: &Path, extra: &str) {
    let content = format!(
        "manifest: {}\n{}",
        fixtures_path().join("license-manifest.json").display(),
        extra
    );
    fs::write(path, content).unwrap();
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("license-report.config.yml"), "format: md-table\n");

        let output = cargo_bin_cmd!("license-report")
            .current_dir(dir.path())
            .arg("app")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("| name "), "{stdout}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_ignore() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("license-report.config.yml"),
            "ignore:\n  - vendor\n  - tools\n",
        );

        cargo_bin_cmd!("license-report")
            .current_dir(dir.path())
            .arg("app")
            .assert()
            .success()
            .stdout(predicate::str::contains("vendor/").not())
            .stdout(predicate::str::contains("tools/").not())
            .stdout(predicate::str::contains("lib/json,"));
    }

    #[test]
    fn test_no_config_file_uses_default_manifest_name() {
        let dir = TempDir::new().unwrap();

        // No config and no license-manifest.json in the working directory
        cargo_bin_cmd!("license-report")
            .current_dir(dir.path())
            .arg("app")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("license-manifest.json"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: table\n");

        cargo_bin_cmd!("license-report")
            .args(["-c", config_path.to_str().unwrap(), "app"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("+-"))
            .stderr(predicate::str::contains("Auto-discovered").not());
    }

    #[test]
    fn test_missing_config_file_is_invalid_argument() {
        cargo_bin_cmd!("license-report")
            .args(["-c", "/nonexistent/config.yml", "app"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_config_value_is_invalid_argument() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: xml\n");

        cargo_bin_cmd!("license-report")
            .args(["-c", config_path.to_str().unwrap(), "app"])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Invalid format"));
    }

    #[test]
    fn test_unknown_fields_warn() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "check_cve: true\n");

        cargo_bin_cmd!("license-report")
            .args(["-c", config_path.to_str().unwrap(), "app"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Unknown config field 'check_cve'"));
    }
}

// ============================================================================
// CLI / Config Merging Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: md-table\n");

        cargo_bin_cmd!("license-report")
            .args(["-c", config_path.to_str().unwrap(), "--table", "app"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("+-"));
    }

    #[test]
    fn test_ignore_lists_are_merged() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "ignore:\n  - vendor\n");

        cargo_bin_cmd!("license-report")
            .args(["-c", config_path.to_str().unwrap(), "--ignore", "tools", "app"])
            .assert()
            .success()
            .stdout(
                "name,license_url,license_name\n\
                 app,https://github.com/acme/app/blob/v1.0.0/LICENSE,MIT\n\
                 lib/json,https://github.com/acme/json/blob/HEAD/LICENSE,Apache-2.0\n",
            );
    }

    #[test]
    fn test_config_git_remotes() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "git_remotes:\n  - upstream\n");

        cargo_bin_cmd!("license-report")
            .args(["-c", config_path.to_str().unwrap(), "app"])
            .assert()
            .success()
            .stdout(predicate::str::contains("app,Unknown,MIT\n"))
            .stdout(predicate::str::contains(
                "lib/json,https://github.com/acme/json/blob/HEAD/LICENSE,Apache-2.0\n",
            ));
    }

    #[test]
    fn test_config_conflict_checked_before_manifest() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        fs::write(&config_path, "manifest: /nonexistent/manifest.json\n").unwrap();

        cargo_bin_cmd!("license-report")
            .args(["-c", config_path.to_str().unwrap(), "--table", "--md-table", "app"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Conflicting output formats"));
    }
}
