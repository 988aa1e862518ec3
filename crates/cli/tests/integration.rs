//! Integration tests for the ocp CLI
//!
//! The `usage` module runs the binary with no remote store and checks the
//! argument surface. The `transfers` module requires a running
//! S3-compatible server and is gated behind the `integration` feature:
//!
//! ```bash
//! docker run -d --name minio -p 9000:9000 \
//!     -e MINIO_ROOT_USER=accesskey \
//!     -e MINIO_ROOT_PASSWORD=secretkey \
//!     minio/minio server /data
//!
//! OCP_ENDPOINT=http://localhost:9000 \
//! OCP_ACCESS_KEY=accesskey \
//! OCP_SECRET_KEY=secretkey \
//! cargo test --features integration
//! ```

use std::process::{Command, Output};

/// Run the ocp binary with the given args and environment
fn run_ocp(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ocp"));
    cmd.args(args);
    for var in ["OCP_ENDPOINT", "OCP_ACCESS_KEY", "OCP_SECRET_KEY", "OCP_REGION"] {
        cmd.env_remove(var);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute ocp")
}

mod usage {
    use super::*;

    #[test]
    fn test_no_arguments_prints_usage() {
        let output = run_ocp(&[], &[]);
        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(2));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage"), "stderr was: {stderr}");
    }

    #[test]
    fn test_single_path_prints_usage() {
        let output = run_ocp(&["only-one-path"], &[]);
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_malformed_remote_is_usage_error() {
        let output = run_ocp(&["a:no-separator", "dst"], &[]);
        assert_eq!(output.status.code(), Some(2));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("separator"), "stderr was: {stderr}");
    }

    #[test]
    fn test_missing_credentials_reported() {
        let output = run_ocp(&["-l", "-"], &[]);
        assert_eq!(output.status.code(), Some(1));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("OCP_ENDPOINT"), "stderr was: {stderr}");
    }
}

#[cfg(feature = "integration")]
mod transfers {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn test_env() -> Option<Vec<(String, String)>> {
        let endpoint = std::env::var("OCP_ENDPOINT").ok()?;
        let access_key = std::env::var("OCP_ACCESS_KEY").ok()?;
        let secret_key = std::env::var("OCP_SECRET_KEY").ok()?;
        Some(vec![
            ("OCP_ENDPOINT".to_string(), endpoint),
            ("OCP_ACCESS_KEY".to_string(), access_key),
            ("OCP_SECRET_KEY".to_string(), secret_key),
        ])
    }

    fn run_with_env(args: &[&str], env: &[(String, String)]) -> Output {
        let pairs: Vec<(&str, &str)> =
            env.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        run_ocp(args, &pairs)
    }

    /// Unique suffix so parallel runs do not collide
    fn unique_suffix() -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        format!("{:x}", nanos % 0xFFFF_FFFF)
    }

    #[test]
    fn test_list_containers() {
        let Some(env) = test_env() else {
            eprintln!("skipping: OCP_* not set");
            return;
        };

        let output = run_with_env(&["-l", "-"], &env);
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    #[test]
    fn test_round_trip_through_store() {
        let Some(env) = test_env() else {
            eprintln!("skipping: OCP_* not set");
            return;
        };

        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("payload.bin");
        let back = dir.path().join("back.bin");
        let payload: Vec<u8> = (0..100_000u32).map(|i| (i % 241) as u8).collect();
        std::fs::write(&src, &payload).unwrap();

        // Assumes a pre-created test container named "ocp-test".
        let key = format!("a:ocp-test/it-{}", unique_suffix());

        let output = run_with_env(&[src.to_str().unwrap(), &key], &env);
        assert!(
            output.status.success(),
            "upload stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let output = run_with_env(&[&key, back.to_str().unwrap()], &env);
        assert!(
            output.status.success(),
            "download stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        assert_eq!(std::fs::read(&back).unwrap(), payload);

        let output = run_with_env(&["-l", "ocp-test"], &env);
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(key.trim_start_matches("a:ocp-test/")));
    }

    #[test]
    fn test_batch_continues_after_missing_source() {
        let Some(env) = test_env() else {
            eprintln!("skipping: OCP_* not set");
            return;
        };

        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, b"still copied").unwrap();
        let missing = dir.path().join("missing.txt");

        let key = format!("a:ocp-test/batch-{}", unique_suffix());
        let output = run_with_env(
            &[missing.to_str().unwrap(), good.to_str().unwrap(), &key],
            &env,
        );

        // Batch reports failure overall but the good source went through.
        assert!(!output.status.success());
        let back = dir.path().join("back.txt");
        let output = run_with_env(&[&key, back.to_str().unwrap()], &env);
        assert!(output.status.success());
        assert_eq!(std::fs::read(&back).unwrap(), b"still copied");
    }
}
