use std::process::Command;
use std::fs;
use std::path::PathBuf;

#[test]
fn json_logs_go_to_stderr_and_stdout_is_only_the_path() {
    let td = tempfile::tempdir().unwrap();
    let out = Command::new(assert_cmd::cargo::cargo_bin!("tmpgen"))
        .env("TMPGEN_CONFIG", td.path().join("absent.xml"))
        .args(["--json", "--log-level", "normal"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    let path = PathBuf::from(stdout.trim_end());

    let stderr = String::from_utf8(out.stderr).unwrap();
    let created = stderr
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .find(|v| v["fields"]["message"] == "Created temporary file")
        .unwrap_or_else(|| panic!("no creation event in stderr: {stderr}"));
    assert_eq!(created["level"], "INFO");
    assert_eq!(created["fields"]["path"], path.display().to_string());

    fs::remove_file(path).unwrap();
}

#[test]
fn quiet_default_keeps_stderr_empty() {
    let td = tempfile::tempdir().unwrap();
    let out = Command::new(assert_cmd::cargo::cargo_bin!("tmpgen"))
        .env("TMPGEN_CONFIG", td.path().join("absent.xml"))
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    fs::remove_file(String::from_utf8(out.stdout).unwrap().trim_end()).unwrap();
}

#[test]
fn log_file_receives_events() {
    let td = tempfile::tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    let log = td.path().join("logs").join("tmpgen.log");
    fs::write(
        &cfg,
        format!("<config><log_level>debug</log_level><log_file>{}</log_file></config>", log.display()),
    )
    .unwrap();

    let out = Command::new(assert_cmd::cargo::cargo_bin!("tmpgen"))
        .env("TMPGEN_CONFIG", &cfg)
        .arg("-d")
        .output()
        .unwrap();
    assert!(out.status.success());

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Created temporary directory"), "log: {contents}");
    let line = String::from_utf8(out.stdout).unwrap();
    fs::remove_dir(line.trim_end().trim_end_matches('/')).unwrap();
}
