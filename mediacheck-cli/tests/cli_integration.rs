use assert_cmd::Command;
use image::{ImageBuffer, Rgb};
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn mediacheck_cmd() -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("mediacheck")?;
    cmd.env_remove("MEDIACHECK_DIR")
        .env_remove("MEDIACHECK_REPORT")
        .env_remove("RUST_LOG");
    Ok(cmd)
}

fn write_png(path: &Path) -> Result<(), Box<dyn Error>> {
    let img = ImageBuffer::from_fn(16, 16, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 128]));
    img.save(path)?;
    Ok(())
}

#[test]
fn missing_directory_is_fatal() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("nope");

    mediacheck_cmd()?
        .arg("--dir")
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("nope"));
    Ok(())
}

#[test]
fn empty_directory_reports_nothing_found() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("notes.txt"), "not media")?;

    mediacheck_cmd()?
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("no supported media files found"));
    Ok(())
}

#[test]
fn corrupt_files_do_not_fail_the_run() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    write_png(&dir.path().join("good.png"))?;
    fs::write(dir.path().join("broken.mp4"), b"")?;

    mediacheck_cmd()?
        .arg("--dir")
        .arg(dir.path())
        .arg("--no-probe")
        .assert()
        .success()
        .stdout(contains("found 2 media files, starting checks..."))
        .stdout(contains("Media Integrity Check Report"))
        .stdout(contains("Files checked: 2"))
        .stdout(contains("OK files: 1"))
        .stdout(contains("Corrupt files: 1"))
        .stdout(contains("image OK"));
    Ok(())
}

#[test]
fn report_file_holds_full_report() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let out = tempdir()?;
    let report = out.path().join("report.txt");
    write_png(&dir.path().join("good.png"))?;
    fs::write(dir.path().join("broken.mp4"), b"")?;

    mediacheck_cmd()?
        .arg("--dir")
        .arg(dir.path())
        .arg("--report")
        .arg(&report)
        .arg("--no-probe")
        .assert()
        .success()
        .stdout(contains("Full report saved to:"));

    let text = fs::read_to_string(&report)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 12 + 2);
    assert_eq!(lines[1], "Media Integrity Check Report");
    assert!(lines[4].ends_with("current directory only"));
    assert!(text.contains("✅ OK"));
    assert!(text.contains("❌ CORRUPT"));
    Ok(())
}

#[test]
fn report_path_from_environment() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let out = tempdir()?;
    let report = out.path().join("env-report.txt");
    write_png(&dir.path().join("only.png"))?;

    mediacheck_cmd()?
        .env("MEDIACHECK_DIR", dir.path())
        .env("MEDIACHECK_REPORT", &report)
        .assert()
        .success();

    assert!(fs::read_to_string(&report)?.contains("Files checked: 1"));
    Ok(())
}

#[test]
fn recursive_flag_includes_subdirectories() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("album"))?;
    write_png(&dir.path().join("top.png"))?;
    write_png(&dir.path().join("album").join("inner.png"))?;

    mediacheck_cmd()?
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Files checked: 1"));

    mediacheck_cmd()?
        .arg("--dir")
        .arg(dir.path())
        .arg("--recursive")
        .assert()
        .success()
        .stdout(contains("(recursive)"))
        .stdout(contains("Files checked: 2"));
    Ok(())
}

#[test]
fn unwritable_report_is_fatal() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    write_png(&dir.path().join("only.png"))?;
    let report = dir.path().join("missing-dir").join("report.txt");

    mediacheck_cmd()?
        .arg("--dir")
        .arg(dir.path())
        .arg("--report")
        .arg(&report)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"));
    Ok(())
}
