// mediacheck-core/tests/run_tests.rs
//
// End-to-end runs over scratch directories. Images are real fixtures; video
// checks are replaced by a fixed verdict so results do not depend on ffmpeg.

use image::{ImageFormat, RgbImage};
use mediacheck_core::check::{CheckOutcome, ImageChecker, IntegrityCheck, MediaCheckers};
use mediacheck_core::config::{CheckConfig, CheckConfigBuilder};
use mediacheck_core::discovery::MediaKind;
use mediacheck_core::error::CoreError;
use mediacheck_core::processing::run_checks;
use mediacheck_core::reporting::summary::HEADER_LINE_COUNT;
use mediacheck_core::reporting::{
    BatchStartInfo, CheckResult, FileProgressContext, NullReporter, Reporter, RunSummary,
};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

struct FailingVideo;

impl IntegrityCheck for FailingVideo {
    fn check(&self, _path: &Path) -> CheckOutcome {
        CheckOutcome::failed("cannot open video file, possibly corrupt")
    }
}

fn checkers() -> MediaCheckers {
    MediaCheckers::new(Box::new(ImageChecker::new()), Box::new(FailingVideo))
}

fn populate(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    RgbImage::new(100, 100).save_with_format(root.join("good.jpg"), ImageFormat::Jpeg)?;
    RgbImage::new(100, 100).save_with_format(root.join("liar.jpg"), ImageFormat::Png)?;
    fs::File::create(root.join("empty.mp4"))?;
    fs::write(root.join("readme.txt"), "not media")?;
    fs::create_dir(root.join("nested"))?;
    RgbImage::new(8, 8).save_with_format(root.join("nested").join("inner.png"), ImageFormat::Png)?;
    Ok(())
}

fn by_path(summary: &RunSummary) -> Vec<(String, bool)> {
    let mut rows: Vec<(String, bool)> = summary
        .results
        .iter()
        .map(|r| (r.relative_path.clone(), r.ok))
        .collect();
    rows.sort();
    rows
}

#[test]
fn test_top_level_run_counts_and_report() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    populate(dir.path())?;

    let config = CheckConfig::new(dir.path().to_path_buf());
    let (config, summary) = run_checks(config, &checkers(), &NullReporter)?;

    assert!(config.target_dir.is_absolute());
    assert_eq!(summary.total, 3);
    assert_eq!(summary.ok_count, 1);
    assert_eq!(summary.error_count, 2);
    assert_eq!(summary.total, summary.ok_count + summary.error_count);
    assert_eq!(
        by_path(&summary),
        vec![
            ("empty.mp4".to_string(), false),
            ("good.jpg".to_string(), true),
            ("liar.jpg".to_string(), false),
        ]
    );

    let liar = summary
        .results
        .iter()
        .find(|r| r.relative_path == "liar.jpg")
        .unwrap();
    assert_eq!(liar.media_type, MediaKind::Image);
    assert!(liar.message.starts_with("format mismatch"));

    let report_path = dir.path().join("report.txt");
    summary.write_report(&report_path)?;
    let written = fs::read_to_string(&report_path)?;
    assert_eq!(written.lines().count(), HEADER_LINE_COUNT + 3);
    assert!(written.contains("Scan mode: current directory only"));
    Ok(())
}

#[test]
fn test_recursive_run_includes_subdirectories() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    populate(dir.path())?;

    let config = CheckConfigBuilder::new()
        .target_dir(dir.path().to_path_buf())
        .recursive(true)
        .build();
    let (_, summary) = run_checks(config, &checkers(), &NullReporter)?;

    assert_eq!(summary.total, 4);
    let inner = Path::new("nested").join("inner.png").to_string_lossy().into_owned();
    assert!(summary.results.iter().any(|r| r.relative_path == inner && r.ok));
    assert!(summary.render().contains("Scan mode: recursive"));
    Ok(())
}

#[test]
fn test_missing_directory_is_fatal_and_checks_nothing() {
    #[derive(Default)]
    struct Recorder(RefCell<usize>);

    impl Reporter for Recorder {
        fn file_started(&self, _context: &FileProgressContext<'_>) {
            *self.0.borrow_mut() += 1;
        }
    }

    let recorder = Recorder::default();
    let config = CheckConfig::new(PathBuf::from("surely/this/does/not/exist/42"));
    match run_checks(config, &checkers(), &recorder) {
        Err(CoreError::InvalidDirectory(_)) => {}
        other => panic!("Unexpected result: {:?}", other.map(|(_, s)| s.total)),
    }
    assert_eq!(*recorder.0.borrow(), 0);
}

#[test]
fn test_empty_directory_produces_empty_summary() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let (_, summary) = run_checks(
        CheckConfig::new(dir.path().to_path_buf()),
        &checkers(),
        &NullReporter,
    )?;
    assert_eq!(summary.total, 0);
    assert_eq!(summary.report_lines().len(), HEADER_LINE_COUNT);
    Ok(())
}

#[test]
fn test_reporter_sees_every_file_in_order() -> Result<(), Box<dyn std::error::Error>> {
    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl Reporter for Recorder {
        fn batch_started(&self, info: &BatchStartInfo<'_>) {
            self.events.borrow_mut().push(format!("start {}", info.total_files));
        }
        fn file_started(&self, context: &FileProgressContext<'_>) {
            self.events.borrow_mut().push(format!(
                "[{}/{}] {}",
                context.current_file, context.total_files, context.relative_path
            ));
        }
        fn file_checked(&self, _context: &FileProgressContext<'_>, result: &CheckResult) {
            self.events.borrow_mut().push(format!("done {}", result.ok));
        }
        fn batch_complete(&self, summary: &RunSummary) {
            self.events.borrow_mut().push(format!("end {}", summary.total));
        }
    }

    let dir = tempdir()?;
    RgbImage::new(4, 4).save_with_format(dir.path().join("only.png"), ImageFormat::Png)?;

    let recorder = Recorder::default();
    run_checks(CheckConfig::new(dir.path().to_path_buf()), &checkers(), &recorder)?;

    assert_eq!(
        *recorder.events.borrow(),
        vec!["start 1", "[1/1] only.png", "done true", "end 1"]
    );
    Ok(())
}
