//! Tests for the compile-then-run sequencing using a recording executor

use bam_test_runner::{run_with, Executor, Outcome, ProcessStatus, Result, RunConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Launch(String),
    Remove(PathBuf),
}

/// Records every call and answers launches with a fixed status per call
struct Recorder {
    compiler_code: i32,
    tests_code: i32,
    events: Vec<Event>,
}

impl Recorder {
    fn new(compiler_code: i32, tests_code: i32) -> Self {
        Recorder {
            compiler_code,
            tests_code,
            events: Vec::new(),
        }
    }

    fn launches(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Launch(_)))
            .count()
    }

    fn removals(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Remove(_)))
            .count()
    }
}

impl Executor for Recorder {
    fn run(&mut self, argv: &[String], _dir: &Path) -> Result<ProcessStatus> {
        let first_launch = self.launches() == 0;
        self.events.push(Event::Launch(argv[0].clone()));
        let code = if first_launch {
            self.compiler_code
        } else {
            self.tests_code
        };
        Ok(ProcessStatus::from_code(code))
    }

    fn remove(&mut self, path: &Path) -> Result<()> {
        self.events.push(Event::Remove(path.to_path_buf()));
        Ok(())
    }
}

fn config_in(dir: &Path) -> RunConfig {
    RunConfig::default()
        .work_dir(dir)
        .files(["timer"])
        .progress(false)
        .validate()
        .unwrap()
}

#[test]
fn test_failed_compile_runs_nothing_else() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    let mut recorder = Recorder::new(1, 0);

    let outcome = run_with(&config, &mut recorder).unwrap();

    assert!(matches!(outcome, Outcome::CompileFailed { .. }));
    assert_eq!(recorder.launches(), 1);
    assert_eq!(recorder.removals(), 0);
    assert_eq!(outcome.exit_code(), 1);
}

#[test]
fn test_successful_compile_runs_once_then_removes() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    let mut recorder = Recorder::new(0, 0);

    let outcome = run_with(&config, &mut recorder).unwrap();
    let binary = temp_dir.path().join("tester");

    assert!(outcome.success());
    assert_eq!(
        recorder.events,
        [
            Event::Launch("g++".to_string()),
            Event::Launch(binary.to_string_lossy().into_owned()),
            Event::Remove(binary),
        ]
    );
}

#[test]
fn test_failing_tests_become_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    let mut recorder = Recorder::new(0, 7);

    let outcome = run_with(&config, &mut recorder).unwrap();

    assert_eq!(
        outcome,
        Outcome::Ran {
            status: ProcessStatus::from_code(7)
        }
    );
    assert_eq!(outcome.exit_code(), 7);
    // Removal happens regardless of the test result
    assert_eq!(recorder.removals(), 1);
}

#[test]
fn test_compiler_receives_full_argv() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path()).compiler(["ccache", "g++"]);

    struct Capture(Vec<Vec<String>>);
    impl Executor for Capture {
        fn run(&mut self, argv: &[String], _dir: &Path) -> Result<ProcessStatus> {
            self.0.push(argv.to_vec());
            Ok(ProcessStatus::from_code(2))
        }
        fn remove(&mut self, _path: &Path) -> Result<()> {
            Ok(())
        }
    }

    let mut capture = Capture(Vec::new());
    run_with(&config, &mut capture).unwrap();

    let argv = &capture.0[0];
    assert_eq!(argv[0], "ccache");
    assert_eq!(argv[1], "g++");
    assert_eq!(argv.last().map(String::as_str), Some("timer_test.cpp"));
}
