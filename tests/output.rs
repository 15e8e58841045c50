//! Tests for output sinks.

use chrono::NaiveDateTime;
use regex::Regex;
use std::env;
use std::error::Error as _;
use std::fs;
use std::io;
use std::process::Command;
use tempfile::NamedTempFile;
use tintlog::{
    ConsoleLogger, Error, Level, Log, MemoryOutput, Output, StdoutOutput, TIMESTAMP_FORMAT,
    WriterOutput, info, warn,
};

/// Set when this test binary is re-run as a child that logs to its real stdout.
const STDOUT_CHILD: &str = "TINTLOG_STDOUT_CHILD";

#[test]
fn writer_output_to_file() {
    let tmp = NamedTempFile::new().unwrap();
    let logger = ConsoleLogger::builder()
        .colors(false)
        .output(WriterOutput::new(tmp.reopen().unwrap()))
        .build();

    info!(logger, "written to %s", "file");
    logger.debug("below threshold", &[]);
    logger.flush().unwrap();

    let contents = fs::read_to_string(tmp.path()).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.ends_with("[INFO]written to file\n"));
}

#[test]
fn writer_output_into_inner() {
    let output = WriterOutput::new(Vec::new());
    output.write_line("one\n").unwrap();
    output.write_line("two\n").unwrap();
    assert_eq!(output.into_inner().unwrap(), b"one\ntwo\n");
}

#[test]
fn memory_output_shares_buffer_between_clones() {
    let sink = MemoryOutput::new();
    let handle = sink.clone();
    assert!(handle.is_empty());

    sink.write_line("a\n").unwrap();
    sink.write_line("b\n").unwrap();
    assert_eq!(handle.contents(), "a\nb\n");
    assert_eq!(handle.lines(), ["a", "b"]);

    handle.clear();
    assert!(sink.is_empty());
}

#[test]
fn boxed_output() {
    let sink = MemoryOutput::new();
    let boxed: Box<dyn Output> = Box::new(sink.clone());
    let logger = ConsoleLogger::builder()
        .level(Level::Trace)
        .output(boxed)
        .build();

    logger.trace("boxed", &[]);
    assert!(sink.contents().contains("[TRACE]boxed"));
}

#[test]
fn default_logger_writes_to_stdout_only() {
    if env::var_os(STDOUT_CHILD).is_some() {
        warn!(ConsoleLogger::new(), " disk at %d%%", 87);
        ConsoleLogger::new().error("to stdout too", &[]);
        ConsoleLogger::new().debug("suppressed", &[]);
        let raw = StdoutOutput::new();
        raw.write_line("raw stdout line\n").unwrap();
        raw.flush().unwrap();
        return;
    }

    let output = Command::new(env::current_exe().unwrap())
        .args([
            "--exact",
            "default_logger_writes_to_stdout_only",
            "--nocapture",
            "--test-threads=1",
        ])
        .env(STDOUT_CHILD, "1")
        .output()
        .expect("failed to re-run test binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.is_empty(), "unexpected stderr: {stderr}");

    let warn_line = Regex::new(
        r"\x1b\[38;5;148m(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}) \[WARN\] disk at 87%\x1b\[0m\n",
    )
    .unwrap();
    let lines: Vec<_> = warn_line.captures_iter(&stdout).collect();
    assert_eq!(lines.len(), 1, "stdout was: {stdout:?}");
    assert!(NaiveDateTime::parse_from_str(&lines[0][1], TIMESTAMP_FORMAT).is_ok());

    assert!(stdout.contains("[ERROR]to stdout too\x1b[0m\n"));
    assert!(!stdout.contains("suppressed"));
    assert!(stdout.contains("raw stdout line\n"));
}

struct FailingOutput;

impl Output for FailingOutput {
    fn write_line(&self, _line: &str) -> Result<(), Error> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed").into())
    }

    fn flush(&self) -> Result<(), Error> {
        Err(Error::Poisoned)
    }
}

#[test]
fn write_errors_never_reach_the_caller() {
    let logger = ConsoleLogger::builder().output(FailingOutput).build();
    info!(logger, "into the void");
    logger.fatal("still fine", &[]);
    assert!(logger.flush().is_err());
}

#[test]
fn error_display_and_source() {
    let io_err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
    assert_eq!(io_err.to_string(), "I/O error: closed");
    assert!(io_err.source().is_some());

    assert_eq!(Error::Poisoned.to_string(), "output lock poisoned");
    assert!(Error::Poisoned.source().is_none());
}
