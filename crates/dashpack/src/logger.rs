use std::sync::Mutex;

use ansi_term::Colour;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Options carried with each log call, mirroring the runtime logger's
/// signature. Filtering passes these through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
  pub clear: bool,
  pub timestamp: bool,
}

/// The diagnostics surface of the bundler runtime. Implementations must keep
/// the full `(message, options)` pair intact for anything they forward.
pub trait BuildLogger {
  fn info(&self, msg: &str, options: Option<&LogOptions>);
  fn warn(&self, msg: &str, options: Option<&LogOptions>);
  fn warn_once(&self, msg: &str, options: Option<&LogOptions>);
  fn error(&self, msg: &str, options: Option<&LogOptions>);
}

/// Colored stderr logger, the base the debug decoration wraps when the CLI
/// drives the pipeline itself.
#[derive(Default)]
pub struct ConsoleLogger {
  seen: Mutex<FxHashSet<String>>,
}

impl BuildLogger for ConsoleLogger {
  fn info(&self, msg: &str, _options: Option<&LogOptions>) {
    eprintln!("{msg}");
  }

  fn warn(&self, msg: &str, _options: Option<&LogOptions>) {
    eprintln!("{} {msg}", Colour::Yellow.paint("Warning:"));
  }

  fn warn_once(&self, msg: &str, options: Option<&LogOptions>) {
    let first = self.seen.lock().expect("logger mutex poisoned").insert(msg.to_string());
    if first {
      self.warn(msg, options);
    }
  }

  fn error(&self, msg: &str, _options: Option<&LogOptions>) {
    eprintln!("{} {msg}", Colour::Red.paint("Error:"));
  }
}

/// The generated layout module imports fs/promises behind a browser check,
/// so the externalization notice is expected on every dev session.
const FS_PROMISES_NOTICE: &str =
  r#"Module "fs/promises" has been externalized for browser compatibility"#;

/// duckdb-wasm uses eval internally; the two halves of the bundler's message
/// are matched separately because it interpolates the importer in between.
const EVAL_NOTICE_HEAD: &str = "Use of eval in";
const EVAL_NOTICE_TAIL: &str =
  "is strongly discouraged as it poses security risks and may cause issues with minification.";

/// The duckdb-wasm worker ships without its sources, which trips the
/// missing-sourcemap warning once per session.
const SOURCEMAP_NOISE: &str = r#"Sourcemap for ".+/node_modules/@duckdb/duckdb-wasm/dist/duckdb-browser-eh\.worker\.js" points to missing source files"#;

/// Debug-mode decoration: keeps full diagnostics but drops the known-noisy
/// messages listed above. Everything else forwards with its arguments intact.
pub struct DebugLogger<L> {
  inner: L,
  sourcemap_noise: Regex,
}

impl<L: BuildLogger> DebugLogger<L> {
  pub fn new(inner: L) -> Self {
    Self { inner, sourcemap_noise: Regex::new(SOURCEMAP_NOISE).expect("pattern is static") }
  }
}

impl<L: BuildLogger> BuildLogger for DebugLogger<L> {
  fn info(&self, msg: &str, options: Option<&LogOptions>) {
    self.inner.info(msg, options);
  }

  fn warn(&self, msg: &str, options: Option<&LogOptions>) {
    if msg.contains(FS_PROMISES_NOTICE) {
      return;
    }
    if msg.contains(EVAL_NOTICE_HEAD) && msg.contains(EVAL_NOTICE_TAIL) {
      return;
    }
    self.inner.warn(msg, options);
  }

  fn warn_once(&self, msg: &str, options: Option<&LogOptions>) {
    if self.sourcemap_noise.is_match(msg) {
      return;
    }
    self.inner.warn_once(msg, options);
  }

  fn error(&self, msg: &str, options: Option<&LogOptions>) {
    self.inner.error(msg, options);
  }
}

/// Destination for errors that must survive the silenced non-debug logger.
pub trait ErrorSink {
  fn error(&self, msg: &str);
}

/// Routes errors into the `log` facade so whatever subscriber the host
/// process installed picks them up.
pub struct StructuredSink;

impl ErrorSink for StructuredSink {
  fn error(&self, msg: &str) {
    log::error!("{msg}");
  }
}

/// Non-debug decoration: info/warn/warnOnce are discarded outright, errors
/// are handed to the structured sink. Pairs with `LogLevel::Silent` in the
/// configuration record.
pub struct QuietLogger<S> {
  sink: S,
}

impl<S: ErrorSink> QuietLogger<S> {
  pub fn new(sink: S) -> Self {
    Self { sink }
  }
}

impl<S: ErrorSink> BuildLogger for QuietLogger<S> {
  fn info(&self, _msg: &str, _options: Option<&LogOptions>) {}

  fn warn(&self, _msg: &str, _options: Option<&LogOptions>) {}

  fn warn_once(&self, _msg: &str, _options: Option<&LogOptions>) {}

  fn error(&self, msg: &str, _options: Option<&LogOptions>) {
    self.sink.error(msg);
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::rc::Rc;

  use super::{BuildLogger, DebugLogger, ErrorSink, LogOptions, QuietLogger};

  type Call = (&'static str, String, Option<LogOptions>);

  struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
  }

  impl BuildLogger for Recorder {
    fn info(&self, msg: &str, options: Option<&LogOptions>) {
      self.calls.borrow_mut().push(("info", msg.to_string(), options.copied()));
    }

    fn warn(&self, msg: &str, options: Option<&LogOptions>) {
      self.calls.borrow_mut().push(("warn", msg.to_string(), options.copied()));
    }

    fn warn_once(&self, msg: &str, options: Option<&LogOptions>) {
      self.calls.borrow_mut().push(("warn_once", msg.to_string(), options.copied()));
    }

    fn error(&self, msg: &str, options: Option<&LogOptions>) {
      self.calls.borrow_mut().push(("error", msg.to_string(), options.copied()));
    }
  }

  fn recording_debug_logger() -> (DebugLogger<Recorder>, Rc<RefCell<Vec<Call>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    (DebugLogger::new(Recorder { calls: Rc::clone(&calls) }), calls)
  }

  #[test]
  fn debug_warn_once_swallows_sourcemap_noise() {
    let (logger, calls) = recording_debug_logger();
    logger.warn_once(
      "Sourcemap for \"/app/node_modules/@duckdb/duckdb-wasm/dist/duckdb-browser-eh.worker.js\" points to missing source files",
      None,
    );
    assert!(calls.borrow().is_empty());
  }

  #[test]
  fn debug_warn_once_forwards_other_messages_intact() {
    let (logger, calls) = recording_debug_logger();
    let options = LogOptions { clear: true, timestamp: false };
    logger.warn_once("Sourcemap for \"/app/other.js\" points to missing source files", Some(&options));
    assert_eq!(
      calls.borrow().as_slice(),
      [(
        "warn_once",
        "Sourcemap for \"/app/other.js\" points to missing source files".to_string(),
        Some(options)
      )]
    );
  }

  #[test]
  fn debug_warn_swallows_fs_promises_notice() {
    let (logger, calls) = recording_debug_logger();
    logger.warn(
      "Module \"fs/promises\" has been externalized for browser compatibility, imported by \"/app/+layout.js\".",
      None,
    );
    assert!(calls.borrow().is_empty());
  }

  #[test]
  fn debug_warn_swallows_eval_notice() {
    let (logger, calls) = recording_debug_logger();
    logger.warn(
      "Use of eval in \"/app/node_modules/@duckdb/duckdb-wasm/dist/duckdb-browser.mjs\" is strongly discouraged as it poses security risks and may cause issues with minification.",
      None,
    );
    assert!(calls.borrow().is_empty());
  }

  #[test]
  fn debug_warn_forwards_other_messages_with_options() {
    let (logger, calls) = recording_debug_logger();
    let options = LogOptions { clear: false, timestamp: true };
    logger.warn("chunk size exceeds limit", Some(&options));
    assert_eq!(
      calls.borrow().as_slice(),
      [("warn", "chunk size exceeds limit".to_string(), Some(options))]
    );
  }

  #[test]
  fn debug_info_and_error_pass_through() {
    let (logger, calls) = recording_debug_logger();
    logger.info("built in 120ms", None);
    logger.error("transform failed", None);
    assert_eq!(
      calls.borrow().as_slice(),
      [
        ("info", "built in 120ms".to_string(), None),
        ("error", "transform failed".to_string(), None)
      ]
    );
  }

  struct RecordingSink {
    errors: RefCell<Vec<String>>,
  }

  impl ErrorSink for &RecordingSink {
    fn error(&self, msg: &str) {
      self.errors.borrow_mut().push(msg.to_string());
    }
  }

  #[test]
  fn quiet_logger_drops_everything_but_errors() {
    let sink = RecordingSink { errors: RefCell::new(Vec::new()) };
    let logger = QuietLogger::new(&sink);

    logger.info("built in 120ms", None);
    logger.warn("chunk size exceeds limit", None);
    logger.warn_once("deprecated option", None);
    assert!(sink.errors.borrow().is_empty());

    logger.error("transform failed", None);
    assert_eq!(sink.errors.borrow().as_slice(), ["transform failed".to_string()]);
  }
}
