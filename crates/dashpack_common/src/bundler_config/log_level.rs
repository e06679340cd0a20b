use std::fmt::Display;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  Info,
  Warn,
  Error,
  Silent,
}

impl Display for LogLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Info => write!(f, "info"),
      Self::Warn => write!(f, "warn"),
      Self::Error => write!(f, "error"),
      Self::Silent => write!(f, "silent"),
    }
  }
}
