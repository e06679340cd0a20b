pub mod build;
pub mod es_target;
pub mod log_level;
pub mod optimize_deps;
pub mod plugin;
pub mod server;
pub mod ssr;

use serde::Serialize;

use crate::{BuildOptions, LogLevel, OptimizeDeps, Plugin, ServerOptions, SsrOptions};

/// The configuration record handed to the bundler runtime at startup.
///
/// Serializes to the camelCase shape the runtime expects. Fields left as
/// `None` are omitted entirely so the runtime falls back to its own defaults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
  pub plugins: Vec<Plugin>,
  pub optimize_deps: OptimizeDeps,
  pub ssr: SsrOptions,
  pub server: ServerOptions,
  pub build: BuildOptions,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub log_level: Option<LogLevel>,
}
