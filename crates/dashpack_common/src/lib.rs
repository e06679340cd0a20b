mod bundler_config;
mod warning;

pub use bundler_config::{
  BundlerConfig, build::BuildOptions, build::RollupOptions, es_target::EsTarget,
  log_level::LogLevel, optimize_deps::OptimizeDeps, plugin::Plugin, server::FsOptions,
  server::HmrOptions, server::ServerOptions, ssr::SsrOptions,
};

pub use crate::warning::Warning;
