use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct OptionArgs {
  /// Build mode; overrides NODE_ENV. Anything other than "development"
  /// counts as production.
  #[clap(long)]
  pub mode: Option<String>,

  /// Keep output inspectable: no minification, latest-syntax target, full
  /// diagnostics. Overrides DASHPACK_DEBUG.
  #[clap(long)]
  pub debug: bool,

  /// Skip the HMR pre-bundle extension of the optimize include list.
  /// Overrides DASHPACK_DISABLE_INCLUDE.
  #[clap(long)]
  pub disable_include: bool,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Write the configuration record here instead of stdout.
  #[clap(long, short = 'o')]
  pub output: Option<PathBuf>,

  #[clap(long)]
  pub pretty: bool,
}
