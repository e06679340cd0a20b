use serde::Serialize;

use crate::EsTarget;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
  pub minify: bool,
  /// Compilation target. `None` leaves the choice to the bundler.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub target: Option<EsTarget>,
  pub rollup_options: RollupOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct RollupOptions {
  /// Import patterns resolved outside the bundle, matched as regular
  /// expressions against the import specifier.
  pub external: Vec<String>,
}
