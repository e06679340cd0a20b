use serde::Serialize;

/// Pipeline plugins, identified by the name the runtime registers them under.
/// The runtime maps each name back to the plugin instance on its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Plugin {
  /// SvelteKit integration, the outermost framework plugin.
  #[serde(rename = "sveltekit")]
  SvelteKit,
  /// Serves the project configuration as the `$dashpack/config` virtual module.
  #[serde(rename = "dashpack:config-virtual")]
  ConfigVirtual,
  /// Hot reload for the queries directory.
  #[serde(rename = "dashpack:query-directory-hmr")]
  QueryDirectoryHmr,
  /// Hot reload for source queries.
  #[serde(rename = "dashpack:source-query-hmr")]
  SourceQueryHmr,
}
