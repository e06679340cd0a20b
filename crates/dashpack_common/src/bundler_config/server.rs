use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServerOptions {
  pub fs: FsOptions,
  pub hmr: HmrOptions,
}

/// Dev-server filesystem policy. With `strict` set, the server refuses to
/// serve files that resolve outside the project root.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FsOptions {
  pub strict: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HmrOptions {
  /// The in-browser error overlay shown on build failures during development.
  pub overlay: bool,
}
