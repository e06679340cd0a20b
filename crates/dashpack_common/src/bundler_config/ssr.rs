use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SsrOptions {
  /// Modules kept external to the server-rendering bundle.
  pub external: Vec<String>,
}
