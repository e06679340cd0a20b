use serde::Serialize;

/// Dependency pre-bundling directive: modules the bundler should process
/// eagerly (`include`) and modules it must never touch (`exclude`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct OptimizeDeps {
  pub include: Vec<String>,
  pub exclude: Vec<String>,
}
