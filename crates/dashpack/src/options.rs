use std::env;

pub const MODE_VAR: &str = "NODE_ENV";
pub const DEBUG_VAR: &str = "DASHPACK_DEBUG";
pub const DISABLE_INCLUDE_VAR: &str = "DASHPACK_DISABLE_INCLUDE";

/// Build mode the pipeline runs under. Anything other than the development
/// sentinel counts as production, including an unset variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
  Development,
  #[default]
  Production,
}

impl Mode {
  pub fn from_env_value(value: Option<&str>) -> Self {
    if value == Some("development") { Self::Development } else { Self::Production }
  }
}

/// Explicit inputs of the configuration assembler. Constructed once from the
/// process environment (plus CLI overrides) and read-only afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOptions {
  pub mode: Mode,
  pub debug: bool,
  /// Opts out of the HMR pre-bundle extension of the optimize include list.
  pub disable_include: bool,
}

impl ConfigOptions {
  pub fn from_env() -> Self {
    Self::from_env_with(|key| env::var(key).ok())
  }

  /// Same as [`from_env`](Self::from_env) with the variable lookup injected.
  pub fn from_env_with(var: impl Fn(&str) -> Option<String>) -> Self {
    Self {
      mode: Mode::from_env_value(var(MODE_VAR).as_deref()),
      debug: is_truthy(var(DEBUG_VAR).as_deref()),
      disable_include: is_truthy(var(DISABLE_INCLUDE_VAR).as_deref()),
    }
  }
}

// Set and non-empty counts as truthy, matching how the runtime reads these
// toggles. "0" and "false" are set, so they toggle too.
fn is_truthy(value: Option<&str>) -> bool {
  value.is_some_and(|value| !value.is_empty())
}

#[test]
fn test_mode_sentinel() {
  assert_eq!(Mode::from_env_value(Some("development")), Mode::Development);
  assert_eq!(Mode::from_env_value(Some("production")), Mode::Production);
  assert_eq!(Mode::from_env_value(Some("test")), Mode::Production);
  assert_eq!(Mode::from_env_value(None), Mode::Production);
}

#[test]
fn test_from_env_with() {
  let options = ConfigOptions::from_env_with(|key| match key {
    MODE_VAR => Some("development".to_string()),
    DEBUG_VAR => Some("1".to_string()),
    _ => None,
  });
  assert_eq!(
    options,
    ConfigOptions { mode: Mode::Development, debug: true, disable_include: false }
  );
}

#[test]
fn test_truthiness_ignores_value_content() {
  let options = ConfigOptions::from_env_with(|key| match key {
    DISABLE_INCLUDE_VAR => Some("0".to_string()),
    _ => None,
  });
  assert!(options.disable_include);

  let options = ConfigOptions::from_env_with(|key| match key {
    DISABLE_INCLUDE_VAR => Some(String::new()),
    _ => None,
  });
  assert!(!options.disable_include);
}
