use serde::{Deserialize, Serialize};

/// A warning reported by the bundler while generating output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
  /// Machine-readable category, when the bundler assigns one.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub code: Option<String>,
  pub message: String,
}

impl Warning {
  pub fn new(code: Option<&str>, message: &str) -> Self {
    Self { code: code.map(ToString::to_string), message: message.to_string() }
  }
}

#[test]
fn test_warning_round_trips_code() {
  let warning = Warning::new(Some("EVAL"), "Use of eval");
  let json = serde_json::to_string(&warning).unwrap();
  assert_eq!(serde_json::from_str::<Warning>(&json).unwrap(), warning);
}
