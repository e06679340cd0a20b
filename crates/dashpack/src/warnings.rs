use dashpack_common::Warning;

/// Warning code the bundler emits for eval usage. duckdb-wasm trips it on
/// every build, so the category is dropped at the source.
pub const EVAL_WARNING_CODE: &str = "EVAL";

/// Forwarding filter for bundler warnings: drops the eval-usage category and
/// passes every other warning through unchanged.
pub fn on_warn(warning: Warning, forward: &mut dyn FnMut(Warning)) {
  if warning.code.as_deref() == Some(EVAL_WARNING_CODE) {
    return;
  }
  forward(warning);
}

#[cfg(test)]
mod tests {
  use dashpack_common::Warning;

  use super::on_warn;

  #[test]
  fn drops_eval_warnings() {
    let mut forwarded = Vec::new();
    on_warn(Warning::new(Some("EVAL"), "Use of eval"), &mut |w| forwarded.push(w));
    assert!(forwarded.is_empty());
  }

  #[test]
  fn forwards_other_warnings_unchanged() {
    let warning = Warning::new(Some("CIRCULAR_DEPENDENCY"), "Circular dependency: a -> b -> a");
    let mut forwarded = Vec::new();
    on_warn(warning.clone(), &mut |w| forwarded.push(w));
    assert_eq!(forwarded, [warning]);

    let uncoded = Warning::new(None, "something odd happened");
    let mut forwarded = Vec::new();
    on_warn(uncoded.clone(), &mut |w| forwarded.push(w));
    assert_eq!(forwarded, [uncoded]);
  }
}
