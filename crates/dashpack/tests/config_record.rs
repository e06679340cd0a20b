use dashpack::{ConfigOptions, Mode, assemble};
use serde_json::Value;

fn record(options: ConfigOptions) -> Value {
  serde_json::to_value(&assemble(options).config).unwrap()
}

#[test]
fn release_record_shape() {
  let record = record(ConfigOptions::default());

  assert_eq!(record["logLevel"], "silent");
  assert_eq!(record["build"]["minify"], true);
  assert!(record["build"].get("target").is_none());
  assert_eq!(record["server"]["fs"]["strict"], true);
  assert_eq!(record["server"]["hmr"]["overlay"], false);
  assert_eq!(record["build"]["rollupOptions"]["external"][0], "^@dashpack/tailwind/fonts/");
  assert_eq!(
    record["plugins"],
    serde_json::json!([
      "sveltekit",
      "dashpack:config-virtual",
      "dashpack:query-directory-hmr",
      "dashpack:source-query-hmr"
    ])
  );
  assert_eq!(record["optimizeDeps"]["include"][0], "echarts-stat");
  assert_eq!(record["optimizeDeps"]["exclude"][2], "$dashpack/config");
  assert_eq!(record["ssr"]["external"][0], "@dashpack/telemetry");
}

#[test]
fn debug_record_shape() {
  let record = record(ConfigOptions { debug: true, ..ConfigOptions::default() });

  // Unset fields are omitted so the runtime applies its own defaults.
  assert!(record.get("logLevel").is_none());
  assert_eq!(record["build"]["minify"], false);
  assert_eq!(record["build"]["target"], "esnext");
}

#[test]
fn development_record_relaxes_fs_strictness() {
  let record = record(ConfigOptions { mode: Mode::Development, ..ConfigOptions::default() });
  assert_eq!(record["server"]["fs"]["strict"], false);
}
