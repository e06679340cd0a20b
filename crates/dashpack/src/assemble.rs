use dashpack_common::{
  BuildOptions, BundlerConfig, EsTarget, FsOptions, HmrOptions, LogLevel, OptimizeDeps, Plugin,
  RollupOptions, ServerOptions, SsrOptions,
};

use crate::logger::{BuildLogger, ConsoleLogger, DebugLogger, QuietLogger, StructuredSink};
use crate::options::{ConfigOptions, Mode};

/// Modules pre-bundled in every configuration.
const OPTIMIZE_INCLUDE_BASE: &[&str] =
  &["echarts-stat", "echarts", "blueimp-md5", "nanoid", "@uwdata/mosaic-sql"];

/// Pre-bundled so HMR does not fall back to full-page reloads. Skipped when
/// the opt-out toggle is set.
const OPTIMIZE_INCLUDE_HMR: &[&str] = &[
  "@dashpack/core-components",
  // Injected into generated query modules
  "@dashpack/component-utilities/stores",
  "@dashpack/component-utilities/formatting",
  "@dashpack/component-utilities/global-contexts",
  "@dashpack/sdk/utils/svelte",
  "@dashpack/component-utilities/profile",
  "@dashpack/sdk/usql",
  "@dashpack/component-utilities/build-query",
  "debounce",
  "@duckdb/duckdb-wasm",
  "apache-arrow",
];

const OPTIMIZE_EXCLUDE: &[&str] = &["svelte-icons", "@dashpack/universal-sql", "$dashpack/config"];

const SSR_EXTERNAL: &[&str] =
  &["@dashpack/telemetry", "blueimp-md5", "nanoid", "@uwdata/mosaic-sql", "@dashpack/sdk/plugins"];

/// Font assets are fetched by the browser, never bundled.
const ROLLUP_EXTERNAL: &[&str] = &["^@dashpack/tailwind/fonts/"];

pub struct AssembleReturn {
  pub config: BundlerConfig,
  pub logger: Box<dyn BuildLogger>,
}

/// Builds the configuration record for the bundler runtime, paired with the
/// logger its diagnostics should route through. Exactly one of the two logger
/// decorations is chosen here, by the debug flag, and the choice is never
/// revisited for the lifetime of the build.
pub fn assemble(options: ConfigOptions) -> AssembleReturn {
  // Strict is the default. Development relaxes it so the generated template
  // project can resolve dependencies outside its own directory.
  let strict_fs = options.mode != Mode::Development;

  let mut include = owned(OPTIMIZE_INCLUDE_BASE);
  if !options.disable_include {
    include.extend(owned(OPTIMIZE_INCLUDE_HMR));
  }

  let config = BundlerConfig {
    plugins: vec![
      Plugin::SvelteKit,
      Plugin::ConfigVirtual,
      Plugin::QueryDirectoryHmr,
      Plugin::SourceQueryHmr,
    ],
    optimize_deps: OptimizeDeps { include, exclude: owned(OPTIMIZE_EXCLUDE) },
    ssr: SsrOptions { external: owned(SSR_EXTERNAL) },
    server: ServerOptions {
      fs: FsOptions { strict: strict_fs },
      hmr: HmrOptions { overlay: false },
    },
    build: BuildOptions {
      minify: !options.debug,
      target: options.debug.then_some(EsTarget::EsNext),
      rollup_options: RollupOptions { external: owned(ROLLUP_EXTERNAL) },
    },
    log_level: if options.debug { None } else { Some(LogLevel::Silent) },
  };

  let logger: Box<dyn BuildLogger> = if options.debug {
    Box::new(DebugLogger::new(ConsoleLogger::default()))
  } else {
    Box::new(QuietLogger::new(StructuredSink))
  };

  AssembleReturn { config, logger }
}

fn owned(list: &[&str]) -> Vec<String> {
  list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_strict_fs_relaxed_only_in_development() {
  let dev = assemble(ConfigOptions { mode: Mode::Development, ..ConfigOptions::default() });
  assert!(!dev.config.server.fs.strict);

  let prod = assemble(ConfigOptions::default());
  assert!(prod.config.server.fs.strict);
}

#[test]
fn test_include_list_extension_and_opt_out() {
  let extended = assemble(ConfigOptions::default());
  let mut expected = owned(OPTIMIZE_INCLUDE_BASE);
  expected.extend(owned(OPTIMIZE_INCLUDE_HMR));
  assert_eq!(extended.config.optimize_deps.include, expected);

  let opted_out = assemble(ConfigOptions { disable_include: true, ..ConfigOptions::default() });
  assert_eq!(opted_out.config.optimize_deps.include, owned(OPTIMIZE_INCLUDE_BASE));
}

#[test]
fn test_debug_disables_minify_and_pins_target() {
  let debug = assemble(ConfigOptions { debug: true, ..ConfigOptions::default() });
  assert!(!debug.config.build.minify);
  assert_eq!(debug.config.build.target, Some(EsTarget::EsNext));
  assert_eq!(debug.config.log_level, None);

  let release = assemble(ConfigOptions::default());
  assert!(release.config.build.minify);
  assert_eq!(release.config.build.target, None);
  assert_eq!(release.config.log_level, Some(LogLevel::Silent));
}

#[test]
fn test_plugin_order_is_fixed() {
  let assembled = assemble(ConfigOptions::default());
  assert_eq!(
    assembled.config.plugins,
    vec![
      Plugin::SvelteKit,
      Plugin::ConfigVirtual,
      Plugin::QueryDirectoryHmr,
      Plugin::SourceQueryHmr
    ]
  );
}

#[test]
fn test_hmr_overlay_stays_off() {
  let assembled = assemble(ConfigOptions { mode: Mode::Development, ..ConfigOptions::default() });
  assert!(!assembled.config.server.hmr.overlay);
}
