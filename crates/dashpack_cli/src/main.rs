mod args;

use std::{fs, time::Instant};

use ansi_term::Colour;
use anyhow::Result;
use args::{OptionArgs, OutputArgs};
use clap::Parser;

use dashpack::{ConfigOptions, Mode, assemble};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  options: OptionArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn resolve_options(args: &OptionArgs) -> ConfigOptions {
  let mut options = ConfigOptions::from_env();
  if let Some(mode) = &args.mode {
    options.mode = Mode::from_env_value(Some(mode));
  }
  if args.debug {
    options.debug = true;
  }
  if args.disable_include {
    options.disable_include = true;
  }
  options
}

fn main() -> Result<()> {
  env_logger::init();

  let args = Commands::parse();
  let options = resolve_options(&args.options);

  let start = Instant::now();
  let assembled = assemble(options);

  let json = if args.output.pretty {
    serde_json::to_string_pretty(&assembled.config)?
  } else {
    serde_json::to_string(&assembled.config)?
  };

  match &args.output.output {
    Some(path) => fs::write(path, json)?,
    None => println!("{json}"),
  }

  let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
  eprintln!(
    "\n{} Assembled config in {}",
    Colour::Green.paint("✔"),
    Colour::White.bold().paint(elapsed)
  );

  Ok(())
}
