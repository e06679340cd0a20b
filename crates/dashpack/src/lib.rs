mod assemble;
mod logger;
mod options;
mod warnings;

pub use crate::{
  assemble::{AssembleReturn, assemble},
  logger::{
    BuildLogger, ConsoleLogger, DebugLogger, ErrorSink, LogOptions, QuietLogger, StructuredSink,
  },
  options::{ConfigOptions, DEBUG_VAR, DISABLE_INCLUDE_VAR, MODE_VAR, Mode},
  warnings::{EVAL_WARNING_CODE, on_warn},
};
pub use dashpack_common::*;
