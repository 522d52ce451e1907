use std::path::PathBuf;

use derive_builder::Builder;

use crate::TraceLevel;

#[derive(Debug, Clone, Eq, PartialEq, Default, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct TracingConfig {
    pub stdout_trace_level: TraceLevel,
    pub stdout_format: OutputFormat,
    pub file_trace_level: TraceLevel,
    pub file_path: Option<PathBuf>,
    /// Mirrors errors to stderr regardless of the stdout level.
    pub stderr_trace_enabled: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}
