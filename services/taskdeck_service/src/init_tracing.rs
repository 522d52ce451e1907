use taskdeck_tracing_subscriber::{
    OutputFormat, TraceLevel, TracingConfigBuilder,
};

use crate::args::ServeArgs;

pub fn init_tracing(args: &ServeArgs) -> eyre::Result<()> {
    let mut builder = TracingConfigBuilder::default();
    builder
        .stdout_trace_level(args.trace_level)
        .stdout_format(OutputFormat::Compact)
        .file_trace_level(TraceLevel::Off);

    if let Some(file) = &args.trace_file {
        builder.file_path(file).file_trace_level(TraceLevel::Debug);
    }

    taskdeck_tracing_subscriber::init(&builder.build()?)
}
