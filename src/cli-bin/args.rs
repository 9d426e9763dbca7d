pub mod prelude {
    pub use super::Args;
}

const DEFAULT_AFTER_HELP: &str = "Refer to the crate's documentation for further help";

#[derive(clap::Parser, Debug)]
#[command(about, long_about = None, after_help = DEFAULT_AFTER_HELP)]
pub struct Args {
    /// Task-set data file
    #[arg(short = 't', long = "tasks", value_name = "FILE", default_value = "tasks.txt")]
    pub tasks_file: String,

    /// Task-set file format
    #[arg(value_enum, long = "format", value_name = "FORMAT", default_value = "auto")]
    pub format: edf_vd_sim::prelude::TaskFileFormat,

    /// Execution-times trace file
    #[arg(short = 'e', long = "exec-times", value_name = "FILE", default_value = "exec_times.txt")]
    pub exec_times_file: String,

    /// Schedule timeline output file
    #[arg(short = 'o', long = "schedule-out", value_name = "FILE", default_value = "schedule_output.txt")]
    pub schedule_out: String,

    /// Aggregate statistics output file
    #[arg(short = 'a', long = "analysis-out", value_name = "FILE", default_value = "schedule_analysis.txt")]
    pub analysis_out: String,

    /// Suppress progress messages (diagnostics still honor RUST_LOG)
    #[arg(short = 'q', long = "quiet", default_value = "false", action = clap::ArgAction::SetTrue)]
    pub quiet: bool,
}
