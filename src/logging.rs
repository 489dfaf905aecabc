//! Logging.
use crate::paths::WANDERLUST_LOGS_DIR;

use std::io::{Error as IOError, Write};
use std::path::PathBuf;
use std::thread;

use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, FileSpec, FlexiLoggerError, LogSpecification as LogSpec,
    Logger, LoggerHandle, Naming, Record,
};
use typed_builder::TypedBuilder;

/// Configure logging.
///
/// Records always go to a file because the terminal belongs to the user interface.
pub fn configure_logging(options: &LogOptions) -> ConfigureLoggingResult {
    let LogOptions {
        log_file_path,
        log_spec,
    } = options;

    let mut logger = Logger::with(log_spec.clone()).format(log_format);

    if let Some(log_file_path) = log_file_path {
        logger = logger.log_to_file(FileSpec::try_from(log_file_path)?);
    } else if let Some(logs_dir) = &*WANDERLUST_LOGS_DIR {
        logger = logger
            .log_to_file(FileSpec::default().directory(logs_dir))
            .o_append(true)
            .rotate(
                Criterion::Age(Age::Day),
                Naming::Timestamps,
                Cleanup::KeepLogFiles(7),
            );
    } else {
        return Err(FlexiLoggerError::OutputBadDirectory);
    }

    logger.start()
}

pub type ConfigureLoggingResult = Result<LoggerHandle, FlexiLoggerError>;

/// Options for logging.
#[derive(TypedBuilder)]
pub struct LogOptions {
    /// A specification for logging.
    log_spec: LogSpec,
    /// The path of the log file, or `None` for daily files in the logs directory.
    #[builder(default)]
    log_file_path: Option<PathBuf>,
}

/// Format log records.
pub fn log_format(
    writer: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), IOError> {
    write!(
        writer,
        "{} {} [{}] [{}] {}",
        now.now().format("%d-%m-%Y %H:%M.%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        thread::current().name().unwrap_or("<unnamed>"),
        &record.args()
    )
}
