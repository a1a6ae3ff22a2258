/// Log an error at error level together with its whole chain of sources.
#[macro_export]
macro_rules! tracing_report {
    ($error:expr) => {
        tracing::error!(err = %snafu::Report::from_error(&$error));
    };
    ($error:expr, $($message:tt)+) => {
        tracing::error!(err = %snafu::Report::from_error(&$error), $($message)+);
    };
}
