/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a `Result` during startup, or logs the error with some context
/// and terminates the process with exit status 1.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                std::process::exit(1);
            }
        }
    };
    ($expr:expr) => {
        $crate::unwrap_or_exit!($expr, "Fatal error")
    };
}
