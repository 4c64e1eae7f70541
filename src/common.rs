// sysexits.h codes used by the driver.
pub const EXIT_USAGE: i32 = 64;
pub const EXIT_DATA_ERROR: i32 = 65;
pub const EXIT_IO_ERROR: i32 = 74;

pub const REPL_PROMPT: &str = "> ";
pub const LOG_FILTER_DEFAULT: &str = "warn";
