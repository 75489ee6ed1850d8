//! Standard exit codes (BSD sysexits.h compatible)

/// Data format error (bad values, impossible sample ranges)
pub const DATAERR: i32 = 65;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
