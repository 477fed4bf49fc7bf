//! Application constants.

/// Number of lines or items to move when pressing Page Up/Down.
pub const PAGE_SIZE: usize = 10;

/// Channel buffer size for background task results.
pub const TASK_CHANNEL_SIZE: usize = 16;

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 50;

/// Terminal height assumed until the first size query or resize.
pub const DEFAULT_TERMINAL_ROWS: u16 = 24;

/// Exit status reported when the user interrupts with Ctrl-C.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Most catalog diagnostics shown above the footer.
pub const MAX_DIAGNOSTIC_LINES: usize = 3;
