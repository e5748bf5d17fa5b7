//! Diagnostic logging setup.

use std::io::IsTerminal;

use tracing::Level;

/// Install a stderr subscriber for warnings and errors.
///
/// Lower levels stay silent so nothing is written to stderr while the
/// animation owns the terminal.
pub fn init() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = subscriber.try_init();
}
