//! Plugin helper stub, kept for host plugin-layout parity.

use tracing::info;

/// Emit a diagnostic greeting on the log channel.
pub fn show_message() {
    info!("Teams notification helper ready");
}
