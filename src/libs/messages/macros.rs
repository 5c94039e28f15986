//! Convenient macros for application messaging and logging.
//!
//! This module provides the macro set used for every piece of user-facing
//! output in the application. The macros automatically switch between plain
//! console output (the default) and structured logging through `tracing`
//! (when debug mode is enabled), so command code never has to care which
//! sink is active.
//!
//! ## Core Features
//!
//! - **Dual Output Mode**: Automatic switching between tracing and console output
//! - **Debug Detection**: Runtime detection of debug mode from the environment
//! - **Message Categorization**: Dedicated macros per severity with emoji prefixes
//! - **Cached Detection**: Debug mode is resolved once per process
//! - **Error Integration**: Macros that build `anyhow` errors from messages
//!
//! ## Debug Mode Detection
//!
//! Debug mode is considered enabled when either environment variable is set:
//! - **`LEXTRACK_DEBUG`**: Application-specific debug flag
//! - **`RUST_LOG`**: Standard Rust logging configuration
//!
//! ## Macro Categories
//!
//! ### Display Macros
//! - **`msg_print!`**: General message display without a prefix
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_warning!`**: Warning messages with ⚠️ prefix
//!
//! ### Error Handling Macros
//! - **`msg_error!`**: Error messages with ❌ prefix (stderr in normal mode)
//! - **`msg_error_anyhow!`**: Create an `anyhow::Error` from a message
//! - **`msg_bail_anyhow!`**: Early return with an error built from a message
//!
//! ### Debug Macros
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix, suppressed otherwise
//!
//! ## Usage Examples
//!
//! ```rust
//! use lextrack::{msg_error, msg_info, msg_success};
//! use lextrack::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::ExportingReport);
//! msg_error!(Message::TimeLogEndBeforeStart);
//! ```
//!
//! ```rust
//! use lextrack::msg_bail_anyhow;
//! use lextrack::libs::messages::Message;
//!
//! fn must_exist(found: bool) -> anyhow::Result<()> {
//!     if !found {
//!         msg_bail_anyhow!(Message::CaseNotFound(42));
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::OnceLock;

/// Cached result of debug mode detection.
///
/// Environment variables are read once on first use; every later check is a
/// plain memory read. `OnceLock` keeps the initialization thread-safe.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Debug mode is enabled when either `LEXTRACK_DEBUG` or `RUST_LOG` is set.
/// The presence of either variable signals that the user wants structured
/// logging output, so the message macros route through `tracing` instead of
/// plain `println!`/`eprintln!`.
///
/// # Returns
///
/// Returns `true` if debug mode is enabled. The result is cached for the
/// lifetime of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Application-specific debug flag
        std::env::var("LEXTRACK_DEBUG").is_ok() ||
        // Standard Rust logging configuration
        std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message with automatic debug mode routing.
///
/// The basic display macro: no severity prefix, stdout in normal mode,
/// `tracing::info!` in debug mode. The optional second argument wraps the
/// message in blank lines, which the report views use for section headers.
///
/// ```rust
/// use lextrack::msg_print;
/// use lextrack::libs::messages::Message;
///
/// msg_print!(Message::ReportHeader("January 2024".to_string()), true);
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix and automatic routing.
///
/// Used for positive confirmations: a case was created, a report was
/// written, configuration was saved.
///
/// ```rust
/// use lextrack::msg_success;
/// use lextrack::libs::messages::Message;
///
/// msg_success!(Message::CaseCreated("Smith v. Jones".to_string()));
/// // Output: "✅ Case 'Smith v. Jones' created successfully"
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix and automatic routing.
///
/// In normal mode errors go to stderr, keeping them out of any stdout a
/// script might capture. In debug mode they are logged through
/// `tracing::error!`.
///
/// ```rust
/// use lextrack::msg_error;
/// use lextrack::libs::messages::Message;
///
/// msg_error!(Message::CaseNotFound(7));
/// // Output to stderr: "❌ Case with ID 7 not found"
/// ```
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
///
/// For situations that deserve attention but do not stop the command, such
/// as an empty result set where output was expected.
///
/// ```rust
/// use lextrack::msg_warning;
/// use lextrack::libs::messages::Message;
///
/// msg_warning!(Message::NoTimeLogsFound);
/// // Output: "⚠️ No time logs found"
/// ```
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix and automatic routing.
///
/// Status updates and progress information, such as announcing an export
/// before the file is written.
///
/// ```rust
/// use lextrack::msg_info;
/// use lextrack::libs::messages::Message;
///
/// msg_info!(Message::ExportingReport);
/// // Output: "ℹ️ Exporting time report..."
/// ```
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// Emitted through `tracing::debug!` when debug mode is enabled and
/// completely suppressed otherwise. Accepts anything `Display`, so plain
/// format strings are fine here.
///
/// ```rust
/// use lextrack::msg_debug;
///
/// let path = "/tmp/lextrack.db";
/// msg_debug!(format!("Resolved database path: {}", path));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// Bridges the message system into error propagation, so a not-found
/// condition detected deep in a repository can travel up through `?` and
/// still print with the standard formatting.
///
/// ```rust
/// use lextrack::msg_error_anyhow;
/// use lextrack::libs::messages::Message;
///
/// fn lookup(id: i64) -> anyhow::Result<()> {
///     Err(msg_error_anyhow!(Message::AttorneyNotFoundWithId(id)))
/// }
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
///
/// Equivalent to `return Err(msg_error_anyhow!(message))`, for validation
/// checks at the top of a function.
///
/// ```rust
/// use lextrack::msg_bail_anyhow;
/// use lextrack::libs::messages::Message;
///
/// fn validate(start: i64, end: i64) -> anyhow::Result<()> {
///     if end <= start {
///         msg_bail_anyhow!(Message::TimeLogEndBeforeStart);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
