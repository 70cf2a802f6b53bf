//! Default values and fixed formats used by the binder
//!
//! This module contains the separator default, the date/time layout used
//! when binding and the CLI defaults.

use chrono_tz::Tz;

// =============================================================================
// Options Defaults
// =============================================================================

/// Separator applied when options are supplied without one
pub const DEFAULT_SEPARATOR: char = ',';

/// Timezone applied when options do not name one
pub const DEFAULT_TIMEZONE: Tz = Tz::UTC;

// =============================================================================
// Binding Formats
// =============================================================================

/// Layout accepted for date/time fields (24-hour clock, no fractions)
pub const DATETIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed-width shape of [`DATETIME_LAYOUT`]; letters stand for digits
pub const DATETIME_LAYOUT_DISPLAY: &str = "YYYY-MM-DD HH:MM:SS";

// =============================================================================
// CLI Defaults
// =============================================================================

/// Log level when neither --verbose nor --quiet is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Separator used to split the --header flag into column names
pub const HEADER_FLAG_SEPARATOR: char = ',';
