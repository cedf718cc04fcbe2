// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trace logger trait for diagnostic output of capability implementations.

use crate::traits::plugin::Plugin;
use crate::types::TraceLevel;

/// Diagnostic sink handed to factories and the objects they build.
///
/// Shared as `Arc<dyn TraceLogger>`; implementations must tolerate
/// concurrent calls.
pub trait TraceLogger: Plugin {
    /// Writes one message at the given level.
    fn log(&self, level: TraceLevel, message: &str);
}
