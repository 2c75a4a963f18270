// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! ## Module Organization
//!
//! - `overrides`: Key-scoped writes to the override blob
//! - `change_log`: Appending and clearing change-log entries
//!
//! `commit_schedule_edit` ties both together in one immediate transaction.

pub mod change_log;
pub mod overrides;

pub use change_log::{append_change, clear_changes};
pub use overrides::{commit_schedule_edit, store_setting};
