// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.

pub mod change_log;
pub mod settings;

pub use change_log::{count_changes, recent_changes};
pub use settings::{load_overrides, load_setting};
