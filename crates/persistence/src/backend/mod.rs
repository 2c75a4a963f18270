// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-specific helpers.
//!
//! Everything outside this module uses Diesel DSL only. `SQLite` needs raw SQL
//! for PRAGMAs and for reading the last inserted row id.

pub mod sqlite;
