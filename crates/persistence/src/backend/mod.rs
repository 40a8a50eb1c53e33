// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates connection initialization, migration execution and
//! PRAGMA configuration. All item and reservation queries live in `queries/`
//! and `mutations/` and use Diesel DSL only.

pub mod sqlite;
