// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod apply;
mod command;
mod error;
mod intake;
mod split;
mod state;
mod view;

#[cfg(test)]
mod tests;

pub use aggregate::{
    CategoryCount, ExportSummary, InventoryStats, ItemFilter, category_counts, donor_items,
    export_summary, filter_items, inventory_stats, is_visible_to, quantity_annotations,
    visible_items,
};
pub use apply::apply;
pub use command::{Command, DisposalTarget, ItemEdit};
pub use error::CoreError;
pub use intake::prepare_intake;
pub use split::plan_split;
pub use state::{SplitPlan, Transition};
pub use view::ItemView;
