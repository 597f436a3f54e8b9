//! Persistent download record store (SQLite via sqlx).
//!
//! Stores one row per download: owning uid, destination kind, and the
//! concrete data path. The reconciler narrows its bulk mutations with
//! disjunctive id-list predicates over this store.

pub mod db;
pub mod types;

mod rows;

pub use db::*;
pub use types::*;
