//! loot2java: compile a declarative loot-table JSON document into Fabric 1.21
//! (Yarn mappings) `LootPool` builder code, ready to splice into a
//! `LootTableEvents.MODIFY` callback.
//!
//! Pipeline: decode (`serde_json::Value` → typed model) → compile (typed
//! model → ordered Java lines). Both passes are pure and single-threaded;
//! all I/O lives in the CLI.

pub mod ast;
pub mod cli;
pub mod compile;
pub mod decode;
pub mod error;
pub mod java;

use ast::Mode;
use error::Result;

/// Whole pipeline: JSON source text → guarded Java line list.
pub fn compile_document(source: &str, target: &str, mode: Mode) -> Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    let table = decode::table(&value)?;
    compile::table(&table, target, mode)
}
