//! Minimal CLI: read one loot-table JSON file, compile, print (or write).
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::ast::Mode;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// compile a loot-table JSON file into Fabric (Yarn 1.21) LootPool builder code
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// path to the loot-table JSON file
    input: PathBuf,

    /// target loot-table identifier, e.g. 'gameplay/sniffer_digging'
    #[arg(long, short)]
    table: String,

    /// how compiled pools combine with the pre-existing table
    #[arg(long, value_enum, default_value_t = ModeArg::Merge)]
    mode: ModeArg,

    /// output .java fragment file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ModeArg {
    /// append every pool from the file to the target table
    Merge,
    /// swap the file's first pool in for the target table's first pool
    /// (for single-pool tables like fishing or archaeology)
    Replace,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Merge => Mode::Merge,
            ModeArg::Replace => Mode::Replace,
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let source = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;

        let lines = crate::compile_document(&source, &self.table, self.mode.into())
            .with_context(|| format!("failed to compile {}", self.input.display()))?;
        let java_src = lines.join("\n");

        if let Some(out) = self.out.as_ref() {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, &java_src)
                .with_context(|| format!("failed to write {}", out.display()))?;
        } else {
            println!("{java_src}");
        }
        Ok(())
    }
}
