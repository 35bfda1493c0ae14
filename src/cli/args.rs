//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::LabelStyle;
use crate::domain::NodeId;

/// Build forests from flat parent-id records and traverse, search and query them
#[derive(Parser, Debug)]
#[command(name = "rsforest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Record file (default: `input` from config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Node labels in output (default: `label` from config)
    #[arg(short, long, global = true, value_enum)]
    pub label: Option<LabelStyle>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every tree of the forest
    Tree,

    /// List all linked records depth-first
    Flatten,

    /// Depth-first walk from a node
    Dfs {
        /// Start node id
        #[arg(allow_negative_numbers = true)]
        id: NodeId,
    },

    /// Breadth-first walk from a node
    Bfs {
        /// Start node id
        #[arg(allow_negative_numbers = true)]
        id: NodeId,
        /// Also print the start node
        #[arg(long)]
        with_start: bool,
    },

    /// Path from the root down to a node
    Path {
        /// Node id
        #[arg(allow_negative_numbers = true)]
        id: NodeId,
    },

    /// Siblings of a node
    Siblings {
        /// Node id
        #[arg(allow_negative_numbers = true)]
        id: NodeId,
        /// Include the node itself
        #[arg(long)]
        include_self: bool,
    },

    /// Depth, type, root and loop status of a node
    Info {
        /// Node id
        #[arg(allow_negative_numbers = true)]
        id: NodeId,
    },

    /// Check whether an id is part of the forest
    Find {
        /// Node id
        #[arg(allow_negative_numbers = true)]
        id: NodeId,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
