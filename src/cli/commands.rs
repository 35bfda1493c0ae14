use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::{Catalog, Category};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{LabelStyle, Settings};
use crate::domain::{ForestNode, Index};
use crate::render::TreeRender;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };
    if let Commands::Completion { shell } = command {
        eprintln!("Generating completion file for {shell:?}...");
        output::info(&completion_script(*shell));
        return Ok(());
    }

    let settings = Settings::load()?;
    let label = cli.label.unwrap_or(settings.label);
    let path = resolve_input(cli.file.as_deref(), &settings)?;
    debug!(path = %path.display(), %label, "loading records");

    let catalog = Catalog::load(&path)?;
    if catalog.forest().roots().is_empty() {
        output::warning(&format!("no root records in {}", path.display()));
    }
    if let Commands::Tree = command {
        output::header(&path.display());
    }
    output::info(&render_command(command, &catalog, label)?);
    Ok(())
}

/// Record file from `--file`, falling back to the configured input.
pub fn resolve_input(file: Option<&Path>, settings: &Settings) -> CliResult<PathBuf> {
    file.map(Path::to_path_buf)
        .or_else(|| settings.input.clone())
        .ok_or_else(|| {
            CliError::Usage(
                "no record file given: pass --file or set `input` in rsforest.toml".to_string(),
            )
        })
}

pub fn completion_script(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, name, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Produce the text output of `command` against `catalog`.
#[instrument(level = "debug", skip(catalog))]
pub fn render_command(command: &Commands, catalog: &Catalog, label: LabelStyle) -> CliResult<String> {
    let forest = catalog.forest();

    let text = match command {
        Commands::Tree => {
            let trees: Vec<Tree<String>> = forest.to_tree_strings(&|c: &Category| c.label(label));
            if trees.is_empty() {
                "Empty forest".to_string()
            } else {
                trees.iter().map(|t| t.to_string()).join("").trim_end().to_string()
            }
        }
        Commands::Flatten => forest.flatten().iter().map(|c| c.label(label)).join("\n"),
        Commands::Dfs { id } => {
            let start = catalog.resolve(*id)?;
            join_labels(forest.depth_first(start), label)
        }
        Commands::Bfs { id, with_start } => {
            let start = catalog.resolve(*id)?;
            join_labels(forest.breadth_first(start, *with_start), label)
        }
        Commands::Path { id } => {
            let node = catalog.resolve(*id)?;
            forest
                .path_from_root(node)
                .into_iter()
                .map(|idx| catalog.label(idx, label))
                .join(" -> ")
        }
        Commands::Siblings { id, include_self } => {
            let node = catalog.resolve(*id)?;
            join_labels(forest.siblings(node, *include_self), label)
        }
        Commands::Info { id } => {
            let node = catalog.resolve(*id)?;
            let mut lines = vec![
                format!("node: {}", catalog.label(node, label)),
                format!("type: {}", forest.node_type(node)),
            ];
            if forest.has_ancestor_loop(node) {
                lines.push("ancestor loop: yes".to_string());
            } else {
                lines.push(format!("depth: {}", forest.depth(node)));
                lines.push(format!("root: {}", catalog.label(forest.root_of(node), label)));
                lines.push("ancestor loop: no".to_string());
            }
            lines.push(format!("children: {}", forest.children(node).len()));
            lines.join("\n")
        }
        Commands::Find { id } => match forest.find_in_forest(*id) {
            Some(node) => format!("{}: found at depth {}", catalog.label(node, label), forest.depth(node)),
            None => format!("{id}: not found"),
        },
        Commands::Completion { shell } => completion_script(*shell),
    };
    Ok(text)
}

fn join_labels<'a>(
    nodes: impl Iterator<Item = (Index, &'a ForestNode<Category>)>,
    label: LabelStyle,
) -> String {
    nodes.map(|(_, node)| node.data.label(label)).join("\n")
}
