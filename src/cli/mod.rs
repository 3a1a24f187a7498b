use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;

use crate::error::{Result, StrataError};
use crate::graph::builder::build_graph;
use crate::graph::{ops, viz};
use crate::manifest;
use crate::util::output;

#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(about = "Monorepo dependency order and graph renderer", long_about = None)]
pub struct Cli {
    pub entrypoint: String,
    // Manifest paths; read from stdin when empty.
    pub manifests: Vec<PathBuf>,
    #[arg(long)]
    pub order: bool,
    #[arg(long)]
    pub dot: bool,
    #[arg(long)]
    pub json: bool,
}

pub fn run() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let paths = if cli.manifests.is_empty() {
        read_paths_from_stdin()?
    } else {
        cli.manifests
    };

    let manifests = manifest::load_manifests(&paths);
    let graph = build_graph(&manifests);
    if !graph.contains(&cli.entrypoint) {
        return Err(StrataError::EntrypointNotFound(cli.entrypoint));
    }

    let scope = ops::dependent_subgraph(&graph, &cli.entrypoint)?;

    // Neither flag means both outputs. The rendering goes first so that a
    // sort failure cannot suppress it; the run still fails afterwards.
    let (want_order, want_dot) = match (cli.order, cli.dot) {
        (false, false) => (true, true),
        selected => selected,
    };

    if want_dot {
        print!("{}", viz::render_dot(&scope));
    }
    if want_order {
        let order = ops::topological_order(&scope)?;
        if cli.json {
            println!(
                "{}",
                serde_json::to_string(&order).map_err(anyhow::Error::new)?
            );
        } else {
            for name in order {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}
