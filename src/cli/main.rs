#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use arborescence::{Arborescence, DefaultArborescence, Exhaustive, Graph, SingleStart, Vertex};
use clap::{ArgAction, Parser, ValueEnum};
use csv::Writer;
use petgraph::dot::Dot;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

mod loader;

#[derive(Parser)]
#[command(name = "arborescence-cli")]
#[command(about = "Minimum spanning arborescence of a directed graph", long_about = None)]
struct Cli {
    /// Graph file: the vertex count, then one `origin,destination,weight` edge per line
    input: PathBuf,

    /// Root vertex, numbered from 1 like the graph file
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    root: u64,

    /// Load the graph as undirected
    #[arg(long)]
    undirected: bool,

    /// Look for a cycle from every vertex instead of only the first one
    #[arg(long)]
    exhaustive: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Matrix)]
    format: Format,

    /// Write the arborescence here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One-based incidence matrix and total weight
    Matrix,
    /// `origin,destination,weight` records
    Csv,
    /// Graphviz
    Dot,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let graph = loader::read_graph_file(&cli.input, !cli.undirected)?;
    let root = Vertex::try_from(cli.root - 1)?;
    if root >= graph.size() {
        log::warn!("root {} is not a vertex of the graph", cli.root);
    }

    let tree = if cli.exhaustive {
        run(&DefaultArborescence::new(Exhaustive), &graph, root)
    } else {
        run(&DefaultArborescence::new(SingleStart), &graph, root)
    };

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    write_tree(&tree, cli.format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run<A>(algo: &A, graph: &Graph<i64>, root: Vertex) -> Graph<i64>
where
    A: Arborescence<Error = arborescence::Error>,
{
    let tree = algo.execute(graph, root);
    if let Err(e) = algo.check(&tree, root) {
        log::warn!("result is not an arborescence: {e}");
    }
    tree
}

fn write_tree(
    tree: &Graph<i64>,
    format: Format,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    match format {
        Format::Matrix => {
            write!(out, "{tree}")?;
            writeln!(out, "Total weight: {}", tree.total_weight())?;
        }
        Format::Csv => {
            let mut wtr = Writer::from_writer(out);
            for edge in tree.edges() {
                wtr.serialize(edge)?;
            }
            wtr.flush()?;
        }
        Format::Dot => {
            let g = tree.to_petgraph().map(|_, v| v + 1, |_, w| *w);
            writeln!(out, "{}", Dot::new(&g))?;
        }
    }
    Ok(())
}
