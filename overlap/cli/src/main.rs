//! CLI front end for `overlap-graph`: reads or generates a set family, computes its
//! overlap graph's connected components via two independent linear-time
//! constructions, and reports them after checking the two constructions agree.

mod generator;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use colored::Colorize;
use structopt::StructOpt;

use overlap_graph::{build_dahlhaus, build_subgraph, compute_max, Graph};
use setfamily::Family;

/// Either a path to a family file, or (together with `seed`) a ground-set size to
/// generate a random family for.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "overlap-graph",
    about = "Reports the connected components of a set family's overlap graph."
)]
struct Opt {
    /// Path to a family file, or a ground-set size if SEED is also given
    file_or_grnd_size: String,

    /// Seed for the random family generator; only meaningful alongside a ground-set
    /// size in the first argument. A seed of 0 draws from the system clock.
    seed: Option<u64>,

    /// Branching factor for the random generator's recursive partitioning
    #[structopt(long, default_value = "30")]
    degree: usize,

    /// Density of extra union-sets layered over each generated partition
    #[structopt(long, default_value = "0.05")]
    density: f64,

    /// Print the full adjacency list of each constructed graph
    #[structopt(long = "print-graph")]
    print_graph: bool,

    /// Suppress the per-vertex connected-component label array (printed by default)
    #[structopt(long = "no-print-cc")]
    no_print_cc: bool,

    /// Re-run both constructions and report per-stage timings
    #[structopt(long)]
    check: bool,

    /// Increase log verbosity
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let opt = Opt::from_args();

    let log_level = if opt.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    if simple_logger::SimpleLogger::new().with_level(log_level).init().is_err() {
        eprintln!("warning: logger already initialised");
    }

    match run(opt) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            println!("{}", "++ Something bad happens... ++".red().bold());
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the full pipeline. Returns `Ok(false)` (rather than an error) when the two
/// overlap-graph constructions disagree on connected components, matching the
/// reference driver's "bad things happened" exit path.
fn run(opt: Opt) -> anyhow::Result<bool> {
    let print_cc = !opt.no_print_cc;

    let mut family = match opt.seed {
        Some(seed) => {
            println!("{}", "++ Generate the family ++".green());
            let grnd_size: usize = opt
                .file_or_grnd_size
                .parse()
                .context("ground-set size must be a non-negative integer")?;
            generator::family_gen(grnd_size, opt.degree, opt.density, seed)
        }
        None => {
            println!("{}", "++ Read the family ++".green());
            let path = PathBuf::from(&opt.file_or_grnd_size);
            input::read_family(&path).with_context(|| format!("reading {}", path.display()))?
        }
    };

    let sum_of_sizes: usize = family.iter().map(|(_, set)| set.members().len()).sum();
    println!(
        "++ Ground set: {}\n++ Number of sets in the family: {}\n++ \\sum_i |X_i| = {}",
        family.grnd_size(),
        family.len(),
        sum_of_sizes
    );

    let t0 = Instant::now();
    compute_max(&mut family);
    let dahlhaus = build_dahlhaus(&family);
    if opt.check {
        log::info!("dahlhaus pass: {:?}", t0.elapsed());
    }
    let (cc1, nc1) = dahlhaus.connected_components();
    println!("{}", "++ Dahlhaus graph ++".green());
    if opt.print_graph {
        print_graph(&dahlhaus);
    }
    if print_cc {
        println!("{cc1:?}");
    }
    println!("++ {nc1} connected components ++");

    let t1 = Instant::now();
    family.clear();
    compute_max(&mut family);
    let subgraph = build_subgraph(&family);
    if opt.check {
        log::info!("subgraph pass: {:?}", t1.elapsed());
    }
    let (cc2, nc2) = subgraph.connected_components();
    println!("{}", "++ A subgraph of the overlap graph ++".green());
    if opt.print_graph {
        print_graph(&subgraph);
    }
    if print_cc {
        println!("{cc2:?}");
    }
    println!("++ {nc2} connected components ++");

    println!("++ {nc1} connected components ++");
    if cc1 != cc2 {
        return Ok(false);
    }

    println!("{}", "++ OK ++".green().bold());
    Ok(true)
}

fn print_graph(graph: &Graph) {
    for v in 0..graph.vertex_count() {
        let v = setfamily::SetId::from_usize(v);
        println!("{}: {:?}", v.index(), graph.neighbours(v));
    }
}
