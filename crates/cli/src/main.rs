use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shapes::{compute_area, AnyShape, Registry, Triangle};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "shapes-cli")]
#[command(about = "Compute areas of registered shapes")]
struct Cmd {
    /// Log debug events (registry and factory) to stderr
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a shape by kind name and print its area
    Area {
        /// Canonical kind name, e.g. `circle` or `triangle`
        kind: String,
        /// Positional constructor arguments
        #[arg(allow_negative_numbers = true)]
        args: Vec<f64>,
    },
    /// Print whether the triangle with sides A, B, C has a right angle
    Right { a: f64, b: f64, c: f64 },
    /// List registered kinds with their arity
    Kinds,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let out = run(cmd.action)?;
    println!("{out}");
    Ok(())
}

fn run(action: Action) -> Result<String> {
    match action {
        Action::Area { kind, args } => area(&kind, &args),
        Action::Right { a, b, c } => right(a, b, c),
        Action::Kinds => Ok(kinds(Registry::global())),
    }
}

fn area(kind: &str, args: &[f64]) -> Result<String> {
    tracing::info!(kind, args = ?args, "area");
    let shape = AnyShape::create(kind, args)
        .with_context(|| format!("creating {kind} from {args:?}"))?;
    Ok(compute_area(&shape).to_string())
}

fn right(a: f64, b: f64, c: f64) -> Result<String> {
    tracing::info!(a, b, c, "right");
    let t = Triangle::new(a, b, c).context("checking right angle")?;
    Ok(t.is_right().to_string())
}

fn kinds(reg: &Registry) -> String {
    reg.kinds()
        .into_iter()
        .filter_map(|k| reg.arity(k).map(|n| format!("{k}\t{n}")))
        .collect::<Vec<_>>()
        .join("\n")
}
