use clap::Parser;
use shortstack::analysis::mbbg;
use shortstack::clustering::lookup::Lookup;
use shortstack::gameplay::game::Game;
use shortstack::mccfr::profile::Profile;
use std::path::PathBuf;
use std::sync::Arc;

/// self-play evaluation of a saved blueprint (mbb/g with
/// block-bootstrap confidence intervals)
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// blueprint checkpoint to evaluate
    #[arg(long)]
    strategy: PathBuf,
    /// hands to deal
    #[arg(long, default_value_t = 50_000)]
    hands: usize,
    /// hands per bootstrap block
    #[arg(long, default_value_t = 500)]
    block_size: usize,
    /// rng seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// directory holding the bucket tables
    #[arg(long, default_value = "data")]
    buckets: PathBuf,
    /// emit the report as json instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    shortstack::init();
    let args = Args::parse();
    let profile = Profile::load(&args.strategy)?;
    let lookup = Arc::new(Lookup::load(&args.buckets));
    let report = mbbg::evaluate(
        || Game::new(lookup.clone()),
        &profile,
        args.hands,
        args.block_size,
        args.seed,
    );
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&report)?),
        false => print!("{}", report),
    }
    Ok(())
}
