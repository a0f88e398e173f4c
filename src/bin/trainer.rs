use clap::Parser;
use shortstack::clustering::lookup::Lookup;
use shortstack::gameplay::game::Game;
use shortstack::kuhn::game::Kuhn;
use shortstack::mccfr::profile::Profile;
use shortstack::mccfr::trainer::Trainer;
use std::path::PathBuf;
use std::sync::Arc;

/// train a 3-max 20bb NLHE blueprint with external-sampling MCCFR
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// MCCFR iterations to run (on top of any loaded checkpoint)
    #[arg(long, default_value_t = 100_000)]
    iterations: usize,
    /// iterations between progress log lines (0 = quiet)
    #[arg(long, default_value_t = 1_000)]
    log_interval: usize,
    /// iterations between checkpoint saves (0 = only at the end)
    #[arg(long, default_value_t = 0)]
    checkpoint_interval: usize,
    /// where to save the blueprint
    #[arg(long, default_value = "blueprint.ckpt")]
    checkpoint: PathBuf,
    /// resume from an existing checkpoint
    #[arg(long)]
    load: Option<PathBuf>,
    /// rng seed; a fixed seed reproduces the run bit for bit
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// directory holding the bucket tables
    #[arg(long, default_value = "data")]
    buckets: PathBuf,
    /// train the 3-player Kuhn oracle instead of NLHE
    #[arg(long, default_value_t = false)]
    kuhn: bool,
}

fn main() -> anyhow::Result<()> {
    shortstack::init();
    let args = Args::parse();
    let profile = match args.load {
        Some(ref path) => Profile::load(path)?,
        None => Profile::default(),
    };
    let profile = if args.kuhn {
        let mut trainer = Trainer::new(Kuhn::new(), profile, args.seed);
        trainer.train(
            args.iterations,
            args.log_interval,
            args.checkpoint_interval,
            Some(args.checkpoint.as_path()),
        )?;
        trainer.into_profile()
    } else {
        let lookup = Arc::new(Lookup::load(&args.buckets));
        let mut trainer = Trainer::new(Game::new(lookup), profile, args.seed);
        trainer.train(
            args.iterations,
            args.log_interval,
            args.checkpoint_interval,
            Some(args.checkpoint.as_path()),
        )?;
        trainer.into_profile()
    };
    profile.save(&args.checkpoint)
}
