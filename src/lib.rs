pub mod analysis;
pub mod cards;
pub mod clustering;
pub mod gameplay;
pub mod kuhn;
pub mod mccfr;
pub mod save;

/// dimensional analysis types
pub type Chips = i16;
pub type Utility = f32;
pub type Probability = f32;

/// game tree parameters.
/// chips are denominated in small blinds so that every bet,
/// blind, and stack is an exact integer.
pub const N: usize = 3;
pub const STACK: Chips = 40;
pub const B_BLIND: Chips = 2;
pub const S_BLIND: Chips = 1;

/// action abstraction parameters
pub const N_ACTIONS: usize = 10;
pub const PREFLOP_RAISE: [Chips; 7] = [4, 5, 6, 8, 10, 16, 24]; // 2 2.5 3 4 5 8 12 bb

/// card abstraction parameters
pub const BUCKETS_PREF: u8 = 15;
pub const BUCKETS_POST: u8 = 50;
pub const N_CANONICAL: usize = 169;
pub const EQUITY_ROLLOUTS: usize = 100;

/// mccfr parameters
pub const PRUNE_THRESHOLD: Utility = -300.;
pub const PRUNE_WARM_UP: usize = 100;
pub const PRUNE_SKIP_PROB: Probability = 0.95;

/// showdown tie resolution. the blueprint is learned under
/// first-seat-takes-all; Split is the house-rules alternative.
pub const TIES: gameplay::showdown::Ties = gameplay::showdown::Ties::First;

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}

/// initialize terminal logging for the binaries
pub fn init() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
