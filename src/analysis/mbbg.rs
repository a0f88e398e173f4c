use crate::gameplay::turn::Turn;
use crate::mccfr::game::Game;
use crate::mccfr::profile::Profile;
use crate::Utility;
use crate::N;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// play one hand with every seat sampling the blueprint's
/// average strategy (uniform at unseen keys); returns payoffs.
pub fn play<G: Game>(game: &mut G, profile: &Profile, rng: &mut SmallRng) -> [Utility; N] {
    game.deal(rng);
    loop {
        match game.turn() {
            Turn::Terminal => return game.payoffs(),
            Turn::Chance => game.chance(),
            Turn::Choice(seat) => {
                let choices = game.choices();
                assert!(!choices.is_empty(), "live node offers no actions");
                let ref info = game.info(seat);
                let strategy = profile.advice(info, &choices);
                let sampled = Profile::sample(rng, &strategy);
                game.apply(choices[sampled]);
            }
        }
    }
}

/// self-play win rates with block-bootstrap error bars.
#[derive(Debug, serde::Serialize)]
pub struct Report {
    /// mean result per seat in milli-big-blinds per game
    pub mbb: [f32; N],
    /// block bootstrap standard error, same unit
    pub stderr: [f32; N],
    pub hands: usize,
    pub blocks: usize,
}

/// deal `hands` self-play hands in independent blocks (one rng
/// and one engine per block, so blocks parallelize freely and
/// the whole evaluation is reproducible from the seed) and fold
/// the block means into mbb/g with standard errors.
pub fn evaluate<G, F>(make: F, profile: &Profile, hands: usize, block: usize, seed: u64) -> Report
where
    G: Game,
    F: Fn() -> G + Sync,
{
    assert!(block > 0);
    let blocks = (hands / block).max(1);
    let means = (0..blocks)
        .into_par_iter()
        .map(|b| {
            let ref mut rng = SmallRng::seed_from_u64(seed.wrapping_add(b as u64));
            let ref mut game = make();
            let mut total = [0.; N];
            for _ in 0..block {
                let payoffs = play(game, profile, rng);
                for seat in 0..N {
                    total[seat] += payoffs[seat];
                }
            }
            total.map(|t| t / block as Utility)
        })
        .collect::<Vec<[Utility; N]>>();
    let mut mbb = [0.; N];
    let mut stderr = [0.; N];
    for seat in 0..N {
        let mean = means.iter().map(|m| m[seat]).sum::<f32>() / blocks as f32;
        let var = means
            .iter()
            .map(|m| (m[seat] - mean).powi(2))
            .sum::<f32>()
            / blocks as f32;
        mbb[seat] = mean * 1000.;
        stderr[seat] = (var / blocks as f32).sqrt() * 1000.;
    }
    Report {
        mbb,
        stderr,
        hands: blocks * block,
        blocks,
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "self-play over {} hands ({} blocks)",
            self.hands, self.blocks
        )?;
        writeln!(f, "{:<6}{:>10}{:>10}  {:<20}", "seat", "mbb/g", "se", "95% ci")?;
        for seat in 0..N {
            let lo = self.mbb[seat] - 1.96 * self.stderr[seat];
            let hi = self.mbb[seat] + 1.96 * self.stderr[seat];
            writeln!(
                f,
                "{:<6}{:>10.1}{:>10.1}  [{:.1}, {:.1}]",
                seat, self.mbb[seat], self.stderr[seat], lo, hi
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kuhn::game::Kuhn;

    #[test]
    fn self_play_is_zero_sum_on_average() {
        let profile = Profile::default();
        let report = evaluate(Kuhn::new, &profile, 2000, 100, 5);
        let net = report.mbb.iter().sum::<f32>();
        assert!(net.abs() < 1e-3, "net {} should vanish", net);
        assert!(report.blocks == 20);
    }

    #[test]
    fn evaluation_is_reproducible_from_the_seed() {
        let profile = Profile::default();
        let a = evaluate(Kuhn::new, &profile, 500, 50, 9);
        let b = evaluate(Kuhn::new, &profile, 500, 50, 9);
        assert!(a.mbb == b.mbb);
        assert!(a.stderr == b.stderr);
    }
}
