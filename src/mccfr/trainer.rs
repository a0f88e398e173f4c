use super::game::Game;
use super::info::Info;
use super::profile::Profile;
use crate::gameplay::turn::Turn;
use crate::Utility;
use crate::N;
use crate::PRUNE_SKIP_PROB;
use crate::PRUNE_THRESHOLD;
use crate::PRUNE_WARM_UP;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// external-sampling MCCFR over any Game.
///
/// each iteration deals one fresh hand per traversing seat. the
/// traverser explores every legal action at its own nodes and
/// samples a single action everywhere else, mutating the one
/// shared game state in place: every apply and every chance is
/// matched by an undo on the way back up, so the recursion owns
/// the state for exactly the lifetime of its subtree.
///
/// regrets and strategy mass are weighted by the iteration count
/// (Linear CFR), and clearly dominated actions are skipped with
/// high probability once past the warm-up (regret pruning).
/// skipped actions still take the full regret update at value
/// zero, which is what keeps them pruned.
pub struct Trainer<G: Game> {
    game: G,
    profile: Profile,
    rng: SmallRng,
    linear: bool,
}

impl<G: Game> Trainer<G> {
    pub fn new(game: G, profile: Profile, seed: u64) -> Self {
        Self {
            game,
            profile,
            rng: SmallRng::seed_from_u64(seed),
            linear: true,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
    pub fn into_profile(self) -> Profile {
        self.profile
    }

    /// run n iterations on top of whatever the profile already
    /// holds, logging average positive regret and checkpointing
    /// on the configured cadences.
    pub fn train(
        &mut self,
        n: usize,
        log_interval: usize,
        checkpoint_interval: usize,
        checkpoint: Option<&std::path::Path>,
    ) -> anyhow::Result<()> {
        let start = self.profile.iterations();
        let end = start + n;
        log::info!("training {} iterations ({} -> {})", n, start, end);
        for t in start + 1..=end {
            self.profile.set_iterations(t);
            for traverser in 0..N {
                self.game.deal(&mut self.rng);
                self.traverse(traverser);
            }
            if log_interval > 0 && t % log_interval == 0 {
                log::info!(
                    "iter {:>8} / {} | infos {:>8} | avg regret {:>12.7}",
                    t,
                    end,
                    self.profile.size(),
                    self.profile.average_regret(self.linear)
                );
            }
            if checkpoint_interval > 0 && t % checkpoint_interval == 0 {
                if let Some(path) = checkpoint {
                    self.profile.save(path)?;
                }
            }
        }
        log::info!("training complete with {} infos", self.profile.size());
        Ok(())
    }

    fn traverse(&mut self, traverser: usize) -> Utility {
        match self.game.turn() {
            Turn::Terminal => self.game.payoffs()[traverser],
            Turn::Chance => {
                self.game.chance();
                let value = self.traverse(traverser);
                self.game.undo();
                value
            }
            Turn::Choice(seat) => {
                let choices = self.game.choices();
                if choices.is_empty() {
                    log::warn!("no choices at a live node; treating subtree as worthless");
                    return 0.;
                }
                let ref info = self.game.info(seat);
                self.profile.witness(info, &choices);
                let strategy = self.profile.policy_vector(info, &choices);
                if seat == traverser {
                    self.explore(info, &choices, &strategy, traverser)
                } else {
                    let sampled = Profile::sample(&mut self.rng, &strategy);
                    self.game.apply(choices[sampled]);
                    let value = self.traverse(traverser);
                    self.game.undo();
                    value
                }
            }
        }
    }

    /// the traverser's own node: walk every legal action, then
    /// push the counterfactual updates into the profile.
    fn explore(
        &mut self,
        info: &Info,
        choices: &[usize],
        strategy: &[f32],
        traverser: usize,
    ) -> Utility {
        let mut values = vec![0.; choices.len()];
        for (i, &action) in choices.iter().enumerate() {
            if self.pruned(info, action) {
                continue;
            }
            self.game.apply(action);
            values[i] = self.traverse(traverser);
            self.game.undo();
        }
        let ev = strategy
            .iter()
            .zip(values.iter())
            .map(|(s, v)| s * v)
            .sum::<Utility>();
        let weight = match self.linear {
            true => self.profile.iterations() as Utility,
            false => 1.,
        };
        for (i, &action) in choices.iter().enumerate() {
            self.profile.add_regret(info, action, (values[i] - ev) * weight);
            self.profile.add_policy(info, action, strategy[i] * weight);
        }
        ev
    }

    fn pruned(&mut self, info: &Info, action: usize) -> bool {
        self.profile.iterations() > PRUNE_WARM_UP
            && self.profile.regret(info, action) < PRUNE_THRESHOLD
            && self.rng.random::<f32>() < PRUNE_SKIP_PROB
    }
}
