use super::info::Info;
use super::memory::Memory;
use crate::Probability;
use crate::Utility;
use std::collections::BTreeMap;

/// the strategy profile: everything the trainer has learned,
/// keyed by info set. BTreeMap keeps iteration order stable so
/// checkpoints and regret summaries are deterministic.
#[derive(Debug, Default, PartialEq)]
pub struct Profile {
    pub(crate) iterations: usize,
    pub(crate) encounters: BTreeMap<Info, Memory>,
}

impl Profile {
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn set_iterations(&mut self, t: usize) {
        self.iterations = t;
    }
    pub fn size(&self) -> usize {
        self.encounters.len()
    }

    /// record the legal set the first time we meet an info set
    pub fn witness(&mut self, info: &Info, choices: &[usize]) {
        if !self.encounters.contains_key(info) {
            let mut memory = Memory::default();
            memory.choices = choices.iter().map(|&a| a as u8).collect();
            self.encounters.insert(info.clone(), memory);
        }
    }

    pub fn regret(&self, info: &Info, action: usize) -> Utility {
        self.encounters
            .get(info)
            .map(|m| m.regret[action])
            .unwrap_or_default()
    }
    pub fn add_regret(&mut self, info: &Info, action: usize, delta: Utility) {
        self.encounters.entry(info.clone()).or_default().regret[action] += delta;
    }
    pub fn add_policy(&mut self, info: &Info, action: usize, delta: Probability) {
        self.encounters.entry(info.clone()).or_default().policy[action] += delta;
    }

    /// the immediate strategy over the legal set by regret
    /// matching: positive regrets normalized, uniform when no
    /// action has positive regret or the key is unseen.
    pub fn policy_vector(&self, info: &Info, choices: &[usize]) -> Vec<Probability> {
        assert!(!choices.is_empty());
        let positive = choices
            .iter()
            .map(|&a| self.regret(info, a).max(0.))
            .collect::<Vec<Utility>>();
        Self::normalized(positive)
    }

    /// the long-run average strategy over the legal set: the
    /// Nash approximation the blueprint plays. uniform at unseen
    /// keys and at keys with no accumulated mass.
    pub fn advice(&self, info: &Info, choices: &[usize]) -> Vec<Probability> {
        assert!(!choices.is_empty());
        let mass = match self.encounters.get(info) {
            Some(memory) => choices.iter().map(|&a| memory.policy[a]).collect(),
            None => vec![0.; choices.len()],
        };
        Self::normalized(mass)
    }

    fn normalized(weights: Vec<f32>) -> Vec<Probability> {
        let total = weights.iter().sum::<f32>();
        let n = weights.len();
        match total > 0. {
            true => weights.into_iter().map(|w| w / total).collect(),
            false => vec![1. / n as Probability; n],
        }
    }

    /// draw an index into the distribution
    pub fn sample(rng: &mut rand::rngs::SmallRng, strategy: &[Probability]) -> usize {
        use rand::distr::weighted::WeightedIndex;
        use rand::distr::Distribution;
        WeightedIndex::new(strategy.iter().map(|p| p.max(f32::MIN_POSITIVE)))
            .expect("proper distribution")
            .sample(rng)
    }

    /// mean positive regret per info set, deflated by the total
    /// Linear CFR weight; the headline convergence diagnostic.
    pub fn average_regret(&self, linear: bool) -> Utility {
        if self.encounters.is_empty() || self.iterations == 0 {
            return 0.;
        }
        let t = self.iterations as Utility;
        let weights = if linear { t * (t + 1.) / 2. } else { t };
        let positive = self
            .encounters
            .values()
            .map(|memory| memory.positive())
            .sum::<Utility>();
        positive / self.size() as Utility / weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mccfr::path::Path;

    fn info(n: u8) -> Info {
        Info::from((n, Path::from(vec![1, 1, 10])))
    }

    #[test]
    fn unseen_keys_fall_back_to_uniform() {
        let profile = Profile::default();
        let strategy = profile.policy_vector(&info(0), &[0, 1, 9]);
        assert!(strategy == vec![1. / 3.; 3]);
        let advice = profile.advice(&info(0), &[0, 1]);
        assert!(advice == vec![0.5, 0.5]);
    }

    #[test]
    fn matching_normalizes_positive_regrets() {
        let mut profile = Profile::default();
        let ref key = info(1);
        profile.add_regret(key, 0, -10.);
        profile.add_regret(key, 1, 30.);
        profile.add_regret(key, 9, 10.);
        let strategy = profile.policy_vector(key, &[0, 1, 9]);
        assert!(strategy[0] == 0.);
        assert!(strategy[1] == 0.75);
        assert!(strategy[2] == 0.25);
    }

    #[test]
    fn matching_is_supported_on_the_legal_set() {
        let mut profile = Profile::default();
        let ref key = info(2);
        profile.add_regret(key, 5, 100.); // illegal here
        let strategy = profile.policy_vector(key, &[0, 1]);
        assert!(strategy.iter().sum::<f32>() == 1.);
        assert!(strategy == vec![0.5, 0.5]);
    }

    #[test]
    fn all_negative_regret_goes_uniform() {
        let mut profile = Profile::default();
        let ref key = info(3);
        profile.add_regret(key, 0, -1.);
        profile.add_regret(key, 1, -2.);
        let strategy = profile.policy_vector(key, &[0, 1]);
        assert!(strategy == vec![0.5, 0.5]);
    }

    #[test]
    fn advice_tracks_accumulated_mass() {
        let mut profile = Profile::default();
        let ref key = info(4);
        profile.add_policy(key, 1, 3.);
        profile.add_policy(key, 9, 1.);
        let advice = profile.advice(key, &[1, 9]);
        assert!(advice == vec![0.75, 0.25]);
    }

    #[test]
    fn witness_records_first_legal_set_only() {
        let mut profile = Profile::default();
        let ref key = info(5);
        profile.witness(key, &[0, 1, 9]);
        profile.witness(key, &[1]);
        assert!(profile.encounters[key].choices == vec![0, 1, 9]);
    }
}
