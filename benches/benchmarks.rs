use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use shortstack::cards::card::Card;
use shortstack::cards::hand::Hand;
use shortstack::cards::strength::Strength;
use shortstack::clustering::lookup::Lookup;
use shortstack::gameplay::game::Game;
use shortstack::gameplay::turn::Turn;
use std::sync::Arc;

fn seven_cards(rng: &mut SmallRng) -> Hand {
    let mut cards = std::collections::BTreeSet::new();
    while cards.len() < 7 {
        cards.insert(rng.random_range(0..52u8));
    }
    Hand::from(cards.into_iter().map(Card::from).collect::<Vec<Card>>())
}

fn bench_evaluator(c: &mut Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("evaluate seven cards", |b| {
        b.iter(|| black_box(Strength::from(seven_cards(rng))))
    });
}

fn bench_playout(c: &mut Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(1);
    let mut game = Game::new(Arc::new(Lookup::fallback()));
    c.bench_function("random playout with full unwind", |b| {
        b.iter(|| {
            game.deal(rng);
            loop {
                match game.turn() {
                    Turn::Terminal => break,
                    Turn::Chance => game.chance(),
                    Turn::Choice(_) => {
                        let legal = game.legal();
                        game.act(legal[rng.random_range(0..legal.len())]);
                    }
                }
            }
            while game.depth() > 0 {
                game.undo();
            }
        })
    });
}

criterion_group!(benches, bench_evaluator, bench_playout);
criterion_main!(benches);
