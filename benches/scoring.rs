use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yahtzee_scoring::{score, score_all, Category, DiceRng, Hand, ScoringConfig};

fn gen_hands(n: usize) -> Vec<Hand> {
    let mut rng = DiceRng::new(0x1234_5678);
    (0..n)
        .map(|_| {
            let mut hand = Hand::new();
            hand.roll_all(&mut rng);
            hand
        })
        .collect()
}

fn bench_single_category(c: &mut Criterion) {
    let mut g = c.benchmark_group("score_category");
    let hands = gen_hands(4096);
    for category in [Category::FullHouse, Category::SmallStraight, Category::ThreeOfAKind] {
        g.bench_with_input(BenchmarkId::new("reused_strategy", category), &hands, |b, hands| {
            let mut strategy = category.strategy();
            b.iter(|| {
                for hand in hands {
                    black_box(score(black_box(hand), &mut strategy).ok());
                }
            })
        });
    }
    g.finish();
}

fn bench_score_all(c: &mut Criterion) {
    let mut g = c.benchmark_group("score_all");
    let config = ScoringConfig::default();
    for &n in &[256usize, 4096usize] {
        let hands = gen_hands(n);
        g.bench_with_input(BenchmarkId::new("hands", n), &hands, |b, hands| {
            b.iter(|| {
                for hand in hands {
                    black_box(score_all(black_box(hand), &config).ok());
                }
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_single_category, bench_score_all);
criterion_main!(benches);
