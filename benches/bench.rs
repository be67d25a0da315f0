// Criterion benchmarks for Loan Approval

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use loan_approval::core::{DecisionTree, ModelArtifact, Node, Predictor, RandomForest, ScalerArtifact, StandardScaler};
use loan_approval::services::load_predictor;

const N_FEATURES: usize = 15;

fn create_features(seed: usize) -> Vec<f64> {
    (0..N_FEATURES)
        .map(|i| ((seed * 31 + i * 17) % 100) as f64 / 10.0 - 5.0)
        .collect()
}

/// Complete binary tree of the given depth, splitting on features round-robin
fn create_tree(depth: usize, offset: usize) -> DecisionTree {
    let internal = (1 << depth) - 1;
    let total = (1 << (depth + 1)) - 1;

    let nodes = (0..total)
        .map(|i| {
            if i < internal {
                Node::Split {
                    feature: (i + offset) % N_FEATURES,
                    threshold: 0.0,
                    left: 2 * i + 1,
                    right: 2 * i + 2,
                }
            } else {
                let weight = ((i + offset) % 7) as f64;
                Node::Leaf { value: vec![weight + 1.0, 7.0 - weight] }
            }
        })
        .collect();

    DecisionTree { nodes }
}

fn create_predictor(n_trees: usize, depth: usize) -> Predictor {
    let forest = RandomForest {
        n_features: N_FEATURES,
        trees: (0..n_trees).map(|t| create_tree(depth, t)).collect(),
    };
    let scaler = ScalerArtifact::Standard(StandardScaler {
        mean: vec![0.5; N_FEATURES],
        scale: vec![2.0; N_FEATURES],
    });

    Predictor::new(ModelArtifact::RandomForest(forest), Some(scaler))
        .expect("benchmark artifacts are consistent")
}

fn bench_sample_model(c: &mut Criterion) {
    let dir = env!("CARGO_MANIFEST_DIR");
    let predictor = load_predictor(
        format!("{}/models/random_forest_model.json", dir),
        Some(format!("{}/models/scaler.json", dir)),
    )
    .expect("sample artifacts load");
    let features = create_features(1);

    c.bench_function("sample_model_predict", |b| {
        b.iter(|| predictor.predict(black_box(&features)))
    });
}

fn bench_forest_size(c: &mut Criterion) {
    let features = create_features(7);
    let mut group = c.benchmark_group("forest_predict");

    for n_trees in [10, 100, 500].iter() {
        let predictor = create_predictor(*n_trees, 8);

        group.bench_with_input(BenchmarkId::new("trees", n_trees), n_trees, |b, _| {
            b.iter(|| predictor.predict(black_box(&features)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample_model, bench_forest_size);

criterion_main!(benches);
