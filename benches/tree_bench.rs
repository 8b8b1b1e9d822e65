use alice_suffix::{SuffixTree, SuffixTreeBuilder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_text(size: usize) -> Vec<u8> {
    let words = [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "alice", "bob",
        "server", "request", "response", "error", "data", "cache", "index", "search", "query",
        "result",
    ];
    let mut text = Vec::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.extend_from_slice(words[i % words.len()].as_bytes());
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");

    for size in [1_000, 10_000, 100_000] {
        let text = generate_text(size);
        group.bench_with_input(BenchmarkId::new("bytes", size), &text, |b, text| {
            b.iter(|| SuffixTree::build(black_box(text)))
        });
    }

    // Worst case for suffix-link chains
    let repeated = vec![b'a'; 100_000];
    group.bench_with_input(
        BenchmarkId::new("repeated", repeated.len()),
        &repeated,
        |b, text| b.iter(|| SuffixTree::build(black_box(text))),
    );
    group.finish();
}

fn bench_online_push(c: &mut Criterion) {
    let text = generate_text(10_000);

    c.bench_function("push_10k", |b| {
        b.iter(|| {
            let mut builder = SuffixTreeBuilder::with_capacity(text.len());
            for &byte in &text {
                let _ = builder.push(black_box(byte));
            }
            builder.finish()
        })
    });
}

fn bench_count(c: &mut Criterion) {
    let text = generate_text(100_000);
    let Ok(tree) = SuffixTree::build(&text) else {
        return;
    };

    let mut group = c.benchmark_group("count");

    for pattern in ["fox", "thequick", "serverrequestresponse"] {
        group.bench_with_input(
            BenchmarkId::new("pattern", pattern),
            pattern.as_bytes(),
            |b, pat| b.iter(|| tree.count(black_box(pat))),
        );
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let text = generate_text(100_000);
    let Ok(tree) = SuffixTree::build(&text) else {
        return;
    };

    c.bench_function("contains_hit", |b| {
        b.iter(|| tree.contains(black_box(b"fox")))
    });

    c.bench_function("contains_miss", |b| {
        b.iter(|| tree.contains(black_box(b"zzzzz")))
    });
}

fn bench_locate(c: &mut Criterion) {
    let text = generate_text(100_000);
    let Ok(tree) = SuffixTree::build(&text) else {
        return;
    };

    c.bench_function("locate_all_fox", |b| {
        b.iter(|| {
            let positions = tree.locate_all(black_box(b"fox"));
            black_box(positions.len())
        })
    });

    c.bench_function("locate_iter_first_10", |b| {
        b.iter(|| {
            let count = tree.locate(black_box(b"the")).take(10).count();
            black_box(count)
        })
    });
}

criterion_group!(
    benches,
    bench_build_tree,
    bench_online_push,
    bench_count,
    bench_contains,
    bench_locate,
);
criterion_main!(benches);
