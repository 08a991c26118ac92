use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trie_dict::{Trie, TrieConfig, Wordlist};

fn generate_words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x2545f4914f6cdd1d);
    (0..count).map(|_| {
        let len = rng.gen_range(3..=10);
        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = generate_words(50_000);

    c.bench_function("insert 50k", |b| b.iter(|| {
        let mut trie = Trie::new();
        trie.add_all(words.iter().map(String::as_str)).unwrap();
        black_box(trie.node_count())
    }));

    let wl = Wordlist::from_words(words.iter().map(String::as_str), &TrieConfig::default()).unwrap();

    c.bench_function("lookup 50k", |b| b.iter(|| {
        words.iter().map(|w| wl.lookup(w).unwrap()).sum::<usize>()
    }));

    c.bench_function("destroy 50k", |b| b.iter_with_setup(
        || {
            let mut trie = Trie::new();
            trie.add_all(words.iter().map(String::as_str)).unwrap();
            trie
        },
        |trie| black_box(trie.destroy()),
    ));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
