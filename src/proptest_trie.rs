use super::*;
use proptest::prelude::*;
use std::collections::HashMap;

fn words(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-e]{0,6}".prop_map(String::from), min..max)
}

fn model(words: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in words {
        *counts.entry(word.clone()).or_insert(0) += 1;
    }
    counts
}

fn build(words: &[String]) -> Trie {
    let mut trie = Trie::new();
    trie.add_all(words.iter().map(String::as_str)).unwrap();
    trie
}

proptest! {
    #[test]
    fn lookup_matches_insert_count(inserted in words(0, 60), probes in words(0, 30)) {
        let trie = build(&inserted);
        let counts = model(&inserted);

        for word in inserted.iter().chain(probes.iter()) {
            prop_assert_eq!(trie.lookup(word).unwrap(), counts.get(word).copied().unwrap_or(0));
        }
        prop_assert_eq!(trie.total_words(), inserted.len());
        prop_assert_eq!(trie.distinct_words(), counts.len());
    }

    #[test]
    fn strict_prefixes_count_zero(inserted in words(1, 40)) {
        let trie = build(&inserted);
        let counts = model(&inserted);

        for word in &inserted {
            for end in 0..word.len() {
                let prefix = &word[..end];
                if !counts.contains_key(prefix) {
                    prop_assert_eq!(trie.lookup(prefix).unwrap(), 0);
                }
            }
        }
    }

    #[test]
    fn insertion_order_does_not_matter(
        (original, shuffled) in words(0, 50).prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = build(&original);
        let b = build(&shuffled);

        prop_assert_eq!(a.words(), b.words());
        prop_assert_eq!(a.node_count(), b.node_count());
    }

    #[test]
    fn destroy_releases_every_node(inserted in words(0, 40)) {
        let trie = build(&inserted);
        let below_root = trie.node_count() - 1;
        prop_assert_eq!(trie.destroy(), below_root);
    }

    #[test]
    fn rejected_words_leave_trie_unchanged(inserted in words(0, 20), bad in "[a-c]{0,3}[A-Z0-9 ][a-c]{0,3}") {
        let mut trie = build(&inserted);
        let before = trie.words();
        let nodes = trie.node_count();

        prop_assert!(trie.insert(&bad).is_err());
        prop_assert!(trie.lookup(&bad).is_err());
        prop_assert_eq!(trie.words(), before);
        prop_assert_eq!(trie.node_count(), nodes);
    }
}
