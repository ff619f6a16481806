use lego::corpus::{tokenize, Corpus};
use lego::stats::{chi_square, vectorized_zipf};
use proptest::prelude::*;

proptest! {
    // Count parity: the frequency table accounts for every token,
    // including empty-string tokens from all-punctuation pieces.
    #[test]
    fn counts_sum_to_token_count(text in ".{0,400}") {
        let corpus = Corpus::new(text.as_str(), "");
        let sum: u32 = corpus.frequency_table().iter().map(|(_, n)| n).sum();
        prop_assert_eq!(sum as usize, corpus.total_words());
        prop_assert_eq!(corpus.total_words(), tokenize(&text).len());
    }

    #[test]
    fn table_order_is_non_increasing(text in "[a-f ]{0,200}") {
        let corpus = Corpus::new(text.as_str(), "");
        let ranks = corpus.rank_words();
        prop_assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
    }

    // Ties must keep first-occurrence order. Equal counts are contiguous
    // in the descending table, so a pairwise check covers every group.
    #[test]
    fn equal_counts_keep_first_occurrence_order(text in "[a-e ]{0,200}") {
        let corpus = Corpus::new(text.as_str(), "");
        let tokens = tokenize(&text);
        let entries = corpus.frequency_table().entries();

        for pair in entries.windows(2) {
            if pair[0].1 == pair[1].1 {
                let first = tokens.iter().position(|t| *t == pair[0].0).unwrap();
                let second = tokens.iter().position(|t| *t == pair[1].0).unwrap();
                prop_assert!(first < second);
            }
        }
    }

    #[test]
    fn legomena_is_exactly_the_count_n_set(text in "[a-d ]{0,120}", n in 1u32..5) {
        let corpus = Corpus::new(text.as_str(), "");
        let legomena = corpus.legomena(n);

        for word in &legomena {
            prop_assert_eq!(corpus.frequency_table().count(word), Some(n));
        }
        let expected = corpus
            .frequency_table()
            .iter()
            .filter(|(_, count)| *count == n)
            .count();
        prop_assert_eq!(legomena.len(), expected);
    }

    #[test]
    fn zipf_decays_monotonically(n in 1usize..400, s in 0.2f64..3.0) {
        let ranks: Vec<usize> = (1..=50).collect();
        let pred = vectorized_zipf(n, &ranks, s);
        prop_assert!(pred.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn chi_square_rejects_unequal_lengths(a in 0usize..20, b in 0usize..20) {
        prop_assume!(a != b);
        let observed = vec![1.0; a];
        let expected = vec![1.0; b];
        prop_assert!(chi_square(&observed, &expected).is_err());
    }
}
