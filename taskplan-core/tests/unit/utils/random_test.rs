use super::*;
use rand::RngCore;

#[test]
fn can_return_weights() {
    let random = DefaultRandom::new_repeatable(0);
    let weights = &[100., 50., 20.];
    let experiments = 10000_usize;
    let total_sum = weights.iter().sum::<f64>();
    let mut counter = [0_usize; 3];

    (0..experiments).for_each(|_| {
        let idx = random.weighted(weights);
        *counter.get_mut(idx).unwrap() += 1;
    });

    weights.iter().enumerate().for_each(|(idx, weight)| {
        let actual_ratio = counter[idx] as f64 / experiments as f64;
        let expected_ratio = *weight / total_sum;

        assert!((actual_ratio - expected_ratio).abs() < 0.05);
    });
}

#[test]
fn can_reproduce_sequence_with_the_same_seed() {
    let sample = |random: &DefaultRandom| (0..100).map(|_| random.uniform_int(0, 1000)).collect::<Vec<_>>();

    let first = sample(&DefaultRandom::new_repeatable(42));
    let second = sample(&DefaultRandom::new_repeatable(42));
    let third = sample(&DefaultRandom::new_repeatable(43));

    assert_eq!(first, second);
    assert_ne!(first, third);
}

#[test]
fn can_share_state_between_rng_clones() {
    let random = DefaultRandom::new_repeatable(0);
    let mut first = random.get_rng();
    let mut second = random.get_rng();

    let values = (first.next_u64(), second.next_u64());

    let mut fresh = RandomGen::new_repeatable(0);
    assert_eq!(values, (fresh.next_u64(), fresh.next_u64()));
}

#[test]
fn can_return_bounds_for_degenerated_ranges() {
    let random = DefaultRandom::new_repeatable(0);

    assert_eq!(random.uniform_int(7, 7), 7);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}

#[test]
fn can_keep_values_in_range() {
    let random = DefaultRandom::new_repeatable(1);

    (0..1000).for_each(|_| {
        let int = random.uniform_int(-3, 3);
        let real = random.uniform_real(1., 2.);

        assert!((-3..=3).contains(&int));
        assert!((1. ..2.).contains(&real));
    });
}

#[test]
fn can_handle_extreme_probabilities() {
    let random = DefaultRandom::new_repeatable(0);

    assert!((0..100).all(|_| random.is_hit(1.)));
    assert!((0..100).all(|_| !random.is_hit(0.)));
    assert!((0..100).all(|_| !random.is_hit(-1.)));
}
