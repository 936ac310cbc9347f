use std::collections::HashSet;

use proptest::prelude::*;

use crate::generator::constants::{MAX_RANGE_LEN, MAX_TERMS};
use crate::generator::{ConfigError, GenerationResult, Generator, GeneratorConfig, ResultSource};
use crate::rng::Mulberry32;
use crate::strategy::{StrategyKind, Term};
use crate::tables::{ZERO_ATOM, tables};
use crate::template::{evaluate, split_top_level};

fn assert_summands_match(result: &GenerationResult) {
    let summands = split_top_level(&result.text, &["+", "-"]);
    assert_eq!(summands.len(), result.terms, "'{}'", result.text);
    assert!(summands.len() <= MAX_TERMS, "'{}'", result.text);
    let distinct: HashSet<&str> = summands.iter().copied().collect();
    assert_eq!(distinct.len(), summands.len(), "'{}'", result.text);
}

fn generator() -> Generator {
    Generator::default()
}

#[test]
fn test_eight_is_four_plus_four() {
    for seed in 0..20 {
        let result = generator().generate(8, seed);
        assert_eq!(result.text, "4 + 4");
        assert_eq!(result.value, 8);
        assert_eq!(result.terms, 1);
        assert_eq!(result.source, ResultSource::Direct);
    }

    // the template keeps counting as one term once it has company
    let result = generator().generate(28, 7);
    assert!(result.text.contains(r"\left(4 + 4\right)") || !result.text.contains("4 + 4"));
}

#[test]
fn test_sixteen_is_a_single_template() {
    let result = generator().generate(16, 3);
    assert_eq!(result.value, 16);
    assert_eq!(result.terms, 1);
    assert!(tables().templates_for(16).contains(&result.text.as_str()));
}

#[test]
fn test_direct_atoms() {
    let result = generator().generate(24, 1);
    assert_eq!(result.text, "4!");
    assert_eq!(result.terms, 1);

    let result = generator().generate(100, 1);
    assert_eq!(result.text, r"\dfrac{4}{0.04}");
    assert_eq!(result.terms, 1);
}

#[test]
fn test_zero() {
    let result = generator().generate(0, 99);
    assert_eq!(result.text, ZERO_ATOM);
    assert_eq!(result.value, 0);
    assert_eq!(result.terms, 1);
    assert_eq!(result.source, ResultSource::Zero);
}

#[test]
fn test_negative_wraps_positive() {
    let g = generator();
    for n in [1, 8, 27, 12_345] {
        let positive = g.generate(n, 5);
        let negative = g.generate(-n, 5);
        assert_eq!(negative.text, format!(r"-\left({}\right)", positive.text));
        assert_eq!(negative.value, -n);
        assert_eq!(negative.terms, positive.terms);
    }
}

#[test]
fn test_min_value_falls_back_to_literal() {
    let result = generator().generate(i64::MIN, 1);
    assert!(result.is_fallback());
    assert_eq!(result.text, i64::MIN.to_string());
    assert_eq!(result.value, i64::MIN);
}

#[test]
fn test_strategy_result_evaluates_to_target() {
    let result = generator().generate(12_345, 42);
    assert!(matches!(result.source, ResultSource::Strategy(_)));
    assert_eq!(evaluate(&result.text, tables().combined()), Ok(12_345));
    assert!(result.terms <= MAX_TERMS);
}

#[test]
fn test_same_seed_same_output() {
    let g = generator();
    for n in [7, 99, 1_023, 54_321, -600] {
        assert_eq!(g.generate(n, 2024), g.generate(n, 2024));
    }
}

#[test]
fn test_value_independent_of_seed() {
    let g = generator();
    for seed in [0, 1, u64::MAX, 1_700_000_000_000] {
        assert_eq!(g.generate(4_097, seed).value, 4_097);
    }
}

#[test]
fn test_search_terms_are_valid() {
    let g = generator();
    for n in [3, 57, 513, 8_191, 77_777] {
        let mut rng = Mulberry32::new(11);
        let found = g.search(n, &mut rng);
        assert!(found.is_some(), "no decomposition for {}", n);
        if let Some((_, terms)) = found {
            assert_eq!(terms.iter().map(|t| t.value).sum::<i64>(), n);
            assert!(terms.len() <= MAX_TERMS);
            let rendered: HashSet<String> = terms.iter().map(Term::render).collect();
            assert_eq!(rendered.len(), terms.len());
        }
    }
}

#[test]
fn test_tiny_budget_uses_literal() {
    let config = GeneratorConfig {
        max_terms: 1,
        max_attempts: 1,
        permissive_threshold: i64::MAX,
    };
    let g = Generator::new(config);
    assert!(g.is_ok());
    if let Ok(g) = g {
        let result = g.generate(999_983, 1);
        assert!(result.is_fallback());
        assert_eq!(result.text, "999983");
        assert_eq!(result.source, ResultSource::Literal);
    }
}

#[test]
fn test_single_term_budget_finds_derived_values() {
    let config = GeneratorConfig {
        max_terms: 1,
        ..GeneratorConfig::default()
    };
    if let Ok(g) = Generator::new(config) {
        let result = g.generate(4_400, 1);
        assert_eq!(result.terms, 1);
        assert_eq!(result.source, ResultSource::Strategy(StrategyKind::Binary));
        assert_eq!(evaluate(&result.text, tables().combined()), Ok(4_400));
    }
}

#[test]
fn test_invalid_configs() {
    let zero_terms = GeneratorConfig {
        max_terms: 0,
        ..GeneratorConfig::default()
    };
    assert_eq!(Generator::new(zero_terms).err(), Some(ConfigError::ZeroTerms));

    let too_many = GeneratorConfig {
        max_terms: 5,
        ..GeneratorConfig::default()
    };
    assert_eq!(
        Generator::new(too_many).err(),
        Some(ConfigError::TooManyTerms {
            requested: 5,
            max: 4
        })
    );

    let zero_attempts = GeneratorConfig {
        max_attempts: 0,
        ..GeneratorConfig::default()
    };
    assert_eq!(
        Generator::new(zero_attempts).err(),
        Some(ConfigError::ZeroAttempts)
    );
}

#[test]
fn test_range_matches_single_calls() {
    let g = generator();
    let results = g.generate_range(-5..=20, 8);
    assert!(results.is_ok());
    if let Ok(results) = results {
        assert_eq!(results.len(), 26);
        for (n, result) in (-5..=20).zip(&results) {
            assert_eq!(result, &g.generate(n, 8));
        }
    }
}

#[test]
fn test_range_errors() {
    let g = generator();
    assert_eq!(
        g.generate_range(10..=1, 0).err(),
        Some(ConfigError::EmptyRange { start: 10, end: 1 })
    );
    assert_eq!(
        g.generate_range(0..=200_000, 0).err(),
        Some(ConfigError::RangeTooLarge {
            len: 200_001,
            max: MAX_RANGE_LEN
        })
    );
    assert!(matches!(
        g.generate_range(i64::MIN..=i64::MAX, 0),
        Err(ConfigError::RangeTooLarge { .. })
    ));
}

#[test]
fn test_multi_term_text_shows_one_summand_per_term() {
    let g = generator();
    for n in [12, 27, 28, 40, 44, 56, 8_200] {
        let result = g.generate(n, 7);
        if result.terms > 1 {
            assert_summands_match(&result);
        }
    }
    for n in 1..=2_000 {
        let result = g.generate(n, 7);
        if result.terms > 1 {
            assert_summands_match(&result);
        }
    }
}

#[test]
fn test_overshoot_targets_are_solved() {
    // a largest-first descent alone leaves these unsolved
    let g = generator();
    for n in [79_979, 97_863, 97_867] {
        let result = g.generate(n, 1);
        assert!(!result.is_fallback(), "{} fell back to a literal", n);
        assert_eq!(evaluate(&result.text, tables().combined()), Ok(n));
        assert_summands_match(&result);
    }
}

#[test]
fn test_small_targets_never_fall_back() {
    let g = generator();
    for n in 1..=300 {
        let result = g.generate(n, 7);
        assert!(!result.is_fallback(), "{} fell back to a literal", n);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_generation_is_faithful(n in -100_000i64..100_000, seed in any::<u64>()) {
        let result = generator().generate(n, seed);
        prop_assert_eq!(result.value, n);
        if !result.is_fallback() {
            prop_assert!(result.terms <= MAX_TERMS);
            prop_assert_eq!(evaluate(&result.text, tables().combined()), Ok(n));
        }
    }

    #[test]
    fn prop_generation_is_deterministic(n in -100_000i64..100_000, seed in any::<u64>()) {
        let g = generator();
        prop_assert_eq!(g.generate(n, seed), g.generate(n, seed));
    }

    #[test]
    fn prop_generated_text_keeps_term_invariants(n in 1i64..100_000, seed in any::<u64>()) {
        let result = generator().generate(n, seed);
        if !result.is_fallback() && result.terms > 1 {
            let summands = split_top_level(&result.text, &["+", "-"]);
            prop_assert_eq!(summands.len(), result.terms);
            prop_assert!(summands.len() <= MAX_TERMS);
            let distinct: HashSet<&str> = summands.iter().copied().collect();
            prop_assert_eq!(distinct.len(), summands.len());
        }
    }

    #[test]
    fn prop_search_terms_are_unique(n in 1i64..100_000, seed in any::<u64>()) {
        let mut rng = Mulberry32::new(seed);
        if let Some((_, terms)) = generator().search(n, &mut rng) {
            let rendered: HashSet<String> = terms.iter().map(Term::render).collect();
            prop_assert_eq!(rendered.len(), terms.len());
            prop_assert_eq!(terms.iter().map(|t| t.value).sum::<i64>(), n);
        }
    }
}
