// tests/engine_tests.rs
//
// Integration tests for the complete factorization pipeline: dispatch,
// strategy execution, and cache write-through working together.

use num::BigInt;
use factorizer::algorithms::FactorizationMethod;
use factorizer::cache::ResultCache;
use factorizer::config::EngineConfig;
use factorizer::engine::{FactorizationEngine, FactorizationRequest};
use factorizer::integer_math::primality::PrimalityTester;

fn engine_with_cache(dir: &tempfile::TempDir) -> FactorizationEngine {
    let mut config = EngineConfig::default();
    config.cache.path = dir
        .path()
        .join("factorization_cache.db")
        .to_string_lossy()
        .into_owned();
    FactorizationEngine::new(config)
}

fn cache_at(dir: &tempfile::TempDir) -> ResultCache {
    ResultCache::open(dir.path().join("factorization_cache.db")).unwrap()
}

fn big(n: u64) -> BigInt {
    BigInt::from(n)
}

#[test]
fn test_every_local_method_satisfies_product_and_primality() {
    let methods = [
        FactorizationMethod::TrialDivision,
        FactorizationMethod::PollardRho,
        FactorizationMethod::QuadraticSieve,
    ];
    let numbers = [4u64, 97, 360, 8051, 1018081, 1000730021];

    for method in methods {
        // Fresh cache per method so every strategy actually runs
        let dir = tempfile::tempdir().unwrap();
        let engine = engine_with_cache(&dir);

        for n in numbers {
            let request = FactorizationRequest::with_method(big(n), method);
            let result = engine.factorize(&request);
            assert!(result.success, "{} via {} should succeed", n, method);

            let product: BigInt = result.factors.iter().product();
            assert_eq!(product, big(n), "{} via {}: product mismatch", n, method);
            assert!(
                result.factors.iter().all(PrimalityTester::is_prime),
                "{} via {}: non-prime factor",
                n,
                method
            );

            let mut sorted = result.factors.clone();
            sorted.sort();
            assert_eq!(result.factors, sorted, "{} via {}: factors not ascending", n, method);
        }
    }
}

#[test]
fn test_default_method_is_trial_division() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_with_cache(&dir);

    let result = engine.factorize(&FactorizationRequest::new(big(360)));
    assert!(result.success);
    assert_eq!(result.source, "trial-division");
    let expected: Vec<BigInt> = [2u64, 2, 2, 3, 3, 5].iter().map(|&f| big(f)).collect();
    assert_eq!(result.factors, expected);
}

#[test]
fn test_pollard_rho_on_semiprime() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_with_cache(&dir);

    let request = FactorizationRequest::with_method(big(8051), FactorizationMethod::PollardRho);
    let result = engine.factorize(&request);
    assert!(result.success);
    assert_eq!(result.factors, vec![big(83), big(97)]);
    assert_eq!(result.source, "pollard-rho");
}

#[test]
fn test_quadratic_sieve_even_delegation() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_with_cache(&dir);

    let request = FactorizationRequest::with_method(big(100), FactorizationMethod::QuadraticSieve);
    let result = engine.factorize(&request);
    assert!(result.success);
    assert_eq!(result.factors, vec![big(2), big(2), big(5), big(5)]);
    assert!(result.source.contains("fallback"), "source {:?} must mark the fallback", result.source);
}

#[test]
fn test_caching_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_with_cache(&dir);
    let request = FactorizationRequest::new(big(360));

    let first = engine.factorize(&request);
    let second = engine.factorize(&request);

    assert!(!first.cached);
    assert!(second.cached);
    assert_eq!(first.factors, second.factors);
    assert_eq!(second.source, "trial-division");
}

#[test]
fn test_cache_survives_engine_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let engine = engine_with_cache(&dir);
        let result = engine.factorize(&FactorizationRequest::new(big(143)));
        assert!(result.success);
    }

    let engine = engine_with_cache(&dir);
    let result = engine.factorize(&FactorizationRequest::new(big(143)));
    assert!(result.cached);
    assert_eq!(result.factors, vec![big(11), big(13)]);
}

#[test]
fn test_cache_holds_one_record_per_number() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_with_cache(&dir);

    // Same number through two different strategies: the second write wins
    let n = big(8051);
    engine.factorize(&FactorizationRequest::with_method(n.clone(), FactorizationMethod::TrialDivision));

    let cache = cache_at(&dir);
    cache.store(&n, &[big(83), big(97)], "pollard-rho").unwrap();

    assert_eq!(cache.record_count().unwrap(), 1);
    assert_eq!(cache.lookup(&n).unwrap().unwrap().method, "pollard-rho");
}

#[test]
fn test_boundary_inputs_rejected_without_cache_write() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_with_cache(&dir);

    for n in [0i64, 1, -5] {
        let result = engine.factorize(&FactorizationRequest::new(BigInt::from(n)));
        assert!(!result.success);
        assert!(result.factors.is_empty());
        assert!(result.error.as_ref().unwrap().contains("invalid input"));
    }

    assert_eq!(cache_at(&dir).record_count().unwrap(), 0);
}

#[test]
fn test_unknown_method_token_is_reported() {
    let err = FactorizationRequest::parse("360", Some("elliptic-curve")).unwrap_err();
    assert!(err.to_string().contains("unsupported factorization method"));
}

#[test]
fn test_execution_time_is_populated() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_with_cache(&dir);

    let result = engine.factorize(&FactorizationRequest::new(big(1000730021)));
    assert!(result.success);
    assert!(result.execution_time.as_nanos() > 0);
}
