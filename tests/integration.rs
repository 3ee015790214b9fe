//! Integration tests for typogenerator

use assert_cmd::Command;
use predicates::prelude::*;
use std::sync::Arc;
use typogenerator::{
    domain::PublicSuffixSplitter,
    mapping::{self, Mapping},
    strategy::{Omission, Repetition, Strategy, TableSubstitution, Transposition, VowelSwap},
    FuzzConfig, Fuzzer, StrategyKind, StrategyRef, TypoError,
};

struct Broken;

impl Strategy for Broken {
    fn name(&self) -> &str {
        "Broken"
    }

    fn generate(&self, _label: &str, _suffix: &str) -> typogenerator::Result<Vec<String>> {
        Err(TypoError::strategy("Broken", "cannot generate"))
    }
}

fn entry<S: Strategy + 'static>(strategy: S) -> Option<StrategyRef> {
    Some(Arc::new(strategy))
}

fn typogenerator() -> Command {
    let mut cmd = Command::cargo_bin("typogenerator").unwrap();
    cmd.env_remove("TYPOGEN_LOCALE")
        .env_remove("TYPOGEN_STRATEGIES")
        .env_remove("TYPOGEN_DOUBLE_HIT_LIMIT")
        .env_remove("TYPOGEN_CONCURRENT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_vowelswap_reference_count() {
    let out = VowelSwap.generate("zenithar", "").unwrap();
    assert_eq!(out.len(), 15);
    for candidate in &out {
        assert_ne!(candidate, "zenithar", "Vowel swap should not swap a letter with itself");
    }
}

#[test]
fn test_similar_french_reference_count() {
    let out = TableSubstitution::similar(&mapping::french())
        .generate("zenithar", "")
        .unwrap();
    assert_eq!(out.len(), 17);
}

#[test]
fn test_generic_substitution_single_position() {
    let table = Mapping::new("custom", vec![("k", vec!["c", "q"])]).unwrap();
    let strategy = TableSubstitution::new("Replace", Arc::new(table));
    let out = strategy.generate("kotlin", "org").unwrap();
    assert_eq!(out, vec!["cotlin.org", "qotlin.org"]);
}

#[test]
fn test_fail_fast_discards_partial_results() {
    let strategies = vec![entry(Omission), entry(Broken), entry(Repetition)];
    let fuzzer = Fuzzer::new(strategies);

    let err = fuzzer.fuzz("zenithar").unwrap_err();
    assert!(matches!(err, TypoError::Strategy { ref strategy, .. } if strategy == "Broken"));
}

#[test]
fn test_none_entries_are_skipped() {
    let with_gaps = Fuzzer::new(vec![None, entry(Omission), None, entry(Transposition), None]);
    let without = Fuzzer::new(vec![entry(Omission), entry(Transposition)]);

    assert_eq!(
        with_gaps.fuzz("example").unwrap(),
        without.fuzz("example").unwrap()
    );
}

#[test]
fn test_fuzz_domain_reattaches_suffix() {
    let config = FuzzConfig {
        strategies: vec![StrategyKind::Omission],
        ..FuzzConfig::default()
    };
    let fuzzer = Fuzzer::from_config(config).unwrap();
    let results = fuzzer
        .fuzz_domain("shop.example.co.uk", &PublicSuffixSplitter::new())
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].original_label, "shop.example");
    assert_eq!(results[0].len(), "shop.example".len());
    assert!(results[0].permutations.iter().all(|p| p.ends_with(".co.uk")));
    assert!(results[0].permutations.contains(&"hop.example.co.uk".to_string()));
}

#[test]
fn test_fuzz_domain_parse_error_short_circuits() {
    let fuzzer = Fuzzer::from_config(FuzzConfig::default()).unwrap();
    let err = fuzzer
        .fuzz_domain("..example", &PublicSuffixSplitter::new())
        .unwrap_err();
    assert!(matches!(err, TypoError::DomainParse { .. }));
}

#[tokio::test]
async fn test_concurrent_run_matches_sequential() {
    let sequential = Fuzzer::from_config(FuzzConfig::default()).unwrap();
    let concurrent = Fuzzer::from_config(FuzzConfig {
        concurrent: true,
        ..FuzzConfig::default()
    })
    .unwrap();

    let expected = sequential.run("zenithar", "com").await.unwrap();
    let actual = concurrent.run("zenithar", "com").await.unwrap();
    assert_eq!(expected, actual);

    let names: Vec<&str> = actual.iter().map(|r| r.strategy_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["DoubleHit", "VowelSwap", "Similar", "Omission", "Transposition", "Repetition", "Replace"]
    );
}

#[test]
fn test_error_handling() {
    let error = TypoError::validation("test error");
    assert!(error.to_string().contains("test error"));

    let error = TypoError::config("config error");
    assert!(error.to_string().contains("config error"));
}

#[test]
fn test_library_initialization() {
    assert!(typogenerator::init().is_ok());
}

#[test]
fn test_cli_plain_output() {
    typogenerator()
        .args(["-s", "zenithar", "--strategy", "omission"])
        .assert()
        .success()
        .stdout("enithar\nznithar\nzeithar\nzenthar\nzenihar\nzenitar\nzenithr\nzenitha\n");
}

#[test]
fn test_cli_domain_csv() {
    typogenerator()
        .args(["-s", "bücher.de", "--domain", "--format", "csv", "--strategy", "repetition"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\"strategy\",\"domain\",\"permutation\",\"idna\"\n",
        ))
        .stdout(predicate::str::contains(
            "\"Repetition\",\"bücher\",\"bbücher.de\",\"xn--bbcher-4ya.de\"",
        ));
}

#[test]
fn test_cli_json_output() {
    let output = typogenerator()
        .args(["-s", "zenithar", "-f", "json", "-l", "french", "--strategy", "similar", "--strategy", "vowelswap"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["input"], "zenithar");
    assert_eq!(report["results"][0]["name"], "Similar");
    assert_eq!(report["results"][0]["permutations"].as_array().unwrap().len(), 17);
    assert_eq!(report["results"][1]["permutations"].as_array().unwrap().len(), 15);
}

#[test]
fn test_cli_empty_input_is_not_an_error() {
    typogenerator()
        .args(["-s", "", "-f", "json", "--strategy", "omission", "--strategy", "vowelswap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"permutations\": []"));
}

#[test]
fn test_cli_strategies_from_env() {
    typogenerator()
        .env("TYPOGEN_STRATEGIES", "transposition")
        .args(["-s", "ab"])
        .assert()
        .success()
        .stdout("ba\n");
}

#[test]
fn test_cli_unknown_locale() {
    typogenerator()
        .args(["-s", "zenithar", "--locale", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown locale"));
}

#[test]
fn test_cli_unknown_strategy() {
    typogenerator()
        .args(["--strategy", "bitsquatting"])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_locales() {
    typogenerator()
        .arg("--list-locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("english").and(predicate::str::contains("french")));
}
