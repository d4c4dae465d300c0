//! Integration tests for dumping and reloading cat fixtures.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use cat_data::dump_cli::{ParseOutcome, execute, parse_args, write_output};
use cat_data::{CAT_COUNT, Dataset, RecordError, generate_with_rng};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::rstest;
use test_support::{read_file, unique_temp_path};

fn run_dump(args: &[&str]) -> (Dataset, Vec<u8>) {
    let owned = args.iter().map(|arg| (*arg).to_owned());
    let ParseOutcome::Options(options) = parse_args(owned).expect("parse args") else {
        panic!("expected options");
    };
    let mut stdout = Vec::new();
    let dataset = execute(&options, &mut stdout).expect("execute dump");
    (dataset, stdout)
}

#[rstest]
#[case::compact(false)]
#[case::pretty(true)]
fn dumped_fixture_reloads_as_valid_dataset(#[case] pretty: bool) {
    let path = unique_temp_path("dump", "db.json").expect("temp path");
    let mut args = vec!["--output", path.as_str()];
    if pretty {
        args.push("--pretty");
    }

    let (dataset, stdout) = run_dump(&args);

    assert!(stdout.is_empty());
    let contents = read_file(&path).expect("read fixture");
    let reloaded: Dataset = serde_json::from_str(&contents).expect("fixture parses");
    assert_eq!(reloaded, dataset);
    assert_eq!(reloaded.validate(), Ok(()));
}

#[test]
fn seeded_file_dump_matches_seeded_generation() {
    let path = unique_temp_path("seeded", "db.json").expect("temp path");

    run_dump(&["--output", path.as_str(), "--seed", "2026"]);

    let contents = read_file(&path).expect("read fixture");
    let reloaded: Dataset = serde_json::from_str(&contents).expect("fixture parses");
    let expected = generate_with_rng(&mut ChaCha8Rng::seed_from_u64(2026));
    assert_eq!(reloaded, expected);
}

#[test]
fn seeded_dumps_are_byte_identical() {
    let (_, first) = run_dump(&["--seed", "2026"]);
    let (_, second) = run_dump(&["--seed", "2026"]);

    assert_eq!(first, second);
}

#[test]
fn dump_overwrites_existing_fixture() {
    let path = unique_temp_path("overwrite", "db.json").expect("temp path");
    write_output(&path, "stale").expect("seed stale fixture");

    let (dataset, _) = run_dump(&["--output", path.as_str(), "--seed", "5"]);

    let contents = read_file(&path).expect("read fixture");
    let reloaded: Dataset = serde_json::from_str(&contents).expect("fixture parses");
    assert_eq!(reloaded, dataset);
}

#[test]
fn legacy_fixture_with_uuid_keys_is_accepted() {
    let cats = (0..CAT_COUNT)
        .map(|index| {
            format!(
                r#"{{"uuid":"00000000-0000-4000-8000-{index:012}","name":"Leo","breed":"Birman","age":3}}"#
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    let json = format!(r#"{{"cats":[{cats}]}}"#);

    let dataset: Dataset = serde_json::from_str(&json).expect("legacy fixture parses");

    assert_eq!(dataset.validate(), Ok(()));
}

#[test]
fn fixture_with_repeated_id_fails_validation() {
    let cat = r#"{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","name":"Leo","breed":"Birman","age":3}"#;
    let cats = vec![cat; CAT_COUNT].join(",");
    let json = format!(r#"{{"cats":[{cats}]}}"#);

    let dataset: Dataset = serde_json::from_str(&json).expect("fixture parses");

    assert!(
        matches!(dataset.validate(), Err(RecordError::DuplicateId { index: 1, .. })),
        "repeated ids must be rejected"
    );
}

#[test]
fn truncated_fixture_fails_validation() {
    let (mut dataset, _) = run_dump(&["--seed", "3"]);
    dataset.cats.truncate(10);

    assert_eq!(
        dataset.validate(),
        Err(RecordError::WrongRecordCount {
            expected: CAT_COUNT,
            actual: 10
        })
    );
}
