use std::fs;

use pretty_assertions::assert_eq;
use rlite::{interpreter::evaluator::core::Context, run};
use walkdir::WalkDir;

/// Runs every `tests/scripts/*.r` file and compares its transcript with the
/// sibling `.out` file. A script that fails to parse must have an `.out`
/// file holding the syntax error message instead.
#[test]
fn golden_scripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "r"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        let mut context = Context::new();
        let actual = match run(&mut context, &source) {
            Ok(transcript) => transcript.output,
            Err(e) => vec![e.to_string()],
        };

        assert_eq!(actual,
                   expected.lines().collect::<Vec<_>>(),
                   "transcript mismatch for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
