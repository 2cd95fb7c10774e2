use std::fs;

use tempfile::TempDir;
use wdsym::{CompareJob, DumpJob, Error, SymbolsJob};

const DUMP: &str = "\
fffff803`1e6f0a60 nt!KiServiceTable = <no type information>
fffff803`1ea1c3c8 nt!KeNumberProcessors
short line
fffff803`1ea0c4a8 nt!MmPteBase   = <no type information>
";

const TRANSCRIPT: &str = "\
lkd> dd nt!KiServiceTable l1
fffff803`1e6f0a60  fcf1b604
lkd> dd nt!KeNumberProcessors l1
fffff803`1ea1c3c8  00000008
Matched: fffff803`1ea0c4a8 nt!MmPteBase (no parameter info)
lkd> dd nt!MmPteBase l1
Couldn't resolve error at 'nt!MmPteBase l1'
";

#[test]
fn dump_job_writes_commands() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dump.txt");
    let output = dir.path().join("commands.txt");
    fs::write(&input, DUMP).unwrap();

    let count = DumpJob::new(&input).with_output(&output).run().unwrap();

    assert_eq!(count, 3);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        concat!(
            "dd nt!KiServiceTable l1\n",
            "dd nt!KeNumberProcessors l1\n",
            "dd nt!MmPteBase l1\n",
        )
    );
}

#[test]
fn symbols_job_writes_resolved_symbols() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("transcript.txt");
    let output = dir.path().join("symbols.txt");
    fs::write(&input, TRANSCRIPT).unwrap();

    let count = SymbolsJob::new(&input).with_output(&output).run().unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "KiServiceTable fcf1b604\nKeNumberProcessors 00000008\n"
    );
}

#[test]
fn output_is_truncated() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("transcript.txt");
    let output = dir.path().join("symbols.txt");
    fs::write(&input, "").unwrap();
    fs::write(&output, "stale content\n").unwrap();

    let count = SymbolsJob::new(&input).with_output(&output).run().unwrap();

    assert_eq!(count, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn compare_job_labels_records_with_paths() {
    let dir = TempDir::new().unwrap();
    let input_a = dir.path().join("a.txt");
    let input_b = dir.path().join("b.txt");
    let output = dir.path().join("result.txt");
    fs::write(&input_a, "A 1\nB 2\n").unwrap();
    fs::write(&input_b, "A 1\nB 3\nC 4\n").unwrap();

    let report = CompareJob::new(&input_a, &input_b)
        .with_output(&output)
        .run()
        .unwrap();

    assert_eq!(report.mismatches(), 1);
    assert_eq!(report.missing_in_a(), 1);
    assert_eq!(report.missing_in_b(), 0);

    let label_a = input_a.display();
    let label_b = input_b.display();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!(
            "Symbol: B | {label_a} Value: 2 | {label_b} Value: 3\n\
             Symbol: C is missing in {label_a}\n"
        )
    );
}

#[test]
fn missing_input_leaves_output_untouched() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does-not-exist.txt");
    let output = dir.path().join("symbols.txt");
    fs::write(&output, "previous run\n").unwrap();

    let err = SymbolsJob::new(&input).with_output(&output).run().unwrap_err();

    assert!(matches!(err, Error::InputOpen { ref path, .. } if *path == input));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run\n");
}

#[test]
fn missing_second_input_creates_no_output() {
    let dir = TempDir::new().unwrap();
    let input_a = dir.path().join("a.txt");
    let input_b = dir.path().join("b.txt");
    let output = dir.path().join("result.txt");
    fs::write(&input_a, "A 1\n").unwrap();

    let err = CompareJob::new(&input_a, &input_b)
        .with_output(&output)
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::InputOpen { ref path, .. } if *path == input_b));
    assert!(!output.exists());
}

#[test]
fn unwritable_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dump.txt");
    let output = dir.path().join("missing-directory").join("commands.txt");
    fs::write(&input, DUMP).unwrap();

    let err = DumpJob::new(&input).with_output(&output).run().unwrap_err();

    assert!(matches!(err, Error::OutputOpen { .. }));
    assert!(err.to_string().starts_with("Error opening output file: "));
}

#[test]
fn invalid_utf8_is_replaced() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("transcript.txt");
    let output = dir.path().join("symbols.txt");
    fs::write(
        &input,
        b"\xff\xfe\nlkd> dd nt!KiServiceTable l1\nfffff803`1e6f0a60  fcf1b604\n",
    )
    .unwrap();

    SymbolsJob::new(&input).with_output(&output).run().unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "KiServiceTable fcf1b604\n"
    );
}
