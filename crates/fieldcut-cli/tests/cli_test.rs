mod common;
use common::TestFixture;

use predicates::prelude::*;

const SALES: &str = "date,region,revenue,cost\n2024-01-01,north,100,40\n2024-01-02,south,250,90\n";

#[test]
fn test_extracts_named_columns_from_stdin() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-f", "revenue", "-f", "date"])
        .write_stdin(SALES)
        .assert()
        .success()
        .stdout("revenue\tdate\n100\t2024-01-01\n250\t2024-01-02\n");
}

#[test]
fn test_all_columns_by_default() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-o", ","])
        .write_stdin(SALES)
        .assert()
        .success()
        .stdout(SALES);
}

#[test]
fn test_header_print_mode() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-H", "-f", "b"])
        .write_stdin("a,b\n1,2\n3,4\n")
        .assert()
        .success()
        .stdout("b\t1\n");
}

#[test]
fn test_index_range_and_regex_selectors() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-f", "4,/^re/,1-2", "--no-header-keep"])
        .write_stdin(SALES)
        .assert()
        .success()
        .stdout("40\tnorth\t100\t2024-01-01\n90\tsouth\t250\t2024-01-02\n");
}

#[test]
fn test_malformed_line_aborts() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-f", "a"])
        .write_stdin("a,b\n1,2\n\"broken,3\n4,5\n")
        .assert()
        .failure()
        .code(1)
        .stdout("a\n1\n")
        .stderr(predicate::str::contains(
            "Error: Failed to process <stdin>: Line 3: unterminated quoted field",
        ));
}

#[test]
fn test_malformed_line_skipped_with_ignore() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-i", "-f", "a"])
        .write_stdin("a,b\n1,2\n\"broken,3\n4,5\n")
        .assert()
        .success()
        .stdout("a\n1\n4\n");
}

#[test]
fn test_debug_reports_diagnostics_on_stderr() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--debug", "-f", "0,9,a"])
        .write_stdin("a,b\n1\n")
        .assert()
        .success()
        .stdout("a\n1\n")
        .stderr(
            predicate::str::contains("Columns are 1-based: 0 requested")
                .and(predicate::str::contains(
                    "Header has only 2 columns: column 9 requested",
                ))
                .and(predicate::str::contains(
                    "Line 2: missing fields (1 while header has 2 fields)",
                )),
        );
}

#[test]
fn test_diagnostics_silent_without_debug() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-f", "0,9,a"])
        .write_stdin("a,b\n1\n")
        .assert()
        .success()
        .stdout("a\n1\n")
        .stderr("");
}

#[test]
fn test_no_matching_selector_prints_nothing() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-f", "missing"])
        .write_stdin(SALES)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_invalid_regex_is_fatal() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-f", "/(open/"])
        .write_stdin(SALES)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern in selector /(open/"));
}

#[test]
fn test_reads_files_in_order() {
    let fixture = TestFixture::new();
    let first = fixture.write_file("first.csv", "id,name\n1,ann\n");
    let second = fixture.write_file("second.csv", "name,id\nbob,2\n");

    fixture
        .command()
        .args(["-f", "name", "-K"])
        .arg(&first)
        .arg("-")
        .arg(&second)
        .write_stdin("name\ncid\n")
        .assert()
        .success()
        .stdout("ann\ncid\nbob\n");
}

#[test]
fn test_missing_input_file() {
    let fixture = TestFixture::new();
    let missing = fixture.root().join("missing.csv");

    fixture
        .command()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let fixture = TestFixture::new();
    fixture.write_config("separator = \";\"\nout_separator = \"|\"\ndowncase = true\n");

    fixture
        .command()
        .args(["-f", "City,Code"])
        .write_stdin("City;Code\nNew York;NY\n")
        .assert()
        .success()
        .stdout("City|Code\nnew york|ny\n");
}

#[test]
fn test_flags_override_config_file() {
    let fixture = TestFixture::new();
    fixture.write_config("out_separator = \"|\"\nheader_keep = false\n");

    fixture
        .command()
        .args(["-o", ",", "-f", "b,a"])
        .write_stdin("a,b\n1,2\n")
        .assert()
        .success()
        .stdout("2,1\n");
}

#[test]
fn test_config_file_fields() {
    let fixture = TestFixture::new();
    fixture.write_config("fields = [\"b\"]\n");

    fixture
        .command()
        .write_stdin("a,b\n1,2\n")
        .assert()
        .success()
        .stdout("b\n2\n");
}

#[test]
fn test_negating_flags_undo_config_file() {
    let fixture = TestFixture::new();
    fixture.write_config("header_keep = false\ndowncase = true\n");

    fixture
        .command()
        .args(["--header-keep", "--no-downcase", "-f", "City"])
        .write_stdin("City\nOslo\n")
        .assert()
        .success()
        .stdout("City\nOslo\n");
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let fixture = TestFixture::new();
    let missing = fixture.root().join("nope.toml");

    fixture
        .command()
        .arg("--config")
        .arg(&missing)
        .write_stdin(SALES)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_fast_mode_ignores_quotes() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--fast", "-f", "2", "-K"])
        .write_stdin("id,name\n1,\"Smith, John\"\n")
        .assert()
        .success()
        .stdout("\"Smith\n");
}

#[test]
fn test_case_insensitive_names() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-c", "-f", "REVENUE"])
        .write_stdin(SALES)
        .assert()
        .success()
        .stdout("revenue\n100\n250\n");
}

#[test]
fn test_leading_minus_is_a_negative_index() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--debug", "--field=-2"])
        .write_stdin("a,b,c,d\n1,2,3,4\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Columns are 1-based: -2 requested"));
}

#[test]
fn test_help_lists_selector_forms() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--field <LIST>")
                .and(predicate::str::contains("/regex/"))
                .and(predicate::str::contains("3-, -2").not()),
        );
}
