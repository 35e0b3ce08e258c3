use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn freqresp() -> Command {
    Command::cargo_bin("freqresp").unwrap()
}

#[test]
fn coefficients_from_stdin() {
    let out = freqresp()
        .args(&["-p", "4", "-r", "8000"])
        .write_stdin("b\n1\na\n1\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines, vec![
        "# Coeff.",
        "# frequency_hz\tgain_db\tphase_deg",
        "0\t0\t0",
        "1000\t0\t0",
        "2000\t0\t0",
        "3000\t0\t0",
    ]);
}

#[test]
fn impulse_response_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1\n0\n0\n0").unwrap();

    freqresp()
        .arg("-i").arg(file.path())
        .args(&["-p", "8", "-r", "8000", "-t", "unit impulse"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# unit impulse\n"))
        .stdout(predicate::str::contains("7000\t"))
        .stdout(predicate::function(|s: &str| s.lines().count() == 10));
}

#[test]
fn output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("response.tsv");

    freqresp()
        .arg("-o").arg(&path)
        .write_stdin("0.5\n0.5\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# IR\n"));
    assert_eq!(text.lines().count(), 2402);
}

#[test]
fn unwrap_flag() {
    // pure delay of 3 samples wraps several times without -u
    let wrapped = freqresp()
        .args(&["-p", "16"])
        .write_stdin("b\n0\n0\n0\n1\na\n1\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let unwrapped = freqresp()
        .args(&["-p", "16", "-u"])
        .write_stdin("b\n0\n0\n0\n1\na\n1\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let last_phase = |out: Vec<u8>| -> f64 {
        let text = String::from_utf8(out).unwrap();
        let row = text.lines().last().unwrap().to_owned();
        row.split('\t').nth(2).unwrap().parse().unwrap()
    };
    // omega = 15 pi / 16, phase = -3 omega
    let want = -3.0 * 180.0 * 15.0 / 16.0;
    assert!((last_phase(unwrapped) - want).abs() < 1e-6);
    assert!(last_phase(wrapped).abs() <= 180.0);
}

#[test]
fn invalid_number_fails() {
    freqresp()
        .write_stdin("b\n1\na\nx\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid number: \"x\""));
}

#[test]
fn empty_input_fails() {
    freqresp()
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("empty input"));
}

#[test]
fn markers_only_fail() {
    freqresp()
        .write_stdin("b\na\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("empty input"));
}

#[test]
fn mismatched_stages_fail() {
    freqresp()
        .write_stdin("b\n1\na\n1\nb\n2\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("2 numerator block(s) but 1 denominator"));
}

#[test]
fn bad_rate_is_rejected() {
    freqresp()
        .args(&["-r", "-5"])
        .write_stdin("1\n")
        .assert()
        .failure();
    freqresp()
        .args(&["-r", "inf"])
        .write_stdin("1\n")
        .assert()
        .failure();
    freqresp()
        .args(&["-r", "NaN"])
        .write_stdin("1\n")
        .assert()
        .failure();
    freqresp()
        .args(&["-p", "0"])
        .write_stdin("1\n")
        .assert()
        .failure();
}
