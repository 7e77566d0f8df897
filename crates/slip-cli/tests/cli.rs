use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PAYLOAD: &str = "00020101021229370016A00000067701011101130066812345678540575.505802TH";

fn slip(config_dir: &TempDir) -> Command {
    let config = config_dir.path().join("config.json");
    if !config.exists() {
        fs::write(&config, "{}").unwrap();
    }
    let mut cmd = Command::cargo_bin("slip").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

fn write_blank_png(path: &Path) {
    image::RgbImage::from_pixel(32, 32, image::Rgb([255, 255, 255]))
        .save(path)
        .unwrap();
}

#[test]
fn decode_qr_prints_payment_info() {
    let dir = TempDir::new().unwrap();
    slip(&dir)
        .args(["decode-qr", PAYLOAD])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""merchantID": "0066812345678""#))
        .stdout(predicate::str::contains(r#""amount": "75.50""#));
}

#[test]
fn decode_qr_rejects_malformed_payload() {
    let dir = TempDir::new().unwrap();
    slip(&dir)
        .args(["decode-qr", "5499"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed QR payload"));
}

#[test]
fn read_merges_qr_and_text() {
    let dir = TempDir::new().unwrap();
    let text = dir.path().join("slip.txt");
    fs::write(&text, "โอนเงินสำเร็จ\nจำนวนเงิน: 75.50 บาท\n15 Jan 2024 14:30").unwrap();

    slip(&dir)
        .args(["read", "--qr", PAYLOAD, "--text"])
        .arg(&text)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""slip_data""#))
        .stdout(predicate::str::contains(r#""success": true"#))
        .stdout(predicate::str::contains(r#""merchantID": "0066812345678""#))
        .stdout(predicate::str::contains(r#""billPaymentRef1": """#))
        .stdout(predicate::str::contains(r#""date": "15 Jan 2024""#))
        .stdout(predicate::str::contains(r#""ref1": null"#));
}

#[test]
fn read_text_from_stdin_as_csv() {
    let dir = TempDir::new().unwrap();
    slip(&dir)
        .args(["read", "--text", "-", "--format", "csv"])
        .write_stdin("Amount: 1,250.00 THB\nDate 15 Jan 2024 Time 14:30:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("qr_amount"))
        .stdout(predicate::str::contains("1250.00"))
        .stdout(predicate::str::contains("01/15/2024 14:30:00"));
}

#[test]
fn read_reports_unreadable_slip() {
    let dir = TempDir::new().unwrap();
    slip(&dir)
        .args(["read", "--text", "-"])
        .write_stdin("   ")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success": false"#));
}

#[test]
fn read_requires_an_input() {
    let dir = TempDir::new().unwrap();
    slip(&dir)
        .arg("read")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to read"));
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();
    slip(&dir)
        .args(["config", "set", "pipeline.timeout_ms", "2000"])
        .assert()
        .success();

    slip(&dir)
        .args(["config", "get", "pipeline.timeout_ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2000"));

    slip(&dir)
        .args(["config", "get", "ocr.languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tha+eng"));
}

#[test]
fn config_set_rejects_inverted_range() {
    let dir = TempDir::new().unwrap();
    slip(&dir)
        .args(["config", "set", "extraction.reference_min_len", "80"])
        .assert()
        .failure();
}

#[test]
fn batch_uses_sidecar_text() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("in");
    let outputs = dir.path().join("out");
    fs::create_dir_all(&inputs).unwrap();

    write_blank_png(&inputs.join("first.png"));
    fs::write(inputs.join("first.txt"), "Amount: 50.00").unwrap();
    write_blank_png(&inputs.join("second.png"));

    let pattern = inputs.join("*.png");
    slip(&dir)
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&outputs)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"))
        .stdout(predicate::str::contains("1 read, 1 unreadable"));

    let first = fs::read_to_string(outputs.join("first.json")).unwrap();
    assert!(first.contains(r#""amount": "50.00""#));
    assert!(first.contains(r#""success": true"#));

    let second = fs::read_to_string(outputs.join("second.json")).unwrap();
    assert!(second.contains(r#""success": false"#));

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    assert!(summary.starts_with("file,error,processing_time_ms,success"));
    assert_eq!(summary.lines().count(), 3);
}
