use std::path::Path;
use std::process::{Command, Output};

use image::{GrayImage, Luma};

fn greylut(input: &Path, output: &Path, lut: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_greylut"))
        .arg(format!("--input-dir={}", input.display()))
        .arg(format!("--output-dir={}", output.display()))
        .arg(format!("--lut={}", lut.display()))
        .arg("--log-level=off")
        .env_remove("RUST_LOG")
        .env_remove("GREYLUT_LOG")
        .output()
        .expect("failed to run greylut")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn write_lut(dir: &Path, csv: &str) -> std::path::PathBuf {
    let lut = dir.join("curve.csv");
    std::fs::write(&lut, csv).unwrap();
    lut
}

#[test]
fn test_missing_lut_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = greylut(dir.path(), &dir.path().join("out"), &dir.path().join("missing.csv"));

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("Error:"), "stderr: {}", stderr(&out));
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_missing_input_dir_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let lut = write_lut(dir.path(), "Scan,Idea\n0,0\n255,255\n");
    let out = greylut(&dir.path().join("nope"), &dir.path().join("out"), &lut);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("Error:"));
}

#[test]
fn test_bad_table_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let lut = write_lut(dir.path(), "Scan,Other\n0,0\n");
    let out = greylut(dir.path(), &dir.path().join("out"), &lut);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("Error: error loading LUT"));
}

#[test]
fn test_corrupt_image_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    std::fs::create_dir(&input).unwrap();
    std::fs::write(input.join("bad.png"), b"garbage").unwrap();
    let lut = write_lut(dir.path(), "Scan,Idea\n0,0\n255,255\n");

    let out = greylut(&input, &dir.path().join("out"), &lut);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("bad.png"));
}

#[test]
fn test_empty_input_dir_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    std::fs::create_dir(&input).unwrap();
    let lut = write_lut(dir.path(), "Scan,Idea\n0,0\n255,255\n");

    let out = greylut(&input, &dir.path().join("out"), &lut);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out).trim_end(),
        "No images found in input directory. Exiting."
    );
}

#[test]
fn test_run_prints_names_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    std::fs::create_dir(&input).unwrap();
    for name in ["b.png", "a.png"] {
        GrayImage::from_fn(2, 2, |x, y| Luma([(x * 50 + y * 100) as u8]))
            .save(input.join(name))
            .unwrap();
    }
    let lut = write_lut(dir.path(), "Scan,Idea\n0,0\n255,255\n");
    let output = dir.path().join("out");

    let out = greylut(&input, &output, &lut);

    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "a.png".to_string(),
            "b.png".to_string(),
            format!("Processed 2 image(s) -> {}", output.display()),
        ]
    );
}
