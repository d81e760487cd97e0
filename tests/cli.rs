//! End-to-end tests: run the binary in scratch directories and inspect its output.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("food-fixture");
    cmd.env_remove("FOOD_FIXTURE_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// A fresh, empty scratch directory unique to the calling test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("food_fixture_cli_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// DejaVu Sans, checked in under `test_fixtures/fonts`.
fn fixture_font() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures/fonts/DejaVuSans.ttf")
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn corner_color(path: &Path) -> [u8; 3] {
    image::open(path).unwrap().to_rgb8().get_pixel(5, 5).0
}

#[test]
fn no_arguments_writes_test_food_jpg() {
    let dir = scratch_dir("defaults");

    cmd()
        .current_dir(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("テスト画像を作成しました").and(predicate::str::contains("test-food.jpg")));

    assert_eq!(file_names(&dir), ["test-food.jpg"]);
    let data = std::fs::read(dir.join("test-food.jpg")).unwrap();
    assert_eq!(&data[..3], &[0xFF, 0xD8, 0xFF], "Output should be a valid JPEG file");
    let img = image::load_from_memory(&data).unwrap();
    assert_eq!((img.width(), img.height()), (800, 600));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn background_channels_stay_in_range() {
    let dir = scratch_dir("background_range");

    cmd().current_dir(&dir).assert().success();

    // JPEG is lossy: allow a little drift on a flat region.
    let [r, g, b] = corner_color(&dir.join("test-food.jpg"));
    for channel in [r, g, b] {
        assert!(channel >= 195, "channel {channel} below background range");
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_font_falls_back_silently() {
    let dir = scratch_dir("missing_font");

    cmd()
        .current_dir(&dir)
        .args(["--font", "/nonexistent/fonts/Helvetica.ttc"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let img = image::open(dir.join("test-food.jpg")).unwrap();
    assert_eq!((img.width(), img.height()), (800, 600));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn verbose_reports_font_fallback() {
    let dir = scratch_dir("verbose_fallback");

    cmd()
        .current_dir(&dir)
        .args(["--font", "/nonexistent/fonts/Helvetica.ttc", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("built-in bitmap"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn second_run_overwrites_first() {
    let dir = scratch_dir("overwrite");

    cmd().current_dir(&dir).args(["--seed", "1"]).assert().success();
    let first = std::fs::read(dir.join("test-food.jpg")).unwrap();

    cmd().current_dir(&dir).args(["--seed", "2"]).assert().success();
    let second = std::fs::read(dir.join("test-food.jpg")).unwrap();

    assert_eq!(file_names(&dir), ["test-food.jpg"]);
    assert_ne!(first, second, "Different seeds should produce different backgrounds");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn same_seed_is_reproducible() {
    let dir = scratch_dir("reproducible");
    let font = dir.join("no-font.ttf");
    let font = font.to_str().unwrap();

    cmd().current_dir(&dir).args(["--seed", "7", "--font", font, "-o", "a.jpg"]).assert().success();
    cmd().current_dir(&dir).args(["--seed", "7", "--font", font, "-o", "b.jpg"]).assert().success();

    assert_eq!(std::fs::read(dir.join("a.jpg")).unwrap(), std::fs::read(dir.join("b.jpg")).unwrap());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn manifest_flag_writes_json_sidecar() {
    let dir = scratch_dir("manifest");

    cmd().current_dir(&dir).args(["--manifest", "--seed", "11"]).assert().success();

    assert_eq!(file_names(&dir), ["test-food.jpg", "test-food.json"]);
    let json = std::fs::read_to_string(dir.join("test-food.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["image"], "test-food.jpg");
    assert_eq!(value["width"], 800);
    assert_eq!(value["height"], 600);
    let names: Vec<&str> =
        value["shapes"].as_array().unwrap().iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["tomato", "lettuce", "cucumber"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn config_file_sets_output_and_cli_wins() {
    let dir = scratch_dir("config");
    std::fs::write(dir.join("food-fixture.toml"), "[output]\npath = \"from-config.jpg\"\n").unwrap();

    cmd()
        .current_dir(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("from-config.jpg"));
    assert!(dir.join("from-config.jpg").exists());

    cmd()
        .current_dir(&dir)
        .args(["-o", "from-cli.jpg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-cli.jpg"));
    assert!(dir.join("from-cli.jpg").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = scratch_dir("bad_config");
    std::fs::write(dir.join("food-fixture.toml"), "this is not valid toml {{{").unwrap();

    cmd()
        .current_dir(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    assert!(!dir.join("test-food.jpg").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_quality_exits_before_writing() {
    let dir = scratch_dir("bad_quality");

    cmd()
        .current_dir(&dir)
        .args(["--quality", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported quality"));
    assert!(file_names(&dir).is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_output_exits_with_error() {
    let dir = scratch_dir("unwritable");

    cmd()
        .current_dir(&dir)
        .args(["-o", "missing-dir/test-food.jpg"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn huge_font_size_exits_with_error() {
    let dir = scratch_dir("huge_font_size");

    cmd()
        .current_dir(&dir)
        .args(["--font", fixture_font().to_str().unwrap(), "--font-size", "100000"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported font size"));
    assert!(file_names(&dir).is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn readable_font_renders_scalable_label() {
    let dir = scratch_dir("scalable_font");

    cmd()
        .current_dir(&dir)
        .args(["--font", fixture_font().to_str().unwrap(), "--manifest", "--seed", "4"])
        .assert()
        .success();

    let json = std::fs::read_to_string(dir.join("test-food.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["label"]["font"], "scalable");
    let ink = &value["label"]["ink"];
    let twice_mid = ink["min_x"].as_i64().unwrap() + ink["max_x"].as_i64().unwrap() - 1;
    assert!((twice_mid - 800).abs() <= 2, "label ink {ink} not centered");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn manifest_names_image_relative_to_itself() {
    let dir = scratch_dir("manifest_nested");
    std::fs::create_dir_all(dir.join("out")).unwrap();

    cmd().current_dir(&dir).args(["-o", "out/salad.jpg", "--manifest"]).assert().success();

    let json = std::fs::read_to_string(dir.join("out/salad.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["image"], "salad.jpg");

    let _ = std::fs::remove_dir_all(&dir);
}
