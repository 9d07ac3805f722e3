//! End-to-end tests for the `slideprompt` binary.

use std::process::Command;

use serde::Deserialize;
use tempfile::TempDir;

/// Path to the slideprompt binary (set by cargo at compile time)
fn slideprompt_bin() -> &'static str {
    env!("CARGO_BIN_EXE_slideprompt")
}

fn run(data_dir: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(slideprompt_bin())
        .arg("--data-dir")
        .arg(data_dir.path().join("state"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[derive(Debug, Deserialize)]
struct PaletteItem {
    id: String,
    name: String,
    custom: bool,
    selected: bool,
}

#[derive(Debug, Deserialize)]
struct ListPalettesResponse {
    palettes: Vec<PaletteItem>,
    count: usize,
}

#[test]
fn test_palette_list_json() {
    let data_dir = TempDir::new().unwrap();
    let output = run(&data_dir, &["palette", "list", "--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let response: ListPalettesResponse =
        serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(response.count, 20);
    assert!(response.palettes.iter().all(|p| !p.custom));

    let selected: Vec<&PaletteItem> =
        response.palettes.iter().filter(|p| p.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, "palette-default-1");
    assert_eq!(selected[0].name, "Garnet Sunrise");
}

#[test]
fn test_show_produces_prompt_block() {
    let data_dir = TempDir::new().unwrap();
    let output = run(&data_dir, &["show", "--language", "en"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Output Language: en"));
    assert!(stdout.contains("Palette: Garnet Sunrise"));
    assert!(stdout.contains("Style Preset: Executive Insight"));
    assert!(!stdout.contains("Output Requirements"));
}

#[test]
fn test_selection_flows_into_prompt() {
    let data_dir = TempDir::new().unwrap();

    let output = run(&data_dir, &["category", "toggle", "mood", "Calm"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = run(&data_dir, &["show", "--language", "en"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mood: Calm"));
}

#[test]
fn test_palette_add_apply_delete_cycle() {
    let data_dir = TempDir::new().unwrap();

    let output = run(&data_dir, &["color", "set", "background", "#0A0B0C"]);
    assert_eq!(output.status.code(), Some(0));

    let output = run(&data_dir, &["palette", "add", "House Style"]);
    assert_eq!(output.status.code(), Some(0));

    let output = run(&data_dir, &["palette", "list", "--json"]);
    let response: ListPalettesResponse = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response.count, 21);
    let custom = response.palettes.iter().find(|p| p.custom).unwrap();
    assert_eq!(custom.name, "House Style");
    assert!(custom.selected);

    let output = run(&data_dir, &["palette", "delete", &custom.id]);
    assert_eq!(output.status.code(), Some(0));

    let output = run(&data_dir, &["palette", "list", "--json"]);
    let response: ListPalettesResponse = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response.count, 20);
    assert!(response.palettes.iter().find(|p| p.selected).unwrap().id == "palette-default-1");
}

#[test]
fn test_delete_builtin_palette_fails() {
    let data_dir = TempDir::new().unwrap();
    let output = run(&data_dir, &["palette", "delete", "palette-default-1"]);

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Built-in"));
}

#[test]
fn test_invalid_color_rejected() {
    let data_dir = TempDir::new().unwrap();
    let output = run(&data_dir, &["color", "set", "title", "not-a-color"]);

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid hex color"));
}

#[test]
fn test_reset_requires_force() {
    let data_dir = TempDir::new().unwrap();

    let output = run(&data_dir, &["reset"]);
    assert_ne!(output.status.code(), Some(0));

    run(&data_dir, &["palette", "add", "Gone Soon"]);
    let output = run(&data_dir, &["reset", "--force"]);
    assert_eq!(output.status.code(), Some(0));

    let output = run(&data_dir, &["palette", "list", "--json"]);
    let response: ListPalettesResponse = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response.count, 20);
}

#[test]
fn test_show_writes_out_file() {
    let data_dir = TempDir::new().unwrap();
    let out_path = data_dir.path().join("prompt.txt");

    let output = run(
        &data_dir,
        &["show", "--out", out_path.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(0));

    let content = std::fs::read_to_string(&out_path).unwrap();
    assert!(content.contains("Palette: Garnet Sunrise"));
}
