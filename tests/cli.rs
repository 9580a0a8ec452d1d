//! End-to-end tests for the `folio` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const IMAGES: &[&str] = &[
    "219E6740-D00E-49C3-A541-19149E44F5BA_1_105_c.jpeg",
    "infosys-logo.png",
    "golden-logo.jpeg",
    "cincom-logo.png",
    "fidelity-logo.png",
    "fifth-third-logo.png",
];

fn folio(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .output()
        .expect("failed to run folio")
}

fn source_with_assets() -> TempDir {
    let source = TempDir::new().unwrap();
    let public = source.path().join("public");
    fs::create_dir_all(&public).unwrap();
    for image in IMAGES {
        fs::write(public.join(image), b"img").unwrap();
    }
    source
}

fn build(source: &Path, output: &Path) -> Output {
    folio(&[
        "build",
        "--source",
        source.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn build_writes_every_page() {
    let source = source_with_assets();
    let out = TempDir::new().unwrap();
    let result = build(source.path(), out.path());
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    for page in ["about", "projects", "uses"] {
        assert!(out.path().join(page).join("index.html").is_file(), "{page}");
    }
    assert!(out.path().join("index.html").is_file());
    assert!(out.path().join("site.webmanifest").is_file());
    for image in IMAGES {
        assert!(out.path().join(image).is_file(), "{image}");
    }
    assert!(stdout(&result).contains("Generated 3 pages"));
}

#[test]
fn built_projects_page_lists_every_project() {
    let source = source_with_assets();
    let out = TempDir::new().unwrap();
    assert!(build(source.path(), out.path()).status.success());

    let html = fs::read_to_string(out.path().join("projects/index.html")).unwrap();
    for name in [
        "Infosys Apex Optimization",
        "Golden Technology LWC Development",
        "Cincom Salesforce Integration",
        "Fidelity Investments Custom Workflows",
        "Fifth Third Securities Compliance System",
    ] {
        assert!(html.contains(name), "{name}");
    }
    assert!(html.contains("<title>Projects - Bradley Dirheimer</title>"));
}

#[test]
fn build_warns_about_missing_assets() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let result = build(source.path(), out.path());
    assert!(result.status.success());
    let text = stdout(&result);
    assert!(text.contains("Warnings"));
    assert!(text.contains("Missing asset: /infosys-logo.png"));
}

#[test]
fn check_fails_on_missing_assets() {
    let source = TempDir::new().unwrap();
    let result = folio(&["check", "--source", source.path().to_str().unwrap()]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("/infosys-logo.png"));
}

#[test]
fn check_passes_with_assets() {
    let source = source_with_assets();
    let result = folio(&["check", "--source", source.path().to_str().unwrap()]);
    assert!(result.status.success());
    assert!(stdout(&result).contains("Content is valid"));
}

#[test]
fn config_overrides_title_template() {
    let source = source_with_assets();
    fs::write(
        source.path().join("config.toml"),
        "[site]\ntitle_template = \"%s | BD\"\n",
    )
    .unwrap();
    let out = TempDir::new().unwrap();
    assert!(build(source.path(), out.path()).status.success());
    let html = fs::read_to_string(out.path().join("uses/index.html")).unwrap();
    assert!(html.contains("<title>Uses | BD</title>"));
}

#[test]
fn unknown_config_key_is_rejected() {
    let source = source_with_assets();
    fs::write(source.path().join("config.toml"), "[site]\nauthr = \"typo\"\n").unwrap();
    let out = TempDir::new().unwrap();
    assert!(!build(source.path(), out.path()).status.success());
}

#[test]
fn disabled_animations_emit_no_keyframes() {
    let source = source_with_assets();
    fs::write(source.path().join("config.toml"), "[animation]\nenabled = false\n").unwrap();
    let out = TempDir::new().unwrap();
    assert!(build(source.path(), out.path()).status.success());

    let css_file = fs::read_dir(out.path())
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .find(|name| name.starts_with("style.") && name.ends_with(".css"))
        .expect("stylesheet not written");
    let css = fs::read_to_string(out.path().join(css_file)).unwrap();
    assert!(!css.contains("@keyframes"));

    let about = fs::read_to_string(out.path().join("about/index.html")).unwrap();
    assert!(about.contains("mailto:b.dirheimer@gmail.com"));
}

#[test]
fn timeline_prints_both_timelines() {
    let result = folio(&["timeline"]);
    assert!(result.status.success());
    let text = stdout(&result);
    assert!(text.contains("Page shell (settles at 0.90s)"));
    assert!(text.contains("Section (settles at 1.20s)"));
}

#[test]
fn gen_config_output_parses() {
    let result = folio(&["gen-config"]);
    assert!(result.status.success());
    let text = stdout(&result);
    let value: toml::Value = toml::from_str(&text).expect("stock config is valid TOML");
    assert!(value.get("site").is_some());
}
