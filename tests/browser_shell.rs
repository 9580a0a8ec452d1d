//! Browser tests for the animated page shell.
//!
//! Pages are loaded from `file://`, so site-absolute links do not resolve;
//! the stylesheet is injected into the page after load instead.
//!
//! Run with: `cargo test --test browser_shell -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }
        let source = std::env::temp_dir().join("folio-browser-shell-source");
        std::fs::create_dir_all(&source).expect("failed to create source dir");

        let status = Command::new(env!("CARGO_BIN_EXE_folio"))
            .args([
                "build",
                "--source",
                source.to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run folio");
        assert!(status.success(), "site generation failed");
    });
}

fn stylesheet() -> String {
    let dir = generated_dir();
    let name = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .find(|n| n.starts_with("style.") && n.ends_with(".css"))
        .expect("stylesheet not generated");
    std::fs::read_to_string(dir.join(name)).unwrap()
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

/// Load a page and attach the generated stylesheet, which starts the
/// entrance animations.
fn load_page(slug: &str) -> Arc<Tab> {
    ensure_site_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join(slug).join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();

    let css = serde_json::to_string(&stylesheet()).unwrap();
    tab.evaluate(
        &format!(
            "(function() {{ const s = document.createElement('style'); \
             s.textContent = {css}; document.head.appendChild(s); }})()"
        ),
        false,
    )
    .expect("failed to inject stylesheet");
    tab
}

fn eval_string(tab: &Tab, js: &str) -> String {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
        .as_str()
        .expect("value is not a string")
        .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn content_is_present_while_animating() {
    let tab = load_page("projects");
    let text = eval_string(&tab, "document.querySelector('main').textContent");
    assert!(text.contains("Infosys Apex Optimization"));
    let animation = eval_string(
        &tab,
        "getComputedStyle(document.querySelector('main')).animationName",
    );
    assert_eq!(animation, "folio-shell-main");
}

#[test]
#[ignore]
fn shell_rests_after_settling() {
    let tab = load_page("about");
    std::thread::sleep(Duration::from_millis(1500));
    for selector in [".shell-backdrop", ".shell-wrapper", "main"] {
        let opacity = eval_string(
            &tab,
            &format!("getComputedStyle(document.querySelector('{selector}')).opacity"),
        );
        assert_eq!(opacity, "1", "{selector}");
    }
}

#[test]
#[ignore]
fn sections_rest_after_settling() {
    let tab = load_page("uses");
    std::thread::sleep(Duration::from_millis(1500));
    let opacities = eval_string(
        &tab,
        "Array.from(document.querySelectorAll('.section-body')) \
         .map(e => getComputedStyle(e).opacity).join(',')",
    );
    assert_eq!(opacities, "1,1,1,1");
}

#[test]
#[ignore]
fn mail_link_is_clickable_target() {
    let tab = load_page("about");
    let href = eval_string(
        &tab,
        r#"document.querySelector('a[href^="mailto:"]').getAttribute('href')"#,
    );
    assert_eq!(href, "mailto:b.dirheimer@gmail.com");
}
