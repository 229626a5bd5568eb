use std::process::Command;

use serde_json::Value;

fn simulate(args: &[&str]) -> Vec<Value> {
    let output = Command::new(env!("CARGO_BIN_EXE_slidereel"))
        .args(["--config", "/nonexistent/slidereel.toml", "simulate"])
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run slidereel");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn summary(events: &[Value]) -> Vec<(String, u64)> {
    events
        .iter()
        .map(|e| {
            (
                e["event"].as_str().unwrap().to_string(),
                e["index"].as_u64().unwrap(),
            )
        })
        .collect()
}

#[test]
fn test_jump_script() {
    let events = simulate(&["next", "goto:3", "--state"]);
    assert_eq!(
        summary(&events),
        vec![
            ("init.slider".to_string(), 0),
            ("before.slider".to_string(), 0),
            ("after.slider".to_string(), 1),
            ("before.slider".to_string(), 1),
            ("after.slider".to_string(), 3),
            ("state".to_string(), 3),
        ]
    );
    assert_eq!(events[0]["item"]["title"], "Harbour at dawn");
}

#[test]
fn test_step_by_step_reports_every_step() {
    let events = simulate(&["--step-by-step", "goto:3"]);
    assert_eq!(
        summary(&events),
        vec![
            ("init.slider".to_string(), 0),
            ("before.slider".to_string(), 0),
            ("before.slider".to_string(), 1),
            ("before.slider".to_string(), 2),
            ("after.slider".to_string(), 3),
        ]
    );
}

#[test]
fn test_keys_and_wraparound() {
    let events = simulate(&["key:37", "key:13", "move:-2", "--state"]);
    let last = events.last().unwrap();
    assert_eq!(last["event"], "state");
    // 0 -> 5 by the left arrow, enter is unbound, then two back
    assert_eq!(last["index"], 3);
}

#[test]
fn test_bad_step_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_slidereel"))
        .args(["--config", "/nonexistent/slidereel.toml", "simulate", "goto:x"])
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run slidereel");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
