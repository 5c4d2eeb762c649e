//! Integration tests for batch evaluation

use crate::trade_session;
use parlance_runtime::{BatchSummary, SessionConfig, run_batch};

#[test]
fn batch_reports_each_line() {
    let input = "buy 1 ste\n\ngive z\npass\n";
    let mut output = Vec::new();
    let summary = run_batch(&trade_session(), input.as_bytes(), &mut output).unwrap();

    assert_eq!(summary, BatchSummary { parsed: 2, failed: 1 });
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("steel]"));
    assert_eq!(lines[1], "error: expected Mick, Steve, or Stella");
    assert_eq!(lines[2], "pass");
}

#[test]
fn batch_stops_at_quit() {
    let input = "pass\n:quit\npass\n";
    let mut output = Vec::new();
    let summary = run_batch(&trade_session(), input.as_bytes(), &mut output).unwrap();
    assert_eq!(summary.parsed, 1);
}

#[test]
fn batch_json_output() {
    let session = trade_session().with_config(SessionConfig::default().with_json_output(true));
    let mut output = Vec::new();
    run_batch(&session, "give mi\n".as_bytes(), &mut output).unwrap();

    let line = String::from_utf8(output).unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(value["List"][2]["Player"], 0);
    assert_eq!(value["List"][3], "Absent");
}
