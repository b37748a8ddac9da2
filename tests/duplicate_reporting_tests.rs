//! Diagnostics emitted through `tracing`.

use std::io;
use std::sync::{Arc, Mutex};

use balanced_tree::BalancedTree;
use rstest::rstest;
use tracing::Level;

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let buffer = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(body: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, body);
    logs.contents()
}

#[rstest]
fn test_duplicate_insert_logs_warning_with_key() {
    let output = capture_logs(|| {
        let mut tree = BalancedTree::new();
        tree.insert(15);
        tree.insert(15);
    });

    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("duplicate key"), "{output}");
    assert!(output.contains("key=15"), "{output}");
}

#[rstest]
fn test_fresh_inserts_log_no_warning() {
    let output = capture_logs(|| {
        let _tree: BalancedTree<i32> = [1, 2, 3, 4].into_iter().collect();
    });

    assert!(!output.contains("WARN"), "{output}");
}

#[rstest]
#[case::left_left(&[30, 20, 10], "LL")]
#[case::right_right(&[10, 20, 30], "RR")]
#[case::left_right(&[30, 10, 20], "LR")]
#[case::right_left(&[10, 30, 20], "RL")]
fn test_rebalance_traces_rotation_case(#[case] keys: &[i32], #[case] label: &str) {
    let output = capture_logs(|| {
        let _tree: BalancedTree<i32> = keys.iter().copied().collect();
    });

    assert!(output.contains("rebalancing subtree"), "{output}");
    assert!(output.contains(&format!("case={label}")), "{output}");
}
