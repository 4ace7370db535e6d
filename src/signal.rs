use std::process::exit;
use std::sync::atomic::{AtomicBool, Ordering};

static CHILD_HAS_CONTROL: AtomicBool = AtomicBool::new(false);
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Once the child is about to run, Ctrl+C belongs to it; the parent only
/// reports the resulting exit status.
pub fn pass_control_to_child() {
    CHILD_HAS_CONTROL.store(true, Ordering::SeqCst);
}

pub fn setup_signal_handler() {
    let result = ctrlc::set_handler(|| {
        if !CHILD_HAS_CONTROL.load(Ordering::SeqCst) {
            exit(INTERRUPTED_EXIT_CODE);
        }
    });

    if result.is_err() {
        eprintln!("warning: unable to set Ctrl+C handler, SIGINT will not be handled correctly");
    }
}
