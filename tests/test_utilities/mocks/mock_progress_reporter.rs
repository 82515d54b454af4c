use composer_report::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock ProgressReporter recording every message for assertions.
///
/// Clones share the same buffer, so a test can keep a handle while the
/// use case owns the reporter.
#[derive(Clone, Default)]
pub struct MockProgressReporter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|m| m.starts_with("warn: "))
            .cloned()
            .collect()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn begin_step(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("begin: {}", message));
    }

    fn finish_step(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("finish: {}", message));
    }

    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(format!("warn: {}", message));
    }
}
