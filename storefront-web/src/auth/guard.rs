use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Lets one submission run at a time. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Rc<Cell<bool>>,
}

impl SubmitGuard {
    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Runs `task` unless another one is still pending, in which case the
    /// task is dropped unpolled and `None` is returned.
    pub async fn run<F: Future>(&self, task: F) -> Option<F::Output> {
        if self.in_flight.replace(true) {
            log::debug!("submission ignored, another one is in flight");
            return None;
        }
        let _release = Release(&self.in_flight);
        Some(task.await)
    }
}

struct Release<'a>(&'a Cell<bool>);

impl Drop for Release<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
