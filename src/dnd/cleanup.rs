//! Idempotent disposers.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Disposer = Box<dyn FnOnce()>;

/// Undoes a registration. Running it more than once is a no-op.
///
/// Clones share the same underlying disposer, so a callback can hold a clone
/// and dispose its own registration.
#[derive(Clone)]
#[must_use = "dropping a Cleanup leaves the registration attached; call dispose() or into_guard()"]
pub struct Cleanup {
    inner: Rc<RefCell<Option<Disposer>>>,
}

impl Cleanup {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Some(Box::new(dispose)))),
        }
    }

    /// A cleanup with nothing to undo.
    pub fn noop() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }

    /// Merge several cleanups into one that disposes them in order.
    pub fn combine(cleanups: impl IntoIterator<Item = Cleanup>) -> Self {
        let cleanups: Vec<Cleanup> = cleanups.into_iter().collect();
        Self::new(move || {
            for cleanup in &cleanups {
                cleanup.dispose();
            }
        })
    }

    pub fn dispose(&self) {
        // Take before calling so a disposer that re-enters sees an empty slot.
        let disposer = self.inner.borrow_mut().take();
        if let Some(disposer) = disposer {
            disposer();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().is_none()
    }

    /// Dispose automatically when the returned guard is dropped.
    pub fn into_guard(self) -> CleanupGuard {
        CleanupGuard(self)
    }
}

impl fmt::Debug for Cleanup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cleanup")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// RAII wrapper around a [`Cleanup`].
#[derive(Debug)]
pub struct CleanupGuard(Cleanup);

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        self.0.dispose();
    }
}
