// Frame scheduling bookkeeping, kept apart from the browser calls so the
// coalescing and cancellation rules are host-testable.

/// Handle of an outstanding animation-frame request.
///
/// The browser calls are passed in: `request` returns the new handle and
/// `cancel` receives a handle to cancel.
#[derive(Debug, Default)]
pub struct PendingFrame {
    handle: Option<i32>,
}

impl PendingFrame {
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<i32> {
        self.handle
    }

    /// Request a frame; an outstanding request is cancelled first so at most
    /// one is ever pending.
    pub fn request<E>(
        &mut self,
        request: impl FnOnce() -> Result<i32, E>,
        cancel: impl FnOnce(i32),
    ) -> Result<(), E> {
        if let Some(old) = self.handle.take() {
            cancel(old);
        }
        self.handle = Some(request()?);
        Ok(())
    }

    /// The requested frame is running; its handle is spent.
    pub fn fired(&mut self) {
        self.handle = None;
    }

    /// Cancel the outstanding request, if any; returns whether there was one.
    pub fn cancel(&mut self, cancel: impl FnOnce(i32)) -> bool {
        match self.handle.take() {
            Some(handle) => {
                cancel(handle);
                true
            }
            None => false,
        }
    }
}

/// Scroll/resize bursts collapse into a single pending resolution, consumed
/// once by the next frame.
#[derive(Debug, Default)]
pub struct ResolveRequests {
    pending: bool,
    coalesced: u64,
}

impl ResolveRequests {
    /// Mark a resolution as wanted; returns `false` when one was already
    /// pending and this request merely replaced it.
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.coalesced += 1;
            return false;
        }
        self.pending = true;
        true
    }

    /// Consume the pending request; `true` at most once per request burst.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Requests folded into an already pending one so far.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }

    pub fn reset(&mut self) {
        self.pending = false;
    }
}
