//! Dispatch progress notification port

use autoreply_domain::MessageId;

/// Callback for progress updates while replies are generated
///
/// Implementations live in the presentation layer (spinners, plain text).
pub trait DispatchNotifier: Send + Sync {
    /// Called once the message is claimed and the generator is about to be invoked
    fn on_dispatch_start(&self, id: MessageId, customer: &str);

    /// Called when a dispatch finishes, successfully or not
    fn on_dispatch_complete(&self, id: MessageId, success: bool);

    /// Called before a batch of dispatches starts
    fn on_batch_start(&self, _total: usize) {}

    /// Called after every dispatch in a batch has finished
    fn on_batch_complete(&self, _succeeded: usize, _failed: usize) {}
}

/// No-op notifier for when progress reporting is not needed
pub struct NoDispatchProgress;

impl DispatchNotifier for NoDispatchProgress {
    fn on_dispatch_start(&self, _id: MessageId, _customer: &str) {}
    fn on_dispatch_complete(&self, _id: MessageId, _success: bool) {}
}
