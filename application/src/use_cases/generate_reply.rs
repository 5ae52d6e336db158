//! Generate Reply use case.
//!
//! [`ReplyDispatcher`] requests a generated reply for one message and
//! records it through [`MessageStore::apply_reply`]. It never keeps its own
//! copy of a message: it receives an id, reads, calls the generator, and
//! writes back.
//!
//! # Per-message exclusion
//!
//! At most one dispatch runs per message id. Each id gets an async lock that
//! is held across the generator call; a second caller waits, re-reads the
//! message and gets [`DispatchError::AlreadyAnswered`] if the first call
//! succeeded. Dispatches for different ids never wait on each other.

use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::dispatch_progress::{DispatchNotifier, NoDispatchProgress};
use crate::ports::reply_generator::{GenerationError, ReplyContext, ReplyGenerator};
use crate::store::{MessageStore, StoreError};
use autoreply_domain::{AiSettings, Message, MessageFilter, MessageId, StatusFilter};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while dispatching a reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Message {0} not found")]
    NotFound(MessageId),

    #[error("Message {0} has already been answered")]
    AlreadyAnswered(MessageId),

    #[error("Reply generation failed: {0}")]
    GenerationFailed(GenerationError),

    #[error("Reply generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Dispatch cancelled")]
    Cancelled,

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl DispatchError {
    /// Whether the message is still pending and the caller may try again
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DispatchError::GenerationFailed(_) | DispatchError::Timeout(_) | DispatchError::Cancelled
        )
    }
}

impl From<StoreError> for DispatchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => DispatchError::NotFound(id),
            StoreError::AlreadyAnswered(id) => DispatchError::AlreadyAnswered(id),
            other => DispatchError::Store(other),
        }
    }
}

/// Outcome of one dispatch inside a batch
pub type DispatchOutcome = (MessageId, Result<Message, DispatchError>);

type InFlight = Mutex<HashMap<MessageId, Arc<tokio::sync::Mutex<()>>>>;

/// Use case for generating and recording replies
pub struct ReplyDispatcher {
    store: Arc<MessageStore>,
    generator: Arc<dyn ReplyGenerator>,
    ai: AiSettings,
    timeout: Duration,
    in_flight: InFlight,
    activity_logger: Arc<dyn ActivityLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl ReplyDispatcher {
    pub fn new(
        store: Arc<MessageStore>,
        generator: Arc<dyn ReplyGenerator>,
        ai: AiSettings,
    ) -> Self {
        let timeout = ai.timeout();
        Self {
            store,
            generator,
            ai,
            timeout,
            in_flight: Mutex::new(HashMap::new()),
            activity_logger: Arc::new(NoActivityLogger),
            cancellation_token: None,
        }
    }

    /// Create with an activity logger.
    pub fn with_activity_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.activity_logger = logger;
        self
    }

    /// Abort in-progress generator calls when `token` is cancelled.
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Override the generator timeout taken from [`AiSettings`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn store(&self) -> &Arc<MessageStore> {
        &self.store
    }

    pub fn ai_settings(&self) -> &AiSettings {
        &self.ai
    }

    /// Generate a reply for `id` and record it (no progress reporting)
    pub async fn generate_and_apply(&self, id: MessageId) -> Result<Message, DispatchError> {
        self.generate_and_apply_with_progress(id, &NoDispatchProgress)
            .await
    }

    /// Generate a reply for `id` and record it, with progress callbacks
    pub async fn generate_and_apply_with_progress(
        &self,
        id: MessageId,
        progress: &dyn DispatchNotifier,
    ) -> Result<Message, DispatchError> {
        let slot = self.dispatch_slot(id);
        let _guard = slot.lock.lock().await;
        self.dispatch_locked(id, progress).await
    }

    /// Dispatch every pending message concurrently.
    ///
    /// Results are returned in store order. A failure for one message does
    /// not affect the others.
    pub async fn generate_all_pending(
        &self,
        progress: &dyn DispatchNotifier,
    ) -> Vec<DispatchOutcome> {
        let pending: Vec<MessageId> = self
            .store
            .list(&MessageFilter::all().with_status(StatusFilter::Pending))
            .iter()
            .map(Message::id)
            .collect();

        info!("Dispatching replies for {} pending messages", pending.len());
        progress.on_batch_start(pending.len());

        let results = futures::future::join_all(
            pending
                .iter()
                .map(|&id| self.generate_and_apply_with_progress(id, progress)),
        )
        .await;

        let outcomes: Vec<DispatchOutcome> = pending.into_iter().zip(results).collect();
        let succeeded = outcomes.iter().filter(|(_, r)| r.is_ok()).count();
        progress.on_batch_complete(succeeded, outcomes.len() - succeeded);
        outcomes
    }

    async fn dispatch_locked(
        &self,
        id: MessageId,
        progress: &dyn DispatchNotifier,
    ) -> Result<Message, DispatchError> {
        let message = self.store.get(id).ok_or(DispatchError::NotFound(id))?;
        if !message.is_pending() {
            debug!("Message {} already answered, skipping dispatch", id);
            return Err(DispatchError::AlreadyAnswered(id));
        }

        let context = ReplyContext::for_message(&message, &self.ai);
        info!(
            "Generating reply for message {} (category: {}, model: {})",
            id, context.category, context.model
        );
        progress.on_dispatch_start(id, message.customer());

        let outcome = match self.generate_bounded(message.body(), &context).await {
            Ok(text) => self
                .store
                .apply_reply(id, text, Utc::now())
                .map_err(DispatchError::from),
            Err(e) => Err(e),
        };

        progress.on_dispatch_complete(id, outcome.is_ok());

        match &outcome {
            Ok(updated) => {
                let reply = updated.response().unwrap_or_default();
                self.activity_logger.log(ActivityEvent::new(
                    "reply_generated",
                    serde_json::json!({
                        "message_id": id.value(),
                        "customer": updated.customer(),
                        "category": updated.category(),
                        "model": context.model,
                        "bytes": reply.len(),
                        "text": reply,
                    }),
                ));
            }
            Err(e) => {
                warn!("Reply for message {} failed: {}", id, e);
                self.activity_logger.log(ActivityEvent::new(
                    "reply_failed",
                    serde_json::json!({
                        "message_id": id.value(),
                        "model": context.model,
                        "error": e.to_string(),
                        "retryable": e.is_retryable(),
                    }),
                ));
            }
        }

        outcome
    }

    /// Call the generator, bounded by the timeout and the cancellation token
    async fn generate_bounded(
        &self,
        body: &str,
        context: &ReplyContext,
    ) -> Result<String, DispatchError> {
        let call = tokio::time::timeout(self.timeout, self.generator.generate(body, context));

        let result = if let Some(ref token) = self.cancellation_token {
            tokio::select! {
                biased;
                _ = token.cancelled() => return Err(DispatchError::Cancelled),
                result = call => result,
            }
        } else {
            call.await
        };

        let text = result
            .map_err(|_| DispatchError::Timeout(self.timeout))?
            .map_err(DispatchError::GenerationFailed)?;

        if text.trim().is_empty() {
            return Err(DispatchError::GenerationFailed(
                GenerationError::EmptyResponse,
            ));
        }
        Ok(text)
    }

    fn dispatch_slot(&self, id: MessageId) -> DispatchSlot<'_> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        let lock = in_flight.entry(id).or_default().clone();
        DispatchSlot {
            in_flight: &self.in_flight,
            id,
            lock,
        }
    }
}

/// Handle on one id's dispatch lock.
///
/// Dropping it forgets the map entry once no other caller holds the lock,
/// including when the dispatch future is abandoned mid-flight.
struct DispatchSlot<'a> {
    in_flight: &'a InFlight,
    id: MessageId,
    lock: Arc<tokio::sync::Mutex<()>>,
}

impl Drop for DispatchSlot<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        // Map entry plus our handle; clones are only taken under the map lock
        if let Some(entry) = in_flight.get(&self.id)
            && Arc::ptr_eq(entry, &self.lock)
            && Arc::strong_count(entry) == 2
        {
            in_flight.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use autoreply_domain::{MessageStatus, NewMessage};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct StubGenerator {
        reply: String,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl StubGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReplyGenerator for StubGenerator {
        async fn generate(
            &self,
            _message: &str,
            _context: &ReplyContext,
        ) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.reply.clone())
        }
    }

    /// Returns queued results in order
    struct ScriptedGenerator {
        results: Mutex<VecDeque<Result<String, GenerationError>>>,
        contexts: Mutex<Vec<ReplyContext>>,
    }

    impl ScriptedGenerator {
        fn new(results: Vec<Result<String, GenerationError>>) -> Self {
            Self {
                results: Mutex::new(VecDeque::from(results)),
                contexts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ReplyGenerator for ScriptedGenerator {
        async fn generate(
            &self,
            _message: &str,
            context: &ReplyContext,
        ) -> Result<String, GenerationError> {
            self.contexts.lock().unwrap().push(context.clone());
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GenerationError::Other("no more results".into())))
        }
    }

    struct HangingGenerator;

    #[async_trait]
    impl ReplyGenerator for HangingGenerator {
        async fn generate(
            &self,
            _message: &str,
            _context: &ReplyContext,
        ) -> Result<String, GenerationError> {
            std::future::pending().await
        }
    }

    /// Both calls must be inside the generator at the same time to pass
    struct BarrierGenerator {
        barrier: tokio::sync::Barrier,
    }

    #[async_trait]
    impl ReplyGenerator for BarrierGenerator {
        async fn generate(
            &self,
            message: &str,
            _context: &ReplyContext,
        ) -> Result<String, GenerationError> {
            self.barrier.wait().await;
            Ok(format!("re: {message}"))
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ActivityLogger for RecordingLogger {
        fn log(&self, event: ActivityEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        started: AtomicUsize,
        completed: AtomicUsize,
    }

    impl DispatchNotifier for RecordingProgress {
        fn on_dispatch_start(&self, _id: MessageId, _customer: &str) {
            self.started.fetch_add(1, Ordering::SeqCst);
        }

        fn on_dispatch_complete(&self, _id: MessageId, _success: bool) {
            self.completed.fetch_add(1, Ordering::SeqCst);
        }
    }

    // ==================== Helpers ====================

    fn categories() -> Vec<String> {
        vec!["General".into(), "Sales".into()]
    }

    /// #1 answered (General), #2 pending (Sales)
    fn sample_store() -> Arc<MessageStore> {
        let store = MessageStore::new(categories());
        let first = store
            .insert(NewMessage::new(
                "john@example.com",
                "What are your business hours?",
                "General",
            ))
            .unwrap();
        store
            .apply_reply(first.id(), "We're open 9-5.", Utc::now())
            .unwrap();
        store
            .insert(NewMessage::new(
                "sarah@example.com",
                "Can you tell me about your pricing?",
                "Sales",
            ))
            .unwrap();
        Arc::new(store)
    }

    fn dispatcher(store: Arc<MessageStore>, generator: Arc<dyn ReplyGenerator>) -> ReplyDispatcher {
        ReplyDispatcher::new(store, generator, AiSettings::default())
    }

    fn snapshot(store: &MessageStore) -> Vec<Message> {
        store.list(&MessageFilter::all())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_pending_message_gets_answered() {
        let store = sample_store();
        let generator = Arc::new(StubGenerator::new("Our pricing starts at $99/month."));
        let dispatcher = dispatcher(store.clone(), generator.clone());

        let updated = dispatcher.generate_and_apply(MessageId::new(2)).await.unwrap();
        assert_eq!(updated.status(), MessageStatus::Answered);

        let stored = store.get(MessageId::new(2)).unwrap();
        assert_eq!(stored.status(), MessageStatus::Answered);
        assert_eq!(stored.response(), Some("Our pricing starts at $99/month."));
        assert!(stored.response_time().is_some());
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_generator_receives_model_and_category() {
        let store = sample_store();
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok("ok".into())]));
        let dispatcher = dispatcher(store, generator.clone());

        dispatcher.generate_and_apply(MessageId::new(2)).await.unwrap();

        let contexts = generator.contexts.lock().unwrap();
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].model, "gpt-4");
        assert_eq!(contexts[0].category, "Sales");
        assert_eq!(contexts[0].max_tokens, 150);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = sample_store();
        let before = snapshot(&store);
        let generator = Arc::new(StubGenerator::new("x"));
        let dispatcher = dispatcher(store.clone(), generator.clone());

        let err = dispatcher.generate_and_apply(MessageId::new(42)).await.unwrap_err();
        assert_eq!(err, DispatchError::NotFound(MessageId::new(42)));
        assert_eq!(snapshot(&store), before);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_answered_message_is_rejected() {
        let store = sample_store();
        let before = snapshot(&store);
        let generator = Arc::new(StubGenerator::new("x"));
        let dispatcher = dispatcher(store.clone(), generator.clone());

        let err = dispatcher.generate_and_apply(MessageId::new(1)).await.unwrap_err();
        assert_eq!(err, DispatchError::AlreadyAnswered(MessageId::new(1)));
        assert_eq!(snapshot(&store), before);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_generation_failure_leaves_message_pending() {
        let store = sample_store();
        let generator = Arc::new(ScriptedGenerator::new(vec![Err(
            GenerationError::RequestFailed("boom".into()),
        )]));
        let dispatcher = dispatcher(store.clone(), generator);

        let err = dispatcher.generate_and_apply(MessageId::new(2)).await.unwrap_err();
        assert_eq!(
            err,
            DispatchError::GenerationFailed(GenerationError::RequestFailed("boom".into()))
        );
        assert!(err.is_retryable());

        let stored = store.get(MessageId::new(2)).unwrap();
        assert!(stored.is_pending());
        assert!(stored.response().is_none());
    }

    #[tokio::test]
    async fn test_retry_after_failure_succeeds() {
        let store = sample_store();
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Err(GenerationError::RequestFailed("flaky".into())),
            Ok("second time lucky".into()),
        ]));
        let dispatcher = dispatcher(store.clone(), generator);

        assert!(dispatcher.generate_and_apply(MessageId::new(2)).await.is_err());
        let updated = dispatcher.generate_and_apply(MessageId::new(2)).await.unwrap();
        assert_eq!(updated.response(), Some("second time lucky"));
    }

    #[tokio::test]
    async fn test_empty_generated_reply_is_a_failure() {
        let store = sample_store();
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok("   ".into())]));
        let dispatcher = dispatcher(store.clone(), generator);

        let err = dispatcher.generate_and_apply(MessageId::new(2)).await.unwrap_err();
        assert_eq!(
            err,
            DispatchError::GenerationFailed(GenerationError::EmptyResponse)
        );
        assert!(store.get(MessageId::new(2)).unwrap().is_pending());
    }

    #[tokio::test]
    async fn test_hung_generator_times_out() {
        let store = sample_store();
        let dispatcher = dispatcher(store.clone(), Arc::new(HangingGenerator))
            .with_timeout(Duration::from_millis(50));

        let err = dispatcher.generate_and_apply(MessageId::new(2)).await.unwrap_err();
        assert_eq!(err, DispatchError::Timeout(Duration::from_millis(50)));
        assert!(store.get(MessageId::new(2)).unwrap().is_pending());
    }

    #[tokio::test]
    async fn test_cancellation_aborts_generation() {
        let store = sample_store();
        let token = CancellationToken::new();
        token.cancel();
        let dispatcher = dispatcher(store.clone(), Arc::new(HangingGenerator))
            .with_cancellation_token(token);

        let err = dispatcher.generate_and_apply(MessageId::new(2)).await.unwrap_err();
        assert_eq!(err, DispatchError::Cancelled);
        assert!(store.get(MessageId::new(2)).unwrap().is_pending());
    }

    #[tokio::test]
    async fn test_concurrent_dispatch_same_message_exactly_one_wins() {
        let store = sample_store();
        let generator =
            Arc::new(StubGenerator::new("only once").with_delay(Duration::from_millis(30)));
        let dispatcher = dispatcher(store.clone(), generator.clone());

        let (a, b) = tokio::join!(
            dispatcher.generate_and_apply(MessageId::new(2)),
            dispatcher.generate_and_apply(MessageId::new(2)),
        );

        let results = [a, b];
        let wins = results.iter().filter(|r| r.is_ok()).count();
        let already = results
            .iter()
            .filter(|r| matches!(r, Err(DispatchError::AlreadyAnswered(_))))
            .count();
        assert_eq!(wins, 1);
        assert_eq!(already, 1);
        assert_eq!(generator.calls(), 1);
        assert_eq!(
            store.get(MessageId::new(2)).unwrap().response(),
            Some("only once")
        );
    }

    #[tokio::test]
    async fn test_concurrent_dispatch_across_tasks() {
        let store = sample_store();
        let generator =
            Arc::new(StubGenerator::new("spawned").with_delay(Duration::from_millis(20)));
        let dispatcher = Arc::new(dispatcher(store.clone(), generator.clone()));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move { dispatcher.generate_and_apply(MessageId::new(2)).await })
            })
            .collect();

        let mut wins = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => wins += 1,
                Err(e) => assert_eq!(e, DispatchError::AlreadyAnswered(MessageId::new(2))),
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_different_messages_dispatch_in_parallel() {
        let store = sample_store();
        store
            .insert(NewMessage::new("c@example.com", "Do you ship abroad?", "General"))
            .unwrap();
        let generator = Arc::new(BarrierGenerator {
            barrier: tokio::sync::Barrier::new(2),
        });
        let dispatcher = dispatcher(store.clone(), generator)
            .with_timeout(Duration::from_secs(2));

        let (a, b) = tokio::join!(
            dispatcher.generate_and_apply(MessageId::new(2)),
            dispatcher.generate_and_apply(MessageId::new(3)),
        );
        assert!(a.is_ok());
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn test_dispatch_locks_are_released() {
        let store = sample_store();
        let dispatcher = dispatcher(store, Arc::new(StubGenerator::new("done")));

        let _ = tokio::join!(
            dispatcher.generate_and_apply(MessageId::new(2)),
            dispatcher.generate_and_apply(MessageId::new(2)),
            dispatcher.generate_and_apply(MessageId::new(99)),
        );
        assert!(dispatcher.in_flight.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_abandoned_dispatches_release_locks() {
        let store = sample_store();
        for customer in ["c@example.com", "d@example.com"] {
            store
                .insert(NewMessage::new(customer, "Any discounts?", "Sales"))
                .unwrap();
        }
        let dispatcher = dispatcher(store.clone(), Arc::new(HangingGenerator));

        for id in 2..=4 {
            let dispatch = dispatcher.generate_and_apply(MessageId::new(id));
            let elapsed = tokio::time::timeout(Duration::from_millis(10), dispatch).await;
            assert!(elapsed.is_err());
        }

        assert!(dispatcher.in_flight.lock().unwrap().is_empty());
        assert!(store.get(MessageId::new(2)).unwrap().is_pending());
    }

    #[tokio::test]
    async fn test_abandoned_waiter_keeps_holder_entry() {
        let store = sample_store();
        let generator =
            Arc::new(StubGenerator::new("held").with_delay(Duration::from_millis(40)));
        let dispatcher = dispatcher(store.clone(), generator);

        let holder = dispatcher.generate_and_apply(MessageId::new(2));
        let waiter = async {
            let waiting = dispatcher.generate_and_apply(MessageId::new(2));
            let _ = tokio::time::timeout(Duration::from_millis(5), waiting).await;
            assert_eq!(dispatcher.in_flight.lock().unwrap().len(), 1);
        };

        let (result, ()) = tokio::join!(holder, waiter);
        assert!(result.is_ok());
        assert!(dispatcher.in_flight.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_all_pending() {
        let store = sample_store();
        store
            .insert(NewMessage::new("c@example.com", "Do you ship abroad?", "General"))
            .unwrap();
        let progress = RecordingProgress::default();
        let dispatcher = dispatcher(store.clone(), Arc::new(StubGenerator::new("thanks!")));

        let outcomes = dispatcher.generate_all_pending(&progress).await;

        let ids: Vec<u64> = outcomes.iter().map(|(id, _)| id.value()).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(outcomes.iter().all(|(_, r)| r.is_ok()));
        assert_eq!(store.counts().pending, 0);
        assert_eq!(progress.started.load(Ordering::SeqCst), 2);
        assert_eq!(progress.completed.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_activity_events_logged() {
        let store = sample_store();
        let logger = Arc::new(RecordingLogger::default());
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Err(GenerationError::RequestFailed("down".into())),
            Ok("hello".into()),
        ]));
        let dispatcher = dispatcher(store, generator).with_activity_logger(logger.clone());

        let _ = dispatcher.generate_and_apply(MessageId::new(2)).await;
        let _ = dispatcher.generate_and_apply(MessageId::new(2)).await;

        let events = logger.events.lock().unwrap();
        assert_eq!(*events, vec!["reply_failed", "reply_generated"]);
    }

    #[test]
    fn test_store_error_mapping() {
        let id = MessageId::new(5);
        assert_eq!(
            DispatchError::from(StoreError::NotFound(id)),
            DispatchError::NotFound(id)
        );
        assert_eq!(
            DispatchError::from(StoreError::AlreadyAnswered(id)),
            DispatchError::AlreadyAnswered(id)
        );
        assert!(!DispatchError::AlreadyAnswered(id).is_retryable());
    }
}
