//! Fallback across transport clients and model identifiers.
//!
//! Both ordered lists are immutable configuration handed in at construction;
//! nothing here mutates shared state, so any number of requests can run the
//! same chain concurrently, each with its own [`RetrySession`].
//!
//! The iteration order is: models fastest, transport clients slowest. Within
//! one transport client a rate-limited attempt advances the model index for
//! free; once the model list wraps, a backoff sleep is charged and the list
//! restarts at index zero. Every transport client gets its own full attempt
//! budget. Transient (non-rate-limit) failures skip straight to the next
//! transport client without any backoff.

use std::{future::Future, pin::Pin, time::Duration};

use tracing::warn;

use crate::{
    backoff::BackoffPolicy,
    error::{FailureKind, Result, RiposteError},
    model::{GeminiModel, Model},
};

/// Immutable retry/fallback configuration shared by all request paths.
#[derive(Debug, Clone)]
pub struct FallbackConfig {
    /// Ordered model identifiers, preferred first.
    pub models: Vec<Model>,
    /// Attempt budget per transport client.
    pub max_attempts: u32,
    pub backoff: BackoffPolicy,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            models: vec![
                Model::Gemini(GeminiModel::Flash25),
                Model::Gemini(GeminiModel::FlashLiteLatest),
            ],
            max_attempts: 5,
            backoff: BackoffPolicy::default(),
        }
    }
}

/// Decision taken after a rate-limited attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// More models remain for this transport client; retry without delay.
    NextModel,
    /// Model list exhausted: sleep this long, then restart at model zero.
    Backoff(Duration),
    /// Attempt budget spent; move on to the next transport client.
    GiveUp,
}

/// Mutable retry state scoped to one (request × transport client).
///
/// Pure state machine: it decides, the caller sleeps. The advance-or-backoff
/// sequencing is testable without timers.
#[derive(Debug)]
pub struct RetrySession {
    model_count: usize,
    model_index: usize,
    attempt: u32,
    max_attempts: u32,
    backoff: BackoffPolicy,
}

impl RetrySession {
    fn new(model_count: usize, max_attempts: u32, backoff: BackoffPolicy) -> Self {
        Self {
            model_count,
            model_index: 0,
            attempt: 0,
            max_attempts,
            backoff,
        }
    }

    pub fn model_index(&self) -> usize {
        self.model_index
    }

    /// Register a rate-limited failure and decide how to continue.
    ///
    /// The (client, model) pair always strictly advances or wraps behind a
    /// backoff delay; the same pair is never retried back-to-back.
    pub fn on_rate_limited(&mut self) -> Advance {
        self.attempt += 1;
        if self.attempt >= self.max_attempts {
            return Advance::GiveUp;
        }
        if self.model_index + 1 < self.model_count {
            self.model_index += 1;
            Advance::NextModel
        } else {
            self.model_index = 0;
            Advance::Backoff(self.backoff.delay_for(self.attempt))
        }
    }
}

/// Ordered list of transport backends plus the shared retry configuration.
#[derive(Debug)]
pub struct FallbackChain<B> {
    backends: Vec<B>,
    config: FallbackConfig,
}

impl<B> FallbackChain<B> {
    pub fn new(backends: Vec<B>, config: FallbackConfig) -> Result<Self> {
        if backends.is_empty() {
            return Err(RiposteError::InvalidRequest(
                "at least one transport client is required".into(),
            ));
        }
        if config.models.is_empty() {
            return Err(RiposteError::InvalidRequest(
                "at least one model identifier is required".into(),
            ));
        }
        Ok(Self { backends, config })
    }

    pub fn backends(&self) -> &[B] {
        &self.backends
    }

    pub fn model_at(&self, index: usize) -> &Model {
        &self.config.models[index]
    }

    /// Fresh per-client retry state.
    pub fn session(&self) -> RetrySession {
        RetrySession::new(
            self.config.models.len(),
            self.config.max_attempts,
            self.config.backoff.clone(),
        )
    }

    /// Drive `attempt` through the (transport client × model) grid until one
    /// call succeeds, a fatal error surfaces, or the whole configuration is
    /// exhausted. On exhaustion the caller sees [`RiposteError::Exhausted`]
    /// and the last underlying failure goes to the log.
    pub async fn run<'s, T, F>(&'s self, mut attempt: F) -> Result<T>
    where
        F: FnMut(&'s B, &'s Model) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 's>>,
    {
        let mut last_err: Option<RiposteError> = None;

        for (client_index, backend) in self.backends.iter().enumerate() {
            let mut session = self.session();
            loop {
                let model = self.model_at(session.model_index());
                let err = match attempt(backend, model).await {
                    Ok(value) => return Ok(value),
                    Err(err) => err,
                };

                match err.failure_kind() {
                    FailureKind::Fatal => return Err(err),
                    FailureKind::Transient => {
                        warn!(client_index, ?model, error = %err, "attempt failed, switching transport client");
                        last_err = Some(err);
                        break;
                    }
                    FailureKind::RateLimited => match session.on_rate_limited() {
                        Advance::NextModel => {
                            warn!(client_index, ?model, error = %err, "rate limited, advancing model");
                        }
                        Advance::Backoff(delay) => {
                            warn!(client_index, ?model, error = %err, ?delay, "rate limited, backing off");
                            tokio::time::sleep(delay).await;
                        }
                        Advance::GiveUp => {
                            warn!(client_index, ?model, error = %err, "attempt budget spent, switching transport client");
                            last_err = Some(err);
                            break;
                        }
                    },
                }
            }
        }

        if let Some(err) = last_err {
            warn!(error = %err, "all transport clients and models exhausted");
        }
        Err(RiposteError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        collections::VecDeque,
        sync::Mutex,
        time::Duration,
    };

    fn config() -> FallbackConfig {
        FallbackConfig::default()
    }

    fn rate_limited() -> RiposteError {
        RiposteError::Backend("status 429: quota exceeded".into())
    }

    fn transient() -> RiposteError {
        RiposteError::Backend("connection refused".into())
    }

    #[test]
    fn advances_models_before_sleeping() {
        let mut session = RetrySession::new(2, 5, BackoffPolicy::default());
        assert_eq!(session.on_rate_limited(), Advance::NextModel);
        assert_eq!(session.model_index(), 1);
        assert_eq!(
            session.on_rate_limited(),
            Advance::Backoff(Duration::from_secs(8))
        );
        assert_eq!(session.model_index(), 0);
    }

    #[test]
    fn single_model_always_backs_off() {
        let mut session = RetrySession::new(1, 5, BackoffPolicy::default());
        assert_eq!(
            session.on_rate_limited(),
            Advance::Backoff(Duration::from_secs(4))
        );
        assert_eq!(session.model_index(), 0);
    }

    #[test]
    fn gives_up_once_budget_is_spent() {
        let mut session = RetrySession::new(2, 5, BackoffPolicy::default());
        let decisions: Vec<Advance> = (0..5).map(|_| session.on_rate_limited()).collect();
        assert_eq!(
            decisions,
            vec![
                Advance::NextModel,
                Advance::Backoff(Duration::from_secs(8)),
                Advance::NextModel,
                Advance::Backoff(Duration::from_secs(32)),
                Advance::GiveUp,
            ]
        );
    }

    struct Script {
        outcomes: Mutex<VecDeque<Result<&'static str>>>,
        calls: Mutex<Vec<(&'static str, Model)>>,
    }

    impl Script {
        fn new(outcomes: Vec<Result<&'static str>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(&'static str, Model)> {
            self.calls.lock().unwrap().clone()
        }
    }

    async fn drive(
        backends: Vec<&'static str>,
        script: &Script,
    ) -> Result<&'static str> {
        let chain = FallbackChain::new(backends, config()).unwrap();
        chain
            .run(|backend, model| {
                script.calls.lock().unwrap().push((*backend, model.clone()));
                let outcome = script
                    .outcomes
                    .lock()
                    .unwrap()
                    .pop_front()
                    .expect("script exhausted");
                Box::pin(async move { outcome })
            })
            .await
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limit_advances_model_without_sleeping() {
        let script = Script::new(vec![Err(rate_limited()), Ok("done")]);
        let start = tokio::time::Instant::now();

        let result = drive(vec!["primary"], &script).await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(
            script.calls(),
            vec![
                ("primary", Model::Gemini(GeminiModel::Flash25)),
                ("primary", Model::Gemini(GeminiModel::FlashLiteLatest)),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn model_wrap_sleeps_once_and_client_switch_does_not() {
        let script = Script::new(vec![
            Err(rate_limited()),
            Err(rate_limited()),
            Err(transient()),
            Ok("done"),
        ]);
        let start = tokio::time::Instant::now();

        let result = drive(vec!["primary", "proxy"], &script).await;

        assert_eq!(result.unwrap(), "done");
        // One wrap of the two-model list at attempt 2: a single 8 s sleep.
        assert_eq!(start.elapsed(), Duration::from_secs(8));
        assert_eq!(
            script.calls(),
            vec![
                ("primary", Model::Gemini(GeminiModel::Flash25)),
                ("primary", Model::Gemini(GeminiModel::FlashLiteLatest)),
                ("primary", Model::Gemini(GeminiModel::Flash25)),
                ("proxy", Model::Gemini(GeminiModel::Flash25)),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn transient_failure_switches_client_immediately() {
        let script = Script::new(vec![Err(transient()), Ok("done")]);
        let start = tokio::time::Instant::now();

        let result = drive(vec!["primary", "proxy"], &script).await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(
            script.calls(),
            vec![
                ("primary", Model::Gemini(GeminiModel::Flash25)),
                ("proxy", Model::Gemini(GeminiModel::Flash25)),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fatal_failure_propagates_without_fallback() {
        let script = Script::new(vec![Err(RiposteError::InvalidRequest("bad".into()))]);

        let result = drive(vec!["primary", "proxy"], &script).await;

        assert!(matches!(result, Err(RiposteError::InvalidRequest(_))));
        assert_eq!(script.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn exhaustion_surfaces_a_single_terminal_error() {
        // Five rate-limited attempts per client, two clients.
        let script = Script::new((0..10).map(|_| Err(rate_limited())).collect());

        let result = drive(vec!["primary", "proxy"], &script).await;

        assert!(matches!(result, Err(RiposteError::Exhausted)));
        assert_eq!(script.calls().len(), 10);
    }

    #[tokio::test]
    async fn empty_configuration_is_rejected() {
        let no_backends: Result<FallbackChain<&'static str>> =
            FallbackChain::new(vec![], config());
        assert!(matches!(
            no_backends,
            Err(RiposteError::InvalidRequest(_))
        ));

        let no_models = FallbackChain::new(
            vec!["primary"],
            FallbackConfig {
                models: vec![],
                ..config()
            },
        );
        assert!(matches!(no_models, Err(RiposteError::InvalidRequest(_))));
    }
}
