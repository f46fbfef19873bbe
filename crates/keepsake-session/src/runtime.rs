//! The story session: one owned state object behind observable views.
//!
//! All mutation flows through the interaction handlers on `StorySession` —
//! the single writer class. Background tasks (the particle field, the
//! one-shot unlock transition, celebration bursts) are owned here and torn
//! down with the session, except bursts, which self-terminate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use keepsake_content::ContentPack;
use keepsake_core::clock::{Clock, SystemClock};
use keepsake_core::error::DomainError;
use keepsake_core::rng::{EntropySource, SharedRandom};
use keepsake_core::share::SharePlatform;
use keepsake_effects::burst::{BurstFrame, BurstPlan, spawn_burst};
use keepsake_effects::field::{FieldRunner, FloatingParticle};
use keepsake_gate::application::command_handlers::handle_submit_answer;
use keepsake_gate::application::query_handlers::{GateView, view_gate};
use keepsake_gate::domain::aggregates::GateAccess;
use keepsake_gate::domain::commands::SubmitAnswer;
use keepsake_gate::domain::events::GateEventKind;
use keepsake_narrative::application::command_handlers::{
    handle_advance_screen, handle_choose_outcome, handle_grant_entry, handle_reveal_message,
};
use keepsake_narrative::domain::aggregates::StoryProgress;
use keepsake_narrative::domain::commands::{
    AdvanceScreen, ChooseOutcome, GrantEntry, RevealMessage,
};
use keepsake_narrative::domain::events::{ProposalChoice, ProposalOutcome, StoryEventKind};
use keepsake_narrative::domain::screen::Screen;

use crate::share::{COPY_INDICATOR_DURATION, ShareOutcome, share_with_fallback};
use crate::view::{RevealView, StoryView};

/// Delay between the gate unlocking and the automatic move to Welcome,
/// leaving room for the unlock celebration to play. Not cancellable by
/// further input — only by session teardown.
pub const UNLOCK_DELAY: Duration = Duration::from_millis(3500);

struct SessionInner {
    id: Uuid,
    content: ContentPack,
    clock: Arc<dyn Clock>,
    rng: SharedRandom,
    gate: Mutex<GateAccess>,
    story: Mutex<StoryProgress>,
    link_copied: Mutex<bool>,
    views: watch::Sender<StoryView>,
    burst_tx: mpsc::UnboundedSender<BurstFrame>,
    burst_rx: Mutex<Option<mpsc::UnboundedReceiver<BurstFrame>>>,
    field: FieldRunner,
    unlock_timer: Mutex<Option<JoinHandle<()>>>,
    disposed: AtomicBool,
}

/// Handle to one viewing session. Cheap to clone; all clones share the
/// same state.
#[derive(Clone)]
pub struct StorySession {
    inner: Arc<SessionInner>,
}

impl StorySession {
    /// Starts a session: fresh aggregates at the gate screen, the particle
    /// field running, and the initial view published.
    ///
    /// Must be called within a tokio runtime.
    #[must_use]
    pub fn start(content: ContentPack, clock: Arc<dyn Clock>, rng: SharedRandom) -> Self {
        let id = Uuid::new_v4();
        let gate = GateAccess::new(Uuid::new_v4());
        let story = StoryProgress::new(Uuid::new_v4());

        let initial = StoryView {
            session_id: id,
            screen: story.screen(),
            gate: view_gate(&gate),
            reveal: None,
            outcome: story.outcome(),
            link_copied: false,
        };
        let (views, _) = watch::channel(initial);
        let (burst_tx, burst_rx) = mpsc::unbounded_channel();
        let field = FieldRunner::start(Arc::clone(&clock), Arc::clone(&rng));

        info!(
            session_id = %id,
            timeline_entries = content.timeline.len(),
            reveal_messages = content.reveal_pool.len(),
            "session started"
        );

        Self {
            inner: Arc::new(SessionInner {
                id,
                content,
                clock,
                rng,
                gate: Mutex::new(gate),
                story: Mutex::new(story),
                link_copied: Mutex::new(false),
                views,
                burst_tx,
                burst_rx: Mutex::new(Some(burst_rx)),
                field,
                unlock_timer: Mutex::new(None),
                disposed: AtomicBool::new(false),
            }),
        }
    }

    /// Starts a session with the bundled content pack and production time
    /// and entropy sources.
    #[must_use]
    pub fn start_default() -> Self {
        let fingerprint = ContentPack::bundled_fingerprint();
        info!(%fingerprint, "loading bundled content pack");
        Self::start(
            ContentPack::bundled(),
            Arc::new(SystemClock),
            Arc::new(Mutex::new(EntropySource::from_entropy())),
        )
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Returns the static content pack.
    #[must_use]
    pub fn content(&self) -> &ContentPack {
        &self.inner.content
    }

    /// Returns a subscription to the story view.
    #[must_use]
    pub fn views(&self) -> watch::Receiver<StoryView> {
        self.inner.views.subscribe()
    }

    /// Returns a subscription to the live floating-particle set.
    #[must_use]
    pub fn particles(&self) -> watch::Receiver<Vec<FloatingParticle>> {
        self.inner.field.subscribe()
    }

    /// Takes the burst frame receiver. Yields `Some` exactly once.
    pub fn take_burst_frames(&self) -> Option<mpsc::UnboundedReceiver<BurstFrame>> {
        lock_state(&self.inner.burst_rx).take()
    }

    /// Submits an answer to the gate's current step.
    ///
    /// On the submission that unlocks the gate, entry is granted to the
    /// story and the one-shot Welcome transition is scheduled.
    #[instrument(skip_all, fields(session_id = %self.inner.id))]
    pub fn submit_gate(&self, answer: &str) -> GateView {
        let correlation_id = Uuid::new_v4();
        let command = SubmitAnswer {
            correlation_id,
            answer: answer.to_owned(),
        };

        let events = {
            let mut gate = lock_state(&self.inner.gate);
            handle_submit_answer(&command, &mut gate, self.inner.clock.as_ref())
        };

        if events
            .iter()
            .any(|event| matches!(event.kind, GateEventKind::Unlocked))
        {
            info!(%correlation_id, "gate unlocked; scheduling welcome transition");
            self.grant_entry(correlation_id);
            self.schedule_unlock_transition();
        }

        self.publish();
        view_gate(&lock_state(&self.inner.gate))
    }

    /// Advances to the next screen. The rendering layer only ever offers
    /// the immediate successor; anything else is a contract violation and
    /// is rejected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Transition` for out-of-order targets or an
    /// attempt to leave a locked gate.
    #[instrument(skip_all, fields(session_id = %self.inner.id, to = ?to))]
    pub fn advance(&self, to: Screen) -> Result<Screen, DomainError> {
        let command = AdvanceScreen {
            correlation_id: Uuid::new_v4(),
            to,
        };

        {
            let mut story = lock_state(&self.inner.story);
            handle_advance_screen(&command, &mut story, self.inner.clock.as_ref())?;
        }

        self.publish();
        Ok(to)
    }

    /// Draws a fresh affirmation from the reveal pool, replacing any prior
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Transition` off the reveal screen.
    #[instrument(skip_all, fields(session_id = %self.inner.id))]
    pub fn reveal(&self) -> Result<RevealView, DomainError> {
        let command = RevealMessage {
            correlation_id: Uuid::new_v4(),
        };
        let pool_size = self.inner.content.reveal_pool.len();

        let events = {
            let mut story = lock_state(&self.inner.story);
            let mut rng = lock_state(&*self.inner.rng);
            handle_reveal_message(
                &command,
                &mut story,
                pool_size,
                self.inner.clock.as_ref(),
                &mut *rng,
            )?
        };

        self.publish();

        let index = events
            .iter()
            .find_map(|event| match &event.kind {
                StoryEventKind::MessageRevealed(payload) => Some(payload.index),
                _ => None,
            })
            .ok_or_else(|| DomainError::Runtime("reveal produced no selection".to_owned()))?;

        Ok(RevealView {
            index,
            text: self.inner.content.reveal_pool[index].clone(),
        })
    }

    /// Settles the proposal and triggers the celebration burst — amplified
    /// for the stronger affirmative.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Transition` off the proposal screen and
    /// `DomainError::Validation` once the outcome is settled.
    #[instrument(skip_all, fields(session_id = %self.inner.id, choice = ?choice))]
    pub fn choose(&self, choice: ProposalChoice) -> Result<ProposalOutcome, DomainError> {
        let command = ChooseOutcome {
            correlation_id: Uuid::new_v4(),
            choice,
        };

        {
            let mut story = lock_state(&self.inner.story);
            handle_choose_outcome(&command, &mut story, self.inner.clock.as_ref())?;
        }

        drop(spawn_burst(
            BurstPlan::for_choice(choice.amplified()),
            Arc::clone(&self.inner.rng),
            self.inner.burst_tx.clone(),
        ));
        info!(?choice, "proposal settled");

        self.publish();
        Ok(lock_state(&self.inner.story).outcome())
    }

    /// Shares the session address best-effort: native share first, then a
    /// clipboard copy with a transient indicator, then silence.
    #[instrument(skip_all, fields(session_id = %self.inner.id))]
    pub async fn share(&self, platform: &dyn SharePlatform, url: &str) -> ShareOutcome {
        let outcome = share_with_fallback(platform, url).await;

        if outcome == ShareOutcome::Copied {
            self.set_link_copied(true);
            let session = self.clone();
            drop(tokio::spawn(async move {
                tokio::time::sleep(COPY_INDICATOR_DURATION).await;
                session.set_link_copied(false);
            }));
        }

        outcome
    }

    /// Tears the session down: cancels a pending unlock transition and
    /// stops the particle field. Idempotent. Running bursts are left to
    /// expire on their own — they touch no session state.
    pub fn shutdown(&self) {
        if self.inner.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(timer) = lock_state(&self.inner.unlock_timer).take() {
            timer.abort();
        }
        self.inner.field.stop();
        info!(session_id = %self.inner.id, "session shut down");
    }

    fn grant_entry(&self, correlation_id: Uuid) {
        let command = GrantEntry { correlation_id };
        let mut story = lock_state(&self.inner.story);
        if let Err(error) = handle_grant_entry(&command, &mut story, self.inner.clock.as_ref()) {
            warn!(%error, "entry grant rejected");
        }
    }

    fn schedule_unlock_transition(&self) {
        let session = self.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(UNLOCK_DELAY).await;
            session.complete_unlock_transition();
        });
        *lock_state(&self.inner.unlock_timer) = Some(timer);
    }

    fn complete_unlock_transition(&self) {
        let command = AdvanceScreen {
            correlation_id: Uuid::new_v4(),
            to: Screen::Welcome,
        };
        let result = {
            let mut story = lock_state(&self.inner.story);
            handle_advance_screen(&command, &mut story, self.inner.clock.as_ref())
        };
        match result {
            Ok(_) => {
                info!(session_id = %self.inner.id, "entered welcome");
                self.publish();
            }
            Err(error) => warn!(%error, "unlock transition rejected"),
        }
    }

    fn set_link_copied(&self, value: bool) {
        *lock_state(&self.inner.link_copied) = value;
        self.publish();
    }

    fn publish(&self) {
        let view = {
            let gate = lock_state(&self.inner.gate);
            let story = lock_state(&self.inner.story);
            let reveal = story.reveal_index().map(|index| RevealView {
                index,
                text: self.inner.content.reveal_pool[index].clone(),
            });
            StoryView {
                session_id: self.inner.id,
                screen: story.screen(),
                gate: view_gate(&gate),
                reveal,
                outcome: story.outcome(),
                link_copied: *lock_state(&self.inner.link_copied),
            }
        };
        self.inner.views.send_replace(view);
    }
}

impl std::fmt::Debug for StorySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorySession")
            .field("id", &self.inner.id)
            .field("disposed", &self.inner.disposed.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

fn lock_state<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().expect("session state lock poisoned")
}
