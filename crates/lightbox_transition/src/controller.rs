//! Gallery transition controller
//!
//! The controller is the single entry point the host talks to. It keeps at
//! most one [`GallerySession`], steps the running motion once per frame, and
//! fires completions after the state machine and surface ownership have
//! settled.
//!
//! # Example
//!
//! ```ignore
//! let mut controller = TransitionController::new(TransitionConfig::default(), window_frame);
//! controller.prepare(thumbnails, tapped_index);
//! controller.begin_presentation();
//! controller
//!     .animator_for_presentation()
//!     .run(&mut controller, |outcome| tracing::info!(?outcome, "gallery up"));
//!
//! // Every frame:
//! controller.tick(dt);
//! draw(controller.scene());
//! ```
//!
//! Caller mistakes (presenting twice, dismissing while idle, an empty or
//! out-of-range selection) are contract violations: they are logged with
//! `tracing::error!` and panic with the [`ContractViolation`] message.

use std::time::Duration;

use lightbox_animation::{FrameScheduler, Motion, MotionId, Spring, SpringConfig, Tween};
use lightbox_core::{ContractViolation, Rect, SelectableImage, Size};
use lightbox_layout::offset_for_page;

use crate::animator::{TransitionAnimator, TransitionOutcome};
use crate::config::TransitionConfig;
use crate::dismissal::{initial_spring_velocity, InteractiveDismissal};
use crate::gesture::GestureSample;
use crate::scene::GalleryScene;
use crate::session::{Completion, GallerySession, MotionKind, RunningMotion};
use crate::state::{transition_events, TransitionDirection, TransitionState};

#[track_caller]
fn violated(violation: ContractViolation) -> ! {
    tracing::error!(%violation, "gallery transition contract violated");
    panic!("{violation}");
}

/// Drives present, dismiss, and interactive dismissal of a paged gallery
pub struct TransitionController<H: SelectableImage> {
    config: TransitionConfig,
    container: Rect,
    prepared: Option<(Vec<H>, usize)>,
    session: Option<GallerySession<H>>,
    scheduler: FrameScheduler,
    /// Seconds of ticks since the controller was created
    clock: f32,
}

impl<H: SelectableImage> TransitionController<H> {
    /// Create a controller for a gallery filling `container` (screen coordinates)
    pub fn new(config: TransitionConfig, container: Rect) -> Self {
        Self {
            config,
            container,
            prepared: None,
            session: None,
            scheduler: FrameScheduler::new(),
            clock: 0.0,
        }
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Move or resize the gallery container
    ///
    /// Takes effect at the next presentation; a running session keeps the
    /// layout it was opened with.
    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    pub fn state(&self) -> TransitionState {
        self.session
            .as_ref()
            .map_or(TransitionState::Idle, |session| session.state)
    }

    pub fn session(&self) -> Option<&GallerySession<H>> {
        self.session.as_ref()
    }

    /// What to draw this frame, if a session is active
    pub fn scene(&self) -> Option<&GalleryScene> {
        self.session.as_ref().map(|session| &session.scene)
    }

    /// Page in view, if a session is active
    pub fn frontmost_page(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.frontmost_page())
    }

    /// Returns true while a motion is driving the scene
    pub fn is_animating(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.motion.is_some())
    }

    /// Speed of the running motion, in progress per second
    pub fn motion_velocity(&self) -> Option<f32> {
        let motion = self.session.as_ref()?.motion.as_ref()?;
        self.scheduler.velocity(motion.id)
    }

    /// Choose the images and the tapped one for the next presentation
    ///
    /// Preparing again before presenting replaces the earlier selection.
    ///
    /// # Panics
    ///
    /// Panics if `handles` is empty, `selected` is out of range, or a
    /// session is already active.
    pub fn prepare(&mut self, handles: Vec<H>, selected: usize) {
        let state = self.state();
        if state.is_active() {
            violated(ContractViolation::invalid_state("prepare", state.name()));
        }
        if handles.is_empty() {
            violated(ContractViolation::EmptyHandles);
        }
        if selected >= handles.len() {
            violated(ContractViolation::SelectedIndexOutOfRange {
                index: selected,
                count: handles.len(),
            });
        }
        tracing::debug!(images = handles.len(), selected, "gallery prepared");
        self.prepared = Some((handles, selected));
    }

    /// Open a session on the prepared selection and enter `Presenting`
    ///
    /// Every image surface moves from its thumbnail to the gallery here.
    /// The morph itself starts when the presentation animator runs.
    ///
    /// # Panics
    ///
    /// Panics if nothing was prepared, a session is already active, or a
    /// thumbnail cannot hand over its surface.
    pub fn begin_presentation(&mut self) {
        let state = self.state();
        if state.is_active() {
            violated(ContractViolation::invalid_state("begin_presentation", state.name()));
        }
        let Some((handles, selected)) = self.prepared.take() else {
            violated(ContractViolation::NotPrepared);
        };

        let scene = GalleryScene::new(self.config.scrim, Size::ZERO, 0.0);
        let mut session = match GallerySession::new(handles, selected, self.container, scene) {
            Ok(session) => session,
            Err(violation) => violated(violation),
        };
        session.transition(transition_events::BEGIN_PRESENT);
        tracing::info!(images = session.handles.len(), selected, "presenting gallery");
        self.session = Some(session);
    }

    /// Enter `Dismissing` for a non-interactive dismissal
    ///
    /// The image starts back toward its thumbnail when the dismissal
    /// animator runs.
    ///
    /// # Panics
    ///
    /// Panics unless the gallery is `Presented`.
    pub fn begin_dismissal(&mut self) {
        let session = self.presented_session("begin_dismissal");
        session.transition(transition_events::BEGIN_DISMISS);
        tracing::info!(page = session.frontmost_page(), "dismissing gallery");
    }

    /// Enter `Dismissing` with the frontmost image following a drag
    ///
    /// Run the dismissal animator right away; its completion fires once the
    /// drag is released and the resulting motion settles.
    ///
    /// # Panics
    ///
    /// Panics unless the gallery is `Presented`.
    pub fn begin_interactive_dismissal(&mut self) {
        let session = self.presented_session("begin_interactive_dismissal");
        session.transition(transition_events::BEGIN_DISMISS);

        let page = session.frontmost_page();
        let origin = session.scene.images[page].frame;
        session.interaction = Some(InteractiveDismissal::new(
            page,
            origin,
            session.layout.viewport().height,
        ));
        tracing::debug!(page, "interactive dismissal began");
    }

    /// Move the dragged image and fade the gallery with the drag distance
    ///
    /// # Panics
    ///
    /// Panics unless an interactive dismissal is in progress and not yet released.
    pub fn update_interactive_dismissal(&mut self, sample: GestureSample) {
        let clock = self.clock;
        let commit_fraction = self.config.dismiss.commit_fraction;
        let session = self.dragging_session("update_interactive_dismissal");
        let Some(interaction) = session.interaction.as_mut() else {
            violated(ContractViolation::invalid_state(
                "update_interactive_dismissal",
                "dismissing",
            ));
        };
        interaction.update(clock, sample);

        let page = interaction.page();
        let frame = interaction.current_frame();
        let progress = interaction.progress();

        let scene = &mut session.scene;
        for (index, image) in scene.images.iter_mut().enumerate() {
            if index == page {
                image.frame = frame;
            } else {
                image.opacity = 1.0 - progress;
            }
        }
        scene.scrim_opacity = 1.0 - progress;
        // Chrome is gone by the time a release would commit
        scene.chrome_opacity = (1.0 - progress / commit_fraction).max(0.0);
        tracing::trace!(page, progress, "interactive dismissal moved");
    }

    /// Release the drag, deciding from distance and velocity whether to commit
    ///
    /// Returns true if the dismissal commits.
    ///
    /// # Panics
    ///
    /// Panics unless an interactive dismissal is in progress and not yet released.
    pub fn finish_interactive_dismissal(&mut self) -> bool {
        let dismiss = self.config.dismiss.clone();
        let committed = self
            .dragging_session("finish_interactive_dismissal")
            .interaction
            .as_ref()
            .is_some_and(|interaction| interaction.should_commit(&dismiss));
        self.commit_or_cancel_interactive_dismissal(committed);
        committed
    }

    /// Release the drag with an explicit decision
    ///
    /// Committing springs the image home to its thumbnail; cancelling
    /// springs it back to its page and the gallery stays presented. Either
    /// spring starts at the release velocity.
    ///
    /// # Panics
    ///
    /// Panics unless an interactive dismissal is in progress and not yet released.
    pub fn commit_or_cancel_interactive_dismissal(&mut self, committed: bool) {
        let session = self.dragging_session("commit_or_cancel_interactive_dismissal");
        let Some(interaction) = session.interaction.as_mut() else {
            violated(ContractViolation::invalid_state(
                "commit_or_cancel_interactive_dismissal",
                "dismissing",
            ));
        };
        interaction.release();
        let page = interaction.page();
        let velocity_y = interaction.velocity().y;

        let (kind, morph) = if committed {
            (MotionKind::DismissCommit, session.closing_morph())
        } else {
            (MotionKind::DismissCancel, session.restoring_morph())
        };
        let from = session.scene.images[page].frame;
        let to = morph.target(page).unwrap_or(from);
        let velocity = initial_spring_velocity(velocity_y, from, to);
        tracing::debug!(committed, velocity_y, velocity, "interactive dismissal released");

        let id = start_spring(&mut self.scheduler, &self.config, velocity);
        if let Some(session) = self.session.as_mut() {
            session.motion = Some(RunningMotion { id, kind, morph });
        }
    }

    /// Update the paging scroll position reported by the host
    ///
    /// Offsets are clamped to the content. Scroll events outside
    /// `Presented`, including late ones after the gallery closed, are ignored.
    pub fn set_content_offset(&mut self, offset_x: f32) {
        let Some(session) = self.session.as_mut() else {
            tracing::trace!(offset_x, "ignored content offset without a session");
            return;
        };
        if session.state != TransitionState::Presented || !offset_x.is_finite() {
            tracing::trace!(offset_x, state = session.state.name(), "ignored content offset");
            return;
        }
        let max = (session.scene.content_size.width - session.layout.viewport().width).max(0.0);
        session.scene.content_offset = offset_x.clamp(0.0, max);
    }

    /// Duration of the transition in `direction`
    pub fn transition_duration(&self, _direction: TransitionDirection) -> Duration {
        self.config.duration()
    }

    pub fn animator_for(&self, direction: TransitionDirection) -> TransitionAnimator {
        TransitionAnimator::for_direction(direction, self.transition_duration(direction))
    }

    pub fn animator_for_presentation(&self) -> TransitionAnimator {
        self.animator_for(TransitionDirection::Presenting)
    }

    pub fn animator_for_dismissal(&self) -> TransitionAnimator {
        self.animator_for(TransitionDirection::Dismissing)
    }

    /// Advance running motions by `dt` seconds and update the scene
    ///
    /// Completions fire from inside this call. Returns true while a motion
    /// is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.clock += dt;
        }
        let finished = self.scheduler.tick(dt);

        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(motion) = session.motion.as_ref() else {
            return false;
        };
        let id = motion.id;
        if let Some(t) = self.scheduler.value(id) {
            motion.morph.apply(&mut session.scene, t);
            tracing::trace!(frame = self.scheduler.frame(), t, "gallery scene updated");
        }

        if finished.contains(&id) {
            self.finish_motion();
        }
        self.is_animating()
    }

    /// End the session immediately
    ///
    /// Surfaces go back to their thumbnails and a pending completion
    /// receives [`TransitionOutcome::Cancelled`]. Does nothing when idle.
    pub fn abort(&mut self) {
        self.prepared = None;
        let Some(mut session) = self.session.take() else {
            return;
        };
        if let Some(motion) = session.motion.take() {
            self.scheduler.remove(motion.id);
        }
        let completion = session.completion.take();
        tracing::info!(state = session.state.name(), "gallery session aborted");
        drop(session);

        if let Some(completion) = completion {
            completion(TransitionOutcome::Cancelled);
        }
    }

    pub(crate) fn run_present(&mut self, completion: Completion) {
        let Some(session) = self.session.as_mut() else {
            violated(ContractViolation::invalid_state("presentation animator", "idle"));
        };
        if session.state != TransitionState::Presenting {
            violated(ContractViolation::invalid_state(
                "presentation animator",
                session.state.name(),
            ));
        }
        let Some(morph) = session.present_morph.take() else {
            violated(ContractViolation::invalid_state(
                "presentation animator",
                "already presenting",
            ));
        };

        let tween = Tween::new(self.config.duration_secs, self.config.easing);
        let id = self.scheduler.start(Motion::tween(tween));
        session.motion = Some(RunningMotion {
            id,
            kind: MotionKind::Present,
            morph,
        });
        session.completion = Some(completion);
    }

    pub(crate) fn run_dismiss(&mut self, completion: Completion) {
        let Some(session) = self.session.as_mut() else {
            violated(ContractViolation::invalid_state("dismissal animator", "idle"));
        };
        if session.state != TransitionState::Dismissing {
            violated(ContractViolation::invalid_state(
                "dismissal animator",
                session.state.name(),
            ));
        }
        if session.completion.is_some() {
            violated(ContractViolation::invalid_state(
                "dismissal animator",
                "already dismissing",
            ));
        }
        session.completion = Some(completion);

        // A drag starts its own motion on release
        if session.motion.is_some() || session.interaction.is_some() {
            return;
        }
        let morph = session.closing_morph();
        let id = start_spring(&mut self.scheduler, &self.config, 0.0);
        session.motion = Some(RunningMotion {
            id,
            kind: MotionKind::DismissCommit,
            morph,
        });
    }

    fn presented_session(&mut self, operation: &'static str) -> &mut GallerySession<H> {
        match self.session.as_mut() {
            Some(session) if session.state == TransitionState::Presented => session,
            Some(session) => violated(ContractViolation::invalid_state(
                operation,
                session.state.name(),
            )),
            None => violated(ContractViolation::invalid_state(operation, "idle")),
        }
    }

    fn dragging_session(&mut self, operation: &'static str) -> &mut GallerySession<H> {
        match self.session.as_mut() {
            Some(session)
                if session
                    .interaction
                    .as_ref()
                    .is_some_and(|interaction| !interaction.is_released()) =>
            {
                session
            }
            Some(session) => violated(ContractViolation::invalid_state(
                operation,
                session.state.name(),
            )),
            None => violated(ContractViolation::invalid_state(operation, "idle")),
        }
    }

    fn finish_motion(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(motion) = session.motion.take() else {
            return;
        };
        self.scheduler.remove(motion.id);
        motion.morph.apply(&mut session.scene, 1.0);

        let outcome = match motion.kind {
            MotionKind::Present => {
                session.scene.content_offset =
                    offset_for_page(session.selected, session.layout.viewport().width);
                session.settle_presented();
                session.transition(transition_events::PRESENT_DONE);
                TransitionOutcome::Completed
            }
            MotionKind::DismissCancel => {
                session.interaction = None;
                session.settle_presented();
                session.transition(transition_events::DISMISS_CANCELLED);
                TransitionOutcome::Cancelled
            }
            MotionKind::DismissCommit => {
                let returned = session.return_surfaces();
                session.transition(transition_events::DISMISS_DONE);
                tracing::debug!(returned, "image surfaces returned to thumbnails");
                TransitionOutcome::Completed
            }
        };

        let completion = session.completion.take();
        if session.state == TransitionState::Idle {
            self.session = None;
        }
        tracing::info!(?outcome, state = self.state().name(), "gallery transition finished");

        if let Some(completion) = completion {
            completion(outcome);
        }
    }
}

/// Start a progress spring that settles within the configured duration
fn start_spring(scheduler: &mut FrameScheduler, config: &TransitionConfig, velocity: f32) -> MotionId {
    let spring_config = SpringConfig::settling_in(config.duration_secs, config.dismiss.damping_ratio);
    let spring = Spring::progress(spring_config).with_velocity(velocity);
    scheduler.start(Motion::spring(spring, Some(config.duration_secs)))
}

impl<H: SelectableImage> std::fmt::Debug for TransitionController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionController")
            .field("state", &self.state())
            .field("container", &self.container)
            .field("prepared", &self.prepared.is_some())
            .field("session", &self.session)
            .finish()
    }
}
