//! Headless present/dismiss run against a simulated grid

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{ensure, Result};
use lightbox_core::{Rect, Size, Vec2};
use lightbox_layout::offset_for_page;
use lightbox_transition::{
    GestureSample, TransitionConfig, TransitionController, TransitionOutcome, TransitionState,
};
use tracing::{debug, info};

use crate::grid::{self, Cell};

/// Frames after which a motion is considered stuck
const MAX_FRAMES: usize = 100_000;

/// What to simulate
#[derive(Debug, Clone)]
pub struct Scenario {
    pub images: usize,
    pub selected: usize,
    /// Page to swipe to before dismissing
    pub page: Option<usize>,
    /// Vertical drag distance for an interactive dismissal
    pub drag: Option<f32>,
    pub drag_secs: f32,
    /// How far the grid scrolls while the gallery is up
    pub grid_scroll: f32,
    pub fps: f32,
    pub viewport: Size,
}

/// What happened
#[derive(Debug, Clone)]
pub struct Report {
    pub present_frames: usize,
    pub present_outcome: Option<TransitionOutcome>,
    pub dismiss_frames: usize,
    pub dismiss_outcome: Option<TransitionOutcome>,
    /// Whether a released drag committed
    pub committed: Option<bool>,
    pub final_state: TransitionState,
    pub surfaces_home: usize,
    pub images: usize,
}

type Outcomes = Rc<RefCell<Vec<TransitionOutcome>>>;

fn recorder(outcomes: &Outcomes) -> impl FnOnce(TransitionOutcome) + 'static {
    let sink = outcomes.clone();
    move |outcome| sink.borrow_mut().push(outcome)
}

/// Tick until no motion runs; returns the number of frames
fn drive(controller: &mut TransitionController<Cell>, dt: f32) -> Result<usize> {
    let mut frames = 0;
    loop {
        frames += 1;
        let running = controller.tick(dt);
        let velocity = controller.motion_velocity();
        if let Some(scene) = controller.scene() {
            debug!(
                frame = frames,
                ?velocity,
                scrim = scene.scrim_opacity,
                chrome = scene.chrome_opacity,
                "frame"
            );
        }
        if !running {
            return Ok(frames);
        }
        ensure!(frames < MAX_FRAMES, "transition did not settle after {MAX_FRAMES} frames");
    }
}

/// Present the gallery, optionally page and scroll, then dismiss it
pub fn run(config: TransitionConfig, scenario: &Scenario) -> Result<Report> {
    ensure!(scenario.images > 0, "at least one image is required");
    ensure!(
        scenario.selected < scenario.images,
        "selected image {} is out of range for {} images",
        scenario.selected,
        scenario.images
    );
    ensure!(scenario.fps > 0.0, "fps must be positive");
    if let Some(page) = scenario.page {
        ensure!(page < scenario.images, "page {page} is out of range");
    }

    let dt = 1.0 / scenario.fps;
    let container = Rect::from(scenario.viewport);
    let cells = grid::build(scenario.images, container);
    let mut controller = TransitionController::new(config, container);

    info!(
        images = scenario.images,
        selected = scenario.selected,
        "presenting gallery"
    );
    let presented: Outcomes = Rc::default();
    controller.prepare(cells.clone(), scenario.selected);
    controller.begin_presentation();
    controller
        .animator_for_presentation()
        .run(&mut controller, recorder(&presented));
    let present_frames = drive(&mut controller, dt)?;

    if let Some(page) = scenario.page {
        info!(page, "paging");
        controller.set_content_offset(offset_for_page(page, scenario.viewport.width));
    }
    if scenario.grid_scroll != 0.0 {
        grid::scroll(&cells, scenario.grid_scroll);
    }

    let dismissed: Outcomes = Rc::default();
    let mut committed = None;
    let dismiss_frames = match scenario.drag {
        Some(distance) => {
            info!(distance, "dragging to dismiss");
            controller.begin_interactive_dismissal();
            controller
                .animator_for_dismissal()
                .run(&mut controller, recorder(&dismissed));

            let steps = (scenario.drag_secs * scenario.fps).ceil().max(1.0) as usize;
            for step in 1..=steps {
                let dy = distance * step as f32 / steps as f32;
                controller.update_interactive_dismissal(GestureSample::new(Vec2::new(0.0, dy)));
                controller.tick(dt);
            }
            let commit = controller.finish_interactive_dismissal();
            info!(committed = commit, "released");
            committed = Some(commit);
            steps + drive(&mut controller, dt)?
        }
        None => {
            info!("dismissing gallery");
            controller.begin_dismissal();
            controller
                .animator_for_dismissal()
                .run(&mut controller, recorder(&dismissed));
            drive(&mut controller, dt)?
        }
    };

    let final_state = controller.state();
    // A cancelled drag leaves the gallery up; close it so the grid gets its images back
    if final_state == TransitionState::Presented {
        controller.abort();
    }

    let present_outcome = presented.borrow().first().copied();
    let dismiss_outcome = dismissed.borrow().first().copied();
    Ok(Report {
        present_frames,
        present_outcome,
        dismiss_frames,
        dismiss_outcome,
        committed,
        final_state,
        surfaces_home: grid::surfaces_home(&cells),
        images: scenario.images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Scenario {
        Scenario {
            images: 5,
            selected: 1,
            page: None,
            drag: None,
            drag_secs: 0.2,
            grid_scroll: 0.0,
            fps: 60.0,
            viewport: Size::new(390.0, 844.0),
        }
    }

    fn quick() -> TransitionConfig {
        TransitionConfig {
            duration_secs: 0.25,
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip() {
        let report = run(quick(), &scenario()).unwrap();
        assert_eq!(report.present_outcome, Some(TransitionOutcome::Completed));
        assert_eq!(report.dismiss_outcome, Some(TransitionOutcome::Completed));
        assert_eq!(report.final_state, TransitionState::Idle);
        assert_eq!(report.surfaces_home, 5);
        assert!((15..=16).contains(&report.present_frames));
    }

    #[test]
    fn test_paged_and_scrolled_dismissal() {
        let scenario = Scenario {
            page: Some(4),
            grid_scroll: -120.0,
            ..scenario()
        };
        let report = run(quick(), &scenario).unwrap();
        assert_eq!(report.final_state, TransitionState::Idle);
        assert_eq!(report.surfaces_home, 5);
    }

    #[test]
    fn test_short_drag_cancels() {
        let scenario = Scenario {
            drag: Some(40.0),
            drag_secs: 0.5,
            ..scenario()
        };
        let report = run(quick(), &scenario).unwrap();
        assert_eq!(report.committed, Some(false));
        assert_eq!(report.dismiss_outcome, Some(TransitionOutcome::Cancelled));
        assert_eq!(report.final_state, TransitionState::Presented);
        assert_eq!(report.surfaces_home, 5);
    }

    #[test]
    fn test_long_drag_commits() {
        let scenario = Scenario {
            drag: Some(400.0),
            ..scenario()
        };
        let report = run(quick(), &scenario).unwrap();
        assert_eq!(report.committed, Some(true));
        assert_eq!(report.final_state, TransitionState::Idle);
    }

    #[test]
    fn test_bad_selection_is_an_error() {
        let scenario = Scenario {
            selected: 9,
            ..scenario()
        };
        let err = run(quick(), &scenario).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
