//! One gallery session, from presentation start to the end of dismissal
//!
//! A session owns the handle sequence, the paged layout computed for it, and
//! every image surface borrowed from the thumbnails. Dropping a session
//! returns whatever surfaces it still holds, so no exit path can strand a
//! surface in the gallery.

use lightbox_animation::{Interpolate, MotionId};
use lightbox_core::{ContractViolation, Rect, SelectableImage, SurfaceOwner, SurfaceRegistry, Vec2};
use lightbox_layout::{
    docked_frames, offset_for_page, page_for_offset, paged_layout, CoordinateSpace, LayoutMorph,
    PagedLayout,
};

use crate::animator::TransitionOutcome;
use crate::dismissal::InteractiveDismissal;
use crate::scene::{GalleryScene, ImageLayer};
use crate::state::TransitionState;

pub(crate) type Completion = Box<dyn FnOnce(TransitionOutcome)>;

/// What a running motion does when it finishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MotionKind {
    Present,
    DismissCommit,
    DismissCancel,
}

/// Start and end of every animated scene value
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SceneMorph {
    pub layout: LayoutMorph,
    pub opacity: Vec<(f32, f32)>,
    pub scrim: (f32, f32),
    pub chrome: (f32, f32),
}

impl SceneMorph {
    /// Write the scene at progress `t`
    ///
    /// Frames follow the progress past 1.0 when a spring overshoots;
    /// opacities stay within [0, 1].
    pub fn apply(&self, scene: &mut GalleryScene, t: f32) {
        for (index, image) in scene.images.iter_mut().enumerate() {
            if let Some(track) = self.layout.track(index) {
                image.frame = track.frame_at(t);
                image.corner_radius = track.radius_at(t);
            }
            if let Some(&(from, to)) = self.opacity.get(index) {
                image.opacity = fade(from, to, t);
            }
        }
        scene.scrim_opacity = fade(self.scrim.0, self.scrim.1, t);
        scene.chrome_opacity = fade(self.chrome.0, self.chrome.1, t);
    }

    /// Where image `index` ends up
    pub fn target(&self, index: usize) -> Option<Rect> {
        self.layout.track(index).map(|track| track.end)
    }
}

fn fade(from: f32, to: f32, t: f32) -> f32 {
    Interpolate::lerp(&from, &to, t).clamp(0.0, 1.0)
}

/// The motion currently driving the scene
#[derive(Debug)]
pub(crate) struct RunningMotion {
    pub id: MotionId,
    pub kind: MotionKind,
    pub morph: SceneMorph,
}

/// Session state for one presented gallery
pub struct GallerySession<H: SelectableImage> {
    pub(crate) handles: Vec<H>,
    pub(crate) selected: usize,
    pub(crate) state: TransitionState,
    pub(crate) container: Rect,
    pub(crate) layout: PagedLayout,
    pub(crate) surfaces: SurfaceRegistry<H::Surface>,
    pub(crate) scene: GalleryScene,
    pub(crate) thumbnail_radii: Vec<f32>,
    pub(crate) present_morph: Option<SceneMorph>,
    pub(crate) motion: Option<RunningMotion>,
    pub(crate) completion: Option<Completion>,
    pub(crate) interaction: Option<InteractiveDismissal>,
}

impl<H: SelectableImage> GallerySession<H> {
    /// Validate the selection, lay out the gallery, and borrow every surface
    ///
    /// Validation happens before any layout work or thumbnail query. If a
    /// thumbnail cannot hand over its surface, the surfaces taken so far go
    /// back and the error is returned.
    pub fn new(
        mut handles: Vec<H>,
        selected: usize,
        container: Rect,
        scene: GalleryScene,
    ) -> Result<Self, ContractViolation> {
        if handles.is_empty() {
            return Err(ContractViolation::EmptyHandles);
        }
        if selected >= handles.len() {
            return Err(ContractViolation::SelectedIndexOutOfRange {
                index: selected,
                count: handles.len(),
            });
        }

        let viewport = container.size;
        let layout = paged_layout(&handles, viewport);

        // The paging surface starts scrolled to the selected page
        let content_offset = offset_for_page(selected, viewport.width);
        let space = CoordinateSpace::new(container.origin, Vec2::new(content_offset, 0.0));
        let docked = docked_frames(&handles, &space);
        let thumbnail_radii: Vec<f32> = handles.iter().map(|h| h.corner_radius().max(0.0)).collect();

        let mut surfaces = SurfaceRegistry::new(handles.len());
        for index in 0..handles.len() {
            if let Err(err) = surfaces.adopt(index, &mut handles[index]) {
                surfaces.release_all(&mut handles);
                return Err(err);
            }
        }

        let mut scene = GalleryScene {
            content_offset,
            content_size: layout.content_size(),
            ..scene
        };
        scene.images = docked
            .iter()
            .zip(&thumbnail_radii)
            .map(|(&frame, &corner_radius)| ImageLayer {
                frame,
                corner_radius,
                opacity: 1.0,
            })
            .collect();

        let present_morph = SceneMorph {
            layout: LayoutMorph::new(docked, layout.image_frames())
                .with_radii(&thumbnail_radii, &vec![0.0; handles.len()]),
            opacity: vec![(1.0, 1.0); handles.len()],
            scrim: (0.0, 1.0),
            chrome: (0.0, 1.0),
        };

        Ok(Self {
            handles,
            selected,
            state: TransitionState::Idle,
            container,
            layout,
            surfaces,
            scene,
            thumbnail_radii,
            present_morph: Some(present_morph),
            motion: None,
            completion: None,
            interaction: None,
        })
    }

    pub fn handles(&self) -> &[H] {
        &self.handles
    }

    /// Index the gallery was opened on
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn layout(&self) -> &PagedLayout {
        &self.layout
    }

    pub fn scene(&self) -> &GalleryScene {
        &self.scene
    }

    /// Who currently holds the surface of image `index`
    pub fn surface_owner(&self, index: usize) -> SurfaceOwner {
        self.surfaces.owner(index)
    }

    /// Number of surfaces the gallery currently holds
    pub fn borrowed_surfaces(&self) -> usize {
        self.surfaces.gallery_owned()
    }

    /// Page currently in view
    pub fn frontmost_page(&self) -> usize {
        page_for_offset(
            self.scene.content_offset,
            self.layout.viewport().width,
            self.layout.len(),
        )
    }

    /// Current drag, if an interactive dismissal is in progress
    pub fn interaction(&self) -> Option<&InteractiveDismissal> {
        self.interaction.as_ref()
    }

    pub(crate) fn space(&self) -> CoordinateSpace {
        CoordinateSpace::new(self.container.origin, Vec2::new(self.scene.content_offset, 0.0))
    }

    /// Advance the state machine; returns false if the table rejects `event`
    pub(crate) fn transition(&mut self, event: u32) -> bool {
        match self.state.on_event(event) {
            Some(next) => {
                tracing::debug!(from = self.state.name(), to = next.name(), "gallery state changed");
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Morph from the current scene back into the thumbnail of the frontmost page
    ///
    /// The thumbnail's rect is queried now, so a grid that scrolled or
    /// reflowed while the gallery was up is tracked.
    pub(crate) fn closing_morph(&self) -> SceneMorph {
        let page = self.frontmost_page();
        let current = self.scene.frames();
        let mut end = current.clone();
        let target = self.space().from_screen(self.handles[page].current_screen_rect());
        end[page] = target;

        let start_radii: Vec<f32> = self.scene.images.iter().map(|i| i.corner_radius).collect();
        let mut end_radii = start_radii.clone();
        end_radii[page] = self.thumbnail_radii[page];

        let opacity = self
            .scene
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| (image.opacity, if index == page { 1.0 } else { 0.0 }))
            .collect();

        SceneMorph {
            layout: LayoutMorph::new(current, end).with_radii(&start_radii, &end_radii),
            opacity,
            scrim: (self.scene.scrim_opacity, 0.0),
            chrome: (self.scene.chrome_opacity, 0.0),
        }
    }

    /// Morph from the current scene back to the paged layout
    pub(crate) fn restoring_morph(&self) -> SceneMorph {
        let start_radii: Vec<f32> = self.scene.images.iter().map(|i| i.corner_radius).collect();
        SceneMorph {
            layout: LayoutMorph::new(self.scene.frames(), self.layout.image_frames())
                .with_radii(&start_radii, &vec![0.0; self.handles.len()]),
            opacity: self.scene.images.iter().map(|i| (i.opacity, 1.0)).collect(),
            scrim: (self.scene.scrim_opacity, 1.0),
            chrome: (self.scene.chrome_opacity, 1.0),
        }
    }

    /// Place the scene at the paged layout, fully presented
    pub(crate) fn settle_presented(&mut self) {
        for (image, slot) in self.scene.images.iter_mut().zip(self.layout.pages()) {
            image.frame = slot.image_frame;
            image.corner_radius = 0.0;
            image.opacity = 1.0;
        }
        self.scene.scrim_opacity = 1.0;
        self.scene.chrome_opacity = 1.0;
    }

    /// Return every borrowed surface; returns how many moved
    pub(crate) fn return_surfaces(&mut self) -> usize {
        self.surfaces.release_all(&mut self.handles)
    }
}

impl<H: SelectableImage> Drop for GallerySession<H> {
    fn drop(&mut self) {
        let returned = self.return_surfaces();
        if returned > 0 {
            tracing::debug!(returned, "gallery session closed with borrowed surfaces, returned them");
        }
    }
}

impl<H: SelectableImage> std::fmt::Debug for GallerySession<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GallerySession")
            .field("images", &self.handles.len())
            .field("selected", &self.selected)
            .field("state", &self.state)
            .field("borrowed_surfaces", &self.surfaces.gallery_owned())
            .finish_non_exhaustive()
    }
}
