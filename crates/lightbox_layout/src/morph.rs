//! Layout morphing between two frame sets
//!
//! Both layouts are computed up front and frames are interpolated from the
//! start set to the end set by a single progress value. Nothing is written
//! back to either layout; the morph only answers "where is image `i` at
//! progress `t`".
//!
//! # Example
//!
//! ```rust
//! use lightbox_core::Rect;
//! use lightbox_layout::LayoutMorph;
//!
//! let morph = LayoutMorph::new(
//!     vec![Rect::new(0.0, 0.0, 100.0, 100.0)],
//!     vec![Rect::new(0.0, 0.0, 300.0, 300.0)],
//! );
//! assert_eq!(morph.frame_at(0, 0.5), Rect::new(0.0, 0.0, 200.0, 200.0));
//! ```

use lightbox_core::Rect;

/// One image's path through the morph
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphTrack {
    /// Frame at progress 0
    pub start: Rect,
    /// Frame at progress 1
    pub end: Rect,
    /// Corner radius at progress 0
    pub start_radius: f32,
    /// Corner radius at progress 1
    pub end_radius: f32,
}

impl MorphTrack {
    pub fn frame_at(&self, t: f32) -> Rect {
        Rect::lerp(&self.start, &self.end, t)
    }

    /// Corner radius at progress `t`, never negative
    pub fn radius_at(&self, t: f32) -> f32 {
        (self.start_radius + (self.end_radius - self.start_radius) * t).max(0.0)
    }
}

/// Interpolation from one ordered set of frames to another
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutMorph {
    tracks: Vec<MorphTrack>,
}

impl LayoutMorph {
    /// Morph with square corners throughout
    ///
    /// Frame lists are paired by index; extra frames on either side are ignored.
    pub fn new(start: Vec<Rect>, end: Vec<Rect>) -> Self {
        debug_assert_eq!(start.len(), end.len(), "morph frame lists differ in length");
        let tracks = start
            .into_iter()
            .zip(end)
            .map(|(start, end)| MorphTrack {
                start,
                end,
                start_radius: 0.0,
                end_radius: 0.0,
            })
            .collect();
        Self { tracks }
    }

    /// Set per-image corner radii at both ends
    pub fn with_radii(mut self, start: &[f32], end: &[f32]) -> Self {
        for (i, track) in self.tracks.iter_mut().enumerate() {
            track.start_radius = start.get(i).copied().unwrap_or(0.0);
            track.end_radius = end.get(i).copied().unwrap_or(0.0);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn track(&self, index: usize) -> Option<&MorphTrack> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[MorphTrack] {
        &self.tracks
    }

    /// Frame of image `index` at progress `t`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn frame_at(&self, index: usize, t: f32) -> Rect {
        self.tracks[index].frame_at(t)
    }

    /// All frames at progress `t`, in order
    pub fn frames_at(&self, t: f32) -> Vec<Rect> {
        self.tracks.iter().map(|track| track.frame_at(t)).collect()
    }

    /// Same tracks played backwards
    pub fn reversed(&self) -> Self {
        let tracks = self
            .tracks
            .iter()
            .map(|track| MorphTrack {
                start: track.end,
                end: track.start,
                start_radius: track.end_radius,
                end_radius: track.start_radius,
            })
            .collect();
        Self { tracks }
    }

    /// Replace where image `index` ends up, keeping its start
    pub fn retarget(&mut self, index: usize, end: Rect) {
        if let Some(track) = self.tracks.get_mut(index) {
            track.end = end;
        }
    }
}
