//! Simulated thumbnail grid
//!
//! Stands in for a host's photo grid: square cells in rows of three, each
//! holding a numbered image surface the gallery can borrow.

use std::cell::RefCell;
use std::rc::Rc;

use lightbox_core::{Rect, SelectableImage, Size};

pub const COLUMNS: usize = 3;
const SPACING: f32 = 2.0;
const CORNER_RADIUS: f32 = 4.0;

/// One cell of the grid
#[derive(Debug)]
pub struct GridCell {
    pub rect: Rect,
    pub size: Option<Size>,
    pub surface: Option<usize>,
}

impl SelectableImage for GridCell {
    type Surface = usize;

    fn intrinsic_size(&self) -> Option<Size> {
        self.size
    }

    fn current_screen_rect(&self) -> Rect {
        self.rect
    }

    fn corner_radius(&self) -> f32 {
        CORNER_RADIUS
    }

    fn detach_image_surface(&mut self) -> Option<usize> {
        self.surface.take()
    }

    fn attach_image_surface(&mut self, surface: usize) {
        self.surface = Some(surface);
    }
}

pub type Cell = Rc<RefCell<GridCell>>;

/// Payload sizes cycle through landscape, portrait, square, and unknown
fn payload_size(index: usize) -> Option<Size> {
    match index % 4 {
        0 => Some(Size::new(4032.0, 3024.0)),
        1 => Some(Size::new(1080.0, 1920.0)),
        2 => Some(Size::new(2048.0, 2048.0)),
        _ => None,
    }
}

/// Lay out `count` cells across the top of `container`
pub fn build(count: usize, container: Rect) -> Vec<Cell> {
    let side = (container.width() - SPACING * (COLUMNS as f32 - 1.0)) / COLUMNS as f32;
    (0..count)
        .map(|index| {
            let column = (index % COLUMNS) as f32;
            let row = (index / COLUMNS) as f32;
            Rc::new(RefCell::new(GridCell {
                rect: Rect::new(
                    container.x() + column * (side + SPACING),
                    container.y() + row * (side + SPACING),
                    side,
                    side,
                ),
                size: payload_size(index),
                surface: Some(index),
            }))
        })
        .collect()
}

/// Scroll every cell vertically by `dy`
pub fn scroll(cells: &[Cell], dy: f32) {
    for cell in cells {
        let mut cell = cell.borrow_mut();
        cell.rect = cell.rect.offset(0.0, dy);
    }
}

/// Number of cells holding their own surface
pub fn surfaces_home(cells: &[Cell]) -> usize {
    cells
        .iter()
        .enumerate()
        .filter(|(index, cell)| cell.borrow().surface == Some(*index))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_fill_rows() {
        let cells = build(4, Rect::new(0.0, 0.0, 302.0, 600.0));
        let first = cells[0].borrow().rect;
        assert_eq!(first.origin.x, 0.0);
        assert!((first.width() - 298.0 / 3.0).abs() < 1e-4);
        assert_eq!(first.width(), first.height());
        assert_eq!(cells[3].borrow().rect.y(), cells[0].borrow().rect.max_y() + SPACING);
        assert_eq!(surfaces_home(&cells), 4);
        assert_eq!(cells[3].borrow().size, None);
    }

    #[test]
    fn test_scroll_moves_cells() {
        let cells = build(2, Rect::new(0.0, 0.0, 300.0, 600.0));
        scroll(&cells, -40.0);
        assert_eq!(cells[1].borrow().rect.y(), -40.0);
    }
}
