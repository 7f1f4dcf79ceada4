//! Render-target mapping for a rendering surface.
//!
//! The mapping from grid coordinates to whatever handle the renderer uses
//! (a DOM node, a widget id) is explicit data, built once per session from
//! the board dimensions and owned by the rendering collaborator. Nothing is
//! looked up through ambient global state.

/// Maps board coordinates to render-target handles.
///
/// One handle per clickable column-top affordance and one per grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTargets<T> {
    width: usize,
    height: usize,
    column_tops: Vec<T>,
    cells: Vec<Vec<T>>,
}

impl<T> RenderTargets<T> {
    /// Build the mapping from board dimensions and handle factories.
    pub fn build(
        width: usize,
        height: usize,
        column_top: impl FnMut(usize) -> T,
        mut cell: impl FnMut(usize, usize) -> T,
    ) -> Self {
        let column_tops = (0..width).map(column_top).collect();
        let cells = (0..height)
            .map(|row| (0..width).map(|col| cell(row, col)).collect())
            .collect();
        Self {
            width,
            height,
            column_tops,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Handle for the clickable top of `column`.
    pub fn column_top(&self, column: usize) -> Option<&T> {
        self.column_tops.get(column)
    }

    /// Handle for the cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&T> {
        self.cells.get(row).and_then(|cells| cells.get(column))
    }

    /// All column tops with their column indices, in click-report order.
    pub fn column_tops(&self) -> impl Iterator<Item = (usize, &T)> {
        self.column_tops.iter().enumerate()
    }
}
