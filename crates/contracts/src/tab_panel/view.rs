/// Surface a tab group is drawn on.
///
/// The browser crate implements this over web-sys elements; tests use a
/// recording double. Indices follow item order within the group.
pub trait TabGroupView {
    fn item_count(&self) -> usize;

    /// Set the item's content block height to zero.
    fn collapse_content(&mut self, index: usize);

    fn set_active(&mut self, index: usize, active: bool);

    /// Let the content block size to its content and return the rendered height.
    fn expand_content(&mut self, index: usize) -> f64;

    /// Rendered height of a single item row. All rows are assumed equal.
    fn header_row_height(&self) -> f64;

    fn set_group_height(&mut self, height: f64);
}
