use eframe::egui::{
    self,
    Id,
    Ui,
    UiBuilder,
};

/// Extra room below the measured content so the last line is not clipped.
const CONTENT_PADDING: f32 = 10.0;

/// Seconds for the open/close transition.
const ANIMATION_TIME: f32 = 0.3;

/// Accordion container: measures the intrinsic height of its content and
/// animates the visible extent between 0 and that measurement.
///
/// The content is laid out every frame even while collapsed (clipped, not
/// removed), so toggling is a pure state flip and any growth of the content
/// while open, a note being typed for example, is re-measured on the next
/// frame instead of leaving a stale height.
pub struct Expandable {
    expanded: bool,
    measured_height: f32,
}

impl Expandable {
    pub fn new() -> Self {
        Self { expanded: false, measured_height: 0.0 }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    /// Height the container is animating towards: 0 when collapsed,
    /// measurement plus padding when expanded.
    pub fn target_height(&self) -> f32 {
        if self.expanded {
            self.measured_height + CONTENT_PADDING
        } else {
            0.0
        }
    }

    pub fn show(&mut self, ui: &mut Ui, id: Id, add_contents: impl FnOnce(&mut Ui)) {
        let height =
            ui.ctx().animate_value_with_time(id.with("extent"), self.target_height(), ANIMATION_TIME);

        let top_left = ui.cursor().min;
        let width = ui.available_width();
        let visible_rect = egui::Rect::from_min_size(top_left, egui::vec2(width, height));

        // Lay the content out at full intrinsic size, clip it to the animated
        // window, then only advance the cursor by the animated height.
        let max_rect = egui::Rect::from_min_max(
            top_left,
            egui::pos2(top_left.x + width, f32::INFINITY),
        );
        let mut content_ui = ui.new_child(UiBuilder::new().max_rect(max_rect));
        content_ui.set_clip_rect(visible_rect.intersect(ui.clip_rect()));
        add_contents(&mut content_ui);

        self.measured_height = content_ui.min_rect().height();

        ui.advance_cursor_after_rect(visible_rect);

        if height != self.target_height() {
            ui.ctx().request_repaint();
        }
    }
}

impl Default for Expandable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(height: f32) -> Expandable {
        let mut e = Expandable::new();
        e.measured_height = height;
        e
    }

    #[test]
    fn collapsed_target_is_zero_regardless_of_content() {
        assert_eq!(measured(0.0).target_height(), 0.0);
        assert_eq!(measured(480.0).target_height(), 0.0);
    }

    #[test]
    fn expanded_target_is_measurement_plus_padding() {
        let mut e = measured(120.0);
        e.expand();
        assert_eq!(e.target_height(), 120.0 + CONTENT_PADDING);
    }

    #[test]
    fn toggling_twice_restores_the_original_target() {
        let mut e = measured(80.0);
        let before = e.target_height();
        e.toggle();
        e.toggle();
        assert_eq!(e.target_height(), before);
        assert!(!e.is_expanded());
    }

    #[test]
    fn expand_is_idempotent() {
        let mut e = measured(40.0);
        e.expand();
        let target = e.target_height();
        e.expand();
        assert!(e.is_expanded());
        assert_eq!(e.target_height(), target);
    }
}
