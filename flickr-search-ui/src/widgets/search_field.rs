use crate::utils::{to_core_rect, to_egui_rect};
use flickr_search_core::{InputWidget, Rect, Spinner};
use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Default)]
struct SpinnerState {
    frame: Rect,
    animating: bool,
    attached: bool,
}

/// A spinner drawn on top of the [`SearchField`] that created it.
pub struct SpinnerOverlay(Rc<RefCell<SpinnerState>>);

impl Spinner for SpinnerOverlay {
    fn set_frame(&mut self, frame: Rect) {
        self.0.borrow_mut().frame = frame;
    }

    fn start_animating(&mut self) {
        self.0.borrow_mut().animating = true;
    }

    fn stop_animating(&mut self) {
        self.0.borrow_mut().animating = false;
    }

    fn remove_from_parent(&mut self) {
        self.0.borrow_mut().attached = false;
    }
}

#[derive(Default)]
pub struct SearchField {
    text: String,
    bounds: Rect,
    spinners: Vec<Rc<RefCell<SpinnerState>>>,
    surrender_focus: bool,
}

impl SearchField {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attached_spinners(&self) -> usize {
        self.spinners
            .iter()
            .filter(|spinner| spinner.borrow().attached)
            .count()
    }

    /// Draws the field and its spinners. Returns the entered text when the
    /// user presses return.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.text)
                .hint_text("Search Flickr")
                .desired_width(f32::INFINITY),
        );
        self.bounds = to_core_rect(response.rect);

        if std::mem::take(&mut self.surrender_focus) {
            response.surrender_focus();
        }

        self.spinners.retain(|spinner| spinner.borrow().attached);
        for spinner in &self.spinners {
            let state = spinner.borrow();
            if !state.animating {
                continue;
            }
            // A spinner added before the field was first laid out has no
            // size yet; it takes the field's rect from this pass.
            let rect = if state.frame.is_empty() {
                response.rect
            } else {
                to_egui_rect(state.frame)
            };
            ui.put(rect, egui::Spinner::new());
        }

        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        submitted.then(|| self.text.clone())
    }
}

impl InputWidget for SearchField {
    type Spinner = SpinnerOverlay;

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn add_spinner(&mut self) -> SpinnerOverlay {
        let state = Rc::new(RefCell::new(SpinnerState {
            attached: true,
            ..Default::default()
        }));
        self.spinners.push(state.clone());
        SpinnerOverlay(state)
    }

    fn clear_text(&mut self) {
        self.text.clear();
    }

    fn resign_first_responder(&mut self) {
        self.surrender_focus = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let mut field = SearchField::default();
        let mut spinner = field.add_spinner();
        spinner.set_frame(Rect {
            x: 0.,
            y: 0.,
            width: 100.,
            height: 20.,
        });
        spinner.start_animating();
        assert_eq!(field.attached_spinners(), 1);

        spinner.stop_animating();
        spinner.remove_from_parent();
        assert_eq!(field.attached_spinners(), 0);
    }

    #[test]
    fn test_spinners_are_independent() {
        let mut field = SearchField::default();
        let mut first = field.add_spinner();
        let _second = field.add_spinner();
        first.remove_from_parent();
        assert_eq!(field.attached_spinners(), 1);
    }

    #[test]
    fn test_clear_text() {
        let mut field = SearchField {
            text: "cats".to_string(),
            ..Default::default()
        };
        field.clear_text();
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_bounds_empty_before_layout() {
        let field = SearchField::default();
        assert!(field.bounds().is_empty());
    }
}
