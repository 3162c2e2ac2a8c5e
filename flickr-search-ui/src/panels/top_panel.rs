use crate::widgets::search_field::SearchField;

#[derive(Default)]
pub struct TopPanel;

impl TopPanel {
    /// Returns the submitted search term, if the user pressed return.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        search_field: &mut SearchField,
        section_count: usize,
    ) -> Option<String> {
        egui::TopBottomPanel::top("top_panel")
            .show(ctx, |ui| {
                ui.add_space(6.);
                let submitted = ui
                    .horizontal(|ui| {
                        ui.heading("Flickr Search");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(format!("Searches: {section_count}"));
                            search_field.show(ui)
                        })
                        .inner
                    })
                    .inner;
                ui.add_space(6.);
                submitted
            })
            .inner
    }
}
