use crate::app::{CargoChoice, SimuladoApp};
use crate::model::{Eixo, CARGO_PRESETS, MAX_WEIGHT, MIN_WEIGHT};
use crate::ui::layout::{centered_panel, weight_dots};
use egui::{Button, Context, RichText};

pub fn ui_setup(app: &mut SimuladoApp, ctx: &Context) {
    centered_panel(ctx, 520.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Configure seu Perfil CNU");
            ui.label("Personalize seus simulados de acordo com o seu cargo e prioridades");
        });
        ui.add_space(16.0);

        ui.label("Nome");
        ui.text_edit_singleline(&mut app.setup.name);
        ui.add_space(10.0);

        ui.label("Cargo pretendido");
        let selected_text = app
            .setup
            .cargo_name()
            .unwrap_or("Selecione seu cargo")
            .to_owned();
        egui::ComboBox::from_id_salt("cargo_select")
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for (i, preset) in CARGO_PRESETS.iter().enumerate() {
                    ui.selectable_value(&mut app.setup.cargo, CargoChoice::Preset(i), preset.name);
                }
                ui.selectable_value(&mut app.setup.cargo, CargoChoice::Custom, "Personalizado");
            });

        if app.setup.cargo != CargoChoice::None {
            ui.add_space(14.0);
            ui.strong("Pesos dos Eixos Temáticos");
            ui.add_space(4.0);

            let is_custom = app.setup.cargo == CargoChoice::Custom;
            let preset_weights = app.setup.weights();
            for eixo in Eixo::ALL {
                ui.add_space(4.0);
                ui.label(RichText::new(eixo.tema()).small());
                ui.horizontal(|ui| {
                    if is_custom {
                        let w = app.setup.custom_weights.get_mut(eixo);
                        ui.add(egui::Slider::new(w, MIN_WEIGHT..=MAX_WEIGHT));
                        let w = *w;
                        weight_dots(ui, w);
                    } else {
                        // Preset: pesos fixos, só exibição.
                        let mut w = preset_weights.get(eixo);
                        ui.add_enabled(false, egui::Slider::new(&mut w, MIN_WEIGHT..=MAX_WEIGHT));
                        weight_dots(ui, preset_weights.get(eixo));
                    }
                });
            }
        }

        ui.add_space(18.0);
        let ready = app.setup.is_complete();
        let comecar = ui.add_enabled(
            ready,
            Button::new("Começar a Estudar 🚀").min_size(egui::vec2(ui.available_width(), 40.0)),
        );
        if comecar.clicked() {
            app.confirmar_perfil();
        }
    });
}
