use crate::app::SimuladoApp;
use crate::ui::layout::{centered_panel, two_button_row, weight_dots};
use egui::{Context, RichText};

pub fn ui_dashboard(app: &mut SimuladoApp, ctx: &Context) {
    let Some(profile) = app.profile.clone() else {
        // Sem perfil não há dashboard.
        app.state = crate::model::AppState::Setup;
        return;
    };

    centered_panel(ctx, 520.0, 640.0, |ui| {
        let panel_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading(format!("Olá, {}! 👋", profile.name));
            ui.label(format!("Cargo: {}", profile.cargo));
            ui.label(RichText::new("Simulado Diário Disponível").small());
        });
        ui.add_space(14.0);

        ui.separator();
        ui.add_space(10.0);

        ui.strong("Pesos dos Eixos Temáticos");
        ui.add_space(4.0);
        for row in app.eixo_rows() {
            ui.horizontal(|ui| {
                ui.label(format!("{} — {}", row.name, row.tema));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    weight_dots(ui, row.weight);
                    ui.label(RichText::new(format!("peso {}", row.weight)).small());
                });
            });
        }

        ui.add_space(14.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label("Seu simulado personalizado está pronto com base nos pesos do seu cargo.");
        ui.add_space(8.0);

        let (iniciar, resultados) =
            two_button_row(ui, panel_width, "▶ Iniciar Simulado", "📊 Ver Resultados");
        if iniciar {
            app.iniciar_simulado();
        }
        if resultados {
            app.ver_resultados();
        }
    });
}
