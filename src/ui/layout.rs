use crate::notify::{Severity, Toasts};
use egui::{Align2, Button, CentralPanel, Color32, Context, Frame, RichText, Ui};

/// Panel centrado verticalmente, com largura máxima e um bloco interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espaço vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, |ui| {
                        let w = ui.available_width().min(max_width);
                        ui.set_width(w);
                        inner(ui);
                    });
            });
        });
    });
}

/// Dois botões do mesmo tamanho numa fila, centrados na largura dada.
/// Devolve (clique esquerdo, clique direito).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

/// Cinco bolinhas de prioridade, preenchidas até o peso do eixo.
pub fn weight_dots(ui: &mut Ui, weight: u8) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for i in 0..5 {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            let color = if i < weight {
                Color32::from_rgb(59, 130, 246)
            } else {
                ui.visuals().weak_text_color()
            };
            ui.painter().circle_filled(rect.center(), 4.0, color);
        }
    });
}

fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => Color32::from_rgb(59, 130, 246),
        Severity::Success => Color32::from_rgb(34, 197, 94),
        Severity::Destructive => Color32::from_rgb(220, 38, 38),
    }
}

/// Desenha a pilha de toasts no canto superior direito, por cima de tudo.
pub fn toast_overlay(toasts: &Toasts, ctx: &Context) {
    if toasts.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toast_overlay"))
        .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in toasts.iter() {
                let accent = severity_color(toast.severity);
                Frame::default()
                    .fill(ui.visuals().extreme_bg_color)
                    .stroke(egui::Stroke::new(1.5, accent))
                    .corner_radius(6)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.label(RichText::new(&toast.title).strong().color(accent));
                        ui.label(&toast.description);
                    });
                ui.add_space(6.0);
            }
        });
}
