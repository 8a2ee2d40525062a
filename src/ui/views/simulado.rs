use crate::app::SimuladoApp;
use crate::session::Phase;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Color32, Context, RichText, ScrollArea};
use std::time::Instant;

pub fn ui_simulado(app: &mut SimuladoApp, ctx: &Context) {
    let phase = match app.session.as_ref() {
        Some(session) => session.phase(),
        None => {
            app.voltar_ao_dashboard();
            return;
        }
    };

    // Sessão recém-criada: um quadro de "gerando..." e dispara o gerador.
    if phase == Phase::Loading {
        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.vertical(|ui| {
                    ui.add(egui::Spinner::new().size(32.0));
                    ui.label("Gerando seu simulado personalizado...");
                });
            });
        });
        app.begin_exam(Instant::now());
        ctx.request_repaint();
        return;
    }

    let Some(header) = app.exam_header() else {
        return;
    };
    let Some(question) = app
        .session
        .as_ref()
        .and_then(|s| s.current_question())
        .cloned()
    else {
        return;
    };
    let selected = app
        .session
        .as_ref()
        .and_then(|s| s.selected_choice(question.id));
    let is_last = header.number_1based == header.total;

    egui::TopBottomPanel::top("exam_top").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(header.eixo_name).strong());
            ui.label(format!(
                "Questão {} de {}",
                header.number_1based, header.total
            ));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("⏱ {}", header.time_display))
                        .monospace()
                        .strong()
                        .color(Color32::from_rgb(220, 38, 38)),
                );
                if ui.small_button("Sair sem corrigir").clicked() {
                    app.abandonar_simulado();
                }
            });
        });
    });

    CentralPanel::default().show(ctx, |ui| {
        let panel_width = (ui.available_width() * 0.97).min(760.0);

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_width(panel_width);
                ui.add_space(8.0);

                ui.add(egui::ProgressBar::new(header.progress).desired_height(8.0));
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "Respondidas: {}/{}",
                            header.answered, header.total
                        ))
                        .small(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!(
                                "{}% concluído",
                                (header.progress * 100.0).round() as u32
                            ))
                            .small(),
                        );
                    });
                });

                ui.add_space(12.0);
                ui.label(RichText::new(&question.prompt).heading());
                ui.add_space(10.0);

                // Alternativas A–E; clicar registra (ou troca) a resposta.
                let mut picked: Option<usize> = None;
                for (i, choice) in question.choices.iter().enumerate() {
                    let letter = (b'A' + i as u8) as char;
                    let is_selected = selected == Some(i);
                    let response =
                        ui.selectable_label(is_selected, format!("{letter}) {choice}"));
                    if response.clicked() {
                        picked = Some(i);
                    }
                    ui.add_space(4.0);
                }
                if let Some(choice) = picked {
                    app.exam_answer(question.id, choice);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if selected.is_some() || picked.is_some() {
                        ui.label(RichText::new("✔ Respondida").color(Color32::from_rgb(34, 197, 94)));
                    } else {
                        ui.label(RichText::new("⚠ Não respondida").color(Color32::from_rgb(234, 88, 12)));
                    }
                });
                ui.add_space(8.0);

                let right_label = if is_last {
                    "Finalizar Simulado"
                } else {
                    "Próxima →"
                };
                let (anterior, avancar) = two_button_row(ui, panel_width, "← Anterior", right_label);
                if anterior {
                    app.exam_previous();
                }
                if avancar {
                    if is_last {
                        app.exam_finish();
                    } else {
                        app.exam_next();
                    }
                }
            });
        });
    });
}
