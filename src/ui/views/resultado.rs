use crate::app::SimuladoApp;
use crate::scoring::score_message;
use crate::ui::helpers::{format_short_duration, score_color};
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, RichText};
use std::time::Instant;

pub fn ui_resultado(app: &mut SimuladoApp, ctx: &Context) {
    let Some(resultado) = app.last_resultado.clone() else {
        // Chegou aqui sem resultado: transição inválida, volta com aviso.
        app.ver_resultados();
        app.voltar_ao_dashboard();
        return;
    };
    let performance = app.performance();
    let (headline, description) = score_message(resultado.score_percent);

    centered_panel(ctx, 560.0, 680.0, |ui| {
        let panel_width = ui.available_width();

        // Cabeçalho com a nota
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{}%", resultado.score_percent))
                    .size(42.0)
                    .strong()
                    .color(score_color(resultado.score_percent)),
            );
            ui.heading(headline);
            ui.label(description);
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 320.0).max(0.0) / 2.0);
                ui.label(format!(
                    "🎯 {}/{} acertos",
                    resultado.correct_answers, resultado.total_questions
                ));
                ui.label(format!(
                    "⏱ Tempo: {}",
                    format_short_duration(resultado.time_spent_secs)
                ));
            });
        });

        ui.add_space(12.0);
        let (podcast, dashboard) = two_button_row(
            ui,
            panel_width,
            "🎧 Gerar Podcast de Análise",
            "📊 Voltar ao Dashboard",
        );
        if podcast {
            app.gerar_podcast(Instant::now());
        }
        if dashboard {
            app.voltar_ao_dashboard();
        }

        ui.add_space(14.0);
        ui.separator();
        ui.add_space(8.0);

        // Performance por eixo, do melhor para o pior
        ui.strong("Performance por Eixo Temático");
        ui.add_space(6.0);
        let last = performance.len().saturating_sub(1);
        for (i, perf) in performance.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(perf.eixo.name());
                if i == 0 {
                    ui.label(RichText::new("Melhor").small().strong());
                } else if i == last && performance.len() > 1 {
                    ui.label(RichText::new("Precisa melhorar").small());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("({}/{})", perf.correct, perf.total)).small());
                    ui.label(
                        RichText::new(format!("{}%", perf.percent))
                            .strong()
                            .color(score_color(perf.percent)),
                    );
                });
            });
            ui.add(egui::ProgressBar::new(perf.percent as f32 / 100.0).desired_height(8.0));
            ui.add_space(6.0);
        }

        // Insights: melhor e pior eixo
        if let (Some(best), Some(worst)) = (performance.first(), performance.last()) {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "🏆 Pontos Fortes — {}: excelente performance com {}% de acertos!",
                    best.eixo.tema(),
                    best.percent
                ))
                .color(score_color(best.percent)),
            );
            if performance.len() > 1 {
                ui.label(
                    RichText::new(format!(
                        "📈 Oportunidades — {}: área que precisa de mais atenção ({}% de acertos). \
                         Sugestão: dedique 30 minutos extras por dia estudando este tema.",
                        worst.eixo.tema(),
                        worst.percent
                    ))
                    .color(score_color(worst.percent)),
                );
            }
        }

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        // Estatísticas detalhadas
        ui.strong("Estatísticas Detalhadas");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            stat(ui, &resultado.correct_answers.to_string(), "Acertos");
            stat(
                ui,
                &(resultado.total_questions - resultado.correct_answers).to_string(),
                "Erros",
            );
            stat(ui, &format!("{}%", resultado.score_percent), "Aproveitamento");
            stat(
                ui,
                &format_short_duration(resultado.time_spent_secs),
                "Tempo Gasto",
            );
        });
    });
}

fn stat(ui: &mut egui::Ui, value: &str, label: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(value).size(22.0).strong());
        ui.label(RichText::new(label).small());
    });
    ui.add_space(18.0);
}
