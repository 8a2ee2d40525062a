mod helpers;
pub mod layout;
pub mod views;

use crate::app::SimuladoApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use std::time::{Duration, Instant};

impl App for SimuladoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();

        // Trabalhos de podcast prontos e toasts vencidos, antes de desenhar.
        self.poll_podcast(now);
        self.toasts.prune(now);

        // O cronômetro só anda com a tela de prova ativa; o repaint periódico
        // mantém os quadros chegando mesmo sem interação.
        if self.state == AppState::Simulado {
            self.exam_tick(now);
            ctx.request_repaint_after(Duration::from_millis(250));
        } else if !self.toasts.is_empty() || self.podcast.pending() > 0 {
            ctx.request_repaint_after(Duration::from_millis(500));
        }

        // Dispatch por estado para as funções em views/
        match self.state {
            AppState::Setup => views::setup::ui_setup(self, ctx),
            AppState::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            AppState::Simulado => views::simulado::ui_simulado(self, ctx),
            AppState::Resultado => views::resultado::ui_resultado(self, ctx),
        }

        layout::toast_overlay(&self.toasts, ctx);
    }
}
