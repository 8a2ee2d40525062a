use super::*;
use crate::notify::Severity;
use log::info;
use std::time::Instant;

impl SimuladoApp {
    /// Valida o formulário de setup e, se estiver íntegro, configura o perfil.
    /// Entrada inválida vira um toast destrutivo; o estado não muda.
    pub fn confirmar_perfil(&mut self) {
        let cargo = self.setup.cargo_name().unwrap_or("").to_owned();
        match Profile::new(&self.setup.name, &cargo, self.setup.weights()) {
            Ok(profile) => self.complete_profile(profile),
            Err(err) => {
                self.toasts
                    .push("Perfil incompleto", err.to_string(), Severity::Destructive);
            }
        }
    }

    pub fn complete_profile(&mut self, profile: Profile) {
        info!("perfil configurado: {} ({})", profile.name, profile.cargo);
        self.toasts.push(
            format!("Bem-vindo, {}! 🎉", profile.name),
            "Seu perfil foi configurado com sucesso. Pronto para começar a estudar?",
            Severity::Success,
        );
        self.profile = Some(profile);
        self.state = AppState::Dashboard;
    }

    /// Inicia um novo simulado. A sessão nasce em `Loading`; a tela do
    /// simulado dispara a geração no primeiro quadro.
    pub fn iniciar_simulado(&mut self) {
        if self.profile.is_none() {
            return;
        }
        self.session = Some(ExamSession::new());
        self.state = AppState::Simulado;
        self.toasts.push(
            "Simulado Iniciado! 📝",
            "Boa sorte! Lembre-se: cada questão é importante para seu resultado.",
            Severity::Info,
        );
    }

    /// Abre a tela de resultados. Sem resultado calculado é uma transição
    /// inválida: aviso não-fatal e o estado permanece o mesmo.
    pub fn ver_resultados(&mut self) {
        if self.last_resultado.is_some() {
            self.state = AppState::Resultado;
        } else {
            self.toasts.push(
                "Nenhum resultado encontrado",
                "Faça um simulado primeiro para ver seus resultados!",
                Severity::Destructive,
            );
        }
    }

    pub fn voltar_ao_dashboard(&mut self) {
        self.state = AppState::Dashboard;
    }

    /// Submete o último resultado ao colaborador de podcast e avisa que a
    /// produção começou; o aviso de pronto chega via `poll_podcast`.
    pub fn gerar_podcast(&mut self, now: Instant) {
        let Some(resultado) = self.last_resultado.as_ref() else {
            return;
        };
        self.podcast.submit(resultado, now);
        self.toasts.push(
            "🎧 Podcast em Produção!",
            "Sua análise personalizada está sendo gerada. Você receberá uma notificação quando estiver pronta!",
            Severity::Info,
        );
    }

    /// Drena os trabalhos de podcast que ficaram prontos neste quadro.
    pub fn poll_podcast(&mut self, now: Instant) {
        for _job in self.podcast.poll_ready(now) {
            self.toasts.push(
                "✅ Podcast Pronto!",
                "Seu podcast de análise de erros está disponível na seção de resultados.",
                Severity::Success,
            );
        }
    }
}
