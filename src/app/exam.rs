use super::*;
use crate::generator;
use crate::notify::Severity;
use crate::scoring;
use crate::session::Phase;
use log::info;
use std::time::Instant;

impl SimuladoApp {
    /// Gera o banco de questões e arma a sessão. Chamado pela tela do
    /// simulado no quadro em que a sessão ainda está em `Loading`.
    pub fn begin_exam(&mut self, now: Instant) {
        let Some(profile) = self.profile.as_ref() else {
            return;
        };
        let questions = generator::generate_questions(&profile.weights);
        info!("simulado gerado: {} questões", questions.len());
        let completed = match self.session.as_mut() {
            Some(session) if session.phase() == Phase::Loading => session.begin(questions, now),
            _ => return,
        };
        if completed {
            // Banco vazio (defensivo): a prova já nasce concluída.
            self.on_session_completed();
        }
    }

    pub fn exam_answer(&mut self, question_id: u32, choice: usize) {
        if let Some(session) = self.session.as_mut() {
            session.answer(question_id, choice);
        }
    }

    pub fn exam_previous(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.previous();
        }
    }

    pub fn exam_next(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.next() {
                self.on_session_completed();
            }
        }
    }

    pub fn exam_finish(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.finish() {
                self.on_session_completed();
            }
        }
    }

    /// Avança o cronômetro da sessão; a expiração força a conclusão pelo
    /// mesmo caminho do encerramento explícito.
    pub fn exam_tick(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            if session.tick(now) {
                self.on_session_completed();
            }
        }
    }

    /// Usuário saiu da prova sem concluir: derruba a sessão (e com ela o
    /// cronômetro) sem corrigir nada.
    pub fn abandonar_simulado(&mut self) {
        if self.session.take().is_some() {
            info!("simulado abandonado sem correção");
        }
        self.state = AppState::Dashboard;
    }

    /// Caminho único pós-conclusão: guarda o resultado, derruba a sessão e
    /// navega para a tela de resultados com o toast da faixa de nota.
    /// Executa uma única vez por sessão — só a chamada que concluiu a
    /// sessão chega aqui.
    fn on_session_completed(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let Some(resultado) = session.resultado().cloned() else {
            return;
        };

        let headline = if resultado.score_percent >= 70 {
            "Parabéns! 🎉"
        } else {
            "Continue estudando! 💪"
        };
        self.toasts.push(
            headline,
            format!(
                "Você acertou {} de {} questões ({}%).",
                resultado.correct_answers, resultado.total_questions, resultado.score_percent
            ),
            Severity::Info,
        );

        self.last_resultado = Some(resultado);
        self.state = AppState::Resultado;
    }

    /// Desempenho por eixo do último resultado, do melhor para o pior.
    pub fn performance(&self) -> Vec<scoring::EixoPerformance> {
        self.last_resultado
            .as_ref()
            .map(scoring::aggregate)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EixoWeights, Profile};
    use crate::session::EXAM_BUDGET_SECS;
    use std::time::Duration;

    fn app_in_exam(now: Instant) -> SimuladoApp {
        let mut app = SimuladoApp::new();
        let profile =
            Profile::new("Caio", "Personalizado", EixoWeights::uniform(1)).unwrap();
        app.complete_profile(profile);
        app.iniciar_simulado();
        app.begin_exam(now);
        app
    }

    #[test]
    fn begin_exam_fills_session_from_profile_weights() {
        let app = app_in_exam(Instant::now());
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.len(), 25);
    }

    #[test]
    fn finish_stores_result_and_navigates_once() {
        let now = Instant::now();
        let mut app = app_in_exam(now);
        let toasts_before = app.toasts.len();

        app.exam_finish();
        assert_eq!(app.state, AppState::Resultado);
        assert!(app.session.is_none());
        assert!(app.last_resultado.is_some());
        assert_eq!(app.toasts.len(), toasts_before + 1);

        // Repetir o encerramento não gera novo aviso nem novo resultado.
        let snapshot = app.last_resultado.clone();
        app.exam_finish();
        app.exam_tick(now + Duration::from_secs(10));
        assert_eq!(app.toasts.len(), toasts_before + 1);
        assert_eq!(app.last_resultado, snapshot);
    }

    #[test]
    fn timer_expiry_completes_through_same_path() {
        let now = Instant::now();
        let mut app = app_in_exam(now);
        app.exam_tick(now + Duration::from_secs(EXAM_BUDGET_SECS as u64));
        assert_eq!(app.state, AppState::Resultado);
        let resultado = app.last_resultado.as_ref().unwrap();
        assert_eq!(resultado.time_spent_secs, EXAM_BUDGET_SECS);
    }

    #[test]
    fn next_through_all_questions_finishes() {
        let mut app = app_in_exam(Instant::now());
        let total = app.session.as_ref().unwrap().len();
        for _ in 0..total {
            app.exam_next();
        }
        assert_eq!(app.state, AppState::Resultado);
        assert_eq!(
            app.last_resultado.as_ref().unwrap().total_questions,
            total as u32
        );
    }

    #[test]
    fn answers_flow_into_result() {
        let mut app = app_in_exam(Instant::now());
        let (id, correct) = {
            let q = app.session.as_ref().unwrap().current_question().unwrap();
            (q.id, q.correct)
        };
        app.exam_answer(id, correct);
        app.exam_finish();
        let resultado = app.last_resultado.as_ref().unwrap();
        assert_eq!(resultado.correct_answers, 1);
        assert_eq!(resultado.answers.get(&id), Some(&correct));
    }

    #[test]
    fn abandon_drops_session_without_result() {
        let mut app = app_in_exam(Instant::now());
        app.abandonar_simulado();
        assert_eq!(app.state, AppState::Dashboard);
        assert!(app.session.is_none());
        assert!(app.last_resultado.is_none());
    }

    #[test]
    fn performance_covers_every_eixo_sorted() {
        let mut app = app_in_exam(Instant::now());
        // Responde a questão atual certo e as demais ficam em branco.
        let (id, correct) = {
            let q = app.session.as_ref().unwrap().current_question().unwrap();
            (q.id, q.correct)
        };
        app.exam_answer(id, correct);
        app.exam_finish();
        let performance = app.performance();
        assert_eq!(performance.len(), 5);
        assert!(performance.windows(2).all(|w| w[0].percent >= w[1].percent));
        assert!(performance[0].percent > 0);
    }
}
