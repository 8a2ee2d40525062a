//! Máquina de estados de uma sessão de simulado: ponteiro da questão atual,
//! mapa de respostas, cronômetro regressivo e conclusão idempotente.

use crate::model::{Question, Resultado};
use crate::scoring;
use log::info;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Orçamento de tempo da prova: uma hora.
pub const EXAM_BUDGET_SECS: u32 = 3600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    InProgress,
    Completed,
}

/// Converte instantes de relógio em ticks de segundos inteiros.
/// Pertence à sessão e morre com ela; depois de `Completed` ninguém o consulta.
#[derive(Debug)]
struct Ticker {
    last: Instant,
}

impl Ticker {
    fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Segundos inteiros decorridos desde o último tick; avança o marcador
    /// apenas pelos segundos consumidos, preservando a fração restante.
    fn whole_seconds(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last).as_secs();
        if elapsed > 0 {
            self.last += Duration::from_secs(elapsed);
        }
        elapsed as u32
    }
}

pub struct ExamSession {
    phase: Phase,
    questions: Vec<Question>,
    answers: HashMap<u32, usize>,
    current: usize,
    time_left: u32,
    ticker: Option<Ticker>,
    resultado: Option<Resultado>,
}

impl ExamSession {
    /// Sessão recém-criada, aguardando o gerador.
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            questions: Vec::new(),
            answers: HashMap::new(),
            current: 0,
            time_left: EXAM_BUDGET_SECS,
            ticker: None,
            resultado: None,
        }
    }

    /// Recebe o banco gerado e arma o cronômetro. Um banco vazio conclui a
    /// sessão imediatamente (nota 0, sem divisão por zero na correção).
    /// Devolve `true` se esta chamada concluiu a sessão.
    pub fn begin(&mut self, questions: Vec<Question>, now: Instant) -> bool {
        if self.phase != Phase::Loading {
            return false;
        }
        self.questions = questions;
        if self.questions.is_empty() {
            self.phase = Phase::InProgress;
            return self.complete();
        }
        self.phase = Phase::InProgress;
        self.ticker = Some(Ticker::new(now));
        false
    }

    /// Registra (ou sobrescreve) a resposta de uma questão. Não avança o ponteiro.
    pub fn answer(&mut self, question_id: u32, choice: usize) {
        if self.phase == Phase::InProgress {
            self.answers.insert(question_id, choice);
        }
    }

    /// Avança para a próxima questão; na última, conclui a prova.
    /// Devolve `true` se esta chamada concluiu a sessão.
    pub fn next(&mut self) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            false
        } else {
            self.complete()
        }
    }

    /// Volta uma questão; na primeira, não faz nada.
    pub fn previous(&mut self) {
        if self.phase == Phase::InProgress && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Encerramento explícito pelo usuário. Devolve `true` apenas na chamada
    /// que efetivamente concluiu a sessão.
    pub fn finish(&mut self) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        self.complete()
    }

    /// Desconta o tempo de relógio decorrido; ao chegar a zero, força a
    /// conclusão. Inócuo fora de `InProgress` — nenhum efeito após o estado
    /// terminal. Devolve `true` se esta chamada concluiu a sessão.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        let elapsed = match self.ticker.as_mut() {
            Some(ticker) => ticker.whole_seconds(now),
            None => return false,
        };
        self.time_left = self.time_left.saturating_sub(elapsed);
        if self.time_left == 0 {
            return self.complete();
        }
        false
    }

    /// Caminho único de conclusão, compartilhado por `finish`, `next` na
    /// última questão e pela expiração do cronômetro. Idempotente: o
    /// resultado é calculado uma única vez e só a chamada que conclui
    /// devolve `true`.
    fn complete(&mut self) -> bool {
        if self.resultado.is_some() {
            return false;
        }
        let time_spent = EXAM_BUDGET_SECS - self.time_left;
        let resultado = scoring::score(&self.questions, &self.answers, time_spent);
        info!(
            "simulado concluído: {}/{} acertos ({}%) em {}s",
            resultado.correct_answers,
            resultado.total_questions,
            resultado.score_percent,
            resultado.time_spent_secs
        );
        self.resultado = Some(resultado);
        self.phase = Phase::Completed;
        self.ticker = None;
        true
    }

    // --- Saídas consumidas pela camada de exibição ---

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn time_left_display(&self) -> String {
        format_hms(self.time_left)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn selected_choice(&self, question_id: u32) -> Option<usize> {
        self.answers.get(&question_id).copied()
    }

    pub fn is_answered(&self, question_id: u32) -> bool {
        self.answers.contains_key(&question_id)
    }

    pub fn resultado(&self) -> Option<&Resultado> {
        self.resultado.as_ref()
    }
}

impl Default for ExamSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Formata segundos como HH:MM:SS.
pub fn format_hms(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::build;
    use crate::model::EixoWeights;

    fn started_session() -> (ExamSession, Instant) {
        let now = Instant::now();
        let mut session = ExamSession::new();
        session.begin(build(&EixoWeights::uniform(1)), now);
        (session, now)
    }

    #[test]
    fn begin_moves_to_in_progress() {
        let (session, _) = started_session();
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.len(), 25);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.time_left(), EXAM_BUDGET_SECS);
    }

    #[test]
    fn empty_set_completes_immediately() {
        let mut session = ExamSession::new();
        let completed = session.begin(Vec::new(), Instant::now());
        assert!(completed);
        assert_eq!(session.phase(), Phase::Completed);
        let resultado = session.resultado().unwrap();
        assert_eq!(resultado.total_questions, 0);
        assert_eq!(resultado.score_percent, 0);
        assert_eq!(resultado.time_spent_secs, 0);
    }

    #[test]
    fn answer_upserts_without_advancing() {
        let (mut session, _) = started_session();
        let id = session.current_question().unwrap().id;
        session.answer(id, 0);
        assert_eq!(session.selected_choice(id), Some(0));
        session.answer(id, 3);
        assert_eq!(session.selected_choice(id), Some(3));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn previous_at_zero_is_noop() {
        let (mut session, _) = started_session();
        session.previous();
        assert_eq!(session.current_index(), 0);
        assert!(!session.next());
        session.previous();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn next_at_last_question_completes() {
        let (mut session, _) = started_session();
        let total = session.len();
        for _ in 0..total - 1 {
            assert!(!session.next());
        }
        assert_eq!(session.current_index(), total - 1);
        assert!(session.next());
        assert_eq!(session.phase(), Phase::Completed);
    }

    #[test]
    fn finish_is_idempotent() {
        let (mut session, _) = started_session();
        let id = session.current_question().unwrap().id;
        session.answer(id, 1);
        assert!(session.finish());
        let first = session.resultado().cloned();
        // Segunda conclusão: nenhum evento, mesmo resultado.
        assert!(!session.finish());
        assert!(!session.next());
        assert_eq!(session.resultado().cloned(), first);
    }

    #[test]
    fn tick_counts_down_whole_seconds() {
        let (mut session, now) = started_session();
        assert!(!session.tick(now + Duration::from_millis(900)));
        assert_eq!(session.time_left(), EXAM_BUDGET_SECS);
        assert!(!session.tick(now + Duration::from_millis(2500)));
        assert_eq!(session.time_left(), EXAM_BUDGET_SECS - 2);
        assert!(!session.tick(now + Duration::from_secs(10)));
        assert_eq!(session.time_left(), EXAM_BUDGET_SECS - 10);
    }

    #[test]
    fn timer_expiry_forces_completion_with_full_budget_spent() {
        let (mut session, now) = started_session();
        let completed = session.tick(now + Duration::from_secs(EXAM_BUDGET_SECS as u64));
        assert!(completed);
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.time_left(), 0);
        let resultado = session.resultado().unwrap();
        assert_eq!(resultado.time_spent_secs, EXAM_BUDGET_SECS);
    }

    #[test]
    fn tick_after_completion_has_no_effect() {
        let (mut session, now) = started_session();
        assert!(session.finish());
        let before = session.resultado().cloned();
        assert!(!session.tick(now + Duration::from_secs(9999)));
        assert_eq!(session.resultado().cloned(), before);
        assert_eq!(session.time_left(), EXAM_BUDGET_SECS);
    }

    #[test]
    fn racing_finish_and_expiry_fire_once() {
        let (mut session, now) = started_session();
        // Cronômetro zera e, no mesmo quadro, o usuário clica em finalizar.
        let by_timer = session.tick(now + Duration::from_secs(EXAM_BUDGET_SECS as u64));
        let by_user = session.finish();
        assert!(by_timer);
        assert!(!by_user);
    }

    #[test]
    fn mutations_ignored_outside_in_progress() {
        let mut session = ExamSession::new();
        session.answer(1, 2);
        assert!(!session.next());
        session.previous();
        assert!(!session.finish());
        assert_eq!(session.phase(), Phase::Loading);
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn formats_hms() {
        assert_eq!(format_hms(3600), "01:00:00");
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(3725), "01:02:05");
    }
}
