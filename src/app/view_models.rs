use super::*;
use crate::model::Eixo;
use crate::session::Phase;

/// Linha de eixo exibida no dashboard.
pub struct EixoRow {
    pub name: &'static str,
    pub tema: &'static str,
    pub weight: u8,
}

/// Cabeçalho da tela de prova, derivado num único lugar.
pub struct ExamHeader {
    pub eixo_name: &'static str,
    pub number_1based: usize,
    pub total: usize,
    pub time_display: String,
    pub answered: usize,
    pub progress: f32,
}

impl SimuladoApp {
    pub fn eixo_rows(&self) -> Vec<EixoRow> {
        let Some(profile) = self.profile.as_ref() else {
            return Vec::new();
        };
        Eixo::ALL
            .iter()
            .map(|&eixo| EixoRow {
                name: eixo.name(),
                tema: eixo.tema(),
                weight: profile.weights.get(eixo),
            })
            .collect()
    }

    pub fn exam_header(&self) -> Option<ExamHeader> {
        let session = self.session.as_ref()?;
        if session.phase() != Phase::InProgress {
            return None;
        }
        let question = session.current_question()?;
        let total = session.len();
        Some(ExamHeader {
            eixo_name: question.eixo.name(),
            number_1based: session.current_index() + 1,
            total,
            time_display: session.time_left_display(),
            answered: session.answered_count(),
            progress: (session.current_index() + 1) as f32 / total as f32,
        })
    }
}
