//! Geração do banco sintético de questões a partir dos pesos do perfil.

use crate::model::{Eixo, EixoWeights, Question};
use rand::seq::SliceRandom;
use rand::Rng;

/// Questões emitidas por ponto de peso de cada eixo.
pub const QUESTIONS_PER_WEIGHT: u32 = 5;

const ALTERNATIVAS: [&str; 5] = [
    "A implementação deve seguir rigorosamente os protocolos estabelecidos pela administração superior.",
    "Os processos devem ser transparentes e acessíveis ao controle social, respeitando a legislação vigente.",
    "As decisões devem priorizar a eficiência operacional em detrimento dos aspectos legais.",
    "O controle interno é suficiente para garantir a conformidade com as normas estabelecidas.",
    "A participação popular deve ser limitada aos casos expressamente previstos em lei.",
];

// Índice da alternativa correta em todos os templates.
const CORRETA: usize = 1;

/// Monta a lista completa, na ordem dos eixos, sem embaralhar.
/// Determinística em função dos pesos; ids sequenciais a partir de 1.
pub fn build(weights: &EixoWeights) -> Vec<Question> {
    let mut questions = Vec::with_capacity((weights.total() * QUESTIONS_PER_WEIGHT) as usize);
    let mut id: u32 = 1;

    for eixo in Eixo::ALL {
        let count = weights.get(eixo) as u32 * QUESTIONS_PER_WEIGHT;
        for i in 0..count {
            questions.push(Question {
                id,
                eixo,
                prompt: format!(
                    "Questão sobre {tema} - {n}. Em relação aos princípios fundamentais da \
                     administração pública, assinale a alternativa correta sobre {tema_lower}.",
                    tema = eixo.tema(),
                    n = i + 1,
                    tema_lower = eixo.tema().to_lowercase(),
                ),
                choices: ALTERNATIVAS.iter().map(|s| s.to_string()).collect(),
                correct: CORRETA,
                explanation: format!(
                    "Esta questão aborda conceitos fundamentais de {tema}. A alternativa correta \
                     enfatiza a importância da transparência e do controle social, princípios \
                     essenciais na administração pública moderna.",
                    tema = eixo.tema(),
                ),
            });
            id += 1;
        }
    }

    questions
}

/// Gera o simulado: lista proporcional aos pesos, embaralhada de ponta a ponta
/// (Fisher–Yates, toda permutação alcançável). A ordem fica fixa pela sessão.
pub fn generate<R: Rng + ?Sized>(weights: &EixoWeights, rng: &mut R) -> Vec<Question> {
    let mut questions = build(weights);
    questions.shuffle(rng);
    questions
}

pub fn generate_questions(weights: &EixoWeights) -> Vec<Question> {
    generate(weights, &mut rand::thread_rng())
}
