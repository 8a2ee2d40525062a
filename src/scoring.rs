//! Redução das respostas brutas em estatísticas por eixo e nota final.

use crate::model::{Eixo, EixoStat, Question, Resultado};
use std::collections::{BTreeMap, HashMap};

/// Calcula o resultado da sessão. Questões sem resposta contam como erro.
/// Pura e determinística; um banco vazio produz nota 0 sem divisão por zero.
pub fn score(questions: &[Question], answers: &HashMap<u32, usize>, time_spent_secs: u32) -> Resultado {
    let mut correct_answers: u32 = 0;
    let mut per_eixo: BTreeMap<Eixo, EixoStat> = BTreeMap::new();

    for question in questions {
        let stat = per_eixo.entry(question.eixo).or_default();
        stat.total += 1;
        if answers.get(&question.id) == Some(&question.correct) {
            correct_answers += 1;
            stat.correct += 1;
        }
    }

    let total_questions = questions.len() as u32;
    let score_percent = percent(correct_answers, total_questions);

    Resultado {
        total_questions,
        correct_answers,
        score_percent,
        per_eixo,
        time_spent_secs,
        answers: answers.clone(),
        questions: questions.to_vec(),
    }
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Desempenho de um eixo já pronto para exibição.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EixoPerformance {
    pub eixo: Eixo,
    pub correct: u32,
    pub total: u32,
    pub percent: u32,
}

/// Deriva a lista de desempenho por eixo, do melhor para o pior.
/// O melhor eixo é o primeiro elemento e o pior é o último.
pub fn aggregate(resultado: &Resultado) -> Vec<EixoPerformance> {
    let mut performance: Vec<EixoPerformance> = resultado
        .per_eixo
        .iter()
        .map(|(&eixo, stat)| EixoPerformance {
            eixo,
            correct: stat.correct,
            total: stat.total,
            percent: percent(stat.correct, stat.total),
        })
        .collect();
    performance.sort_by(|a, b| b.percent.cmp(&a.percent));
    performance
}

/// Mensagem de feedback por faixa de nota.
pub fn score_message(score_percent: u32) -> (&'static str, &'static str) {
    match score_percent {
        90.. => ("Excelente! 🎉", "Você está muito bem preparado!"),
        80..=89 => ("Muito Bom! 👏", "Continue assim, você está no caminho certo!"),
        70..=79 => ("Bom! 👍", "Bom desempenho, mas ainda há espaço para melhorar."),
        60..=69 => ("Regular 📚", "Precisa focar mais nos estudos."),
        _ => ("Precisa Melhorar 💪", "Não desanime! Todo mundo começa de algum lugar."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::build;
    use crate::model::EixoWeights;

    fn questions() -> Vec<Question> {
        build(&EixoWeights::new(1, 1, 0, 0, 0))
    }

    #[test]
    fn empty_answers_score_zero() {
        let questions = build(&EixoWeights::new(1, 1, 0, 0, 0));
        let resultado = score(&questions, &HashMap::new(), 120);
        assert_eq!(resultado.total_questions, 10);
        assert_eq!(resultado.correct_answers, 0);
        assert_eq!(resultado.score_percent, 0);
        assert_eq!(resultado.time_spent_secs, 120);
        for stat in resultado.per_eixo.values() {
            assert_eq!(stat.correct, 0);
        }
    }

    #[test]
    fn all_correct_scores_one_hundred() {
        let questions = build(&EixoWeights::new(2, 1, 1, 1, 1));
        let answers: HashMap<u32, usize> = questions.iter().map(|q| (q.id, q.correct)).collect();
        let resultado = score(&questions, &answers, 900);
        assert_eq!(resultado.score_percent, 100);
        assert_eq!(resultado.correct_answers, resultado.total_questions);
        for stat in resultado.per_eixo.values() {
            assert_eq!(stat.correct, stat.total);
        }
    }

    #[test]
    fn wrong_choice_counts_as_incorrect() {
        let questions = build(&EixoWeights::uniform(1));
        let answers: HashMap<u32, usize> = questions.iter().map(|q| (q.id, 0)).collect();
        let resultado = score(&questions, &answers, 10);
        assert_eq!(resultado.correct_answers, 0);
        assert_eq!(resultado.score_percent, 0);
    }

    #[test]
    fn percent_is_rounded() {
        let questions = build(&EixoWeights::new(0, 0, 0, 0, 3)); // 15 questões
        let answers: HashMap<u32, usize> = questions
            .iter()
            .take(10)
            .map(|q| (q.id, q.correct))
            .collect();
        let resultado = score(&questions, &answers, 0);
        // 10/15 = 66.66… → 67
        assert_eq!(resultado.score_percent, 67);
    }

    #[test]
    fn empty_set_is_guarded() {
        let resultado = score(&[], &HashMap::new(), 0);
        assert_eq!(resultado.total_questions, 0);
        assert_eq!(resultado.score_percent, 0);
        assert!(resultado.per_eixo.is_empty());
    }

    #[test]
    fn omits_eixos_without_questions() {
        let resultado = score(&questions(), &HashMap::new(), 0);
        assert_eq!(resultado.per_eixo.len(), 2);
        assert!(!resultado.per_eixo.contains_key(&Eixo::Eixo3));
    }

    #[test]
    fn score_is_pure() {
        let questions = build(&EixoWeights::new(2, 3, 1, 1, 4));
        let answers: HashMap<u32, usize> = questions
            .iter()
            .filter(|q| q.id % 3 == 0)
            .map(|q| (q.id, q.correct))
            .collect();
        assert_eq!(score(&questions, &answers, 77), score(&questions, &answers, 77));
    }

    #[test]
    fn aggregate_sorts_best_first() {
        let questions = build(&EixoWeights::uniform(1));
        // Eixo2 inteiro certo, Eixo4 metade, resto errado.
        let answers: HashMap<u32, usize> = questions
            .iter()
            .filter(|q| q.eixo == Eixo::Eixo2)
            .map(|q| (q.id, q.correct))
            .chain(
                questions
                    .iter()
                    .filter(|q| q.eixo == Eixo::Eixo4)
                    .take(2)
                    .map(|q| (q.id, q.correct)),
            )
            .collect();
        let resultado = score(&questions, &answers, 0);
        let performance = aggregate(&resultado);
        assert_eq!(performance.first().map(|p| p.eixo), Some(Eixo::Eixo2));
        assert_eq!(performance.first().map(|p| p.percent), Some(100));
        assert_eq!(performance.last().map(|p| p.percent), Some(0));
        assert!(performance.windows(2).all(|w| w[0].percent >= w[1].percent));
    }

    #[test]
    fn score_message_bands() {
        assert_eq!(score_message(95).0, "Excelente! 🎉");
        assert_eq!(score_message(90).0, "Excelente! 🎉");
        assert_eq!(score_message(85).0, "Muito Bom! 👏");
        assert_eq!(score_message(70).0, "Bom! 👍");
        assert_eq!(score_message(60).0, "Regular 📚");
        assert_eq!(score_message(59).0, "Precisa Melhorar 💪");
    }
}
