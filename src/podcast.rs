//! Colaborador externo de "geração de podcast", simulado.
//!
//! Recebe um resultado, devolve um identificador de trabalho e, passado um
//! atraso fixo, o trabalho aparece como pronto no próximo `poll_ready`. Não
//! há contrato além disso — nenhum áudio é produzido de verdade.

use crate::model::Resultado;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Atraso artificial até o "podcast" ficar pronto.
const PRODUCTION_DELAY: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JobId(u64);

#[derive(Debug)]
struct PodcastJob {
    id: JobId,
    ready_at: Instant,
}

#[derive(Debug, Default)]
pub struct PodcastStudio {
    next_id: u64,
    jobs: Vec<PodcastJob>,
}

impl PodcastStudio {
    /// Submete a análise de erros de um resultado. Dispare e esqueça: o
    /// chamador só recebe o identificador do trabalho.
    pub fn submit(&mut self, resultado: &Resultado, now: Instant) -> JobId {
        self.next_id += 1;
        let id = JobId(self.next_id);
        info!(
            "podcast {:?} submetido: {} erros para analisar",
            id,
            resultado.total_questions - resultado.correct_answers
        );
        self.jobs.push(PodcastJob {
            id,
            ready_at: now + PRODUCTION_DELAY,
        });
        id
    }

    /// Remove e devolve os trabalhos cujo atraso de produção já passou.
    pub fn poll_ready(&mut self, now: Instant) -> Vec<JobId> {
        let mut ready = Vec::new();
        self.jobs.retain(|job| {
            if now >= job.ready_at {
                debug!("podcast {:?} pronto", job.id);
                ready.push(job.id);
                false
            } else {
                true
            }
        });
        ready
    }

    pub fn pending(&self) -> usize {
        self.jobs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score;
    use std::collections::HashMap;

    fn resultado() -> Resultado {
        score(&[], &HashMap::new(), 0)
    }

    #[test]
    fn job_becomes_ready_after_delay() {
        let now = Instant::now();
        let mut studio = PodcastStudio::default();
        let id = studio.submit(&resultado(), now);
        assert_eq!(studio.pending(), 1);

        assert!(studio.poll_ready(now + Duration::from_secs(4)).is_empty());
        assert_eq!(studio.pending(), 1);

        let ready = studio.poll_ready(now + PRODUCTION_DELAY);
        assert_eq!(ready, vec![id]);
        assert_eq!(studio.pending(), 0);

        // Já drenado: não reaparece.
        assert!(studio.poll_ready(now + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn job_ids_are_distinct() {
        let now = Instant::now();
        let mut studio = PodcastStudio::default();
        let a = studio.submit(&resultado(), now);
        let b = studio.submit(&resultado(), now);
        assert_ne!(a, b);
    }
}
