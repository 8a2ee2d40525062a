use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Um dos cinco eixos temáticos do edital CNU.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Eixo {
    Eixo1,
    Eixo2,
    Eixo3,
    Eixo4,
    Eixo5,
}

impl Eixo {
    pub const ALL: [Eixo; 5] = [
        Eixo::Eixo1,
        Eixo::Eixo2,
        Eixo::Eixo3,
        Eixo::Eixo4,
        Eixo::Eixo5,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Eixo::Eixo1 => "Eixo 1",
            Eixo::Eixo2 => "Eixo 2",
            Eixo::Eixo3 => "Eixo 3",
            Eixo::Eixo4 => "Eixo 4",
            Eixo::Eixo5 => "Eixo 5",
        }
    }

    /// Título completo do eixo, conforme o edital.
    pub fn tema(self) -> &'static str {
        match self {
            Eixo::Eixo1 => "Gestão Governamental e Governança Pública",
            Eixo::Eixo2 => "Riscos, Inovação, Participação e Coordenação",
            Eixo::Eixo3 => "Políticas Públicas",
            Eixo::Eixo4 => "Administração Financeira e Orçamentária",
            Eixo::Eixo5 => "Transparência e Proteção de Dados",
        }
    }
}

pub const MIN_WEIGHT: u8 = 1;
pub const MAX_WEIGHT: u8 = 5;

/// Peso (1–5) atribuído a cada eixo. Os cinco eixos estão sempre presentes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EixoWeights {
    pub eixo1: u8,
    pub eixo2: u8,
    pub eixo3: u8,
    pub eixo4: u8,
    pub eixo5: u8,
}

impl EixoWeights {
    pub const fn new(eixo1: u8, eixo2: u8, eixo3: u8, eixo4: u8, eixo5: u8) -> Self {
        Self {
            eixo1,
            eixo2,
            eixo3,
            eixo4,
            eixo5,
        }
    }

    pub const fn uniform(w: u8) -> Self {
        Self::new(w, w, w, w, w)
    }

    pub fn get(&self, eixo: Eixo) -> u8 {
        match eixo {
            Eixo::Eixo1 => self.eixo1,
            Eixo::Eixo2 => self.eixo2,
            Eixo::Eixo3 => self.eixo3,
            Eixo::Eixo4 => self.eixo4,
            Eixo::Eixo5 => self.eixo5,
        }
    }

    pub fn get_mut(&mut self, eixo: Eixo) -> &mut u8 {
        match eixo {
            Eixo::Eixo1 => &mut self.eixo1,
            Eixo::Eixo2 => &mut self.eixo2,
            Eixo::Eixo3 => &mut self.eixo3,
            Eixo::Eixo4 => &mut self.eixo4,
            Eixo::Eixo5 => &mut self.eixo5,
        }
    }

    pub fn total(&self) -> u32 {
        Eixo::ALL.iter().map(|&e| self.get(e) as u32).sum()
    }

    /// Força todos os pesos para dentro de [1,5]. O formulário já limita a
    /// entrada; isto cobre presets construídos em código.
    pub fn clamped(mut self) -> Self {
        for eixo in Eixo::ALL {
            let w = self.get_mut(eixo);
            *w = (*w).clamp(MIN_WEIGHT, MAX_WEIGHT);
        }
        self
    }
}

impl Default for EixoWeights {
    fn default() -> Self {
        Self::uniform(MIN_WEIGHT)
    }
}

/// Preset de pesos para um cargo do concurso.
#[derive(Clone, Copy, Debug)]
pub struct CargoPreset {
    pub code: &'static str,
    pub name: &'static str,
    pub weights: EixoWeights,
}

pub const CARGO_PRESETS: [CargoPreset; 1] = [CargoPreset {
    code: "B5-06-A",
    name: "Analista I - Administração",
    weights: EixoWeights::new(3, 2, 1, 3, 1),
}];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidProfile {
    #[error("o nome não pode ficar em branco")]
    EmptyName,
    #[error("selecione um cargo antes de continuar")]
    EmptyCargo,
}

/// Perfil configurado uma vez no setup; imutável durante a sessão.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub cargo: String,
    pub weights: EixoWeights,
}

impl Profile {
    pub fn new(name: &str, cargo: &str, weights: EixoWeights) -> Result<Self, InvalidProfile> {
        let name = name.trim();
        let cargo = cargo.trim();
        if name.is_empty() {
            return Err(InvalidProfile::EmptyName);
        }
        if cargo.is_empty() {
            return Err(InvalidProfile::EmptyCargo);
        }
        Ok(Self {
            name: name.to_owned(),
            cargo: cargo.to_owned(),
            weights: weights.clamped(),
        })
    }
}

/// Questão sintética de múltipla escolha. Criada pelo gerador, nunca mutada.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: u32,
    pub eixo: Eixo,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

/// Acertos/total de um eixo dentro de um resultado.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EixoStat {
    pub correct: u32,
    pub total: u32,
}

/// Relatório final de uma sessão. Derivado uma única vez na conclusão.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Resultado {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub score_percent: u32,
    pub per_eixo: BTreeMap<Eixo, EixoStat>,
    pub time_spent_secs: u32,
    pub answers: HashMap<u32, usize>,
    pub questions: Vec<Question>,
}

/// Tela ativa do aplicativo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Setup,
    Dashboard,
    Simulado,
    Resultado,
}
