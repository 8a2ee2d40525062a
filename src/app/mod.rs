use crate::model::{AppState, EixoWeights, Profile, Resultado, CARGO_PRESETS};
use crate::notify::Toasts;
use crate::podcast::PodcastStudio;
use crate::session::ExamSession;

// Submódulos
pub mod actions;
pub mod exam;
pub mod view_models;

/// Cargo escolhido no formulário de setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CargoChoice {
    #[default]
    None,
    Preset(usize),
    Custom,
}

/// Estado de rascunho da tela de setup; vira um `Profile` ao confirmar.
pub struct SetupForm {
    pub name: String,
    pub cargo: CargoChoice,
    pub custom_weights: EixoWeights,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            cargo: CargoChoice::None,
            custom_weights: EixoWeights::default(),
        }
    }
}

impl SetupForm {
    pub fn cargo_name(&self) -> Option<&str> {
        match self.cargo {
            CargoChoice::None => None,
            CargoChoice::Preset(i) => CARGO_PRESETS.get(i).map(|p| p.name),
            CargoChoice::Custom => Some("Personalizado"),
        }
    }

    pub fn weights(&self) -> EixoWeights {
        match self.cargo {
            CargoChoice::Preset(i) => CARGO_PRESETS
                .get(i)
                .map(|p| p.weights)
                .unwrap_or(self.custom_weights),
            _ => self.custom_weights,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.cargo != CargoChoice::None
    }
}

/// Controlador único de navegação: dono da tela atual, do perfil, da sessão
/// em andamento e do último resultado.
pub struct SimuladoApp {
    pub state: AppState,
    pub profile: Option<Profile>,
    pub session: Option<ExamSession>,
    pub last_resultado: Option<Resultado>,
    pub toasts: Toasts,
    pub podcast: PodcastStudio,
    pub setup: SetupForm,
}

impl SimuladoApp {
    pub fn new() -> Self {
        Self {
            state: AppState::Setup,
            profile: None,
            session: None,
            last_resultado: None,
            toasts: Toasts::default(),
            podcast: PodcastStudio::default(),
            setup: SetupForm::default(),
        }
    }
}

impl Default for SimuladoApp {
    fn default() -> Self {
        Self::new()
    }
}
