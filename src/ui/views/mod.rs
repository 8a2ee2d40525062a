pub mod dashboard;
pub mod resultado;
pub mod setup;
pub mod simulado;
