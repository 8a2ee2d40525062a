use egui::Color32;

/// Cor da nota: verde ≥80, amarelo ≥60, vermelho abaixo.
pub fn score_color(percent: u32) -> Color32 {
    if percent >= 80 {
        Color32::from_rgb(22, 163, 74)
    } else if percent >= 60 {
        Color32::from_rgb(202, 138, 4)
    } else {
        Color32::from_rgb(220, 38, 38)
    }
}

/// Tempo gasto em formato curto: "1h 5min" ou "35min".
pub fn format_short_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}min")
    } else {
        format!("{minutes}min")
    }
}
