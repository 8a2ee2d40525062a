use simulado_cnu::SimuladoApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Simulado CNU",
        options,
        Box::new(|_cc| Ok(Box::new(SimuladoApp::new()))),
    )
}
