use anyhow::Result;
use eframe::egui;
use tracing::info;

mod config;
mod export;
mod generator;
mod models;
mod ui;
mod validation;

use ui::ProteinApp;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    info!("Starting protein table generator");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Générateur de besoins en protéines")
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Générateur de besoins en protéines",
        options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(ProteinApp::new(cc)))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

fn configure_fonts(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::proportional(14.0),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(14.0),
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(18.0),
    );
    ctx.set_style(style);
}
