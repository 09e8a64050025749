mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::PizzaDashApp;
use data::loader::DatasetCache;
use eframe::egui;

/// Environment variable overriding the dataset location.
const DATA_PATH_ENV: &str = "PIZZA_SALES_CSV";
/// Default dataset location, relative to the working directory.
const DEFAULT_DATA_PATH: &str = "pizza_sales.csv";

fn data_path() -> PathBuf {
    std::env::var_os(DATA_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset is loaded exactly once, before the event loop starts.
    // A missing or malformed file is fatal.
    let mut cache = DatasetCache::new(data_path());
    let dataset = match cache.get_or_load() {
        Ok(dataset) => dataset.clone(),
        Err(e) => {
            log::error!("cannot load dataset: {e}");
            eprintln!("cannot load dataset: {e}");
            eprintln!("run `cargo run --bin generate_sample` to create sample data");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pizza Sales Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PizzaDashApp::new(dataset)))),
    )
}
