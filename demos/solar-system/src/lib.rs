use wasm_bindgen::prelude::*;
use parallax_engine::*;

mod app;
mod bodies;
use app::SolarSystem;

parallax_web::export_app!(SolarSystem, "solar-system");
