#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = bazaar_ui::run() {
        eprintln!("Bazaar admin failed: {err}");
        std::process::exit(1);
    }
}
