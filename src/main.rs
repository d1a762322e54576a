// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    // Single-instance gating happens inside the app (see `instance::plugin`),
    // so a second launch can hand its documents to the first one.
    mdreader_lib::run()
}
