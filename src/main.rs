#![allow(non_snake_case)]
mod i18n;
mod calc;
mod app;
#[cfg(test)]
mod tests;

use dioxus::prelude::*;
use dioxus::desktop::{Config, WindowBuilder};
use std::path::PathBuf;
use std::fs;
use directories::BaseDirs;

pub fn get_config_path() -> Option<PathBuf> {
    if let Some(base_dirs) = BaseDirs::new() {
        let mut path = PathBuf::from(base_dirs.config_dir());
        path.push("gasolina");
        path.push("gasolina.conf");
        Some(path)
    } else {
        None
    }
}

/// The settings file holds a single line: the UI language tag. Calculator
/// state is never written here.
pub fn load_settings() -> String {
    if let Some(config_path) = get_config_path() {
        if let Ok(content) = fs::read_to_string(&config_path) {
            return content.lines().next().map_or("", |s| s.trim()).to_string();
        }
    }

    String::new()
}

pub fn save_settings(lang_tag: &str) -> Result<(), String> {
    if let Some(config_path) = get_config_path() {
        if let Some(parent_dir) = config_path.parent() {
            if let Err(e) = fs::create_dir_all(parent_dir) {
                return Err(format!("Could not create the config directory: {}", e));
            }
        }
        fs::write(&config_path, lang_tag)
            .map_err(|e| format!("Could not write the settings file: {}", e))
    } else {
        Err("Could not resolve the config directory.".to_string())
    }
}

fn main() {
    let custom_head = r#"
        <style>
            @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap');

            :root {
                --bg-top: #eff6ff;
                --bg-bottom: #e0e7ff;
                --surface: #ffffff;
                --border-color: #e5e7eb;
                --text-main: #111827;
                --text-sub: #6b7280;
                --accent: #3b82f6;
                --accent-soft: #60a5fa;
                --accent-deep: #2563eb;
                --good: #16a34a;
                --good-dark: #15803d;
                --good-bg-top: #f0fdf4;
                --good-bg-bottom: #ecfdf5;
                --good-border: #bbf7d0;
            }

            html, body {
                margin: 0; padding: 0; overflow: hidden; height: 100%; user-select: none;
                font-family: 'Inter', sans-serif;
                background: linear-gradient(135deg, var(--bg-top), var(--bg-bottom));
                color: var(--text-main);
            }

            .title-bar {
                display: flex; justify-content: space-between; align-items: center; height: 38px;
                background: var(--surface); border-bottom: 1px solid var(--border-color); flex-shrink: 0;
                -webkit-app-region: drag;
            }
            .title-section-left {
                flex: 1; display: flex; align-items: center; padding-left: 15px;
                font-weight: 700; color: var(--text-main); font-size: 0.9em; letter-spacing: 0.5px;
            }
            .title-section-right { flex: 1; display: flex; justify-content: flex-end; height: 100%; align-items: center; -webkit-app-region: no-drag; }

            .window-controls { display: flex; height: 100%; -webkit-app-region: no-drag; }
            .control-btn {
                width: 46px; display: flex; align-items: center; justify-content: center;
                cursor: pointer; transition: background 0.2s; height: 100%;
                color: var(--text-sub); font-family: sans-serif; font-size: 0.9em;
            }
            .control-btn:hover { background: var(--border-color); color: var(--text-main); }
            .control-btn.close:hover { background: #e81123; color: white; }

            .status-box {
                background: linear-gradient(135deg, var(--accent), var(--accent-soft));
                color: white; padding: 4px 12px; border-radius: 12px;
                font-size: 0.75em; font-weight: 800; white-space: nowrap; margin-right: 15px;
                box-shadow: 0 0 10px rgba(59, 130, 246, 0.3);
            }

            .menu-bar {
                background: var(--surface); border-bottom: 1px solid var(--border-color);
                padding: 2px 5px; height: 32px; display: flex; align-items: center;
            }
            .menu-item { padding: 5px 12px; cursor: pointer; user-select: none; font-size: 0.9em; border-radius: 4px; transition: 0.2s; color: var(--text-sub); }
            .menu-item:hover { background-color: var(--bg-top); color: var(--text-main); }
            .menu-dropdown {
                position: absolute; top: 100%; left: 0; background: var(--surface);
                border: 1px solid var(--border-color); box-shadow: 0 10px 30px rgba(17, 24, 39, 0.15);
                min-width: 200px; z-index: 3000; border-radius: 6px; padding: 5px;
            }
            .dropdown-item {
                padding: 8px 12px; cursor: pointer; display: flex; justify-content: space-between;
                font-size: 0.9em; color: var(--text-main); border-radius: 4px;
            }
            .dropdown-item:hover { background-color: var(--accent); color: white; font-weight: 600; }
            .separator { border-top: 1px solid var(--border-color); margin: 4px 0; }

            .page { flex: 1; overflow-y: auto; padding: 16px; }
            .page-inner { max-width: 680px; margin: 0 auto; display: flex; flex-direction: column; gap: 24px; }

            .page-header { text-align: center; padding: 32px 0 0 0; }
            .page-header h1 { font-size: 2.2em; font-weight: 800; margin: 0 0 8px 0; color: var(--text-main); }
            .page-header p { margin: 0; color: var(--text-sub); }

            .calc-card {
                background: var(--surface); border-radius: 14px;
                box-shadow: 0 20px 40px rgba(17, 24, 39, 0.12);
                padding: 24px; display: flex; flex-direction: column; gap: 24px;
            }
            .calc-card h2 { text-align: center; margin: 0; font-size: 1.4em; color: var(--text-main); }

            .field { display: flex; flex-direction: column; gap: 8px; }
            .field label { font-size: 0.85em; font-weight: 600; color: var(--text-main); }

            select, input[type="number"] {
                background: var(--surface); border: 1px solid var(--border-color); color: var(--text-main);
                border-radius: 6px; outline: none; transition: border-color 0.2s;
                padding: 10px 12px; font-size: 1em; font-family: inherit; width: 100%; box-sizing: border-box;
            }
            select:focus, input[type="number"]:focus { border-color: var(--accent); }

            .gauge-wrap { display: flex; justify-content: center; }
            .gauge {
                position: relative; width: 192px; height: 192px;
                border-radius: 50%; background: var(--border-color); overflow: hidden;
            }
            .gauge-fill {
                position: absolute; inset: 0; border-radius: 50%;
                background: linear-gradient(to top, var(--accent), var(--accent-soft));
                transition: clip-path 0.3s;
            }
            .gauge-center {
                position: absolute; inset: 32px; border-radius: 50%; background: var(--surface);
                box-shadow: inset 0 2px 6px rgba(17, 24, 39, 0.15);
                display: flex; align-items: center; justify-content: center; text-align: center;
            }
            .gauge-value { font-size: 1.9em; font-weight: 800; color: var(--text-main); }
            .gauge-caption { font-size: 0.8em; color: var(--text-sub); }

            .slider-row { padding: 0 8px; }
            input[type="range"] { width: 100%; accent-color: var(--accent); }
            .slider-ends { display: flex; justify-content: space-between; font-size: 0.75em; color: var(--text-sub); margin-top: 4px; }

            .results-card {
                background: linear-gradient(to right, var(--good-bg-top), var(--good-bg-bottom));
                border: 1px solid var(--good-border); border-radius: 12px;
                padding: 20px; text-align: center; display: flex; flex-direction: column; gap: 10px;
            }
            .results-card h3 { margin: 0; font-size: 1.05em; color: var(--text-main); }
            .results-summary { font-size: 1.3em; font-weight: 700; color: var(--good-dark); }
            .results-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 6px; font-size: 0.85em; color: var(--text-sub); }
            .stat-cell { background: rgba(255, 255, 255, 0.5); border-radius: 8px; padding: 12px; }
            .stat-cell .stat-name { font-weight: 500; }
            .stat-cell .stat-value { font-size: 1.15em; font-weight: 700; }
            .stat-value.liters { color: var(--accent-deep); }
            .stat-value.cost { color: var(--good); }

            .page-footer { text-align: center; font-size: 0.8em; color: var(--text-sub); padding-bottom: 16px; }

            .modal-overlay {
                position: absolute; top: 0; left: 0; width: 100%; height: 100%;
                background: rgba(17, 24, 39, 0.4); z-index: 5000;
                display: flex; align-items: center; justify-content: center;
            }
            .modal-card {
                background: var(--surface); padding: 25px; border-radius: 12px; width: 360px;
                box-shadow: 0 10px 30px rgba(17, 24, 39, 0.25);
                border: 1px solid var(--border-color); color: var(--text-main);
            }
            .modal-actions { display: flex; justify-content: flex-end; gap: 10px; margin-top: 15px; }
            .btn-plain {
                padding: 8px 14px; border: 1px solid var(--border-color); cursor: pointer; background: transparent;
                font-size: 0.9em; color: var(--text-main); border-radius: 6px; transition: all 0.2s; font-weight: 500;
            }
            .btn-plain:hover { background: var(--bg-top); }
            .btn-primary {
                padding: 8px 14px; border: none; cursor: pointer; background: var(--accent);
                font-size: 0.9em; color: white; border-radius: 6px; transition: all 0.2s; font-weight: 600;
            }
            .btn-primary:hover { background: var(--accent-deep); }

            ::-webkit-scrollbar { width: 8px; height: 8px; }
            ::-webkit-scrollbar-track { background: transparent; }
            ::-webkit-scrollbar-thumb { background: var(--border-color); border-radius: 4px; }
            ::-webkit-scrollbar-thumb:hover { background: var(--text-sub); }
        </style>
        <script>
            document.addEventListener('contextmenu', event => event.preventDefault());
        </script>
    "#;

    let window = WindowBuilder::new()
        .with_title("Calculadora de Gasolina")
        .with_always_on_top(false)
        .with_decorations(false)
        .with_resizable(true)
        .with_transparent(true);

    let config = Config::new()
        .with_custom_head(custom_head.to_string())
        .with_background_color((239, 246, 255, 255))
        .with_window(window);

    LaunchBuilder::desktop().with_cfg(config).launch(app::app);
}
