use dioxus::prelude::*;
use dioxus::html::input_data::MouseButton;
use crate::calc::{self, VEHICLES};
use crate::i18n::{I18nService, Language, LANGUAGES};
use crate::{load_settings, save_settings};
use sys_locale::get_locale;

pub fn app() -> Element {
    let mut i18n_service = use_signal(|| {
        let saved_lang = load_settings();
        let lang = Language::from_tag(&saved_lang).unwrap_or_else(|| {
            let system_lang = get_locale().unwrap_or_else(|| "en-US".to_string());
            Language::from_locale(&system_lang)
        });
        I18nService::new(lang)
    });

    let mut selected_vehicle = use_signal(|| "".to_string());
    let mut fuel_percentage = use_signal(|| 25u8);
    let mut price_text = use_signal(|| "1.50".to_string());

    let mut status_msg = use_signal(|| "ready".to_string());
    let mut active_menu = use_signal(|| None::<String>);
    let mut show_settings_modal = use_signal(|| false);
    let mut modal_language = use_signal(|| Language::EsEs.tag().to_string());
    let mut zoom_level = use_signal(|| 1.0);

    let i18n = i18n_service.read();

    let vehicle = calc::find_vehicle(&selected_vehicle.read());
    let percentage = *fuel_percentage.read();
    let price = calc::parse_price(&price_text.read());

    let estimate = calc::fill_estimate(vehicle, percentage, price);
    let liters_label = calc::format_liters(estimate.liters_needed);
    let cost_label = calc::format_cost(estimate.total_cost);
    let summary = i18n.translate_args(
        "results-summary",
        &[("liters", &liters_label), ("cost", &cost_label)],
    );

    // Fill rises from the bottom, so clip away the empty share from the top.
    let gauge_clip = 100 - percentage;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; width: 100vw; height: 100vh; overflow: hidden; zoom: {zoom_level};",
            onmousedown: move |_| {
                active_menu.set(None);
            },

            div { class: "title-bar",
                onmousedown: |e| {
                    if e.held_buttons().contains(MouseButton::Primary) {
                        dioxus::desktop::window().drag();
                    }
                },
                div { class: "title-section-left",
                    span { style: "color: var(--accent); margin-right: 5px;", "Gas" } "olina"
                }
                div { class: "title-section-right",
                    if *status_msg.read() != "ready" {
                        div { class: "status-box", "{i18n.translate(&status_msg.read())}" }
                    }
                    div { class: "window-controls",
                        div { class: "control-btn",
                            onmousedown: |e| e.stop_propagation(),
                            onclick: |e| {
                                e.stop_propagation();
                                dioxus::desktop::window().set_minimized(true);
                            },
                            "_"
                        }
                        div { class: "control-btn",
                            onmousedown: |e| e.stop_propagation(),
                            onclick: |e| {
                                e.stop_propagation();
                                let w = dioxus::desktop::window();
                                if w.is_maximized() { w.set_maximized(false); } else { w.set_maximized(true); }
                            },
                            "☐"
                        }
                        div { class: "control-btn close",
                            onmousedown: |e| e.stop_propagation(),
                            onclick: |e| {
                                e.stop_propagation();
                                std::thread::spawn::<_, ()>(|| std::process::exit(0));
                            },
                            "✕"
                        }
                    }
                }
            }

            div { class: "menu-bar",
                div {
                    style: "position: relative;",
                    div {
                        class: "menu-item",
                        onmousedown: move |e| e.stop_propagation(),
                        onclick: move |e| { e.stop_propagation(); let current = active_menu.read().clone(); let new_val = if current == Some("file".to_string()) { None } else { Some("file".to_string()) }; active_menu.set(new_val); },
                        "{i18n.translate(\"m-file\")}"
                    }
                    if *active_menu.read() == Some("file".to_string()) {
                        div { class: "menu-dropdown", onmousedown: move |e| e.stop_propagation(),
                            div { class: "dropdown-item",
                                onclick: move |_| {
                                    modal_language.set(i18n_service.read().language().tag().to_string());
                                    show_settings_modal.set(true);
                                    active_menu.set(None);
                                },
                                "{i18n.translate(\"mi-settings\")}"
                            }
                            div { class: "separator" }
                            div { class: "dropdown-item", onclick: move |_| { std::thread::spawn::<_, ()>(|| { std::process::exit(0); }); }, "{i18n.translate(\"mi-exit\")}" }
                        }
                    }
                }
                div { style: "position: relative;",
                    div { class: "menu-item", onmousedown: move |e| e.stop_propagation(), onclick: move |e| { e.stop_propagation(); let current = active_menu.read().clone(); let new_val = if current == Some("view".to_string()) { None } else { Some("view".to_string()) }; active_menu.set(new_val); }, "{i18n.translate(\"m-view\")}" }
                    if *active_menu.read() == Some("view".to_string()) {
                        div { class: "menu-dropdown", onmousedown: move |e| e.stop_propagation(),
                            div { class: "dropdown-item", onclick: move |_| { let z = *zoom_level.read() + 0.1; zoom_level.set(z); }, span { "{i18n.translate(\"mi-zoom-in\")}" }, span { style: "color: #888;", "Ctrl++" } }
                            div { class: "dropdown-item", onclick: move |_| { let z = *zoom_level.read() - 0.1; zoom_level.set(z); }, span { "{i18n.translate(\"mi-zoom-out\")}" }, span { style: "color: #888;", "Ctrl+-" } }
                        }
                    }
                }
                div { class: "menu-item", onmousedown: move |e| e.stop_propagation(), "{i18n.translate(\"m-help\")}" }
            }

            div { class: "page",
                div { class: "page-inner",

                    div { class: "page-header",
                        h1 { "{i18n.translate(\"app-title\")}" }
                        p { "{i18n.translate(\"app-subtitle\")}" }
                    }

                    div { class: "calc-card",
                        h2 { "{i18n.translate(\"card-title\")}" }

                        div { class: "field",
                            label { r#for: "car-select", "{i18n.translate(\"label-vehicle\")}" }
                            select {
                                id: "car-select",
                                value: "{selected_vehicle}",
                                onchange: move |evt| selected_vehicle.set(evt.value()),
                                option { value: "", "{i18n.translate(\"select-placeholder\")}" }
                                for car in VEHICLES.iter() {
                                    option { value: "{car.name}", "{car.name} ({car.capacity}L)" }
                                }
                            }
                        }

                        if vehicle.is_some() {
                            div { class: "field",
                                label { "{i18n.translate(\"label-fuel-level\")}: {percentage}%" }

                                div { class: "gauge-wrap",
                                    div { class: "gauge",
                                        div { class: "gauge-fill", style: "clip-path: inset({gauge_clip}% 0 0 0);" }
                                        div { class: "gauge-center",
                                            div {
                                                div { class: "gauge-value", "{percentage}%" }
                                                div { class: "gauge-caption", "{i18n.translate(\"gauge-caption\")}" }
                                            }
                                        }
                                    }
                                }

                                div { class: "slider-row",
                                    input {
                                        r#type: "range",
                                        min: "0",
                                        max: "100",
                                        step: "1",
                                        value: "{percentage}",
                                        oninput: move |evt| {
                                            let parsed = evt.value().parse::<i64>().unwrap_or(0);
                                            fuel_percentage.set(calc::clamp_percentage(parsed));
                                        }
                                    }
                                    div { class: "slider-ends",
                                        span { "{i18n.translate(\"slider-empty\")}" }
                                        span { "{i18n.translate(\"slider-full\")}" }
                                    }
                                }
                            }

                            div { class: "field",
                                label { r#for: "price-input", "{i18n.translate(\"label-price\")}" }
                                input {
                                    id: "price-input",
                                    r#type: "number",
                                    step: "0.01",
                                    min: "0",
                                    value: "{price_text}",
                                    placeholder: "{i18n.translate(\"price-placeholder\")}",
                                    oninput: move |evt| price_text.set(evt.value())
                                }
                            }

                            if price > 0.0 {
                                div { class: "results-card",
                                    h3 { "{i18n.translate(\"results-title\")}" }
                                    div { class: "results-summary", "{summary}" }
                                    div { class: "results-grid",
                                        div { class: "stat-cell",
                                            div { class: "stat-name", "{i18n.translate(\"results-liters\")}" }
                                            div { class: "stat-value liters", "{liters_label}" }
                                        }
                                        div { class: "stat-cell",
                                            div { class: "stat-name", "{i18n.translate(\"results-cost\")}" }
                                            div { class: "stat-value cost", "{cost_label}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "page-footer", "{i18n.translate(\"footer-note\")}" }
                }
            }

            if *show_settings_modal.read() {
                div { class: "modal-overlay",
                    div { class: "modal-card",
                        onmousedown: move |e| e.stop_propagation(),
                        h3 { style: "margin-top: 0;", "{i18n.translate(\"modal-settings-title\")}" }
                        div { class: "field",
                            label { r#for: "lang-select", "{i18n.translate(\"modal-language\")}" }
                            select {
                                id: "lang-select",
                                value: "{modal_language}",
                                onchange: move |evt| modal_language.set(evt.value()),
                                for lang in LANGUAGES.iter() {
                                    option { value: "{lang.tag()}", "{lang.label()}" }
                                }
                            }
                        }
                        div { class: "modal-actions",
                            button { class: "btn-plain", onclick: move |_| show_settings_modal.set(false), "{i18n.translate(\"modal-cancel\")}" }
                            button {
                                class: "btn-primary",
                                onclick: move |_| {
                                    if let Some(lang) = Language::from_tag(&modal_language.read()) {
                                        i18n_service.write().set_language(lang);
                                        match save_settings(lang.tag()) {
                                            Ok(_) => status_msg.set("status-saved".to_string()),
                                            Err(e) => status_msg.set(e),
                                        }
                                    }
                                    show_settings_modal.set(false);
                                },
                                "{i18n.translate(\"modal-save\")}"
                            }
                        }
                    }
                }
            }
        }
    }
}
