//! Terminal input line.
//!
//! Keystrokes go to a visually hidden `<input>`; the typed text is mirrored
//! into the prompt line with a blinking cursor.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::config::PROMPT;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Move keyboard focus to the hidden input, if it is mounted.
pub fn focus_input() {
    crate::utils::dom::focus_element(&format!("input.{}", css::hiddenInput));
}

#[component]
pub fn Input(
    on_submit: Callback<String>,
    on_history_prev: Callback<(), Option<String>>,
    on_history_next: Callback<(), Option<String>>,
    on_autocomplete: Callback<String, Option<&'static str>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            let value = input_value.get();
            set_input_value.set(String::new());
            on_submit.run(value);
        }
        "ArrowUp" => {
            ev.prevent_default();
            if let Some(cmd) = on_history_prev.run(()) {
                set_input_value.set(cmd);
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            if let Some(cmd) = on_history_next.run(()) {
                set_input_value.set(cmd);
                move_cursor_to_end();
            }
        }
        "Tab" => {
            ev.prevent_default();
            if let Some(completed) = on_autocomplete.run(input_value.get()) {
                set_input_value.set(completed.to_string());
                move_cursor_to_end();
            }
        }
        "c" if ev.ctrl_key() => {
            set_input_value.set(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            on_submit.run("clear".to_string());
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>{PROMPT}" "</span>
            <span class=css::typed>{move || input_value.get()}</span>
            <span class=css::cursor>"\u{a0}"</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::hiddenInput
                autocomplete="off"
                spellcheck="false"
                prop:value=input_value
                on:input=handle_input
                on:keydown=handle_keydown
            />
        </div>
    }
}
