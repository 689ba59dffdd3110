use cybervision_core::{LineStyle, TerminalLine};
use leptos::prelude::*;

use crate::config::PROMPT;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for a LineStyle
fn style_class(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Normal => css::textFg,
        LineStyle::Success => css::textSuccess,
        LineStyle::Warning => css::textWarning,
    }
}

#[component]
pub fn Output(line: TerminalLine) -> impl IntoView {
    view! {
        <div class=format!("{} {}", css::line, style_class(line.style))>
            <span class=css::marker>{PROMPT}" "</span>
            {line.text}
        </div>
    }
}

/// Line currently being typed out, with a caret after the revealed text.
#[component]
pub fn TypingOutput(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! {
        <div class=format!("{} {}", css::line, css::textFg)>
            <span class=css::marker>{PROMPT}" "</span>
            {text}
            <span class=css::caret></span>
        </div>
    }
}
