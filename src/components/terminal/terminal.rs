//! Terminal view component.
//!
//! Renders the transcript and the input line, keeps the output scrolled to
//! the bottom and applies the active theme to the document root.

use cybervision_core::{SessionState, StyleVars};
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output, TypingOutput, focus_input};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Auto-scroll output to bottom when the transcript changes.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.view.lines.track();
        ctx.view.typing.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

/// Replace the theme variables on `element`.
///
/// `stale` lists the variables set by the previous theme; they are removed
/// first, so a theme never inherits values it does not define.
fn apply_theme_vars(element: &HtmlElement, stale: &[String], vars: &StyleVars) {
    let style = element.style();
    for name in stale {
        if let Err(e) = style.remove_property(name) {
            log::warn!("failed to remove {}: {:?}", name, e);
        }
    }
    for (name, value) in vars {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("failed to set {}: {:?}", name, e);
        }
    }
}

/// Mirror the active theme onto `document.documentElement`.
fn setup_theme_effect(style_vars: RwSignal<StyleVars>) {
    let applied = StoredValue::new(Vec::<String>::new());

    Effect::new(move || {
        let vars = style_vars.get();
        let Some(root) = dom::document_root() else {
            log::warn!("document root unavailable, theme not applied");
            return;
        };
        apply_theme_vars(&root, &applied.get_value(), &vars);
        applied.set_value(vars.into_keys().collect());
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let Some(ctx) = use_context::<AppContext>() else {
        log::error!("Terminal rendered without an AppContext");
        return ().into_any();
    };

    let output_ref = NodeRef::<leptos::html::Div>::new();
    setup_autoscroll_effect(ctx, output_ref);
    setup_theme_effect(ctx.view.style_vars);

    // Callbacks
    let on_submit = Callback::new(move |line: String| ctx.submit(&line));
    let on_history_prev = Callback::new(move |()| ctx.recall_previous());
    let on_history_next = Callback::new(move |()| ctx.recall_next());
    let on_autocomplete = Callback::new(move |partial: String| ctx.complete(&partial));

    let is_active = move || ctx.view.state.get() == SessionState::Active;
    let container_class = move || {
        if is_active() {
            format!("{} {}", css::container, css::active)
        } else {
            css::container.to_string()
        }
    };

    view! {
        <div class=container_class on:click=move |_| focus_input()>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || ctx.view.lines.get()
                    key=|(key, _)| *key
                    children=|(_, line)| view! { <Output line=line /> }
                />
                {move || {
                    ctx.view
                        .typing
                        .get()
                        .map(|text| view! { <TypingOutput text=text /> })
                }}
                <Show when=is_active fallback=|| ()>
                    <Input
                        on_submit=on_submit
                        on_history_prev=on_history_prev
                        on_history_next=on_history_next
                        on_autocomplete=on_autocomplete
                    />
                </Show>
            </div>
        </div>
    }
    .into_any()
}
