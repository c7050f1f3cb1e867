//! Sidebar Component
//!
//! Section links, highlighted by scroll position or by click.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::sidebar::{current_section, link_href, SECTIONS};

/// Recompute the active section on every window scroll
fn bind_window_scroll(set_active: WriteSignal<Option<&'static str>>) {
    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        set_active.set(current_section());
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    on_scroll.forget();
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (active, set_active) = signal::<Option<&'static str>>(None);

    // Initial highlight once the sections are mounted
    Effect::new(move |_| set_active.set(current_section()));
    bind_window_scroll(set_active);

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <i class="fas fa-leaf"></i>
                <span>"Food Tracker"</span>
            </div>
            <ul class="sidebar-menu">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        let id = section.id;
                        view! {
                            <li>
                                <a
                                    href=link_href(id)
                                    class=move || if active.get() == Some(id) { "active" } else { "" }
                                    on:click=move |_| set_active.set(Some(id))
                                >
                                    <i class=section.icon></i>
                                    <span>{section.label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
