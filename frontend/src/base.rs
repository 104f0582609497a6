use web_sys::window;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Children,
}

fn handle_theme_toggle(dark_mode: bool) {
    let theme = if dark_mode { "dark" } else { "light" };
    if let Some(html) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        html.set_class_name(theme);
    }
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item("theme", theme);
    }
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let dark_mode = use_state(|| window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("theme").ok().flatten())
        .map_or(true, |theme| theme == "dark")
    );

    {
        let dark_mode = *dark_mode;
        use_effect_with(dark_mode, move |dark_mode| {
            handle_theme_toggle(*dark_mode);
            || ()
        });
    }

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dark_mode.set(!*dark_mode);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <div class={styles::NAV_CONTENT}>
                        <span class={styles::NAV_BRAND}>{"Wheel of Fortune"}</span>
                        <button onclick={toggle_theme} class={styles::BUTTON_ICON} title="Toggle theme">
                            { if *dark_mode { "☀" } else { "☾" } }
                        </button>
                    </div>
                </div>
            </nav>
            <main class="pt-16">
                { for props.children.iter() }
            </main>
        </div>
    }
}
