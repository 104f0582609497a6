use shared::shared_wheel_game::{SliceKind, SliceOutcome};
use shared::SpinChoice;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub choice: SpinChoice,
    pub disabled: bool,
    pub on_spin: Callback<SpinChoice>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let (label, class) = match props.choice {
        SpinChoice::Consonant => ("Spin for a consonant", styles::BUTTON_PRIMARY),
        SpinChoice::Vowel => ("Spin for a vowel", styles::BUTTON_VOWEL),
    };
    let on_spin = props.on_spin.clone();
    let choice = props.choice;

    html! {
        <button
            type="button"
            class={class}
            disabled={props.disabled}
            onclick={move |_| on_spin.emit(choice)}
        >
            { label }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub status: String,
    #[prop_or_default]
    pub landed: Option<SliceOutcome>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    html! {
        <div class="space-y-2 text-center min-h-[4rem]">
            if let Some(outcome) = props.landed {
                <div class="inline-flex items-center gap-2">
                    <span class="w-4 h-4 rounded-full" style={format!("background-color: {}", outcome.slice.color)} />
                    <span class={classes!(
                        "font-semibold",
                        match outcome.slice.kind {
                            SliceKind::Points => "text-gray-900 dark:text-white",
                            _ => "text-red-600 dark:text-red-400",
                        }
                    )}>
                        { format!("Landed on: {}", outcome.slice.label) }
                    </span>
                </div>
            }
            <p class={styles::TEXT_BODY}>{ &props.status }</p>
            if let Some(error) = &props.error {
                <p class={styles::TEXT_ERROR}>{ error }</p>
            }
        </div>
    }
}
