use std::collections::BTreeSet;

use shared::constants::is_vowel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KeyboardProps {
    pub used_letters: BTreeSet<char>,
    /// Letters that may be picked right now.
    pub available: BTreeSet<char>,
    pub on_key_press: Callback<char>,
}

#[function_component(Keyboard)]
pub fn keyboard(props: &KeyboardProps) -> Html {
    let rows = [
        "QWERTYUIOP".chars().collect::<Vec<_>>(),
        "ASDFGHJKL".chars().collect::<Vec<_>>(),
        "ZXCVBNM".chars().collect::<Vec<_>>(),
    ];

    html! {
        <div class="keyboard w-full">
            {
                for rows.iter().map(|row| html! {
                    <div class="flex justify-center mb-2 w-full">
                        {
                            for row.iter().map(|&letter| {
                                let used = props.used_letters.contains(&letter);
                                let enabled = props.available.contains(&letter);
                                let status_class = if used {
                                    "bg-gray-400 dark:bg-gray-600 text-gray-600 dark:text-gray-400 line-through"
                                } else if is_vowel(letter) {
                                    "bg-amber-200 dark:bg-amber-600 text-gray-900 dark:text-white"
                                } else {
                                    "bg-gray-200 dark:bg-gray-700 text-gray-900 dark:text-white"
                                };
                                let on_key_press = props.on_key_press.clone();

                                html! {
                                    <button
                                        type="button"
                                        disabled={!enabled}
                                        class={classes!(
                                            "w-7", "h-9", "md:w-9", "md:h-11",
                                            "flex", "items-center", "justify-center",
                                            "text-sm", "font-bold", "rounded", "mx-0.5",
                                            "disabled:opacity-40", "disabled:cursor-not-allowed",
                                            status_class
                                        )}
                                        onclick={move |_| on_key_press.emit(letter)}
                                    >
                                        { letter }
                                    </button>
                                }
                            })
                        }
                    </div>
                })
            }
        </div>
    }
}
