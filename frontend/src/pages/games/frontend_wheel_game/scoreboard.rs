use shared::ledger::Team;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ScoreboardProps {
    pub teams: Vec<Team>,
    pub active: usize,
    pub on_rename: Callback<(usize, String)>,
}

#[function_component(Scoreboard)]
pub fn scoreboard(props: &ScoreboardProps) -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-3">
            {
                for props.teams.iter().enumerate().map(|(index, team)| {
                    let is_active = index == props.active;
                    let on_rename = props.on_rename.clone();
                    let onchange = Callback::from(move |e: Event| {
                        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                            on_rename.emit((index, input.value()));
                        }
                    });

                    html! {
                        <div class={classes!(
                            "rounded-lg", "p-3", "border-2", "transition-all",
                            if is_active {
                                "border-blue-500 bg-blue-50 dark:bg-blue-900/30 shadow-lg"
                            } else {
                                "border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800"
                            }
                        )}>
                            <input
                                class={styles::INPUT}
                                value={team.name.clone()}
                                {onchange}
                                aria-label={format!("Team {} name", index + 1)}
                            />
                            <div class="mt-2 flex items-center justify-between">
                                <span class={styles::TEXT_SMALL}>
                                    { if is_active { "Your turn" } else { "" } }
                                </span>
                                <span class="text-2xl font-bold text-gray-900 dark:text-white">{ team.score }</span>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
