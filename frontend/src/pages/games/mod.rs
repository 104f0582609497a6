mod frontend_wheel_game;

use yew::prelude::*;

use crate::styles;
use frontend_wheel_game::FrontendWheelGame;

#[function_component]
pub fn Games() -> Html {
    html! {
        <div class="bg-gradient-to-b from-blue-50 to-white dark:from-gray-900 dark:to-gray-800 min-h-[calc(100vh-4rem)]">
            <div class={styles::CONTAINER_LG}>
                <div class="space-y-6">
                    <h1 class={classes!(styles::TEXT_H1, "text-center")}>{"Spin, guess, solve"}</h1>
                    <FrontendWheelGame />
                </div>
            </div>
        </div>
    }
}
