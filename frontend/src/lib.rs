pub mod base;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::base::Base;
use crate::pages::games::Games;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <Base>
                <Games />
            </Base>
        </div>
    }
}
