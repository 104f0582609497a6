mod keyboard;
mod puzzle_board;
mod scoreboard;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use gloo::dialogs::{alert, prompt};
use gloo_events::EventListener;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::constants::{ALPHABET, INVALID_FILE_MESSAGE};
use shared::shared_wheel_game::AnimationStatus;
use shared::{GameResult, GameSession, SessionConfig, SpinChoice};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::use_default_vocabulary;
use crate::styles;
use keyboard::Keyboard;
use puzzle_board::PuzzleBoard;
use scoreboard::Scoreboard;
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton};

type SharedSession = Rc<RefCell<Option<GameSession>>>;

/// Everything a callback needs to drive the session and re-render afterwards.
#[derive(Clone)]
struct GameHandle {
    session: SharedSession,
    rng: Rc<RefCell<SmallRng>>,
    error: UseStateHandle<Option<String>>,
    redraw: UseForceUpdateHandle,
}

impl GameHandle {
    /// Runs `action` against the live session. Rejections land in the error line.
    fn apply<T>(
        &self,
        action: impl FnOnce(&mut GameSession, &mut SmallRng) -> GameResult<T>,
    ) -> Option<T> {
        let result = {
            let mut session = self.session.borrow_mut();
            let session = session.as_mut()?;
            action(session, &mut *self.rng.borrow_mut())
        };
        self.redraw.force_update();

        match result {
            Ok(value) => {
                self.error.set(None);
                Some(value)
            }
            Err(err) => {
                log::warn!("Action rejected: {}", err);
                self.error.set(Some(err.to_string()));
                None
            }
        }
    }

    fn pick_letter(&self, letter: char) {
        let available = self
            .session
            .borrow()
            .as_ref()
            .map_or(false, |s| s.is_letter_available(letter));
        if available {
            self.apply(|session, _| session.pick_letter(letter));
        }
    }
}

/// Steps the wheel once per animation frame until the spin resolves.
fn animate_spin(session: SharedSession, redraw: UseForceUpdateHandle) {
    let Some(window) = window() else {
        return;
    };

    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut last_timestamp: Option<f64> = None;

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let delta = last_timestamp.map_or(0.0, |last| timestamp - last);
        last_timestamp = Some(timestamp);

        let status = match session.borrow_mut().as_mut() {
            Some(session) => session.tick(delta),
            None => AnimationStatus::Idle,
        };
        redraw.force_update();

        if let AnimationStatus::Running { .. } = status {
            if let (Some(window), Some(callback)) = (web_sys::window(), f.borrow().as_ref()) {
                let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            }
        } else {
            // Drop our handle so the closure is freed once it returns
            let _ = f.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = g.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    };
}

#[function_component(FrontendWheelGame)]
pub fn frontend_wheel_game() -> Html {
    let default_load = use_default_vocabulary();
    let session: SharedSession = use_mut_ref(|| None);
    let rng = use_mut_ref(SmallRng::from_entropy);
    let error = use_state(|| None::<String>);
    let redraw = use_force_update();

    let handle = GameHandle {
        session: session.clone(),
        rng: rng.clone(),
        error: error.clone(),
        redraw: redraw.clone(),
    };

    // Start the session once the default vocabulary (or its fallback) is in
    {
        let handle = handle.clone();
        use_effect_with(default_load, move |load| {
            if let Some(load) = load {
                if handle.session.borrow().is_none() {
                    let mut session = GameSession::new(
                        SessionConfig::default(),
                        load.store.clone(),
                        &mut *handle.rng.borrow_mut(),
                    );
                    if let Some(notice) = load.notice {
                        session.notify(notice);
                    }
                    log::info!(
                        "Vocabulary ready: {} categories, {} words",
                        session.vocabulary().category_count(),
                        session.vocabulary().word_count()
                    );
                    *handle.session.borrow_mut() = Some(session);
                    handle.redraw.force_update();
                }
            }
            || ()
        });
    }

    // Physical keyboard letters behave like the on-screen keys
    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.ctrl_key() || event.meta_key() || event.alt_key() {
                        return;
                    }
                    let typing = event
                        .target()
                        .map_or(false, |target| target.dyn_ref::<HtmlInputElement>().is_some());
                    if typing {
                        return;
                    }

                    let key = event.key();
                    let mut chars = key.chars();
                    if let (Some(ch), None) = (chars.next(), chars.next()) {
                        if ch.is_ascii_alphabetic() {
                            handle.pick_letter(ch.to_ascii_uppercase());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_spin = {
        let handle = handle.clone();
        Callback::from(move |choice: SpinChoice| {
            if handle.apply(|session, rng| session.request_spin(choice, rng)).is_some() {
                animate_spin(handle.session.clone(), handle.redraw.clone());
            }
        })
    };

    let on_key_press = {
        let handle = handle.clone();
        Callback::from(move |letter: char| handle.pick_letter(letter))
    };

    let on_solve = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(guess) = prompt("Enter your solution:", None) else {
                return;
            };
            if guess.trim().is_empty() {
                return;
            }
            handle.apply(|session, _| session.solve(&guess));
        })
    };

    let on_new_word = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            handle.apply(|session, rng| session.new_word(rng));
        })
    };

    let on_new_game = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            handle.apply(|session, rng| session.new_game(rng));
        })
    };

    let on_toggle_hint = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            handle.apply(|session, _| Ok(session.toggle_hint()));
        })
    };

    let on_rename = {
        let handle = handle.clone();
        Callback::from(move |(index, name): (usize, String)| {
            handle.apply(|session, _| Ok(session.rename_team(index, &name)));
        })
    };

    let on_vocab_file = {
        let handle = handle.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Allow picking the same file again later
            input.set_value("");

            let handle = handle.clone();
            spawn_local(async move {
                let file = gloo::file::File::from(file);
                match gloo::file::futures::read_as_text(&file).await {
                    Ok(text) => {
                        let loaded = handle.apply(|session, rng| session.load_vocabulary_json(&text, rng));
                        if loaded.is_none() {
                            alert(INVALID_FILE_MESSAGE);
                        }
                    }
                    Err(err) => {
                        log::error!("Failed to read vocabulary file: {:?}", err);
                        alert(INVALID_FILE_MESSAGE);
                    }
                }
            });
        })
    };

    let guard = session.borrow();
    let Some(game) = guard.as_ref() else {
        return html! {
            <div class="flex justify-center items-center gap-3 py-16">
                <svg class={styles::LOADING_SPINNER} viewBox="0 0 24 24" fill="none">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" />
                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z" />
                </svg>
                <span class={styles::TEXT_BODY}>{"Loading vocabulary..."}</span>
            </div>
        };
    };

    let wheel = game.wheel();
    let spinning = wheel.is_spinning();
    let can_spin = !spinning && game.puzzle().is_in_progress();
    let available: BTreeSet<char> = ALPHABET
        .chars()
        .filter(|&letter| game.is_letter_available(letter))
        .collect();

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-start">
            <div class={classes!(styles::CARD, "flex", "flex-col", "items-center", "gap-4")}>
                <WheelCanvas
                    angle={wheel.angle()}
                    is_spinning={spinning}
                    highlighted={wheel.last_resolved_index()}
                />
                <div class="flex flex-wrap justify-center gap-3">
                    <SpinButton choice={SpinChoice::Consonant} disabled={!can_spin} on_spin={on_spin.clone()} />
                    <SpinButton choice={SpinChoice::Vowel} disabled={!can_spin} on_spin={on_spin} />
                </div>
                <ResultDisplay
                    status={game.status().to_string()}
                    landed={if spinning { None } else { wheel.last_outcome() }}
                    error={(*error).clone()}
                />
            </div>

            <div class="space-y-6">
                <Scoreboard
                    teams={game.ledger().teams().to_vec()}
                    active={game.ledger().active_index()}
                    {on_rename}
                />
                <div class={styles::CARD}>
                    <PuzzleBoard
                        tiles={game.puzzle().tiles().to_vec()}
                        category={game.puzzle().category().to_string()}
                        hint={game.hint_text().map(str::to_string)}
                    />
                </div>
                <Keyboard
                    used_letters={game.used_letters().clone()}
                    {available}
                    {on_key_press}
                />
                <div class="flex flex-wrap justify-center gap-3">
                    <button type="button" class={styles::BUTTON_PRIMARY} disabled={!can_spin} onclick={on_solve}>
                        {"Solve"}
                    </button>
                    <button type="button" class={styles::BUTTON_SECONDARY} disabled={spinning} onclick={on_new_word}>
                        {"New word"}
                    </button>
                    <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_toggle_hint}>
                        { if game.hint_visible() { "Hide hint" } else { "Show hint" } }
                    </button>
                    <button type="button" class={styles::BUTTON_SECONDARY} disabled={spinning} onclick={on_new_game}>
                        {"New game"}
                    </button>
                </div>
                <div class="text-center">
                    <label class={styles::TEXT_LABEL}>
                        {"Load vocabulary (JSON)"}
                        <input
                            type="file"
                            accept=".json,application/json"
                            class="mt-2 block mx-auto text-sm text-gray-600 dark:text-gray-300"
                            disabled={spinning}
                            onchange={on_vocab_file}
                        />
                    </label>
                </div>
            </div>
        </div>
    }
}
