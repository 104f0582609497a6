use shared::shared_word_game::Tile;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PuzzleBoardProps {
    pub tiles: Vec<Tile>,
    pub category: String,
    /// Shown under the board when the hint is toggled on.
    #[prop_or_default]
    pub hint: Option<String>,
}

// Words are kept together so a line break never splits one.
fn words(tiles: &[Tile]) -> Vec<&[Tile]> {
    tiles.split(|tile| *tile == Tile::Space).filter(|w| !w.is_empty()).collect()
}

#[function_component(PuzzleBoard)]
pub fn puzzle_board(props: &PuzzleBoardProps) -> Html {
    html! {
        <div class="space-y-4">
            <div class="text-center">
                <span class="text-xs uppercase tracking-widest text-gray-500 dark:text-gray-400">{"Category"}</span>
                <h3 class={styles::TEXT_H3}>{ &props.category }</h3>
            </div>
            <div class="flex flex-wrap justify-center gap-x-6 gap-y-3">
                {
                    for words(&props.tiles).into_iter().map(|word| html! {
                        <div class={styles::TILE_ROW}>
                            {
                                for word.iter().map(|tile| {
                                    let class = match tile {
                                        Tile::Hidden => styles::TILE_HIDDEN,
                                        Tile::Locked => styles::TILE_LOCKED,
                                        _ => styles::TILE_REVEALED,
                                    };
                                    html! {
                                        <div class={classes!(styles::TILE, class)}>
                                            { tile.display_char() }
                                        </div>
                                    }
                                })
                            }
                        </div>
                    })
                }
            </div>
            if let Some(hint) = &props.hint {
                <p class={classes!(styles::TEXT_BODY, "text-center", "italic")}>{ hint }</p>
            }
        </div>
    }
}
