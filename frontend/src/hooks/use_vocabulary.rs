use gloo_net::http::Request;
use shared::vocabulary::{DefaultLoad, VocabularyStore};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::vocabulary_url;

async fn fetch_vocabulary_text() -> Result<String, String> {
    let response = Request::get(&vocabulary_url())
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Error reading response: {:?}", e))
}

/// Fetches the default vocabulary once on mount. Resolves to `None` while
/// loading; any failure resolves to the built-in fallback dataset.
#[hook]
pub fn use_default_vocabulary() -> Option<DefaultLoad> {
    let loaded = use_state(|| None::<DefaultLoad>);

    {
        let loaded = loaded.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let fetched = fetch_vocabulary_text().await;
                loaded.set(Some(VocabularyStore::load_default(fetched)));
            });
            || ()
        });
    }

    (*loaded).clone()
}
