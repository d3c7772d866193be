//! JavaScript surface for the site's templates.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM start hook syncs the freshly loaded page with stored state and
//! installs the scroll-reveal effect. Templates construct one `MyUni` object
//! and call its methods from their event handlers, for example
//! `const myUni = new MyUni(); myUni.toggleFavorite(slug)`.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::config::Config;
use crate::controller::MyUni;
use crate::net::gloo::GlooTransport;
use crate::page::dom::BrowserPage;
use crate::state::prefs::StoragePrefs;
use crate::util::local_storage::LocalStorage;
use crate::util::reveal;

type BrowserUni = MyUni<StoragePrefs<LocalStorage>, BrowserPage, GlooTransport>;

fn build() -> Option<BrowserUni> {
    let config = Config::default();
    let page = BrowserPage::current()?;
    Some(MyUni::new(
        StoragePrefs::new(LocalStorage, &config),
        page,
        GlooTransport,
        config,
    ))
}

/// Run `f` once the document has finished parsing.
fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(page) = BrowserPage::current() else {
        return;
    };
    let document = page.document();
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once(f);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    if document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        log::warn!("could not wait for DOMContentLoaded; page sync skipped");
    }
    callback.forget();
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }

    on_dom_ready(|| {
        match build() {
            Some(uni) => uni.sync_page(),
            None => log::warn!("no document; skipping page sync"),
        }
        reveal::install();
    });
}

/// Favorites/city controller handle for templates.
#[wasm_bindgen(js_name = MyUni)]
pub struct MyUniHandle {
    inner: Rc<BrowserUni>,
}

#[wasm_bindgen(js_class = MyUni)]
impl MyUniHandle {
    /// # Errors
    ///
    /// Throws when there is no window document to bind to.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<MyUniHandle, JsError> {
        let uni = build().ok_or_else(|| JsError::new("MyUni requires a browser document"))?;
        Ok(Self {
            inner: Rc::new(uni),
        })
    }

    #[wasm_bindgen(js_name = changeCity)]
    pub fn change_city(&self, city: Option<String>) {
        self.inner.change_city(city.as_deref().unwrap_or_default());
    }

    #[wasm_bindgen(js_name = browseUniversities)]
    pub fn browse_universities(&self) {
        self.inner.browse_universities();
    }

    #[wasm_bindgen(js_name = toggleFavorite)]
    pub fn toggle_favorite(&self, slug: &str) -> bool {
        self.inner.toggle_favorite(slug)
    }

    #[wasm_bindgen(js_name = getFavorites)]
    pub fn get_favorites(&self) -> Vec<String> {
        self.inner.get_favorites().to_vec()
    }

    #[wasm_bindgen(js_name = getCity)]
    pub fn get_city(&self) -> String {
        self.inner.get_city()
    }

    /// Resolves with the server's JSON reply; rejects with an `Error`.
    #[wasm_bindgen(js_name = saveList)]
    pub fn save_list(&self, name: String, email: String, note: String) -> js_sys::Promise {
        let uni = Rc::clone(&self.inner);
        future_to_promise(async move {
            match uni.save_list(&name, &email, &note).await {
                Ok(value) => js_sys::JSON::parse(&value.to_string()),
                Err(err) => Err(js_sys::Error::new(&err.to_string()).into()),
            }
        })
    }
}
