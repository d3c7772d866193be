//! Scroll-reveal effect for `.reveal` elements.
//!
//! Each element gets the `in-view` class the first time it scrolls into the
//! viewport and is then unobserved. Browsers without `IntersectionObserver`
//! get every element revealed up front.
//!
//! TRADE-OFFS
//! ==========
//! Purely decorative: setup failures are logged and dropped, and nothing
//! here touches preference state. SSR/native paths no-op.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Selector for elements taking part in the effect.
pub const REVEAL_SELECTOR: &str = ".reveal";
/// Class added once an element is revealed.
pub const IN_VIEW_CLASS: &str = "in-view";
/// Observer root margin; reveals trigger slightly above the bottom edge.
pub const ROOT_MARGIN: &str = "0px 0px -10% 0px";
/// Visible fraction that counts as "in view".
pub const THRESHOLD: f64 = 0.1;

/// How the page should reveal its elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Watch each element and reveal on first intersection.
    Observe,
    /// Reveal everything immediately.
    ShowAll,
}

pub fn reveal_mode(observer_supported: bool, element_count: usize) -> RevealMode {
    if observer_supported && element_count > 0 {
        RevealMode::Observe
    } else {
        RevealMode::ShowAll
    }
}

/// Install the effect on the current document.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = browser::install() {
            log::debug!("scroll reveal disabled: {err:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{IN_VIEW_CLASS, REVEAL_SELECTOR, ROOT_MARGIN, RevealMode, THRESHOLD, reveal_mode};
    use crate::page::dom::BrowserPage;

    pub(super) fn install() -> Result<(), JsValue> {
        let Some(page) = BrowserPage::current() else {
            return Ok(());
        };
        let elements = page.elements(REVEAL_SELECTOR);
        let supported = web_sys::window().is_some_and(|w| {
            js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        });

        if reveal_mode(supported, elements.len()) == RevealMode::ShowAll {
            for el in &elements {
                el.class_list().add_1(IN_VIEW_CLASS)?;
            }
            return Ok(());
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if target.class_list().add_1(IN_VIEW_CLASS).is_err() {
                        log::debug!("reveal class update rejected");
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        init.set_threshold(&JsValue::from_f64(THRESHOLD));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for el in &elements {
            observer.observe(el);
        }
        // The observer lives for the page; the callback must too.
        callback.forget();
        Ok(())
    }
}
