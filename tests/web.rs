//! Browser-only checks: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::collections::BTreeSet;
use std::rc::Rc;

use portfolio_eggs::config::SiteConfig;
use portfolio_eggs::state::{AchievementTracker, KeyValueStore, LocalStore, TimerSlot, Timeout};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "portfolio-eggs-test";

fn fresh_tracker() -> AchievementTracker {
    let store = LocalStore::open().unwrap();
    store.remove(KEY).unwrap();
    AchievementTracker::new(SiteConfig::portfolio().catalog, Box::new(store), KEY)
}

#[wasm_bindgen_test]
fn local_store_round_trip() {
    let store = LocalStore::open().unwrap();
    store.set(KEY, "[1]").unwrap();
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("[1]"));
    store.remove(KEY).unwrap();
    assert_eq!(store.get(KEY).unwrap(), None);
}

#[wasm_bindgen_test]
fn progress_survives_reload() {
    let t = fresh_tracker();
    t.record(2);
    t.record(5);
    let reloaded = AchievementTracker::new(
        SiteConfig::portfolio().catalog,
        Box::new(LocalStore::open().unwrap()),
        KEY,
    );
    assert_eq!(reloaded.load_state(), BTreeSet::from([2, 5]));
    reloaded.reset();
}

#[wasm_bindgen_test]
fn corrupt_local_storage_is_empty() {
    let store = LocalStore::open().unwrap();
    store.set(KEY, "{oops").unwrap();
    let t = AchievementTracker::new(SiteConfig::portfolio().catalog, Box::new(store), KEY);
    assert_eq!(t.count(), 0);
    t.reset();
}

/// Resolves after `ms` on the browser's own timer queue.
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn flag() -> Rc<Cell<bool>> {
    Rc::new(Cell::new(false))
}

#[wasm_bindgen_test]
async fn timeout_fires_when_kept() {
    let fired = flag();
    let t = {
        let fired = fired.clone();
        Timeout::new(10, move || fired.set(true))
    };
    assert!(t.is_pending());
    sleep(50).await;
    assert!(fired.get());
    assert!(!t.is_pending());
}

#[wasm_bindgen_test]
async fn dropped_timeout_never_fires() {
    let fired = flag();
    let t = {
        let fired = fired.clone();
        Timeout::new(10, move || fired.set(true))
    };
    t.cancel();
    sleep(50).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test]
async fn timer_slot_keeps_only_latest() {
    let slot = TimerSlot::new();
    let first = flag();
    let second = flag();
    {
        let first = first.clone();
        slot.set(10, move || first.set(true));
    }
    {
        let second = second.clone();
        slot.set(60, move || second.set(true));
    }
    sleep(30).await;
    assert!(!first.get());
    assert!(!second.get());
    assert!(slot.is_pending());
    sleep(80).await;
    assert!(second.get());
    assert!(!first.get());
}

#[wasm_bindgen_test]
async fn cleared_slot_never_fires() {
    let slot = TimerSlot::new();
    let fired = flag();
    {
        let fired = fired.clone();
        slot.set(10, move || fired.set(true));
    }
    slot.clear();
    sleep(50).await;
    assert!(!fired.get());
}
