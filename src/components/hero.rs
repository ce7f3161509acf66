use yew::prelude::*;

use super::app::use_app_context;
use crate::state::ClickCounter;

#[function_component(Hero)]
pub fn hero() -> Html {
    let ctx = use_app_context();
    let id = ctx.config.triggers.avatar_click;
    let needed = ctx.config.avatar_clicks;
    let counter = {
        let tracker = ctx.tracker.clone();
        use_mut_ref(move || {
            if tracker.load_state().contains(&id) {
                ClickCounter::already_done(needed)
            } else {
                ClickCounter::new(needed)
            }
        })
    };
    let unlocked = {
        let counter = counter.clone();
        use_state(move || counter.borrow().is_done())
    };

    let on_avatar = {
        let tracker = ctx.tracker.clone();
        let counter = counter.clone();
        let unlocked = unlocked.clone();
        Callback::from(move |_: MouseEvent| {
            if counter.borrow_mut().click() {
                tracker.record(id);
                unlocked.set(true);
            }
        })
    };

    let avatar_style = if *unlocked {
        "width:160px; height:160px; border-radius:50%; border:3px solid #d4af37; background:linear-gradient(135deg,#8b5cf6,#ec4899); cursor:pointer; font-size:64px;"
    } else {
        "width:160px; height:160px; border-radius:50%; border:2px solid #8b5cf6; background:linear-gradient(135deg,#1e293b,#312e81); cursor:pointer; font-size:64px;"
    };
    html! {
        <section id="hero" style="min-height:80vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:16px; text-align:center;">
            <button aria-label="Avatar" onclick={on_avatar} style={avatar_style}>
                { if *unlocked { "🌟" } else { "👩‍💻" } }
            </button>
            <h1 style="margin:0; font-size:40px;">{ ctx.config.owner.clone() }</h1>
            <p style="margin:0; opacity:0.8; max-width:520px;">{ ctx.config.tagline.clone() }</p>
        </section>
    }
}
