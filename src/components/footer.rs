use yew::prelude::*;

use super::app::use_app_context;
use crate::state::Timeout;

/// Footer; lingering on the owner's name reveals the Hidden Message egg.
#[function_component(Footer)]
pub fn footer() -> Html {
    let ctx = use_app_context();
    let id = ctx.config.triggers.footer_hover;
    let dwell_ms = ctx.config.footer_hover_ms;
    let revealed = {
        let tracker = ctx.tracker.clone();
        use_state(move || tracker.load_state().contains(&id))
    };
    let hover_timer = use_mut_ref(|| None::<Timeout>);

    // Drop any pending hover timer on unmount
    {
        let hover_timer = hover_timer.clone();
        use_effect_with((), move |_| {
            move || {
                hover_timer.borrow_mut().take();
            }
        });
    }

    let on_enter = {
        let tracker = ctx.tracker.clone();
        let hover_timer = hover_timer.clone();
        let revealed = revealed.clone();
        Callback::from(move |_: MouseEvent| {
            if *revealed {
                return;
            }
            let tracker = tracker.clone();
            let revealed = revealed.clone();
            *hover_timer.borrow_mut() = Some(Timeout::new(dwell_ms, move || {
                tracker.record(id);
                revealed.set(true);
            }));
        })
    };
    let on_leave = {
        let hover_timer = hover_timer.clone();
        Callback::from(move |_: MouseEvent| {
            // Leaving early cancels the reveal
            let pending = hover_timer.borrow().as_ref().is_some_and(Timeout::is_pending);
            if pending {
                hover_timer.borrow_mut().take();
            }
        })
    };

    html! {
        <footer style="padding:48px 16px; border-top:1px solid #1e293b; text-align:center; font-size:14px; opacity:0.85;">
            <span>{"© 2026 "}</span>
            <span onmouseenter={on_enter} onmouseleave={on_leave} style="cursor:default; text-decoration:underline dotted;">
                { ctx.config.owner.clone() }
            </span>
            <span>{". Designed with ❤ for human-centered experiences."}</span>
            if *revealed {
                <p style="margin:12px 0 0 0; color:#a78bfa;">{"✨ Thanks for lingering. Curiosity is the best design tool."}</p>
            }
        </footer>
    }
}
