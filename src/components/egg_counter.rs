use yew::prelude::*;

use super::app::use_app_context;
use crate::util::format_progress;

/// Header badge showing how many eggs have been found.
#[function_component(EggCounter)]
pub fn egg_counter() -> Html {
    let ctx = use_app_context();
    let count = {
        let tracker = ctx.tracker.clone();
        use_state(move || tracker.count())
    };

    {
        let count = count.clone();
        use_effect_with(ctx.tracker.clone(), move |tracker| {
            let t = tracker.clone();
            let sub = tracker.subscribe(move |_| count.set(t.count()));
            move || drop(sub)
        });
    }

    let total = ctx.tracker.total();
    let done = *count == total;
    let color = if done { "#d4af37" } else { "#a78bfa" };
    html! {
        <span title="Easter eggs" style={format!("padding:4px 12px; border-radius:999px; border:1px solid {color}; color:{color}; font-size:12px;")}>
            { if done { "🏆 " } else { "🥚 " } }
            { format_progress(*count, total) }
        </span>
    }
}
