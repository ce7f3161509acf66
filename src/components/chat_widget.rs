use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use super::app::use_app_context;
use super::rainbow_overlay::RainbowOverlay;
use crate::model::Message;
use crate::state::{
    AnnouncementGate, ChatAction, ChatState, DiscoveryEvent, Effect, ReplyQueue, Responder,
    SharedTracker, TimerSlot, Timeout,
};
use crate::util::format_progress;

type Timers = Rc<RefCell<Vec<Timeout>>>;
type Gate = Rc<RefCell<AnnouncementGate<DiscoveryEvent>>>;

// Callbacks run from inside a firing Timeout, so this only ever appends;
// fired handles are pruned on the next user submission.
fn schedule(timers: &Timers, ms: u32, f: impl FnOnce() + 'static) {
    timers.borrow_mut().push(Timeout::new(ms, f));
}

fn announce(chat: &UseReducerHandle<ChatState>, tracker: &SharedTracker, e: &DiscoveryEvent) {
    chat.dispatch(ChatAction::Announce {
        text: format!(
            "🎉 Easter egg found: {}! ({}/{})",
            e.egg_name,
            tracker.count(),
            tracker.total()
        ),
        at: Utc::now(),
    });
    if tracker.is_complete() {
        chat.dispatch(ChatAction::Announce {
            text: format!(
                "🏆 That's all {} easter eggs. Thanks for exploring so thoroughly!",
                tracker.total()
            ),
            at: Utc::now(),
        });
    }
}

const QUICK_ACTIONS: [(&str, &str); 3] = [
    ("📁 Projects", "Tell me about the projects"),
    ("📚 Publications", "What are the publications?"),
    ("🥚 Easter Eggs", "Give me an easter egg hint"),
];

/// Everything a pending reply needs once its typing pause is over.
#[derive(Clone)]
struct Replies {
    chat: UseReducerHandle<ChatState>,
    responder: Rc<RefCell<Responder>>,
    tracker: SharedTracker,
    queue: Rc<RefCell<ReplyQueue>>,
    gate: Gate,
    timers: Timers,
    rainbow: TimerSlot,
    happy_ms: u32,
}

impl Replies {
    fn start(&self) {
        let delay = self.responder.borrow_mut().typing_delay_ms();
        let this = self.clone();
        schedule(&self.timers, delay, move || this.answer());
    }

    /// Answer the oldest queued message, then start on the next one.
    fn answer(&self) {
        let Some(text) = self.queue.borrow_mut().take_next() else {
            return;
        };
        // Reply reflects tracker state at the moment it is written
        self.gate.borrow_mut().hold();
        let reply = self.responder.borrow_mut().respond(&text, &self.tracker);
        let deferred = self.gate.borrow_mut().release();

        self.chat.dispatch(ChatAction::BotSaid {
            text: reply.text,
            at: Utc::now(),
        });
        for e in &deferred {
            announce(&self.chat, &self.tracker, e);
        }
        for effect in reply.effects {
            match effect {
                Effect::Rainbow { duration_ms } => {
                    self.chat.dispatch(ChatAction::SetRainbow(true));
                    let chat = self.chat.clone();
                    self.rainbow
                        .set(duration_ms, move || chat.dispatch(ChatAction::SetRainbow(false)));
                }
            }
        }
        let chat = self.chat.clone();
        schedule(&self.timers, self.happy_ms, move || chat.dispatch(ChatAction::Relax));

        if self.queue.borrow_mut().settle() {
            self.start();
        }
    }
}

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let ctx = use_app_context();
    let chat = {
        let welcome = ctx.config.replies.welcome.clone();
        use_reducer(move || ChatState::new(&welcome, Utc::now()))
    };
    let input = use_state(String::new);
    let responder = {
        let config = ctx.config.clone();
        use_mut_ref(move || Responder::from_entropy(&config))
    };
    let timers: Timers = use_mut_ref(Vec::new);
    let queue = use_mut_ref(ReplyQueue::default);
    let gate: Gate = use_mut_ref(AnnouncementGate::default);
    let rainbow = use_memo((), |_| TimerSlot::new());

    // Announce every discovery, wherever on the page it happened
    {
        let chat = chat.clone();
        let gate = gate.clone();
        use_effect_with(ctx.tracker.clone(), move |tracker| {
            let t = tracker.clone();
            let sub = tracker.subscribe(move |e| {
                let ready = gate.borrow_mut().offer(e.clone());
                if let Some(e) = ready {
                    announce(&chat, &t, &e);
                }
            });
            move || drop(sub)
        });
    }

    // Pending replies must not land after teardown
    {
        let timers = timers.clone();
        let rainbow = (*rainbow).clone();
        use_effect_with((), move |_| {
            move || {
                timers.borrow_mut().clear();
                rainbow.clear();
            }
        });
    }

    let send = {
        let replies = Replies {
            chat: chat.clone(),
            responder: responder.clone(),
            tracker: ctx.tracker.clone(),
            queue: queue.clone(),
            gate: gate.clone(),
            timers: timers.clone(),
            rainbow: (*rainbow).clone(),
            happy_ms: ctx.config.happy_ms,
        };
        Callback::from(move |raw: String| {
            let text = raw.trim().to_string();
            if text.is_empty() {
                return;
            }
            replies.chat.dispatch(ChatAction::UserSaid {
                text: text.clone(),
                at: Utc::now(),
            });
            replies.timers.borrow_mut().retain(Timeout::is_pending);
            let idle = replies.queue.borrow_mut().submit(text);
            if idle {
                replies.start();
            }
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(el.value());
        })
    };
    let on_keydown = {
        let input = input.clone();
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit((*input).clone());
                input.set(String::new());
            }
        })
    };
    let on_send = {
        let input = input.clone();
        let send = send.clone();
        Callback::from(move |_: MouseEvent| {
            send.emit((*input).clone());
            input.set(String::new());
        })
    };
    let toggle = {
        let chat = chat.clone();
        Callback::from(move |_: MouseEvent| chat.dispatch(ChatAction::Toggle))
    };

    let panel_border = if chat.rainbow {
        "2px solid #ec4899"
    } else {
        "1px solid rgba(139,92,246,0.3)"
    };
    let send_disabled = input.trim().is_empty();

    html! {
        <>
            <RainbowOverlay show={chat.rainbow} />
            <button onclick={toggle} aria-label="Chat" style="position:fixed; bottom:24px; right:24px; z-index:50; width:64px; height:64px; border-radius:50%; background:linear-gradient(135deg,#8b5cf6,#ec4899); border:none; color:#fff; font-size:24px; cursor:pointer;">
                { if chat.open { "✕" } else { "✨" } }
            </button>
            if chat.open {
                <div style={format!("position:fixed; bottom:96px; right:24px; z-index:50; width:380px; height:500px; border-radius:24px; overflow:hidden; display:flex; flex-direction:column; background:rgba(15,23,42,0.95); border:{panel_border};")}>
                    <div style="position:relative; padding:16px; text-align:center; background:linear-gradient(rgba(139,92,246,0.2),transparent);">
                        <div style="font-size:40px;">{ "🧑‍🚀" }</div>
                        <div style="font-size:12px; opacity:0.7;">{ chat.expression.caption(chat.typing) }</div>
                        <span style="position:absolute; top:12px; right:12px; font-size:12px; padding:2px 10px; border-radius:999px; border:1px solid rgba(139,92,246,0.4);">
                            { format!("🥚 {}", format_progress(ctx.tracker.count(), ctx.tracker.total())) }
                        </span>
                    </div>
                    <div style="flex:1; overflow-y:auto; padding:12px 16px; display:flex; flex-direction:column; gap:10px;">
                        { for chat.messages.iter().map(render_message) }
                        if chat.typing {
                            <div style="align-self:flex-start; opacity:0.7; font-size:13px;">{"• • •"}</div>
                        }
                    </div>
                    <div style="display:flex; gap:8px; padding:8px 16px; overflow-x:auto;">
                        { for QUICK_ACTIONS.iter().map(|(label, text)| {
                            let send = send.clone();
                            let text = text.to_string();
                            let onclick = Callback::from(move |_: MouseEvent| send.emit(text.clone()));
                            html! {
                                <button onclick={onclick} style="font-size:12px; border-radius:999px; padding:4px 10px; white-space:nowrap;">{ *label }</button>
                            }
                        }) }
                    </div>
                    <div style="display:flex; gap:8px; padding:12px 16px; border-top:1px solid #1e293b;">
                        <input
                            type="text"
                            value={(*input).clone()}
                            oninput={on_input}
                            onkeydown={on_keydown}
                            placeholder="Ask me anything..."
                            style="flex:1; padding:8px 14px; border-radius:999px; border:1px solid #334155; background:#1e293b; color:inherit;"
                        />
                        <button onclick={on_send} disabled={send_disabled} style="border-radius:50%; width:40px; height:40px;">{"➤"}</button>
                    </div>
                </div>
            }
        </>
    }
}

fn render_message(m: &Message) -> Html {
    let style = if m.from_user {
        "align-self:flex-end; max-width:80%; padding:8px 14px; border-radius:16px 16px 4px 16px; background:#8b5cf6; color:#fff; font-size:14px;"
    } else {
        "align-self:flex-start; max-width:80%; padding:8px 14px; border-radius:16px 16px 16px 4px; background:rgba(51,65,85,0.5); border:1px solid #334155; font-size:14px;"
    };
    html! {
        <div key={m.id} title={m.timestamp.format("%H:%M").to_string()} style={style}>{ m.text.clone() }</div>
    }
}
