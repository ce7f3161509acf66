use std::rc::Rc;

use chrono::Local;
use yew::prelude::*;

use super::{
    chat_widget::ChatWidget, egg_counter::EggCounter, footer::Footer, hero::Hero,
    konami_listener::KonamiListener,
    sections::{About, Contact, Experience, Projects, Publications, SECTIONS},
};
use crate::config::SiteConfig;
use crate::state::{is_midnight, AchievementTracker, SharedTracker};

// Shared by every component that reads config or reports discoveries.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub config: Rc<SiteConfig>,
    pub tracker: SharedTracker,
}

impl AppContext {
    pub fn new(config: SiteConfig) -> Self {
        let tracker = SharedTracker::new(AchievementTracker::for_browser(&config));
        Self {
            config: Rc::new(config),
            tracker,
        }
    }
}

#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext must wrap the page")
}

#[function_component(App)]
pub fn app() -> Html {
    let ctx = use_memo((), |_| AppContext::new(SiteConfig::load_from_page()));

    // Time Traveler: checked once per page load
    {
        let ctx = (*ctx).clone();
        use_effect_with((), move |_| {
            if is_midnight(Local::now().time()) {
                ctx.tracker.record(ctx.config.triggers.midnight);
            }
            || ()
        });
    }

    let cfg = ctx.config.clone();
    html! {
        <ContextProvider<AppContext> context={(*ctx).clone()}>
            <nav id="top-bar" style="position:sticky; top:0; display:flex; justify-content:space-between; align-items:center; padding:12px 24px; background:rgba(15,23,42,0.9); z-index:30;">
                <span style="font-weight:700;">{ cfg.owner.clone() }</span>
                <div style="display:flex; gap:16px; font-size:14px;">
                    { for SECTIONS.iter().map(|(id, label)| html! {
                        <a href={format!("#{id}")} style="color:inherit; text-decoration:none;">{ *label }</a>
                    }) }
                </div>
                <EggCounter />
            </nav>
            <Hero />
            <About />
            <Experience />
            <Projects />
            <Publications />
            <Contact />
            <Footer />
            <KonamiListener />
            <ChatWidget />
        </ContextProvider<AppContext>>
    }
}
