use yew::prelude::*;

use super::app::use_app_context;
use crate::profile::{ContactLink, Project, Publication, Role, Skill};

const SECTION_STYLE: &str = "max-width:960px; margin:0 auto; padding:64px 24px;";
const CARD_STYLE: &str = "padding:16px 20px; border-radius:16px; background:rgba(30,41,59,0.6); border:1px solid #334155;";

/// Page anchors in render order, for the nav bar.
pub const SECTIONS: [(&str, &str); 5] = [
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("publications", "Publications"),
    ("contact", "Contact"),
];

fn heading(title: &str) -> Html {
    html! { <h2 style="font-size:32px; margin:0 0 24px;">{ title }</h2> }
}

#[function_component(About)]
pub fn about() -> Html {
    let ctx = use_app_context();
    let profile = &ctx.config.profile;
    html! {
        <section id="about" style={SECTION_STYLE}>
            { heading("About") }
            { for profile.about.iter().map(|p| html! { <p style="opacity:0.85; line-height:1.6;">{ p.clone() }</p> }) }
            <div style="display:grid; gap:12px; margin-top:24px;">
                { for profile.skills.iter().map(skill_bar) }
            </div>
        </section>
    }
}

fn skill_bar(s: &Skill) -> Html {
    html! {
        <div key={s.name.clone()}>
            <div style="display:flex; justify-content:space-between; font-size:14px;">
                <span>{ s.name.clone() }</span>
                <span style="opacity:0.7;">{ format!("{}%", s.level) }</span>
            </div>
            <div style="height:6px; border-radius:999px; background:#1e293b;">
                <div style={format!("height:100%; width:{}%; border-radius:999px; background:linear-gradient(90deg,#8b5cf6,#ec4899);", s.level)}></div>
            </div>
        </div>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    let ctx = use_app_context();
    html! {
        <section id="experience" style={SECTION_STYLE}>
            { heading("Experience") }
            <div style="display:flex; flex-direction:column; gap:16px; border-left:2px solid #8b5cf6; padding-left:20px;">
                { for ctx.config.profile.experience.iter().map(role_card) }
            </div>
        </section>
    }
}

fn role_card(r: &Role) -> Html {
    html! {
        <div key={r.title.clone()} style={CARD_STYLE}>
            <div style="font-size:12px; color:#a78bfa;">{ r.period.clone() }</div>
            <h3 style="margin:4px 0;">{ r.title.clone() }</h3>
            <p style="margin:0; opacity:0.8;">{ r.summary.clone() }</p>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let ctx = use_app_context();
    html! {
        <section id="projects" style={SECTION_STYLE}>
            { heading("Projects") }
            <div style="display:grid; grid-template-columns:repeat(auto-fill,minmax(280px,1fr)); gap:16px;">
                { for ctx.config.profile.projects.iter().map(project_card) }
            </div>
        </section>
    }
}

fn project_card(p: &Project) -> Html {
    html! {
        <article key={p.title.clone()} style={CARD_STYLE}>
            <div style="font-size:12px; color:#a78bfa;">{ p.category.clone() }</div>
            <h3 style="margin:4px 0;">{ p.title.clone() }</h3>
            <p style="margin:0 0 8px; opacity:0.8;">{ p.summary.clone() }</p>
            <div style="display:flex; flex-wrap:wrap; gap:6px;">
                { for p.tags.iter().map(|t| html! {
                    <span style="font-size:11px; padding:2px 8px; border-radius:999px; border:1px solid #334155;">{ t.clone() }</span>
                }) }
            </div>
            <div style="margin-top:8px; font-size:12px; opacity:0.7;">{ p.status.clone() }</div>
            if let Some(link) = &p.link {
                <a href={link.clone()} target="_blank" rel="noopener noreferrer" style="font-size:13px; color:#ec4899;">{ "View →" }</a>
            }
        </article>
    }
}

#[function_component(Publications)]
pub fn publications() -> Html {
    let ctx = use_app_context();
    html! {
        <section id="publications" style={SECTION_STYLE}>
            { heading("Publications") }
            <div style="display:flex; flex-direction:column; gap:16px;">
                { for ctx.config.profile.publications.iter().map(publication_card) }
            </div>
        </section>
    }
}

fn publication_card(p: &Publication) -> Html {
    html! {
        <article key={p.title.clone()} style={CARD_STYLE}>
            <span style="font-size:11px; padding:2px 8px; border-radius:999px; background:#059669;">{ p.status.clone() }</span>
            <h3 style="margin:8px 0 4px;">{ p.title.clone() }</h3>
            <div style="font-size:13px; color:#a78bfa;">
                { format!("{} · {} · {}", p.venue, p.date, p.location) }
            </div>
            <p style="margin:8px 0 0; opacity:0.8;">{ p.summary.clone() }</p>
        </article>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let ctx = use_app_context();
    html! {
        <section id="contact" style={SECTION_STYLE}>
            { heading("Get in touch") }
            <ul style="list-style:none; padding:0; display:flex; flex-direction:column; gap:12px;">
                { for ctx.config.profile.contact.iter().map(contact_line) }
            </ul>
        </section>
    }
}

fn contact_line(c: &ContactLink) -> Html {
    let value = match &c.href {
        Some(href) => html! { <a href={href.clone()} style="color:#ec4899;">{ c.value.clone() }</a> },
        None => html! { <span>{ c.value.clone() }</span> },
    };
    html! {
        <li key={c.label.clone()} style={CARD_STYLE}>
            <span style="opacity:0.7; margin-right:12px;">{ c.label.clone() }</span>
            { value }
        </li>
    }
}
