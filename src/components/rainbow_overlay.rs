use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RainbowOverlayProps {
    pub show: bool,
}

#[function_component]
pub fn RainbowOverlay(props: &RainbowOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <>
            <style>{"@keyframes rainbow-shift { 0% { filter: hue-rotate(0deg); } 100% { filter: hue-rotate(360deg); } }"}</style>
            <div style="position:fixed; inset:0; pointer-events:none; z-index:40; animation:rainbow-shift 2s linear infinite; background:linear-gradient(45deg, rgba(255,0,0,0.1), rgba(255,165,0,0.1), rgba(255,255,0,0.1), rgba(0,128,0,0.1), rgba(0,0,255,0.1), rgba(75,0,130,0.1), rgba(238,130,238,0.1));"></div>
        </>
    }
}
