use yew::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod scroll;
mod hooks {
    pub mod carousel;
    pub mod counter;
    pub mod visibility;
}
mod sections {
    pub mod hero;
    pub mod steps;
    pub mod about;
    pub mod courses;
    pub mod testimonials;
    pub mod blog;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

use content::NAV_LINKS;
use pages::landing::Landing;
use scroll::{is_scrolled, scroll_to_section};


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                        scrolled.set(is_scrolled(scroll_y));
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    log::warn!("Could not watch scroll position: {:?}", err);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Every anchor scrolls smoothly and closes the mobile menu.
    let go_to = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(href);
            menu_open.set(false);
        })
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS.iter().map(|link| html! {
            <a key={link.name} href={link.href} class={class} onclick={go_to(link.href)}>
                {link.name}
            </a>
        }).collect()
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={go_to("#hero")}>
                    <div class="logo-mark">{"▶"}</div>
                    <span>{"YouTube"}<span class="accent">{"英语"}</span></span>
                </a>

                <div class="nav-links">{ links("nav-link") }</div>

                <button class="nav-cta" onclick={go_to("#courses")}>{"开始学习"}</button>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                <div class="mobile-menu-panel">
                    { links("mobile-link") }
                    <button class="nav-cta mobile" onclick={go_to("#courses")}>{"开始学习"}</button>
                </div>
            </div>
            <style>
                {r#"
                .top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; padding: 20px 0; background: transparent; transition: all 0.5s ease; }
                .top-nav.scrolled { background: rgba(255, 255, 255, 0.9); backdrop-filter: blur(24px); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); padding: 12px 0; }
                .nav-content { max-width: 1280px; margin: 0 auto; padding: 0 24px; display: flex; align-items: center; justify-content: space-between; }
                .nav-logo { display: flex; align-items: center; gap: 8px; text-decoration: none; color: #111827; font-size: 20px; font-weight: 700; }
                .logo-mark { width: 40px; height: 40px; border-radius: 12px; background: linear-gradient(135deg, #ff6a6a, #ff8e8e); color: #fff; display: flex; align-items: center; justify-content: center; transition: transform 0.3s ease; }
                .nav-logo:hover .logo-mark { transform: rotate(12deg); }
                .accent { color: #ff6a6a; }
                .nav-links { display: none; gap: 32px; }
                .nav-link { position: relative; color: #374151; font-size: 14px; font-weight: 500; text-decoration: none; transition: color 0.3s ease; }
                .nav-link:hover { color: #ff6a6a; }
                .nav-link::after { content: ''; position: absolute; left: 0; bottom: -4px; width: 0; height: 2px; background: #ff6a6a; transition: width 0.3s ease; }
                .nav-link:hover::after { width: 100%; }
                .nav-cta { display: none; background: #ff6a6a; color: #fff; border: none; padding: 8px 24px; border-radius: 999px; font-weight: 500; cursor: pointer; transition: all 0.3s ease; animation: pulseGlow 2s infinite; }
                .nav-cta:hover { background: #ff5252; transform: scale(1.05); }
                .nav-cta.mobile { display: block; width: 100%; border-radius: 12px; padding: 12px; margin-top: 8px; animation: none; }
                .burger-menu { background: transparent; border: none; font-size: 22px; padding: 8px; border-radius: 8px; cursor: pointer; color: #374151; }
                .burger-menu:hover { background: #f3f4f6; }
                .mobile-menu { max-height: 0; overflow: hidden; transition: all 0.5s ease; padding: 0 24px; }
                .mobile-menu.mobile-menu-open { max-height: 24rem; margin-top: 16px; }
                .mobile-menu-panel { background: rgba(255, 255, 255, 0.95); backdrop-filter: blur(24px); border-radius: 16px; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); padding: 16px; }
                .mobile-link { display: block; padding: 12px 16px; color: #374151; text-decoration: none; border-radius: 12px; font-weight: 500; transition: all 0.3s ease; }
                .mobile-link:hover { color: #ff6a6a; background: rgba(255, 106, 106, 0.05); }
                @media (min-width: 1024px) {
                    .nav-links { display: flex; }
                    .nav-cta { display: block; }
                    .burger-menu, .mobile-menu { display: none; }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
