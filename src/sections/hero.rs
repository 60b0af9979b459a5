use yew::prelude::*;

use crate::config;
use crate::content::HERO_STATS;
use crate::hooks::visibility::{use_visibility, RevealMode};
use crate::scroll::scroll_to_section;

/// One animated glyph of the hero title.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleChar {
    pub text: String,
    pub delay_ms: u32,
}

/// Splits `text` into per-character spans. `offset` continues the stagger
/// from an earlier line so the whole title animates as one sequence.
pub fn split_title(text: &str, offset: usize) -> Vec<TitleChar> {
    text.chars()
        .enumerate()
        .map(|(i, c)| TitleChar {
            text: if c == ' ' { '\u{00A0}'.to_string() } else { c.to_string() },
            delay_ms: (offset + i) as u32 * config::HERO_CHAR_DELAY_MS,
        })
        .collect()
}

fn render_line(chars: Vec<TitleChar>) -> Html {
    chars
        .into_iter()
        .map(|c| {
            html! {
                <span class="char" style={format!("animation-delay: {}ms", c.delay_ms)}>
                    {c.text}
                </span>
            }
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    // Floating shapes only animate while the hero is on screen.
    let on_screen = use_visibility(section.clone(), config::HERO_VISIBLE_THRESHOLD, RevealMode::Level);
    let first_line = "YouTube";
    let second_line = "学英语口语";
    let first = split_title(first_line, 0);
    let second = split_title(second_line, first_line.chars().count());

    let go_courses = Callback::from(|_: MouseEvent| scroll_to_section("#courses"));
    let go_steps = Callback::from(|_: MouseEvent| scroll_to_section("#steps"));

    html! {
        <section id="hero" ref={section} class="hero">
            <div class={classes!("hero-shapes", (!on_screen).then_some("paused"))}>
                <div class="shape triangle float-1"></div>
                <div class="shape circle float-2"></div>
                <div class="shape square float-3"></div>
                <div class="dot dot-coral float-2"></div>
                <div class="dot dot-violet float-1"></div>
                <div class="dot dot-blue float-3"></div>
            </div>
            <div class="hero-inner">
                <div class="hero-copy">
                    <div class="hero-badge fade-in" style="animation-delay: 0.2s">
                        <span class="pulse-dot"></span>
                        <span>{"已有 50,000+ 学员加入"}</span>
                    </div>
                    <h1 class="hero-title">
                        <span class="line">{ render_line(first) }</span>
                        <span class="line">{ render_line(second) }</span>
                    </h1>
                    <p class="hero-description slide-up" style="animation-delay: 0.5s">
                        {"通过沉浸式YouTube内容，将您的英语口语提升至新高度。跟随热门创作者学习，掌握地道表达。"}
                    </p>
                    <div class="hero-cta-group slide-up" style="animation-delay: 0.7s">
                        <button class="hero-cta" onclick={go_courses}>{"开启您的旅程 →"}</button>
                        <button class="hero-cta-outline" onclick={go_steps}>{"▶ 观看演示"}</button>
                    </div>
                    <div class="hero-stats slide-up" style="animation-delay: 0.9s">
                        { for HERO_STATS.iter().map(|(value, label, color)| html! {
                            <div>
                                <div class="hero-stat-value" style={format!("color: {}", color)}>{*value}</div>
                                <div class="hero-stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="hero-visual scale-in" style="animation-delay: 0.4s">
                    <div class="hero-glow"></div>
                    <div class="hero-phone">
                        <img src="/hero-phone.jpg" alt="YouTube英语学习应用" />
                        <div class="floating-card left float-1">
                            <div class="card-icon green">{"▶"}</div>
                            <div>
                                <div class="card-title">{"正在学习"}</div>
                                <div class="card-sub">{"Daily Conversations"}</div>
                            </div>
                        </div>
                        <div class="floating-card right float-2">
                            <div class="card-icon coral">{"🔥"}</div>
                            <div>
                                <div class="card-title">{"学习 streak"}</div>
                                <div class="card-sub">{"连续 15 天"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #fff5f5 0%, #f5f0ff 50%, #eef6ff 100%);
                }
                .hero-shapes { position: absolute; inset: 0; pointer-events: none; }
                .hero-shapes.paused > * { animation-play-state: paused; }
                .shape { position: absolute; width: 28px; height: 28px; opacity: 0.5; }
                .shape.triangle { top: 80px; left: 10%; border-left: 14px solid transparent; border-right: 14px solid transparent; border-bottom: 28px solid #ff6a6a; width: 0; height: 0; }
                .shape.circle { top: 160px; right: 15%; border-radius: 50%; background: #7b5cff; }
                .shape.square { bottom: 160px; left: 20%; background: #4a90e2; }
                .dot { position: absolute; border-radius: 50%; }
                .dot-coral { top: 33%; left: 5%; width: 12px; height: 12px; background: rgba(255, 106, 106, 0.3); }
                .dot-violet { bottom: 33%; right: 10%; width: 16px; height: 16px; background: rgba(123, 92, 255, 0.3); }
                .dot-blue { top: 66%; right: 25%; width: 8px; height: 8px; background: rgba(74, 144, 226, 0.3); }
                .hero-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 96px 24px 64px;
                    width: 100%;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 48px;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .hero-inner { grid-template-columns: 1fr 1fr; }
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    padding: 8px 16px;
                    background: rgba(255, 255, 255, 0.8);
                    border-radius: 999px;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
                    font-size: 14px;
                    color: #374151;
                }
                .pulse-dot { width: 8px; height: 8px; border-radius: 50%; background: #50c878; animation: pulse 2s infinite; }
                .hero-title { font-size: clamp(48px, 7vw, 72px); font-weight: 700; color: #111827; line-height: 1.1; }
                .hero-title .line { display: block; margin-top: 8px; }
                .char {
                    display: inline-block;
                    opacity: 0;
                    transform: translateY(80px);
                    animation: slideUp 0.6s ease forwards;
                }
                .hero-description { font-size: 20px; color: #4b5563; max-width: 32rem; }
                .hero-cta-group { display: flex; flex-wrap: wrap; gap: 16px; }
                .hero-cta {
                    background: #ff6a6a;
                    color: #fff;
                    border: none;
                    padding: 18px 32px;
                    border-radius: 999px;
                    font-size: 18px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .hero-cta:hover { background: #ff5252; transform: scale(1.05); box-shadow: 0 20px 30px rgba(255, 106, 106, 0.3); }
                .hero-cta-outline {
                    background: transparent;
                    border: 2px solid #d1d5db;
                    padding: 18px 32px;
                    border-radius: 999px;
                    font-size: 18px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .hero-cta-outline:hover { border-color: #ff6a6a; color: #ff6a6a; }
                .hero-stats { display: flex; gap: 32px; padding-top: 16px; }
                .hero-stat-value { font-size: 30px; font-weight: 700; }
                .hero-stat-label { font-size: 14px; color: #6b7280; }
                .hero-visual { position: relative; }
                .hero-glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(255, 106, 106, 0.2), rgba(123, 92, 255, 0.2));
                    border-radius: 24px;
                    filter: blur(64px);
                    transform: scale(1.1);
                }
                .hero-phone { position: relative; transition: transform 0.5s ease; }
                .hero-phone:hover { transform: scale(1.02); }
                .hero-phone img { width: 100%; max-width: 28rem; display: block; margin: 0 auto; border-radius: 24px; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
                .floating-card {
                    position: absolute;
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    background: #fff;
                    border-radius: 16px;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    padding: 16px;
                }
                .floating-card.left { left: -32px; top: 25%; }
                .floating-card.right { right: -16px; bottom: 25%; }
                .card-icon { width: 40px; height: 40px; border-radius: 50%; display: flex; align-items: center; justify-content: center; }
                .card-icon.green { background: rgba(80, 200, 120, 0.2); color: #50c878; }
                .card-icon.coral { background: rgba(255, 106, 106, 0.2); }
                .card-title { font-size: 14px; font-weight: 600; color: #111827; }
                .card-sub { font-size: 12px; color: #6b7280; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_stagger_runs_across_both_lines() {
        let first = split_title("YouTube", 0);
        let second = split_title("学英语口语", 7);
        assert_eq!(first.len(), 7);
        assert_eq!(first[0].delay_ms, 0);
        assert_eq!(first[6].delay_ms, 180);
        assert_eq!(second[0].text, "学");
        assert_eq!(second[0].delay_ms, 210);
    }

    #[test]
    fn spaces_become_non_breaking() {
        let chars = split_title("a b", 0);
        assert_eq!(chars[1].text, "\u{00A0}");
        assert_eq!(chars[2].delay_ms, 60);
    }
}
