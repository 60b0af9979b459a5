use yew::prelude::*;

use crate::config;
use crate::content::{ABOUT_FEATURES, ABOUT_STATS};
use crate::hooks::counter::{use_count_up, CountUp};
use crate::hooks::visibility::{reveal, use_visibility, RevealMode};

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let visible = use_visibility(section.clone(), config::ABOUT_REVEAL_THRESHOLD, RevealMode::Latch);
    // All three stats share one run so they land together.
    let counters = use_count_up(visible, CountUp::default());

    html! {
        <section id="about" ref={section} class="about-section">
            <div class="about-backdrop-text">{"ABOUT US"}</div>
            <div class="section-inner about-grid">
                <div class={classes!(reveal(visible), "from-left")}>
                    <div class="about-visual">
                        <div class="about-image">
                            <img src="/about-image.jpg" alt="学习英语" />
                            <div class="about-image-shade"></div>
                        </div>
                        <div class="about-floating-stat float-1">
                            <div class="about-floating-icon">{"👥"}</div>
                            <div>
                                <div class="about-floating-value">{"50k+"}</div>
                                <div class="about-floating-label">{"活跃学员"}</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class={classes!(reveal(visible), "from-right", "delay-200")}>
                    <span class="section-tag violet">{"关于我们"}</span>
                    <h2>{"通过视频掌握"}<span class="text-gradient">{"英语口语"}</span></h2>
                    <p class="about-lead">
                        {"我们精选来自热门YouTube创作者的优质内容，将娱乐转化为强大的学习体验。我们的方法结合了最新的语言学习理论和实践，帮助您在轻松愉快的氛围中提升英语能力。"}
                    </p>
                    <div class="about-features">
                        { for ABOUT_FEATURES.iter().map(|feature| html! {
                            <div class="about-feature">
                                <span class="check">{"✓"}</span>
                                <span>{*feature}</span>
                            </div>
                        }) }
                    </div>
                    <div class="about-stats">
                        { for ABOUT_STATS.iter().map(|stat| html! {
                            <div class="about-stat">
                                <div class="about-stat-icon" style={format!("color: {}", stat.color)}>{stat.icon.glyph()}</div>
                                <div class="about-stat-value">{format!("{}{}", counters.value(stat.target), stat.suffix)}</div>
                                <div class="about-stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about-section { padding: 96px 0; background: #fff; position: relative; overflow: hidden; }
                .about-backdrop-text {
                    position: absolute;
                    top: 50%;
                    left: 0;
                    transform: translateY(-50%);
                    font-size: 200px;
                    font-weight: 700;
                    color: #f9fafb;
                    white-space: nowrap;
                    pointer-events: none;
                    user-select: none;
                }
                .about-grid { display: grid; grid-template-columns: 1fr; gap: 64px; align-items: center; }
                @media (min-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr 1fr; }
                }
                .about-visual { position: relative; }
                .about-image { position: relative; border-radius: 24px; overflow: hidden; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
                .about-image img { width: 100%; height: auto; display: block; }
                .about-image-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0, 0, 0, 0.2), transparent); }
                .about-floating-stat {
                    position: absolute;
                    right: -24px;
                    bottom: -24px;
                    display: flex;
                    gap: 16px;
                    align-items: center;
                    background: #fff;
                    border-radius: 16px;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    padding: 24px;
                }
                .about-floating-icon { width: 56px; height: 56px; border-radius: 12px; background: rgba(255, 106, 106, 0.1); display: flex; align-items: center; justify-content: center; font-size: 26px; }
                .about-floating-value { font-size: 24px; font-weight: 700; color: #111827; }
                .about-floating-label { font-size: 14px; color: #6b7280; }
                .about-lead { font-size: 18px; color: #4b5563; margin-bottom: 32px; }
                .about-features { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-bottom: 40px; }
                .about-feature { display: flex; align-items: center; gap: 12px; color: #374151; }
                .check { width: 24px; height: 24px; border-radius: 50%; background: rgba(80, 200, 120, 0.1); color: #50c878; display: flex; align-items: center; justify-content: center; transition: all 0.3s ease; }
                .about-feature:hover .check { background: #50c878; color: #fff; }
                .about-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; }
                .about-stat { text-align: center; padding: 16px; background: #f9fafb; border-radius: 16px; transition: all 0.3s ease; }
                .about-stat:hover { background: #fff; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .about-stat-icon { font-size: 22px; margin-bottom: 8px; }
                .about-stat-value { font-size: 30px; font-weight: 700; color: #111827; }
                .about-stat-label { font-size: 14px; color: #6b7280; }
                "#}
            </style>
        </section>
    }
}
