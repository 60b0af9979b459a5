use yew::prelude::*;

use crate::config;
use crate::content::{STEPS, STEP_FEATURES};
use crate::hooks::carousel::{use_carousel, CarouselAction};
use crate::hooks::visibility::{reveal, use_visibility, RevealMode};

/// The ten-step method, one step card at a time with a thumbnail strip.
#[function_component(Steps)]
pub fn steps() -> Html {
    let section = use_node_ref();
    let visible = use_visibility(section.clone(), config::REVEAL_THRESHOLD, RevealMode::Latch);
    let carousel = use_carousel(STEPS.len());

    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };
    let previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Previous))
    };

    let step = &STEPS[carousel.index()];

    html! {
        <section id="steps" ref={section} class="steps-section">
            <div class="blob blob-top-right coral"></div>
            <div class="blob blob-bottom-left violet"></div>
            <div class="section-inner">
                <div class={classes!(reveal(visible), "section-header")}>
                    <span class="section-tag coral">{"科学学习法"}</span>
                    <h2>{"掌握英语口语的"}<span class="text-gradient">{"10个步骤"}</span></h2>
                    <p>{"从泛听到精听，从词汇到表达，系统化提升您的英语能力"}</p>
                </div>

                <div class={classes!(reveal(visible), "delay-200")}>
                    <div class="step-progress">
                        <div class="step-progress-labels">
                            <span class="step-count">{format!("步骤 {} / {}", carousel.position(), carousel.len())}</span>
                            <span class="step-percent">{format!("{}%", carousel.progress_percent())}</span>
                        </div>
                        <div class="step-progress-track">
                            <div class="step-progress-fill" style={format!("width: {}%", carousel.progress_percent())}></div>
                        </div>
                    </div>

                    <div class="step-card" key={step.id.to_string()}>
                        <div class="step-card-left">
                            <div class="step-icon" style={format!("background-color: {}15; color: {}", step.color, step.color)}>
                                {step.icon.glyph()}
                            </div>
                            <div class="step-number" style={format!("color: {}", step.color)}>
                                {step.number()}
                            </div>
                        </div>
                        <div class="step-card-right">
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                            <div class="step-buttons">
                                <button class="step-prev" onclick={previous}>{"‹ 上一步"}</button>
                                <button class="step-next" onclick={next}>{"下一步 ›"}</button>
                            </div>
                        </div>
                    </div>

                    <div class="step-thumbnails">
                        { for STEPS.iter().enumerate().map(|(index, thumb)| {
                            let active = carousel.is_active(index);
                            let carousel = carousel.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                carousel.dispatch(CarouselAction::JumpTo(index));
                            });
                            html! {
                                <button key={thumb.id.to_string()} class={classes!("step-thumb", active.then_some("active"))} {onclick}>
                                    {thumb.icon.glyph()}
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <div class={classes!(reveal(visible), "delay-400", "feature-grid")}>
                    { for STEP_FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon" style={format!("background-color: {}15; color: {}", feature.color, feature.color)}>
                                {feature.icon.glyph()}
                            </div>
                            <h4>{feature.title}</h4>
                            <p>{feature.desc}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .steps-section { padding: 96px 0; background: #fff; position: relative; overflow: hidden; }
                .step-progress { margin-bottom: 32px; }
                .step-progress-labels { display: flex; justify-content: space-between; margin-bottom: 8px; font-size: 14px; font-weight: 500; }
                .step-count { color: #6b7280; }
                .step-percent { color: #ff6a6a; }
                .step-progress-track { height: 8px; background: #f3f4f6; border-radius: 999px; overflow: hidden; }
                .step-progress-fill { height: 100%; background: linear-gradient(to right, #ff6a6a, #7b5cff); border-radius: 999px; transition: width 0.5s ease; }
                .step-card {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 32px;
                    align-items: center;
                    background: #fff;
                    border-radius: 24px;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    padding: 48px;
                    animation: fadeIn 0.5s ease;
                }
                @media (min-width: 768px) {
                    .step-card { grid-template-columns: 1fr 1fr; }
                }
                .step-icon { width: 96px; height: 96px; border-radius: 24px; display: inline-flex; align-items: center; justify-content: center; font-size: 44px; margin-bottom: 24px; }
                .step-number { font-size: 96px; font-weight: 700; opacity: 0.1; }
                .step-card-right h3 { font-size: 30px; font-weight: 700; color: #111827; margin-bottom: 16px; }
                .step-card-right p { font-size: 18px; color: #4b5563; margin-bottom: 24px; }
                .step-buttons { display: flex; gap: 16px; }
                .step-prev, .step-next { padding: 12px 24px; border-radius: 999px; cursor: pointer; transition: all 0.3s ease; font-size: 16px; }
                .step-prev { background: transparent; border: 2px solid #e5e7eb; }
                .step-prev:hover { border-color: #ff6a6a; color: #ff6a6a; }
                .step-next { background: #ff6a6a; color: #fff; border: none; }
                .step-next:hover { background: #ff5252; }
                .step-thumbnails { margin-top: 32px; display: grid; grid-template-columns: repeat(5, 1fr); gap: 8px; }
                @media (min-width: 640px) {
                    .step-thumbnails { grid-template-columns: repeat(10, 1fr); }
                }
                .step-thumb { padding: 12px; border-radius: 12px; border: none; background: #f3f4f6; color: #9ca3af; cursor: pointer; transition: all 0.3s ease; }
                .step-thumb:hover { background: #e5e7eb; }
                .step-thumb.active { background: #ff6a6a; color: #fff; transform: scale(1.1); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .feature-grid { margin-top: 80px; display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 24px; }
                .feature-card { padding: 24px; background: #f9fafb; border-radius: 16px; transition: all 0.3s ease; cursor: pointer; }
                .feature-card:hover { background: #fff; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
                .feature-icon { width: 48px; height: 48px; border-radius: 12px; display: flex; align-items: center; justify-content: center; margin-bottom: 16px; font-size: 22px; transition: transform 0.3s ease; }
                .feature-card:hover .feature-icon { transform: scale(1.1); }
                .feature-card h4 { font-weight: 600; color: #111827; margin-bottom: 4px; }
                .feature-card p { font-size: 14px; color: #6b7280; }
                "#}
            </style>
        </section>
    }
}
