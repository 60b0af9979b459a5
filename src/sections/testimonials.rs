use yew::prelude::*;

use crate::config;
use crate::content::TESTIMONIALS;
use crate::hooks::carousel::{use_auto_rotate, use_carousel, CarouselAction};
use crate::hooks::visibility::{reveal, use_visibility, RevealMode};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section = use_node_ref();
    let visible = use_visibility(section.clone(), config::REVEAL_THRESHOLD, RevealMode::Latch);
    let carousel = use_carousel(TESTIMONIALS.len());
    // Keeps rotating through manual clicks as well.
    use_auto_rotate(&carousel, config::TESTIMONIAL_ROTATE_MS);

    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };
    let previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Previous))
    };
    let jump = |index: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::JumpTo(index)))
    };

    let current = &TESTIMONIALS[carousel.index()];

    html! {
        <section id="testimonials" ref={section} class="testimonials-section">
            <div class="quote-backdrop left">{"❝"}</div>
            <div class="quote-backdrop right">{"❞"}</div>
            <div class="section-inner">
                <div class={classes!(reveal(visible), "section-header")}>
                    <span class="section-tag green">{"学员评价"}</span>
                    <h2>{"学员怎么"}<span class="text-gradient">{"说"}</span></h2>
                    <p>{"听听他们的学习故事和成功经验"}</p>
                </div>

                <div class={classes!(reveal(visible), "delay-200", "testimonial-wrap")}>
                    <div class="testimonial-card">
                        <div class="testimonial-quote-icon">{"❝"}</div>
                        <div class="testimonial-stars">
                            { for (0..current.rating).map(|i| html! { <span key={i.to_string()} class="star">{"★"}</span> }) }
                        </div>
                        <p class="testimonial-text">{format!("\u{201c}{}\u{201d}", current.content)}</p>
                        <div class="testimonial-footer">
                            <div class="testimonial-author">
                                <img src={current.avatar} alt={current.name} />
                                <div>
                                    <div class="testimonial-name">{current.name}</div>
                                    <div class="testimonial-role">{current.role}</div>
                                </div>
                            </div>
                            <div class="testimonial-nav">
                                <button onclick={previous}>{"‹"}</button>
                                <button onclick={next}>{"›"}</button>
                            </div>
                        </div>
                    </div>

                    <div class="testimonial-avatars">
                        { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                            let active = carousel.is_active(index);
                            html! {
                                <button key={testimonial.id.to_string()} class={classes!("avatar-button", active.then_some("active"))} onclick={jump(index)}>
                                    <img src={testimonial.avatar} alt={testimonial.name} />
                                </button>
                            }
                        }) }
                    </div>

                    <div class="testimonial-dots">
                        { for (0..TESTIMONIALS.len()).map(|index| html! {
                            <button
                                key={index.to_string()}
                                class={classes!("dot-button", carousel.is_active(index).then_some("active"))}
                                onclick={jump(index)}
                            />
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .testimonials-section { padding: 96px 0; background: #fff; position: relative; overflow: hidden; }
                .quote-backdrop { position: absolute; font-size: 192px; opacity: 0.05; line-height: 1; }
                .quote-backdrop.left { top: 80px; left: 40px; color: #ff6a6a; }
                .quote-backdrop.right { bottom: 80px; right: 40px; color: #7b5cff; }
                .testimonial-wrap { max-width: 56rem; margin: 0 auto; }
                .testimonial-card { position: relative; background: #f9fafb; border-radius: 24px; padding: 48px; }
                .testimonial-quote-icon { position: absolute; top: -24px; left: 32px; width: 48px; height: 48px; background: #ff6a6a; color: #fff; border-radius: 12px; display: flex; align-items: center; justify-content: center; font-size: 24px; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .testimonial-stars { display: flex; gap: 4px; margin: 16px 0 24px; }
                .star { color: #facc15; font-size: 20px; }
                .testimonial-text { font-size: 22px; color: #374151; line-height: 1.7; margin-bottom: 32px; animation: fadeIn 0.5s ease; }
                .testimonial-footer { display: flex; justify-content: space-between; align-items: center; }
                .testimonial-author { display: flex; align-items: center; gap: 16px; }
                .testimonial-author img { width: 56px; height: 56px; border-radius: 50%; object-fit: cover; border: 2px solid #fff; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .testimonial-name { font-weight: 600; color: #111827; }
                .testimonial-role { font-size: 14px; color: #6b7280; }
                .testimonial-nav { display: flex; gap: 8px; }
                .testimonial-nav button { width: 48px; height: 48px; border-radius: 50%; border: 2px solid #e5e7eb; background: transparent; font-size: 20px; cursor: pointer; transition: all 0.3s ease; }
                .testimonial-nav button:hover { border-color: #ff6a6a; color: #ff6a6a; }
                .testimonial-avatars { display: flex; justify-content: center; gap: 16px; margin-top: 32px; }
                .avatar-button { border: none; background: transparent; padding: 0; cursor: pointer; transform: scale(0.9); opacity: 0.5; filter: grayscale(1); transition: all 0.3s ease; }
                .avatar-button.active { transform: scale(1.1); opacity: 1; filter: none; }
                .avatar-button img { width: 48px; height: 48px; border-radius: 50%; object-fit: cover; border: 2px solid transparent; }
                .avatar-button.active img { border-color: #ff6a6a; }
                .testimonial-dots { display: flex; justify-content: center; gap: 8px; margin-top: 24px; }
                .dot-button { width: 8px; height: 8px; border-radius: 999px; border: none; background: #d1d5db; cursor: pointer; transition: all 0.3s ease; }
                .dot-button:hover { background: #9ca3af; }
                .dot-button.active { width: 32px; background: #ff6a6a; }
                "#}
            </style>
        </section>
    }
}
