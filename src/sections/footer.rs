use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::content::{QUICK_LINKS, SOCIAL_LINKS};
use crate::scroll::scroll_to_section;

/// Newsletter field and its short-lived "thanks" message. Nothing is sent
/// anywhere; a submit only flips the confirmation on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Newsletter {
    pub email: String,
    pub subscribed: bool,
    /// Bumped on every accepted submit so each one gets its own hide timer.
    pub submissions: u32,
}

pub enum NewsletterAction {
    Input(String),
    Submit,
    Expire,
}

impl Reducible for Newsletter {
    type Action = NewsletterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NewsletterAction::Input(email) => Rc::new(Self { email, ..(*self).clone() }),
            NewsletterAction::Submit if !self.email.is_empty() => Rc::new(Self {
                email: String::new(),
                subscribed: true,
                submissions: self.submissions + 1,
            }),
            NewsletterAction::Expire if self.subscribed => Rc::new(Self { subscribed: false, ..(*self).clone() }),
            _ => self,
        }
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let newsletter = use_reducer(Newsletter::default);

    {
        let dispatcher = newsletter.dispatcher();
        use_effect_with_deps(
            move |submissions| {
                let timeout = (*submissions > 0).then(|| {
                    Timeout::new(config::NEWSLETTER_CONFIRM_MS, move || {
                        dispatcher.dispatch(NewsletterAction::Expire);
                    })
                });
                // Dropping a pending Timeout cancels it.
                move || drop(timeout)
            },
            newsletter.submissions,
        );
    }

    let oninput = {
        let newsletter = newsletter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            newsletter.dispatch(NewsletterAction::Input(input.value()));
        })
    };

    let onsubmit = {
        let newsletter = newsletter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !newsletter.email.is_empty() {
                log::info!("Newsletter signup submitted");
            }
            newsletter.dispatch(NewsletterAction::Submit);
        })
    };

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <a href="#hero" class="footer-brand">
                            <div class="logo-mark">{"▶"}</div>
                            <span>{"YouTube"}<span class="accent">{"英语"}</span></span>
                        </a>
                        <p class="footer-about">{"通过引人入胜的YouTube内容，掌握地道英语口语。让学习变得轻松愉快。"}</p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|(name, icon)| html! {
                                <a key={*name} href="#" title={*name}>{icon.glyph()}</a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4>{"快速链接"}</h4>
                        <ul class="footer-links">
                            { for QUICK_LINKS.iter().map(|link| {
                                let href = link.href;
                                let onclick = Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    scroll_to_section(href);
                                });
                                html! {
                                    <li key={link.name}>
                                        <a href={link.href} {onclick}>{link.name}</a>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"联系我们"}</h4>
                        <ul class="footer-contact">
                            <li>{"邮箱: hello@youtubeenglish.com"}</li>
                            <li>{"微信: YouTubeEnglish"}</li>
                            <li>{"小红书: @漂亮小羊爱英语"}</li>
                        </ul>
                    </div>

                    <div>
                        <h4>{"保持更新"}</h4>
                        <p class="footer-about">{"订阅我们的通讯，获取最新课程和学习技巧"}</p>
                        <form class="newsletter-form" {onsubmit}>
                            <div class="newsletter-field">
                                <input
                                    type="email"
                                    placeholder="输入您的邮箱"
                                    value={newsletter.email.clone()}
                                    {oninput}
                                />
                                <button type="submit">{"➤"}</button>
                            </div>
                            {
                                if newsletter.subscribed {
                                    html! { <p class="newsletter-thanks">{"感谢订阅！"}</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </form>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{"© 2024 YouTube学英语口语. 保留所有权利."}</p>
                    <div class="footer-legal">
                        <a href="#">{"隐私政策"}</a>
                        <a href="#">{"服务条款"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer { position: relative; overflow: hidden; color: #fff; background: linear-gradient(to bottom right, #1a1a2e, #1a1a2e, #2d2d44); }
                .footer-inner { max-width: 1280px; margin: 0 auto; padding: 0 24px; }
                .footer-grid { padding: 64px 0; display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 48px; }
                .footer-grid h4 { font-size: 18px; font-weight: 600; margin-bottom: 24px; }
                .footer-brand { display: flex; align-items: center; gap: 8px; margin-bottom: 24px; color: #fff; text-decoration: none; font-size: 20px; font-weight: 700; }
                .footer-about { color: #9ca3af; margin-bottom: 24px; }
                .footer-social { display: flex; gap: 12px; }
                .footer-social a { width: 40px; height: 40px; border-radius: 50%; background: rgba(255, 255, 255, 0.1); display: flex; align-items: center; justify-content: center; text-decoration: none; transition: background 0.3s ease; }
                .footer-social a:hover { background: #ff6a6a; }
                .footer-links, .footer-contact { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 12px; color: #9ca3af; }
                .footer-links a { color: #9ca3af; text-decoration: none; transition: color 0.3s ease; }
                .footer-links a:hover { color: #ff6a6a; }
                .newsletter-field { position: relative; }
                .newsletter-field input { width: 100%; box-sizing: border-box; padding: 12px 48px 12px 12px; border-radius: 8px; border: 1px solid rgba(255, 255, 255, 0.2); background: rgba(255, 255, 255, 0.1); color: #fff; }
                .newsletter-field input:focus { border-color: #ff6a6a; outline: none; }
                .newsletter-field button { position: absolute; right: 4px; top: 50%; transform: translateY(-50%); background: #ff6a6a; color: #fff; border: none; border-radius: 8px; padding: 8px; cursor: pointer; }
                .newsletter-field button:hover { background: #ff5252; }
                .newsletter-thanks { margin-top: 12px; font-size: 14px; color: #50c878; }
                .footer-bottom { border-top: 1px solid rgba(255, 255, 255, 0.1); padding: 24px 0; display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 16px; font-size: 14px; color: #6b7280; }
                .footer-legal { display: flex; gap: 24px; }
                .footer-legal a { color: #6b7280; text-decoration: none; transition: color 0.3s ease; }
                .footer-legal a:hover { color: #ff6a6a; }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(email: &str) -> Rc<Newsletter> {
        Rc::new(Newsletter::default()).reduce(NewsletterAction::Input(email.to_string()))
    }

    #[test]
    fn submit_with_email_confirms_and_clears() {
        let state = typed("learner@example.com").reduce(NewsletterAction::Submit);
        assert!(state.subscribed);
        assert!(state.email.is_empty());
        assert_eq!(state.submissions, 1);
    }

    #[test]
    fn empty_submit_does_nothing() {
        let state = Rc::new(Newsletter::default());
        let after = state.clone().reduce(NewsletterAction::Submit);
        assert!(Rc::ptr_eq(&state, &after));
        assert!(!after.subscribed);
    }

    #[test]
    fn expiry_hides_the_confirmation() {
        let state = typed("a@b.c")
            .reduce(NewsletterAction::Submit)
            .reduce(NewsletterAction::Expire);
        assert!(!state.subscribed);
        assert_eq!(state.submissions, 1);
    }

    #[test]
    fn resubmitting_starts_a_fresh_confirmation() {
        let state = typed("a@b.c")
            .reduce(NewsletterAction::Submit)
            .reduce(NewsletterAction::Input("d@e.f".to_string()))
            .reduce(NewsletterAction::Submit);
        assert!(state.subscribed);
        assert_eq!(state.submissions, 2);
    }
}
