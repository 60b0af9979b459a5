use yew::prelude::*;

use crate::sections::{
    about::About,
    blog::Blog,
    courses::Courses,
    footer::Footer,
    hero::Hero,
    steps::Steps,
    testimonials::Testimonials,
};

/// The whole site: one page of sections reached by in-page anchors.
#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                log::info!("Rendering landing page");
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <main>
                <Hero />
                <Steps />
                <About />
                <Courses />
                <Testimonials />
                <Blog />
            </main>
            <Footer />
            <style>
                {r#"
                body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "PingFang SC", "Microsoft YaHei", sans-serif; }
                .landing-page { min-height: 100vh; background: #fff; }
                .section-inner { max-width: 1280px; margin: 0 auto; padding: 0 24px; position: relative; }
                .section-header { text-align: center; margin-bottom: 64px; }
                .section-header h2, .blog-header h2, .about-section h2 { font-size: clamp(36px, 5vw, 48px); font-weight: 700; color: #111827; margin: 0 0 16px; }
                .section-header p { font-size: 18px; color: #4b5563; max-width: 42rem; margin: 0 auto; }
                .section-tag { display: inline-block; padding: 4px 16px; border-radius: 999px; font-size: 14px; font-weight: 500; margin-bottom: 16px; }
                .section-tag.coral { background: rgba(255, 106, 106, 0.1); color: #ff6a6a; }
                .section-tag.violet { background: rgba(123, 92, 255, 0.1); color: #7b5cff; }
                .section-tag.green { background: rgba(80, 200, 120, 0.1); color: #50c878; }
                .section-tag.blue { background: rgba(74, 144, 226, 0.1); color: #4a90e2; }
                .text-gradient { background: linear-gradient(135deg, #ff6a6a, #7b5cff); -webkit-background-clip: text; background-clip: text; color: transparent; }
                .blob { position: absolute; width: 384px; height: 384px; border-radius: 50%; filter: blur(64px); }
                .blob.coral { background: rgba(255, 106, 106, 0.05); }
                .blob.violet { background: rgba(123, 92, 255, 0.05); }
                .blob-top-right { top: 0; right: 0; }
                .blob-bottom-left { bottom: 0; left: 0; }

                .reveal { opacity: 0; transform: translateY(40px); transition: all 0.7s ease; }
                .reveal.from-left { transform: translateX(-40px); }
                .reveal.from-right { transform: translateX(40px); }
                .reveal.shown { opacity: 1; transform: none; }
                .delay-200 { transition-delay: 0.2s; }
                .delay-300 { transition-delay: 0.3s; }
                .delay-400 { transition-delay: 0.4s; }

                .fade-in { opacity: 0; animation: fadeIn 0.8s ease forwards; }
                .slide-up { opacity: 0; animation: slideUp 0.8s ease forwards; }
                .scale-in { opacity: 0; animation: scaleIn 0.8s ease forwards; }
                .float-1 { animation: float 6s ease-in-out infinite; }
                .float-2 { animation: float 7s ease-in-out infinite 1s; }
                .float-3 { animation: float 8s ease-in-out infinite 2s; }

                @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
                @keyframes slideUp { from { opacity: 0; transform: translateY(80px); } to { opacity: 1; transform: translateY(0); } }
                @keyframes scaleIn { from { opacity: 0; transform: scale(0.9); } to { opacity: 1; transform: scale(1); } }
                @keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-16px); } }
                @keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.4; } }
                @keyframes pulseGlow { 0%, 100% { box-shadow: 0 0 0 0 rgba(255, 106, 106, 0.4); } 50% { box-shadow: 0 0 0 12px rgba(255, 106, 106, 0); } }
                "#}
            </style>
        </div>
    }
}
