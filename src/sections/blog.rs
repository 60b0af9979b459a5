use yew::prelude::*;

use crate::config;
use crate::content::{blog_structured_data, featured_post, regular_posts, BLOG_POSTS};
use crate::hooks::visibility::{reveal, use_visibility, RevealMode};

#[function_component(Blog)]
pub fn blog() -> Html {
    let section = use_node_ref();
    let visible = use_visibility(section.clone(), config::REVEAL_THRESHOLD, RevealMode::Latch);

    let featured = featured_post(&BLOG_POSTS).map(|post| {
        html! {
            <div class="blog-featured">
                <div class="blog-featured-media">
                    <img src={post.image} alt={post.title} />
                    <div class="blog-featured-badge">{"精选文章"}</div>
                </div>
                <div class="blog-featured-body">
                    <div class="blog-meta">
                        <span>{format!("📅 {}", post.date)}</span>
                        <span>{format!("⏱ {}", post.read_time)}</span>
                    </div>
                    <h3>{post.title}</h3>
                    <p>{post.excerpt}</p>
                    <a href="#" class="blog-read-more">{"阅读更多 →"}</a>
                </div>
            </div>
        }
    });

    html! {
        <section id="blog" ref={section} class="blog-section">
            <script type="application/ld+json">{blog_structured_data(&BLOG_POSTS).to_string()}</script>
            <div class="section-inner">
                <div class={classes!(reveal(visible), "blog-header")}>
                    <div>
                        <span class="section-tag blue">{"学习博客"}</span>
                        <h2>{"学习技巧与"}<span class="text-gradient">{"洞察"}</span></h2>
                    </div>
                    <a href="#" class="blog-all">{"查看全部文章 →"}</a>
                </div>

                <div class={classes!(reveal(visible), "delay-200", "blog-grid")}>
                    { featured.unwrap_or_else(|| html! {}) }
                    <div class="blog-list">
                        { for regular_posts(&BLOG_POSTS).into_iter().enumerate().map(|(index, post)| html! {
                            <div key={post.id.to_string()} class="blog-item" style={format!("animation-delay: {}ms", (index + 1) * 100)}>
                                <div class="blog-item-media">
                                    <img src={post.image} alt={post.title} />
                                </div>
                                <div class="blog-item-body">
                                    <div class="blog-meta small">
                                        <span>{format!("📅 {}", post.date)}</span>
                                        <span>{format!("⏱ {}", post.read_time)}</span>
                                    </div>
                                    <h4>{post.title}</h4>
                                    <p>{post.excerpt}</p>
                                    <a href="#" class="blog-read-more small">{"阅读更多 →"}</a>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .blog-section { padding: 96px 0; background: #f9fafb; position: relative; overflow: hidden; }
                .blog-header { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 16px; margin-bottom: 48px; }
                .blog-all { color: #ff6a6a; font-weight: 500; text-decoration: none; transition: letter-spacing 0.3s ease; }
                .blog-all:hover { letter-spacing: 0.05em; }
                .blog-grid { display: grid; grid-template-columns: 1fr; gap: 32px; }
                @media (min-width: 1024px) {
                    .blog-grid { grid-template-columns: 1fr 1fr; }
                }
                .blog-featured { background: #fff; border-radius: 24px; overflow: hidden; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); transition: box-shadow 0.5s ease; cursor: pointer; height: 100%; }
                .blog-featured:hover { box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
                .blog-featured-media { position: relative; overflow: hidden; height: 256px; }
                .blog-featured-media img, .blog-item-media img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
                .blog-featured:hover img, .blog-item:hover img { transform: scale(1.1); }
                .blog-featured-badge { position: absolute; top: 16px; left: 16px; background: #ff6a6a; color: #fff; font-size: 12px; padding: 4px 12px; border-radius: 999px; }
                .blog-featured-body { padding: 24px; }
                .blog-meta { display: flex; gap: 16px; font-size: 14px; color: #6b7280; margin-bottom: 12px; }
                .blog-meta.small { font-size: 12px; gap: 12px; margin-bottom: 8px; }
                .blog-featured-body h3 { font-size: 24px; font-weight: 700; color: #111827; margin-bottom: 12px; }
                .blog-featured:hover h3, .blog-item:hover h4 { color: #ff6a6a; }
                .blog-featured-body p, .blog-item-body p { color: #4b5563; overflow: hidden; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; margin-bottom: 16px; }
                .blog-read-more { color: #ff6a6a; font-weight: 500; text-decoration: none; }
                .blog-read-more.small { font-size: 14px; }
                .blog-list { display: flex; flex-direction: column; gap: 24px; }
                .blog-item { display: flex; flex-wrap: wrap; background: #fff; border-radius: 16px; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); transition: box-shadow 0.3s ease; cursor: pointer; }
                .blog-item:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
                .blog-item-media { width: 160px; min-height: 160px; overflow: hidden; }
                .blog-item-body { flex: 1; padding: 20px; }
                .blog-item-body h4 { font-weight: 700; color: #111827; margin-bottom: 8px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
                .blog-item-body p { font-size: 14px; }
                "#}
            </style>
        </section>
    }
}
