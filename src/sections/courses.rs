use yew::prelude::*;

use crate::config;
use crate::content::{course_structured_data, courses_for, Accent, Course, COURSES};
use crate::hooks::visibility::{reveal, use_visibility, RevealMode};

#[derive(Properties, PartialEq)]
struct CourseCardProps {
    course: Course,
    index: usize,
}

/// Inline colours for a tab button; only the selected tab is filled.
fn tab_style(active: Accent, accent: Accent) -> Option<String> {
    (active == accent).then(|| format!("background: {}; color: #fff", accent.color()))
}

#[function_component(CourseCard)]
fn course_card(props: &CourseCardProps) -> Html {
    let course = &props.course;
    html! {
        <div class="course-card" style={format!("animation-delay: {}ms", props.index * 100)}>
            <div class="course-media">
                <img src={course.image} alt={course.title} />
                <div class="course-play-overlay">
                    <div class="course-play">{"▶"}</div>
                </div>
                <div class="course-duration">{format!("⏱ {}", course.duration)}</div>
                <div class="course-accent" style={format!("background: {}", course.accent.color())}>
                    {format!("🔊 {}", course.accent.badge())}
                </div>
            </div>
            <div class="course-body">
                <div class="course-subtitle">{course.subtitle}</div>
                <h3>{course.title}</h3>
                <div class="course-meta">
                    <span>{format!("👤 {}", course.instructor)}</span>
                    <span>{format!("▶ {} 个学习步骤", course.lessons)}</span>
                </div>
                <button class="course-start">
                    <span>{"开始学习"}</span>
                    <span class="chevron">{"›"}</span>
                </button>
            </div>
        </div>
    }
}

#[function_component(Courses)]
pub fn courses() -> Html {
    let section = use_node_ref();
    let visible = use_visibility(section.clone(), config::REVEAL_THRESHOLD, RevealMode::Latch);
    let active_tab = use_state(|| Accent::American);

    let tab = |accent: Accent| {
        let setter = active_tab.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            log::debug!("Switching course tab to {:?}", accent);
            setter.set(accent);
        });
        let style = tab_style(*active_tab, accent);
        html! {
            <button class={classes!("course-tab", (*active_tab == accent).then_some("active"))} {style} {onclick}>
                {format!("🔊 {}", accent.tab_label())}
            </button>
        }
    };

    let structured_data = course_structured_data(&COURSES).to_string();

    html! {
        <section id="courses" ref={section} class="courses-section">
            <script type="application/ld+json">{structured_data}</script>
            <div class="section-inner">
                <div class={classes!(reveal(visible), "section-header")}>
                    <span class="section-tag coral">{"精品课程"}</span>
                    <h2>{"探索我们的"}<span class="text-gradient">{"课程"}</span></h2>
                    <p>{"美音与英音课程各占一半，满足不同学习需求"}</p>
                </div>

                <div class={classes!(reveal(visible), "delay-200", "course-tabs")}>
                    <div class="course-tab-group">
                        { tab(Accent::American) }
                        { tab(Accent::British) }
                    </div>
                </div>

                <div class={classes!(reveal(visible), "delay-300", "course-grid")}>
                    { for courses_for(&COURSES, *active_tab).into_iter().enumerate().map(|(index, course)| html! {
                        <CourseCard key={course.id.to_string()} course={course.clone()} {index} />
                    }) }
                </div>

                <div class={classes!(reveal(visible), "delay-400", "course-all")}>
                    <button class="course-all-button">{"查看全部课程 ›"}</button>
                </div>
            </div>
            <style>
                {r#"
                .courses-section { padding: 96px 0; background: #f9fafb; position: relative; overflow: hidden; }
                .course-tabs { display: flex; justify-content: center; margin-bottom: 48px; }
                .course-tab-group { display: inline-flex; background: #fff; border-radius: 999px; padding: 6px; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .course-tab { border: none; background: transparent; color: #4b5563; padding: 12px 24px; border-radius: 999px; font-weight: 500; cursor: pointer; transition: all 0.3s ease; }
                .course-tab:hover { color: #111827; }
                .course-tab.active { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .course-grid { display: grid; grid-template-columns: 1fr; gap: 32px; }
                @media (min-width: 768px) {
                    .course-grid { grid-template-columns: 1fr 1fr; }
                }
                .course-card { background: #fff; border-radius: 24px; overflow: hidden; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); transition: all 0.5s ease; }
                .course-card:hover { box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); transform: translateY(-8px); }
                .course-media { position: relative; overflow: hidden; }
                .course-media img { width: 100%; height: 224px; object-fit: cover; display: block; transition: transform 0.7s ease; }
                .course-card:hover .course-media img { transform: scale(1.1); }
                .course-play-overlay { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.4); opacity: 0; transition: opacity 0.3s ease; display: flex; align-items: center; justify-content: center; }
                .course-card:hover .course-play-overlay { opacity: 1; }
                .course-play { width: 64px; height: 64px; border-radius: 50%; background: rgba(255, 255, 255, 0.9); color: #ff6a6a; display: flex; align-items: center; justify-content: center; font-size: 24px; }
                .course-duration { position: absolute; right: 16px; bottom: 16px; background: rgba(0, 0, 0, 0.7); color: #fff; font-size: 14px; padding: 4px 12px; border-radius: 999px; }
                .course-accent { position: absolute; left: 16px; top: 16px; color: #fff; font-size: 12px; padding: 4px 12px; border-radius: 999px; }
                .course-body { padding: 24px; }
                .course-subtitle { font-size: 14px; color: #9ca3af; margin-bottom: 8px; }
                .course-body h3 { font-size: 20px; font-weight: 700; color: #111827; margin-bottom: 12px; transition: color 0.3s ease; }
                .course-card:hover h3 { color: #ff6a6a; }
                .course-meta { display: flex; gap: 16px; font-size: 14px; color: #6b7280; margin-bottom: 16px; }
                .course-start { width: 100%; display: flex; justify-content: space-between; border: none; background: transparent; padding: 10px 12px; border-radius: 8px; cursor: pointer; font-size: 15px; }
                .course-start:hover { background: rgba(255, 106, 106, 0.05); color: #ff6a6a; }
                .course-start:hover .chevron { transform: translateX(4px); }
                .chevron { display: inline-block; transition: transform 0.3s ease; }
                .course-all { text-align: center; margin-top: 48px; }
                .course-all-button { background: #111827; color: #fff; border: none; padding: 20px 32px; border-radius: 999px; font-weight: 600; cursor: pointer; transition: all 0.3s ease; }
                .course-all-button:hover { background: #1f2937; transform: scale(1.05); }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_selected_tab_is_filled() {
        assert_eq!(
            tab_style(Accent::British, Accent::British).as_deref(),
            Some("background: #7b5cff; color: #fff")
        );
        assert_eq!(tab_style(Accent::British, Accent::American), None);
    }

    #[test]
    fn switching_tabs_moves_the_fill_and_the_grid() {
        for active in [Accent::American, Accent::British] {
            let filled: Vec<Accent> = [Accent::American, Accent::British]
                .into_iter()
                .filter(|accent| tab_style(active, *accent).is_some())
                .collect();
            assert_eq!(filled, vec![active]);
            assert!(courses_for(&COURSES, active).iter().all(|course| course.accent == active));
        }
    }
}
