//! Compiled-in page content. Nothing here changes at runtime; sections only
//! hold an index or a filter into these lists.

use serde::Serialize;
use serde_json::{json, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Play,
    Headphones,
    Subtitles,
    Book,
    Message,
    Text,
    Languages,
    VolumeHigh,
    VolumeLow,
    Pen,
    Users,
    Award,
    Video,
    Camera,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Play => "▶",
            Icon::Headphones => "🎧",
            Icon::Subtitles => "💬",
            Icon::Book => "📖",
            Icon::Message => "🗨",
            Icon::Text => "📄",
            Icon::Languages => "🔤",
            Icon::VolumeHigh => "🔊",
            Icon::VolumeLow => "🔉",
            Icon::Pen => "✏",
            Icon::Users => "👥",
            Icon::Award => "🏆",
            Icon::Video => "🎬",
            Icon::Camera => "📷",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: &'static str,
}

impl Step {
    /// "01".."10", shown as the big faded number on the step card.
    pub fn number(&self) -> String {
        format!("{:02}", self.id)
    }
}

pub static STEPS: [Step; 10] = [
    Step { id: 1, title: "无字幕视频播放", description: "先观看无字幕视频，训练您的听力理解能力，培养语感", icon: Icon::Play, color: "#ff6a6a" },
    Step { id: 2, title: "音频精听", description: "无画面音频精准理解，把握片段内容，提升听力水平", icon: Icon::Headphones, color: "#7b5cff" },
    Step { id: 3, title: "中英双语字幕", description: "对照中英文字幕视频，学习整体内容，理解每一句话", icon: Icon::Subtitles, color: "#4a90e2" },
    Step { id: 4, title: "重点词汇", description: "重点词汇学习，积累词汇库，扩展您的词汇量", icon: Icon::Book, color: "#50c878" },
    Step { id: 5, title: "句式表达", description: "连词成句，地道表达模仿学习，培养英语思维", icon: Icon::Message, color: "#ff6a6a" },
    Step { id: 6, title: "中英文本", description: "对照中英文本，逐句朗读复习，提升口语表达能力", icon: Icon::Text, color: "#7b5cff" },
    Step { id: 7, title: "纯英文本", description: "纯英文文本，反复练习，强化阅读理解", icon: Icon::Languages, color: "#4a90e2" },
    Step { id: 8, title: "0.8倍速音频", description: "慢速音频练习，仔细听清每个单词的发音", icon: Icon::VolumeHigh, color: "#50c878" },
    Step { id: 9, title: "0.6倍速音频", description: "更慢速度，精准捕捉语音细节，纠正发音", icon: Icon::VolumeLow, color: "#ff6a6a" },
    Step { id: 10, title: "听写填空", description: "重点词听写填空，巩固记忆，检验学习成果", icon: Icon::Pen, color: "#7b5cff" },
];

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
    pub color: &'static str,
}

pub static STEP_FEATURES: [Feature; 4] = [
    Feature { icon: Icon::Play, title: "视频学习", desc: "精选YouTube优质内容", color: "#ff6a6a" },
    Feature { icon: Icon::Headphones, title: "音频训练", desc: "多倍速精听练习", color: "#7b5cff" },
    Feature { icon: Icon::Book, title: "词汇积累", desc: "重点词汇深度学习", color: "#4a90e2" },
    Feature { icon: Icon::Pen, title: "听写巩固", desc: "检验学习成果", color: "#50c878" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    American,
    British,
}

impl Accent {
    pub fn badge(self) -> &'static str {
        match self {
            Accent::American => "美音",
            Accent::British => "英音",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Accent::American => "美音课程",
            Accent::British => "英音课程",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Accent::American => "#ff6a6a",
            Accent::British => "#7b5cff",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub instructor: &'static str,
    pub duration: &'static str,
    pub image: &'static str,
    pub accent: Accent,
    pub lessons: u32,
}

pub static COURSES: [Course; 4] = [
    Course { id: 1, title: "准备和几个闺蜜出去玩", subtitle: "Girls' Day Out Planning", instructor: "Sydney Serena", duration: "1:45", image: "/course-1.jpg", accent: Accent::American, lessons: 10 },
    Course { id: 2, title: "进入医学院的心态准备和挑战", subtitle: "Medical School Preparation", instructor: "Zeliha Akpinar", duration: "2:30", image: "/course-2.jpg", accent: Accent::British, lessons: 10 },
    Course { id: 3, title: "日常购物对话练习", subtitle: "Shopping Conversations", instructor: "Emma Chamberlain", duration: "1:20", image: "/course-1.jpg", accent: Accent::American, lessons: 10 },
    Course { id: 4, title: "职场面试技巧分享", subtitle: "Job Interview Skills", instructor: "Holly Gabrielle", duration: "3:15", image: "/course-2.jpg", accent: Accent::British, lessons: 10 },
];

/// Courses for one accent tab, keeping list order.
pub fn courses_for(courses: &[Course], accent: Accent) -> Vec<&Course> {
    courses.iter().filter(|course| course.accent == accent).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub avatar: &'static str,
    pub content: &'static str,
    pub rating: u32,
    pub role: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: 1,
        name: "张小明",
        avatar: "/avatar-1.jpg",
        content: "这个课程彻底改变了我的英语口语。视频内容让学习变得愉快，我不再觉得学英语是一件枯燥的事情。每天都能坚持学习，进步很明显！",
        rating: 5,
        role: "大学生",
    },
    Testimonial {
        id: 2,
        name: "李芳",
        avatar: "/avatar-2.jpg",
        content: "我尝试过很多方法，但这是第一个让我保持参与的。10步学习法非常科学，从泛听到精听，每一步都有明确的目标，效果特别好。",
        rating: 5,
        role: "职场新人",
    },
    Testimonial {
        id: 3,
        name: "王华",
        avatar: "/avatar-3.jpg",
        content: "我的自信飙升了。我现在可以毫不畏惧地与母语者交谈。感谢这个平台，让我找到了学习英语的正确方法！",
        rating: 5,
        role: "自由职业者",
    },
];

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub featured: bool,
}

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        id: 1,
        title: "如何通过YouTube视频提升英语口语",
        excerpt: "利用碎片化时间，通过精选的YouTube内容，在轻松愉快的氛围中提升英语口语能力。本文将分享最有效的学习方法...",
        image: "/blog-1.jpg",
        date: "2024-01-15",
        read_time: "5分钟",
        featured: true,
    },
    BlogPost {
        id: 2,
        title: "掌握英语口语的10个步骤",
        excerpt: "从泛听到精听，从词汇到表达，系统化提升您的英语能力...",
        image: "/blog-2.jpg",
        date: "2024-01-10",
        read_time: "8分钟",
        featured: false,
    },
    BlogPost {
        id: 3,
        title: "通过视频学习地道英语表达",
        excerpt: "了解如何在真实语境中学习地道的英语表达，避免中式英语...",
        image: "/blog-3.jpg",
        date: "2024-01-05",
        read_time: "6分钟",
        featured: false,
    },
];

pub fn featured_post(posts: &[BlogPost]) -> Option<&BlogPost> {
    posts.iter().find(|post| post.featured)
}

pub fn regular_posts(posts: &[BlogPost]) -> Vec<&BlogPost> {
    posts.iter().filter(|post| !post.featured).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink { name: "首页", href: "#hero" },
    NavLink { name: "学习步骤", href: "#steps" },
    NavLink { name: "课程", href: "#courses" },
    NavLink { name: "关于我们", href: "#about" },
    NavLink { name: "学员评价", href: "#testimonials" },
    NavLink { name: "博客", href: "#blog" },
];

pub static QUICK_LINKS: [NavLink; 5] = [
    NavLink { name: "首页", href: "#hero" },
    NavLink { name: "学习步骤", href: "#steps" },
    NavLink { name: "课程", href: "#courses" },
    NavLink { name: "关于我们", href: "#about" },
    NavLink { name: "博客", href: "#blog" },
];

pub static SOCIAL_LINKS: [(&str, Icon); 4] = [
    ("微信", Icon::Message),
    ("微博", Icon::Book),
    ("抖音", Icon::Video),
    ("小红书", Icon::Camera),
];

pub static ABOUT_FEATURES: [&str; 4] = [
    "母语者真实对话",
    "情境化词汇习得",
    "模仿地道表达",
    "全面技能培养",
];

/// Count-up targets on the about section.
pub struct Stat {
    pub icon: Icon,
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub static ABOUT_STATS: [Stat; 3] = [
    Stat { icon: Icon::Book, target: 280, suffix: "+", label: "学习课程", color: "#ff6a6a" },
    Stat { icon: Icon::Users, target: 50, suffix: "k+", label: "满意学员", color: "#7b5cff" },
    Stat { icon: Icon::Award, target: 98, suffix: "%", label: "成功率", color: "#50c878" },
];

pub static HERO_STATS: [(&str, &str, &str); 3] = [
    ("280+", "精品课程", "#ff6a6a"),
    ("50k+", "满意学员", "#7b5cff"),
    ("98%", "成功率", "#4a90e2"),
];

/// schema.org ItemList for the course catalogue, embedded as JSON-LD.
pub fn course_structured_data(courses: &[Course]) -> Value {
    let items: Vec<Value> = courses
        .iter()
        .enumerate()
        .map(|(i, course)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": course,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": "精品课程",
        "itemListElement": items,
    })
}

pub fn blog_structured_data(posts: &[BlogPost]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Blog",
        "blogPost": posts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn british_tab_keeps_only_british_courses_in_order() {
        let british = courses_for(&COURSES, Accent::British);
        let ids: Vec<u32> = british.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn each_accent_gets_half_the_catalogue() {
        assert_eq!(courses_for(&COURSES, Accent::American).len(), 2);
        assert_eq!(courses_for(&COURSES, Accent::British).len(), 2);
    }

    #[test]
    fn ids_are_unique_within_each_list() {
        fn unique(ids: Vec<u32>) -> bool {
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            sorted.len() == ids.len()
        }
        assert!(unique(STEPS.iter().map(|s| s.id).collect()));
        assert!(unique(COURSES.iter().map(|c| c.id).collect()));
        assert!(unique(TESTIMONIALS.iter().map(|t| t.id).collect()));
        assert!(unique(BLOG_POSTS.iter().map(|p| p.id).collect()));
    }

    #[test]
    fn blog_splits_featured_from_the_rest() {
        assert_eq!(featured_post(&BLOG_POSTS).map(|p| p.id), Some(1));
        let rest: Vec<u32> = regular_posts(&BLOG_POSTS).iter().map(|p| p.id).collect();
        assert_eq!(rest, vec![2, 3]);
    }

    #[test]
    fn no_featured_post_is_none() {
        let posts: Vec<BlogPost> = BLOG_POSTS.iter().skip(1).cloned().collect();
        assert!(featured_post(&posts).is_none());
        assert_eq!(regular_posts(&posts).len(), 2);
    }

    #[test]
    fn step_numbers_are_zero_padded() {
        assert_eq!(STEPS[0].number(), "01");
        assert_eq!(STEPS[9].number(), "10");
    }

    #[test]
    fn course_json_ld_uses_camel_case_and_lowercase_accent() {
        let data = course_structured_data(&COURSES);
        let first = &data["itemListElement"][0];
        assert_eq!(first["position"], 1);
        assert_eq!(first["item"]["accent"], "american");
        assert_eq!(first["item"]["instructor"], "Sydney Serena");
        assert_eq!(data["itemListElement"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn blog_json_ld_lists_every_post() {
        let data = blog_structured_data(&BLOG_POSTS);
        assert_eq!(data["blogPost"][1]["readTime"], "8分钟");
        assert_eq!(data["blogPost"].as_array().map(Vec::len), Some(3));
    }
}
