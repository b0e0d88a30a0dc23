//! Build-time content for the page sections. Each record carries a `key`
//! that is unique within its list and used when rendering.

pub const OWNER_NAME: &str = "Vivek Vardhan";
pub const OWNER_EMAIL: &str = "anapalavivekvardhan5654@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        name: "Home",
        href: "#home",
    },
    NavItem {
        name: "About",
        href: "#about",
    },
    NavItem {
        name: "Projects",
        href: "#projects",
    },
    NavItem {
        name: "Skills",
        href: "#skills",
    },
    NavItem {
        name: "Contact",
        href: "#contact",
    },
];

/// Element ids of the page sections, top to bottom.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "projects", "skills", "contact"];

pub const HERO_ROLES: [&str; 4] = [
    "Full Stack Developer",
    "MERN Stack Developer",
    "UI/UX Designer",
    "Problem Solver",
];

/// Milliseconds each hero role stays on screen.
pub const HERO_ROLE_INTERVAL_MS: u64 = 3_000;

pub fn next_role(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub key: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        key: "mern",
        icon: "</>",
        title: "MERN Stack Expert",
        description: "Specialized in building full-stack applications with MongoDB, Express.js, React.js, and Node.js.",
    },
    Feature {
        key: "design",
        icon: "🎨",
        title: "Creative Designer",
        description: "Crafting visually stunning interfaces with modern design principles and user-centric approach.",
    },
    Feature {
        key: "problems",
        icon: "💡",
        title: "Problem Solver",
        description: "Passionate about turning complex challenges into elegant, efficient, and scalable solutions.",
    },
    Feature {
        key: "team",
        icon: "👥",
        title: "Team Player",
        description: "Collaborative developer who thrives in team environments and delivers exceptional results.",
    },
];

pub const ABOUT_TAGS: [&str; 4] = [
    "Full Stack Developer",
    "MERN Specialist",
    "UI/UX Enthusiast",
    "Problem Solver",
];

pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=600&h=600&fit=crop&crop=face";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "My journey in web development has been driven by curiosity and a passion for solving real-world problems. From weather applications that help users plan their day to social platforms that connect minds, I've built projects that make a difference.",
    "What sets me apart is my ability to blend technical excellence with creative design, ensuring every project delivers both outstanding performance and beautiful user experiences. I'm constantly learning, adapting, and pushing the boundaries of what's possible in web development.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub repo: &'static str,
    pub live: &'static str,
    /// Tailwind gradient stops shared by the overlay and the chips.
    pub gradient: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        key: "weather",
        title: "Weather Application",
        description: "A comprehensive weather application built with React.js and Tailwind CSS. Features real-time weather data and 5-day weather prediction using OpenWeatherAPI with beautiful UI and responsive design.",
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=600&h=400&fit=crop",
        technologies: &["React.js", "Tailwind CSS", "OpenWeatherAPI", "JavaScript"],
        repo: "#",
        live: "#",
        gradient: "from-blue-400 to-cyan-400",
    },
    Project {
        key: "think-board",
        title: "Think Board",
        description: "A thought sharing platform where users can express their ideas by creating posts with titles and descriptions. Built with MERN stack and features secure data storage with MongoDB.",
        image: "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7?w=600&h=400&fit=crop",
        technologies: &["React.js", "JavaScript", "Express.js", "Node.js", "MongoDB"],
        repo: "#",
        live: "#",
        gradient: "from-purple-400 to-pink-400",
    },
    Project {
        key: "chat",
        title: "Chatting Application",
        description: "A real-time chat application built with MERN stack. Features include image sharing with Cloudinary storage, real-time messaging using Socket.io, and user authentication.",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=600&h=400&fit=crop",
        technologies: &["MERN Stack", "Socket.io", "Cloudinary", "Real-time Chat"],
        repo: "#",
        live: "#",
        gradient: "from-green-400 to-emerald-400",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "AI Tools",
        skills: &[
            Skill {
                name: "ChatGPT",
                icon: "🤖",
            },
            Skill {
                name: "GitHub Copilot",
                icon: "💻",
            },
            Skill {
                name: "Claude AI",
                icon: "🧠",
            },
            Skill {
                name: "Midjourney",
                icon: "🎨",
            },
            Skill {
                name: "Gemini",
                icon: "💎",
            },
            Skill {
                name: "Figma AI",
                icon: "🎯",
            },
        ],
    },
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill {
                name: "React JS",
                icon: "⚛️",
            },
            Skill {
                name: "JavaScript",
                icon: "🟨",
            },
            Skill {
                name: "HTML",
                icon: "🟧",
            },
            Skill {
                name: "CSS",
                icon: "🔵",
            },
            Skill {
                name: "Tailwind CSS",
                icon: "💨",
            },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill {
                name: "Node JS",
                icon: "🟢",
            },
            Skill {
                name: "Express JS",
                icon: "⚡",
            },
            Skill {
                name: "MongoDB",
                icon: "🍃",
            },
        ],
    },
    SkillCategory {
        title: "Design & Others",
        skills: &[
            Skill {
                name: "UI/UX Design",
                icon: "🎨",
            },
            Skill {
                name: "Bootstrap",
                icon: "🅱️",
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "Email",
        icon: "✉",
        value: OWNER_EMAIL,
        href: Some("mailto:anapalavivekvardhan5654@gmail.com"),
    },
    ContactChannel {
        label: "Phone",
        icon: "☎",
        value: "+91 8317584188",
        href: Some("tel:+918317584188"),
    },
    ContactChannel {
        label: "Location",
        icon: "⌖",
        value: "India",
        href: None,
    },
];
