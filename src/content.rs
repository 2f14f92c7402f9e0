//! Static page content. Everything here is read-only and lives for the whole program.

pub const OWNER_FIRST_NAME: &str = "Yash";
pub const OWNER_LAST_NAME: &str = "Kumar";
pub const OWNER_HANDLE: &str = "@yashkumar0001";
pub const OWNER_LOCATION: &str = "BIT Mesra, Ranchi, India";
pub const OWNER_EMAIL: &str = "yash@example.com";
pub const RESUME_PATH: &str = "/YashResume.pdf";
pub const PROFILE_PHOTO_PATH: &str = "/profile-photo.png";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/yashkumar0001";
pub const GITHUB_URL: &str = "https://github.com";

pub static ROLES: [&str; 3] = [
    "Full Stack Developer",
    "MERN Stack Enthusiast",
    "Building Real-World Web Apps",
];

/// In-page anchors, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

#[derive(Debug, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "🎓",
        title: "MCA Student",
        description: "Currently pursuing MCA at BIT Mesra, one of India's premier technical institutions.",
    },
    Highlight {
        icon: "💼",
        title: "Internship Experience",
        description: "Web Development Intern at Omnisciento IT Services, building real-world applications.",
    },
    Highlight {
        icon: "</>",
        title: "Full Stack Focus",
        description: "Specialized in MERN stack, creating end-to-end solutions for complex problems.",
    },
];

pub static ABOUT_PARAGRAPHS: [&str; 2] = [
    "What drives me is the satisfaction of solving complex problems and watching users interact \
     with applications I've built. From designing intuitive user interfaces to architecting \
     robust backend systems, I enjoy every aspect of the development process.",
    "When I'm not coding, you'll find me exploring new technologies, contributing to open-source \
     projects, or sharing knowledge with the developer community.",
];

#[derive(Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
}

#[derive(Debug, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Languages",
        skills: &[
            Skill { name: "C++", level: 80 },
            Skill { name: "Java", level: 75 },
            Skill { name: "JavaScript", level: 90 },
            Skill { name: "TypeScript", level: 70 },
        ],
    },
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "HTML", level: 95 },
            Skill { name: "CSS", level: 90 },
            Skill { name: "React", level: 85 },
            Skill { name: "Bootstrap", level: 80 },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 85 },
            Skill { name: "Express.js", level: 80 },
            Skill { name: "REST APIs", level: 85 },
        ],
    },
    SkillCategory {
        title: "Database",
        skills: &[
            Skill { name: "MongoDB", level: 85 },
            Skill { name: "SQL", level: 75 },
            Skill { name: "MySQL", level: 70 },
        ],
    },
    SkillCategory {
        title: "Tools & Others",
        skills: &[
            Skill { name: "Git", level: 85 },
            Skill { name: "GitHub", level: 90 },
            Skill { name: "MUI", level: 80 },
            Skill { name: "VS Code", level: 95 },
        ],
    },
];

#[derive(Debug, PartialEq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub bullets: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
}

pub static EXPERIENCES: [Experience; 1] = [Experience {
    title: "Web Development Intern",
    company: "Omnisciento IT Services",
    period: "2024",
    location: "Remote",
    bullets: &[
        "Developed and maintained full-stack web applications using the MERN stack",
        "Collaborated with cross-functional teams to deliver client projects on time",
        "Implemented responsive UI components using React and Material UI",
        "Optimized application performance and improved user experience",
    ],
    tech_stack: &["React", "Node.js", "MongoDB", "Express.js", "MUI"],
}];

#[derive(Debug, PartialEq)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static ACHIEVEMENTS: [Achievement; 1] = [Achievement {
    icon: "🏆",
    title: "Tata Steel Adventure Camp",
    description: "Demonstrated leadership and teamwork skills in challenging outdoor activities. \
                  Developed problem-solving abilities through adventure-based learning experiences.",
}];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub features: &'static [&'static str],
    pub live_url: &'static str,
    pub code_url: &'static str,
    /// Gradient class pair shown behind the card on hover.
    pub accent: &'static str,
}

pub static PROJECTS: [Project; 2] = [
    Project {
        title: "Law Firm ERP Portal",
        emoji: "🏛️",
        description: "A comprehensive enterprise resource planning system for law firms, featuring \
                      case management, client tracking, document handling, and team collaboration tools.",
        long_description: "Built a full-featured ERP system tailored for law firms. The platform \
                           enables efficient case lifecycle management, secure document storage, \
                           client communication tracking, and automated billing. Implemented \
                           role-based access control and real-time notifications.",
        tech_stack: &["React", "Node.js", "MongoDB", "Express.js", "MUI", "JWT"],
        features: &[
            "Case tracking & management",
            "Client management portal",
            "Document handling & storage",
            "Role-based access control",
            "Real-time notifications",
        ],
        live_url: "#",
        code_url: "#",
        accent: "accent-blue",
    },
    Project {
        title: "Travel Package Booking",
        emoji: "✈️",
        description: "A modern travel booking platform with advanced search, filtering capabilities, \
                      responsive design, and seamless payment integration.",
        long_description: "Developed a user-friendly travel booking website that allows users to \
                           explore, compare, and book travel packages. Features include advanced \
                           filtering, wishlist functionality, and a streamlined checkout process.",
        tech_stack: &["React", "Node.js", "MongoDB", "Express.js", "Stripe"],
        features: &[
            "Advanced search & filters",
            "Package comparison",
            "Responsive design",
            "Payment integration",
            "User reviews & ratings",
        ],
        live_url: "#",
        code_url: "#",
        accent: "accent-emerald",
    },
];

#[derive(Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "LinkedIn",
        href: LINKEDIN_URL,
        glyph: "in",
    },
    SocialLink {
        name: "GitHub",
        href: GITHUB_URL,
        glyph: "gh",
    },
    SocialLink {
        name: "Email",
        href: "mailto:yash@example.com",
        glyph: "@",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique_and_in_document_order() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["about", "skills", "experience", "projects", "contact"]);
        assert_eq!(SectionId::Projects.href(), "#projects");
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILL_CATEGORIES
            .iter()
            .flat_map(|category| category.skills)
            .all(|skill| skill.level <= 100));
    }
}
