//! Static copy for the header, palette and the about/contact sections.

use crate::Section;

pub const SITE_TITLE: &str = "Benjamin Hitov's Gauntlet AI Portfolio";
pub const SITE_DESCRIPTION: &str =
    "Portfolio of AI and machine learning projects from Gauntlet AI bootcamp";
pub const HEADER_HINT: &str = "/projects for portfolio, /about for background";
pub const HEADER_WORKDIR_LABEL: &str = "bootcamp:";
pub const HEADER_WORKDIR: &str = "/Users/developer/gauntlet-ai/portfolio";

pub const PROJECTS_INTRO: &str = "Projects from Gauntlet AI bootcamp:";
pub const BACK_TO_PROJECTS: &str = "Back to projects";
pub const ABOUT_INTRO: &str = "Background and journey:";
pub const CONTACT_INTRO: &str = "Contact information and links:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub section: Section,
    pub description: &'static str,
}

/// Commands listed under the input bar. `/contact` stays reachable by URL
/// but is not advertised.
pub const PALETTE: &[PaletteEntry] = &[
    PaletteEntry {
        section: Section::Projects,
        description: "Gauntlet AI projects",
    },
    PaletteEntry {
        section: Section::About,
        description: "About me",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutBody {
    Text(&'static str),
    Skills(&'static [SkillGroup]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutBlock {
    pub icon: &'static str,
    pub heading: &'static str,
    pub body: AboutBody,
}

pub const ABOUT_BLOCKS: &[AboutBlock] = &[
    AboutBlock {
        icon: "🎓",
        heading: "Gauntlet AI Bootcamp Graduate",
        body: AboutBody::Text(
            "Completed an intensive AI and machine learning bootcamp focused on practical \
             applications and real-world projects. Gained hands-on experience with modern AI \
             frameworks, neural networks, and production deployment.",
        ),
    },
    AboutBlock {
        icon: "🚀",
        heading: "Skills & Expertise",
        body: AboutBody::Skills(&[
            SkillGroup {
                title: "AI/ML",
                items: &[
                    "Machine Learning",
                    "Neural Networks",
                    "Natural Language Processing",
                    "Computer Vision",
                ],
            },
            SkillGroup {
                title: "Development",
                items: &[
                    "Python, JavaScript",
                    "React, Node.js",
                    "TensorFlow, PyTorch",
                    "API Development",
                ],
            },
        ]),
    },
    AboutBlock {
        icon: "💡",
        heading: "Passion & Goals",
        body: AboutBody::Text(
            "Passionate about building AI solutions that solve real-world problems. Currently \
             exploring opportunities in AI product development and looking to contribute to \
             innovative projects that push the boundaries of what's possible with artificial \
             intelligence.",
        ),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub text: &'static str,
    pub href: &'static str,
    /// Opens in a new tab.
    pub external: bool,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: "📧",
        label: "Email",
        text: "your.email@example.com",
        href: "mailto:your.email@example.com",
        external: false,
    },
    ContactLink {
        icon: "🐙",
        label: "GitHub",
        text: "github.com/yourusername",
        href: "https://github.com/yourusername",
        external: true,
    },
    ContactLink {
        icon: "💼",
        label: "LinkedIn",
        text: "linkedin.com/in/yourprofile",
        href: "https://linkedin.com/in/yourprofile",
        external: true,
    },
];

pub const CONTACT_NOTE_HEADING: &str = "🤝 Open to Opportunities";
pub const CONTACT_NOTE: &str = "I'm actively seeking opportunities in AI/ML engineering, \
     product development, and innovative tech projects. Feel free to reach out for \
     collaborations, job opportunities, or just to connect!";
