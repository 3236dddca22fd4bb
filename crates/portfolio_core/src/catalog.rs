use crate::slug::slugify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in progress",
        }
    }
}

/// One portfolio entry. Records are baked into the binary and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub status: ProjectStatus,
    pub description: &'static str,
    /// Display order is meaningful.
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub video_url: Option<&'static str>,
    /// Relative to the deployment root; see [`crate::asset_path`].
    pub image: Option<&'static str>,
    pub extended_description: Option<&'static str>,
    pub key_features: Option<&'static [&'static str]>,
    pub technical_details: Option<&'static str>,
    pub unique_aspect: Option<&'static str>,
}

impl ProjectRecord {
    pub fn slug(&self) -> String {
        slugify(self.name)
    }

    /// Terminal command naming this project, e.g. `/projects robovibe`.
    pub fn command(&self) -> String {
        format!("/projects {}", self.slug())
    }
}

/// Read-only view over an ordered table of projects.
///
/// Catalog order is display order. Ids are assumed unique; nothing checks it
/// at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    records: &'static [ProjectRecord],
}

impl Catalog {
    pub const fn new(records: &'static [ProjectRecord]) -> Self {
        Self { records }
    }

    /// The catalog shipped with the site.
    pub const fn builtin() -> Self {
        Self::new(PROJECTS)
    }

    pub fn all(&self) -> &'static [ProjectRecord] {
        self.records
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'static ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Zero-based position of `id`, used for "1.", "2." numbering.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Resolves a human-typed slug back to a record (first match wins).
    pub fn find_by_slug(&self, slug: &str) -> Option<&'static ProjectRecord> {
        self.records.iter().find(|record| record.slug() == slug)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "0",
        name: "RoboVibe",
        status: ProjectStatus::Completed,
        description: "A browser-based, real-time multiplayer game hub where players program their in-game units using natural language prompts.",
        technologies: &["React", "Express.js", "PostgreSQL", "OpenAI API", "WebSocket", "TypeScript"],
        github_url: Some("https://github.com/bhitov/robovibe"),
        live_url: Some("https://robovibe.raspyaspie.com"),
        video_url: None,
        image: Some("/screenshots/robovibe.png"),
        extended_description: Some("RoboVibe transforms natural language descriptions into executable bot behavior, allowing players to update code mid-match and dynamically evolve game strategy. The platform supports 2-16 player matches in team or free-for-all modes."),
        key_features: Some(&[
            "Real-time AI coding with multiple AI model options",
            "Token-based economy system",
            "Multiple game modes including Orb Collect and Tank Combat",
            "Guest mode for instant play",
            "Server-authoritative WebSocket communication",
            "Dynamic bot behavior updates mid-match",
        ]),
        technical_details: Some("Built as a TypeScript monorepo using Turborepo and pnpm workspaces. Features a server-authoritative game engine with Express.js backend, Drizzle ORM with PostgreSQL, and React frontend with Tailwind CSS. Integrates OpenAI API with custom prompt templates for natural language programming."),
        unique_aspect: Some("The unique ability to program game units using natural language, making coding accessible to non-programmers while providing depth for experienced developers."),
    },
    ProjectRecord {
        id: "1",
        name: "Consenstris",
        status: ProjectStatus::Completed,
        description: "A multiplayer, crowd-controlled browser-based Tetris game where all visitors watch the same single-player game and collectively vote on piece movements.",
        technologies: &["JavaScript", "Node.js", "WebSocket", "Heroku"],
        github_url: Some("https://github.com/bhitov/consenstris"),
        live_url: Some("https://consenstris-2b45921068e5.herokuapp.com/"),
        video_url: None,
        image: Some("/screenshots/consenstris.png"),
        extended_description: Some("Consenstris reinvents the classic Tetris experience as a social experiment in collective decision-making. All connected players view the same game instance and vote on how to move each falling piece, creating a unique collaborative gaming experience."),
        key_features: Some(&[
            "NES-accurate Tetris gameplay",
            "Real-time multiplayer voting system",
            "Live vote display and activity feed",
            "High score tracking",
            "20-second cooldown after game over",
            "Keyboard controls (Arrow keys + Space)",
        ]),
        technical_details: Some("Developed with vanilla JavaScript for broad compatibility, deployed on Heroku for scalability. Features WebSocket-based real-time communication for instantaneous vote synchronization across all connected clients."),
        unique_aspect: Some("Transforms the solitary experience of Tetris into a social experiment where collective intelligence (or chaos) determines gameplay outcomes."),
    },
    ProjectRecord {
        id: "2",
        name: "SongPad",
        status: ProjectStatus::Completed,
        description: "A Next.js web application for creative songwriting and lyrics management, built as part of the Gauntlet AI bootcamp.",
        technologies: &["Next.js", "TypeScript", "React", "Vercel"],
        github_url: Some("https://github.com/bhitov/wordwise-songpad"),
        live_url: None,
        video_url: None,
        image: Some("/screenshots/songpad.jpeg"),
        extended_description: Some("SongPad provides a modern web interface for songwriters to create, edit, and organize their lyrics and musical ideas. Built with Next.js for optimal performance and developer experience."),
        key_features: Some(&[
            "Modern, responsive web interface",
            "TypeScript for type safety",
            "Optimized for Vercel deployment",
            "Fast development workflow",
        ]),
        technical_details: Some("Built with Next.js and TypeScript, utilizing modern React patterns and Vercel's edge network for optimal performance. Implements the Geist font family for enhanced readability."),
        unique_aspect: None,
    },
    ProjectRecord {
        id: "3",
        name: "BondSnap",
        status: ProjectStatus::Completed,
        description: "A relationship-focused messaging app combining Snapchat-style ephemeral snaps with AI-powered relationship coaching.",
        technologies: &["React Native", "Expo", "Firebase", "OpenAI", "Pinecone"],
        github_url: Some("https://github.com/bhitov/snapconnect"),
        live_url: None,
        video_url: None,
        image: Some("/screenshots/bondsnap.jpeg"),
        extended_description: Some("BondSnap revolutionizes relationship communication by providing real-time AI analysis of conversation dynamics. The app combines ephemeral messaging with persistent coaching insights to help couples and friends improve their communication patterns."),
        key_features: Some(&[
            "Private 'coach chat' with AI relationship insights",
            "GPT-4 analysis of conversation dynamics",
            "Measures 5:1 positivity ratio in communications",
            "Detects communication 'Four Horsemen' patterns",
            "Identifies relationship 'Love-Map' gaps",
            "Supports both romantic and platonic relationships",
        ]),
        technical_details: Some("Built with React Native and Expo for cross-platform mobile deployment. Uses Firebase Realtime Database and Cloud Functions for backend, OpenAI for conversational analysis, and Pinecone vector database for semantic search capabilities."),
        unique_aspect: Some("The only messaging app with an AI relationship coach that reviews messages and provides real-time, plain-English advice to improve communication patterns."),
    },
    ProjectRecord {
        id: "4",
        name: "Shortcut Finder",
        status: ProjectStatus::InProgress,
        description: "A macOS menu bar app that records screen activity and uses AI to suggest keyboard shortcuts for clicked UI elements.",
        technologies: &["Python", "OpenAI API", "macOS APIs", "uv", "just"],
        github_url: Some("https://github.com/bhitov/shortcut-finder"),
        live_url: None,
        video_url: None,
        image: Some("/screenshots/shortcut-finder.jpeg"),
        extended_description: Some("Shortcut Finder solves the frustration of repeatedly performing actions without knowing their keyboard shortcuts. It watches your screen activity and intelligently suggests the shortcuts you could have used instead."),
        key_features: Some(&[
            "Start/stop recording with Cmd+Ctrl+S",
            "Automatic UI element detection",
            "AI-powered shortcut recommendations",
            "Results in 'App - action - shortcut' format",
            "Mock OpenAI mode for testing",
            "Native macOS menu bar integration",
        ]),
        technical_details: Some("Built with Python using modern dependency management (uv) and task automation (just). Integrates with macOS screen recording APIs and OpenAI for intelligent shortcut detection. Requires screen recording permissions."),
        unique_aspect: Some("Uses AI to automatically learn and suggest keyboard shortcuts based on your actual usage patterns, eliminating the need to manually memorize shortcuts."),
    },
    ProjectRecord {
        id: "5",
        name: "EmailSmart",
        status: ProjectStatus::InProgress,
        description: "An AI-powered email assistant that helps compose, manage, and optimize email communications.",
        technologies: &["React", "Node.js", "AI/ML", "Natural Language Processing"],
        github_url: None,
        live_url: None,
        video_url: None,
        image: Some("/placeholder.svg?height=200&width=300"),
        extended_description: Some("EmailSmart leverages advanced AI to help users write more effective emails, manage their inbox intelligently, and improve communication productivity."),
        key_features: None,
        technical_details: None,
        unique_aspect: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        for (i, a) in catalog.all().iter().enumerate() {
            for b in &catalog.all()[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn slug_lookup_round_trips_names() {
        let catalog = Catalog::builtin();
        let record = catalog.find_by_slug("shortcut-finder").unwrap();
        assert_eq!(record.name, "Shortcut Finder");
        assert!(catalog.find_by_slug("Shortcut Finder").is_none());
    }

    #[test]
    fn status_labels_match_badges() {
        assert_eq!(ProjectStatus::Completed.label(), "completed");
        assert_eq!(ProjectStatus::InProgress.label(), "in progress");
    }
}
