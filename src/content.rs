//! Static portfolio content.
//!
//! Everything the page displays lives in [`PORTFOLIO`]. Slices keep authoring
//! order, which is also display order.

/// Number of tech labels a project card shows before collapsing the rest
/// into a `+N` tag.
pub const CARD_TECH_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub name: &'static str,
    pub title: &'static str,
    pub headline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    /// LinkedIn profile handle (the part after `/in/`)
    pub linkedin: &'static str,
    /// GitHub username
    pub github: &'static str,
}

impl Identity {
    /// Monogram shown in the header, e.g. "RT" for "Rishabh Tyagi".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub label: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    /// Display string only, never parsed
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: &'static str,
    pub role: &'static str,
    pub short_desc: &'static str,
    pub tech_stack: &'static [&'static str],
    pub full_description: &'static str,
    pub key_metrics: &'static [&'static str],
}

/// What a project card shows of the tech stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechPreview {
    pub shown: &'static [&'static str],
    /// Count of labels hidden behind the `+N` tag
    pub overflow: Option<usize>,
}

impl ProjectEntry {
    pub fn tech_preview(&self) -> TechPreview {
        let stack = self.tech_stack;
        if stack.len() > CARD_TECH_LIMIT {
            TechPreview {
                shown: &stack[..CARD_TECH_LIMIT],
                overflow: Some(stack.len() - CARD_TECH_LIMIT),
            }
        } else {
            TechPreview {
                shown: stack,
                overflow: None,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portfolio {
    pub identity: Identity,
    /// Hero paragraph under the headline
    pub summary: &'static str,
    pub about: &'static [&'static str],
    pub skills: &'static [SkillCategory],
    pub experience: &'static [ExperienceEntry],
    pub projects: &'static [ProjectEntry],
    pub contact_blurb: &'static str,
    /// Year printed in the footer copyright notice
    pub copyright_year: u16,
    pub footer_tagline: &'static str,
}

impl Portfolio {
    pub fn project(&self, id: u32) -> Option<&'static ProjectEntry> {
        self.projects.iter().find(|p| p.id == id)
    }
}

pub static PORTFOLIO: Portfolio = Portfolio {
    identity: Identity {
        name: "Rishabh Tyagi",
        title: "Backend Engineer & Full-Stack Developer",
        headline: "Building scalable systems, distributed architectures, and APIs that perform",
        email: "rishabh.tyagi2311@gmail.com",
        phone: "9650397782",
        linkedin: "rishabh-tyagi-486379245",
        github: "rishabhtyagi2311",
    },
    summary: "I craft scalable backend systems and distributed architectures. With expertise in Node.js, TypeScript, and cloud infrastructure, I design APIs that developers love and systems that scale effortlessly. I'm equally comfortable diving into full-stack work when the product demands it.",
    about: &[
        "I specialize in building backend systems that scale. Over the past year, I've worked on real-time analytics platforms, distributed job queues, and complex data pipelines that process millions of events.",
        "My philosophy: write code that's maintainable, systems that don't wake you up at 3 AM, and APIs that make developers smile. I obsess over performance, reliability, and clarity.",
        "When I'm not coding, I'm exploring distributed systems patterns, contributing to open source, and mentoring junior developers. I believe in the power of clear communication and pragmatic solutions.",
    ],
    skills: &[
        SkillCategory {
            label: "Backend",
            skills: &[
                "Node.js",
                "TypeScript",
                "Express",
                "API Design",
                "Microservices",
                "RabbitMQ",
            ],
        },
        SkillCategory {
            label: "Frontend",
            skills: &["React", "React Native", "Angular"],
        },
        SkillCategory {
            label: "Data & Databases",
            skills: &["Prisma ORM", "PostgreSQL", "Data Pipelines"],
        },
        SkillCategory {
            label: "Cloud & DevOps",
            skills: &["AWS", "Docker", "CI/CD", "OAuth"],
        },
    ],
    experience: &[
        ExperienceEntry {
            company: "Motherson Technology Services",
            title: "Associate Software Engineer",
            location: "Noida",
            period: "Jul 2024 – Feb 2025",
            bullets: &[
                "Built Angular components for IoT systems handling real-time data visualization",
                "Designed data pipelines for monitoring dashboards across manufacturing deployments",
                "Implemented reusable UI modules deployed across multiple customer instances",
            ],
        },
        ExperienceEntry {
            company: "Freelance",
            title: "Full-Stack Developer - Sports Platform",
            location: "Remote",
            period: "Mar 2025 – Present",
            bullets: &[
                "Architected React Native dual-app with role-based access for multi-user ecosystems",
                "Built live-scoring engine with real-time analytics and tournament management",
                "Integrated secure payments enabling reliable partner payouts at scale",
            ],
        },
    ],
    projects: &[
        ProjectEntry {
            id: 1,
            title: "AI Animation Video Generator",
            role: "Backend Engineer",
            short_desc: "LLM-powered text-to-video pipeline with distributed Python workers and FFmpeg rendering",
            tech_stack: &["Node.js", "TypeScript", "Python", "RabbitMQ", "FFmpeg", "React"],
            full_description: "Automated educational video generation from text prompts.

**Problem**: Manual animation creation was time-consuming and expensive.

**Solution**:
• LLM-powered scene script generation with precise prompt engineering
• Distributed frame rendering across Python workers running Manim
• RabbitMQ job queues for reliable cross-language communication
• React drag-drop editor for post-generation customization
• Intelligent caching reducing redundant computation

**Impact**: 60% faster rendering through parallelization. Enabled non-technical users to create professional animations.",
            key_metrics: &[
                "60% reduction in render time",
                "100+ concurrent rendering jobs",
                "40% compute savings on selective regeneration",
            ],
        },
        ProjectEntry {
            id: 2,
            title: "DocSync - AI Documentation Tool",
            role: "Backend Architect",
            short_desc: "Event-driven microservice converting code and schemas into searchable API docs automatically",
            tech_stack: &["Node.js", "TypeScript", "RabbitMQ", "GitHub API", "React"],
            full_description: "Intelligent documentation system that keeps API docs synchronized with code.

**Problem**: API documentation becomes stale. Developers waste time maintaining docs or let them rot.

**Solution**:
• GitHub OAuth integration with webhook monitoring
• Event-driven microservice pipeline for reliable updates
• AI-powered schema-to-doc generation
• Change-detection logic surfacing meaningful diffs
• Collaborative editor with real-time syncing

**Impact**: Eliminated 80% of manual documentation work. Docs stay current with code.",
            key_metrics: &[
                "80% reduction in manual effort",
                "Sub-second webhook latency",
                "500+ API endpoints managed",
            ],
        },
        ProjectEntry {
            id: 3,
            title: "Fitness Analytics Platform",
            role: "Backend Architect",
            short_desc: "Multi-source fitness data aggregation with normalization pipeline and AI-powered insights",
            tech_stack: &["Node.js", "TypeScript", "OAuth", "WebSocket", "React"],
            full_description: "Unified platform aggregating data from multiple fitness APIs.

**Problem**: User fitness data scattered across platforms with no unified view.

**Solution**:
• OAuth integrations with 8+ fitness providers
• Normalization pipeline unifying metrics and timezones
• Intelligent materialization layer cutting API calls by 70%
• AI analytics engine generating personalized insights
• WebSocket dashboards streaming live analysis

**Impact**: Users gained complete fitness visibility. Coaches tracked athletes holistically.",
            key_metrics: &[
                "70% API call reduction",
                "<2s latency over WebSocket",
                "5+ fitness platforms per user",
            ],
        },
    ],
    contact_blurb: "I'm always interested in discussing new opportunities, interesting problems, and collaborations. Let's connect.",
    copyright_year: 2025,
    footer_tagline: "Crafted with attention to detail.",
};
