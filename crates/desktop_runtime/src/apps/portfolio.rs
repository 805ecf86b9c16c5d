//! Static portfolio content rendered by the app views.

pub(super) struct Bio {
    pub name: &'static str,
    pub headline: &'static str,
    pub description: &'static str,
    pub avatar: &'static str,
    pub github: &'static str,
    pub twitter: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

pub(super) struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

pub(super) struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub(super) const BIO: Bio = Bio {
    name: "Masud Pilot",
    headline: "Chief Advisor at Xinva AI & Alpha Sender",
    description: "Web developer and technology advisor with 7+ years of experience. I guide the \
        technical direction of AI-driven platforms, work across the full stack from backend \
        architecture to frontend optimization, and contribute to blockchain research in the Web3 \
        space.",
    avatar: "https://masudpilotx.github.io/assets/images/profile.png",
    github: "https://github.com/masudpilotx",
    twitter: "https://twitter.com/masudpilot",
    linkedin: "https://linkedin.com/in/masudpilot",
    email: "mailto:masudpilotpro@gmail.com",
};

pub(super) const PROJECTS: &[Project] = &[
    Project {
        title: "Xinva AI",
        description: "Strategic direction for an AI-powered design generation platform that \
            creates professional designs for print-on-demand products.",
        tech: &["Generative AI", "React", "Node.js", "Machine Learning"],
        link: "https://xinva.ai",
    },
    Project {
        title: "Alpha Sender",
        description: "Technical guidance for an AI technology company processing email at very \
            large scale.",
        tech: &["AI", "Big Data", "Email Infrastructure"],
        link: "https://alphasender.com",
    },
    Project {
        title: "Mev & Flashbots",
        description: "Blockchain research focused on MEV (Maximal Extractable Value) and searcher \
            strategies.",
        tech: &["Blockchain", "Solidity", "Go", "Web3"],
        link: "#",
    },
    Project {
        title: "WP Themes",
        description: "Custom Genesis child themes with advanced customization options and \
            responsive design patterns.",
        tech: &["WordPress", "PHP", "Genesis Framework", "CSS3"],
        link: "#",
    },
];

pub(super) const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Chief Advisor",
        company: "Xinva AI",
        period: "Present",
        description: "Technical strategy and development guidance for an AI design platform.",
    },
    Experience {
        role: "Chief Advisor",
        company: "Alpha Sender",
        period: "Present",
        description: "Technical direction for large-scale AI email infrastructure.",
    },
    Experience {
        role: "Searcher",
        company: "Mev & Flashbots",
        period: "Past",
        description: "Blockchain research and development in the Web3 space.",
    },
    Experience {
        role: "Full Stack Developer",
        company: "Freelance / Various",
        period: "7+ Years",
        description: "Scalable, user-friendly web applications with modern technologies.",
    },
];

pub(super) const SKILLS: &[(&str, &[&str])] = &[
    (
        "AI & ML",
        &["Generative AI", "Model Integration", "Prompt Engineering"],
    ),
    (
        "Frontend",
        &["JavaScript", "React", "HTML5", "CSS3", "Responsive Design"],
    ),
    ("Backend", &["PHP", "MySQL", "Node.js", "REST APIs"]),
    (
        "DevOps",
        &["Cloud Deployment", "Database Optimization", "Security"],
    ),
    (
        "WordPress",
        &["Genesis Framework", "Theme Customization", "Plugin Development"],
    ),
];

/// Filter label that keeps every project.
pub(super) const ALL_PROJECTS_TAG: &str = "All";

/// Filter labels: [`ALL_PROJECTS_TAG`] then each distinct tech tag in first-seen order.
pub(super) fn project_tags(projects: &[Project]) -> Vec<&'static str> {
    let mut tags = vec![ALL_PROJECTS_TAG];
    for tech in projects.iter().flat_map(|project| project.tech.iter().copied()) {
        if !tags.contains(&tech) {
            tags.push(tech);
        }
    }
    tags
}

pub(super) fn filter_projects<'a>(projects: &'a [Project], tag: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| tag == ALL_PROJECTS_TAG || project.tech.iter().any(|tech| *tech == tag))
        .collect()
}

pub(super) const FAKE_DOWNLOADS: &[(&str, &str)] = &[
    ("TROJAN_HORSE_GENERIC.exe", "12.4 MB"),
    ("System32_Deleter.bat", "0.3 MB"),
    ("CryptoMiner_Hidden.exe", "48.1 MB"),
    ("Keylogger_Pro_Cracked.rar", "22.7 MB"),
    ("Not_A_Virus_Trust_Me.pdf.exe", "3.9 MB"),
    ("Webcam_Rat_Server.jar", "9.2 MB"),
];

pub(super) const TERMINAL_FORTUNES: &[&str] = &[
    "You type like you're wearing oven mitts.",
    "Error: User competence not found.",
    "Your keyboard called, it wants a divorce.",
    "404: Brain not found.",
    "Have you tried turning your brain off and on again?",
    "Calculating... Nope, still a bad idea.",
    "Keep typing, maybe eventually you'll make sense.",
    "I'm not saying you're slow, but sticky keys are faster.",
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &[Project] = &[
        Project {
            title: "Relay",
            description: "",
            tech: &["Rust", "Tokio"],
            link: "#",
        },
        Project {
            title: "Dashboard",
            description: "",
            tech: &["React", "Rust"],
            link: "#",
        },
        Project {
            title: "Blog",
            description: "",
            tech: &["PHP", "React"],
            link: "#",
        },
    ];

    fn titles(projects: Vec<&Project>) -> Vec<&'static str> {
        projects.iter().map(|project| project.title).collect()
    }

    #[test]
    fn tags_start_with_all_and_keep_first_seen_order() {
        assert_eq!(
            project_tags(SAMPLE),
            vec!["All", "Rust", "Tokio", "React", "PHP"]
        );
    }

    #[test]
    fn all_tag_keeps_every_project() {
        assert_eq!(titles(filter_projects(SAMPLE, "All")), vec!["Relay", "Dashboard", "Blog"]);
        assert_eq!(filter_projects(PROJECTS, ALL_PROJECTS_TAG).len(), PROJECTS.len());
    }

    #[test]
    fn tag_keeps_projects_using_that_tech() {
        assert_eq!(titles(filter_projects(SAMPLE, "React")), vec!["Dashboard", "Blog"]);
        assert_eq!(titles(filter_projects(PROJECTS, "Solidity")), vec!["Mev & Flashbots"]);
        assert!(filter_projects(SAMPLE, "Haskell").is_empty());
    }

    #[test]
    fn portfolio_tags_cover_every_tech_once() {
        let tags = project_tags(PROJECTS);
        let total: usize = PROJECTS.iter().map(|project| project.tech.len()).sum();

        assert_eq!(tags[0], ALL_PROJECTS_TAG);
        assert_eq!(tags.len(), total + 1);
        assert_eq!(&tags[1..3], &["Generative AI", "React"]);
    }
}
