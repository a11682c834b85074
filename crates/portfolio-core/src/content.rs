use smallvec::{smallvec, SmallVec};

/// A portfolio project shown on a carousel card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub tags: SmallVec<[&'static str; 4]>,
    pub link: &'static str,
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Heat Sense",
            kind: "Hackathon Project",
            description: "Developed for the GDG on Campus Solution Challenge. An innovative solution tackling environmental heat monitoring.",
            tags: smallvec!["IoT", "Web Dashboard"],
            link: "#",
        },
        Project {
            title: "AcadVault - SIH 2025",
            kind: "Hackathon Project",
            description: "Smart India Hackathon 2025 project. Cleared internal rounds with a robust academic resource management system.",
            tags: smallvec!["Full Stack", "Database"],
            link: "https://acad-vault-fe.vercel.app/",
        },
        Project {
            title: "Portfolio Website",
            kind: "Personal Project",
            description: "A digital showcase of my work, methodology, and technical journey. You are currently viewing it!",
            tags: smallvec!["React", "UI/UX"],
            link: "https://yashraj-rastogi.vercel.app/",
        },
    ]
}
