// static site content: the project gallery and the about section

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image_url: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    // percentage, 0..=100
    pub level: u8,
}

static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "AI Creative Assistant",
        summary: "A generative design tool that helps designers sketch concepts and assets quickly.",
        description: "A design companion built on generative models. Designers describe a mood or a brief and get back concept boards, palette suggestions and starter assets they can refine, cutting the blank-canvas phase of a project from days to minutes.",
        technologies: &["React", "TypeScript", "Tailwind CSS", "OpenAI API"],
        image_url: "https://picsum.photos/seed/ai1/800/600",
        link: "#project1",
    },
    Project {
        id: 2,
        title: "Portfolio Showcase Platform",
        summary: "A portfolio platform for creative professionals with assisted content curation.",
        description: "A hosted portfolio builder for illustrators and photographers. It suggests ordering and captions for uploaded work and recommends related pieces to visitors, while keeping the creator in control of every published page.",
        technologies: &["Next.js", "TypeScript", "Framer Motion", "Supabase"],
        image_url: "https://picsum.photos/seed/portfolio/800/600",
        link: "#project2",
    },
    Project {
        id: 3,
        title: "Responsive Storefront",
        summary: "A modern e-commerce site focused on smooth browsing and rich product pages.",
        description: "An online store with a fast catalogue, faceted search and product pages built around large imagery. Cart and checkout state survive reloads, and the whole layout adapts from phones to wide desktop screens.",
        technologies: &["React", "Redux", "Tailwind CSS", "Firebase"],
        image_url: "https://picsum.photos/seed/ecommerce/800/600",
        link: "#project3",
    },
    Project {
        id: 4,
        title: "Data Visualization Dashboard",
        summary: "Real-time monitoring and interactive charts for business users.",
        description: "A dashboard that streams operational metrics into interactive charts. Users can pin views, drill from aggregates down to individual records and export snapshots for reports.",
        technologies: &["React", "D3.js", "TypeScript", "Node.js"],
        image_url: "https://picsum.photos/seed/dashboard/800/600",
        link: "#project4",
    },
    Project {
        id: 5,
        title: "Social App Interface",
        summary: "Mobile interface design for a social network, centred on interaction details.",
        description: "A mobile client for a small social network. The work covered navigation structure, feed and profile layouts and the micro-interactions around posting and reacting.",
        technologies: &["React Native", "TypeScript", "Redux", "React Navigation"],
        image_url: "https://picsum.photos/seed/social/800/600",
        link: "#project5",
    },
    Project {
        id: 6,
        title: "Generative Content Studio",
        summary: "One place to draft text, images and short video with generative models.",
        description: "A studio that chains text, image and video generation into reusable pipelines. Teams save prompts as templates, review outputs side by side and publish the chosen variant straight to their channels.",
        technologies: &["React", "TypeScript", "AWS", "TensorFlow.js"],
        image_url: "https://picsum.photos/seed/content/800/600",
        link: "#project6",
    },
];

static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2022 - present",
        title: "Senior Generative Design Lead",
        description: "Applying generative models to creative design and building assisted design tooling.",
    },
    TimelineEntry {
        period: "2020 - 2022",
        title: "Front-end Engineer",
        description: "UI/UX and front-end development for web applications with React, TypeScript and Tailwind CSS.",
    },
    TimelineEntry {
        period: "2018 - 2020",
        title: "UI/UX Designer",
        description: "Interfaces and interaction design for mobile apps and websites.",
    },
];

static SKILLS: &[Skill] = &[
    Skill { name: "React", level: 90 },
    Skill { name: "TypeScript", level: 85 },
    Skill { name: "UI/UX Design", level: 88 },
    Skill { name: "Generative AI", level: 92 },
    Skill { name: "Tailwind CSS", level: 87 },
    Skill { name: "Rust", level: 83 },
];

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

pub fn project_ids() -> impl Iterator<Item = u32> {
    PROJECTS.iter().map(|project| project.id)
}

pub fn timeline() -> &'static [TimelineEntry] {
    TIMELINE
}

pub fn skills() -> &'static [Skill] {
    SKILLS
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn project_ids_are_unique_and_positive() {
        let ids: Vec<u32> = project_ids().collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();

        assert_eq!(ids.len(), unique.len());
        assert!(ids.iter().all(|id| *id > 0));
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(project_by_id(4).map(|p| p.title), Some("Data Visualization Dashboard"));
        assert_eq!(project_by_id(0), None);
        assert_eq!(project_by_id(99), None);
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(skills().iter().all(|skill| skill.level <= 100));
    }
}
