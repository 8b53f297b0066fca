use thiserror::Error;

/// Anything that carries a grouping key. Implemented by [`Skill`]; the key is
/// an open string, so a new category value simply becomes a new group.
pub trait Categorized {
    fn category(&self) -> &str;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("No portfolio entry with id '{0}'")]
    NotFound(String),
    #[error("'{0}' is not a valid tab selection")]
    InvalidSelection(String),
}

/// Stable partition of `items` by category.
///
/// Group order follows the first occurrence of each category in the input and
/// items keep their source order within a group, so flattening the result
/// group-by-group visits every input item exactly once.
pub fn group_by_category<T: Categorized>(items: &[T]) -> Vec<(&str, Vec<&T>)> {
    let mut groups: Vec<(&str, Vec<&T>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(cat, _)| *cat == item.category()) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.category(), vec![item])),
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
    pub description: &'static str,
    pub category: &'static str,
}

impl Categorized for Skill {
    fn category(&self) -> &str {
        self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    /// Headline outcomes shown on the summary card.
    pub metrics: &'static [&'static str],
    pub problem_statement: &'static str,
    pub approach: &'static str,
    pub deliverables: &'static [&'static str],
    pub results: &'static [Metric],
    pub timeline: &'static str,
    pub team: &'static str,
    pub images: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub links: &'static [ProjectLink],
}

/// Lookup by id within one collection. Ids are unique per collection, so the
/// first match is the only match.
pub fn find_project<'a>(
    projects: &'a [Project],
    id: &str,
) -> Result<&'a Project, PortfolioError> {
    projects
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| PortfolioError::NotFound(id.to_string()))
}

pub const TECHNICAL_SKILLS: &[Skill] = &[
    Skill {
        name: "Product Strategy",
        level: 90,
        description: "Developing product vision and roadmaps",
        category: "Strategy",
    },
    Skill {
        name: "User Research",
        level: 85,
        description: "Conducting user interviews and usability testing",
        category: "Research",
    },
    Skill {
        name: "Data Analysis",
        level: 80,
        description: "Analyzing user behavior and product metrics",
        category: "Analytics",
    },
    Skill {
        name: "Agile/Scrum",
        level: 95,
        description: "Leading agile teams and sprint planning",
        category: "Methodology",
    },
    Skill {
        name: "Wireframing",
        level: 75,
        description: "Creating low-fidelity mockups and prototypes",
        category: "Design",
    },
    Skill {
        name: "A/B Testing",
        level: 70,
        description: "Designing and analyzing experiments",
        category: "Analytics",
    },
];

pub const SOFT_SKILLS: &[Skill] = &[
    Skill {
        name: "Leadership",
        level: 90,
        description: "Leading cross-functional teams",
        category: "Management",
    },
    Skill {
        name: "Communication",
        level: 95,
        description: "Clear and effective stakeholder communication",
        category: "Interpersonal",
    },
    Skill {
        name: "Problem Solving",
        level: 85,
        description: "Creative approach to complex challenges",
        category: "Cognitive",
    },
    Skill {
        name: "Stakeholder Management",
        level: 80,
        description: "Building relationships with key stakeholders",
        category: "Interpersonal",
    },
    Skill {
        name: "Adaptability",
        level: 85,
        description: "Quickly adjusting to changing priorities",
        category: "Personal",
    },
    Skill {
        name: "Strategic Thinking",
        level: 90,
        description: "Long-term vision and planning",
        category: "Cognitive",
    },
];

pub const FEATURED_PROJECTS: &[Project] = &[
    Project {
        id: "analytics-dashboard",
        title: "Product Analytics Dashboard",
        description: "Led the development of a comprehensive analytics dashboard that increased data-driven decision making by 40%.",
        thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        metrics: &[
            "40% increase in data usage",
            "25% reduction in decision time",
        ],
        problem_statement: "Product decisions were made on gut feel because usage data lived in a dozen disconnected tools. Teams spent days assembling one-off reports, and by the time numbers were in hand the question had usually moved on.",
        approach: "I ran discovery interviews with every product squad to catalogue the questions they actually asked of data, then partnered with the data platform team to define a shared metrics layer. We shipped an internal dashboard in thin slices, validating each view with its target squad before building the next.",
        deliverables: &[
            "Metrics taxonomy adopted across all product squads",
            "Self-serve dashboard covering activation, retention, and revenue",
            "Weekly product health report automated from the shared layer",
            "Rollout and training plan for 8 product teams",
        ],
        results: &[
            Metric { label: "Data Usage", value: "+40%" },
            Metric { label: "Decision Time", value: "-25%" },
            Metric { label: "Ad-hoc Report Requests", value: "-60%" },
        ],
        timeline: "Q1 2023 - Q3 2023",
        team: "Product Manager, 3 Engineers, 1 Data Analyst, 1 Designer",
        images: &[
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
            "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=800&q=80",
        ],
        tags: &["Analytics", "UX Research", "Product Strategy"],
        links: &[
            ProjectLink { title: "Case Study", url: "#" },
        ],
    },
    Project {
        id: "mobile-redesign",
        title: "Mobile App Redesign",
        description: "Spearheaded the redesign of a mobile application that improved user engagement and retention metrics.",
        thumbnail: "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=800&q=80",
        metrics: &[
            "32% increase in user engagement",
            "18% improvement in retention",
        ],
        problem_statement: "The mobile app's core flows had accreted features for three years without a design pass. Session length was falling, day-30 retention trailed the web product, and app-store reviews repeatedly called out navigation confusion.",
        approach: "We started from behavioral analytics to find where sessions died, then ran moderated usability tests to understand why. The redesign was rebuilt around the three jobs users actually came for, and we shipped it behind a staged rollout with holdback cohorts to measure the effect honestly.",
        deliverables: &[
            "Journey maps for the three core user jobs",
            "Redesigned navigation and information architecture",
            "Component library shared between iOS and Android",
            "Staged rollout plan with holdback measurement",
        ],
        results: &[
            Metric { label: "User Engagement", value: "+32%" },
            Metric { label: "Day-30 Retention", value: "+18%" },
            Metric { label: "App Store Rating", value: "4.1 → 4.6" },
        ],
        timeline: "Q3 2022 - Q1 2023",
        team: "Product Manager, 2 Designers, 5 Engineers",
        images: &[
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=800&q=80",
            "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&q=80",
        ],
        tags: &["Mobile", "UI/UX", "User Research"],
        links: &[
            ProjectLink { title: "Case Study", url: "#" },
            ProjectLink { title: "Press Coverage", url: "#" },
        ],
    },
    Project {
        id: "ecommerce-launch",
        title: "E-commerce Platform Launch",
        description: "Managed the launch of a new e-commerce platform that exceeded revenue targets within the first quarter.",
        thumbnail: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80",
        metrics: &[
            "120% of Q1 revenue target",
            "45% conversion rate",
        ],
        problem_statement: "The company sold exclusively through third-party marketplaces, paying double-digit commission on every order and owning none of the customer relationship. Leadership wanted a direct channel live before the holiday quarter.",
        approach: "I scoped a deliberately narrow first release: the top 20% of SKUs, one payment provider, one fulfillment partner. We mapped the buy flow against the marketplace baseline and cut every step that did not earn its place, then instrumented the funnel end to end before launch day.",
        deliverables: &[
            "Go-to-market plan and launch checklist",
            "Instrumented checkout funnel with conversion dashboards",
            "Fulfillment partner integration and SLA",
            "Post-launch iteration backlog ranked by funnel impact",
        ],
        results: &[
            Metric { label: "Q1 Revenue Target", value: "120%" },
            Metric { label: "Checkout Conversion", value: "45%" },
            Metric { label: "Marketplace Commission Saved", value: "$1.2M" },
        ],
        timeline: "Q2 2023 - Q4 2023",
        team: "Product Manager, 6 Engineers, 1 Designer, 1 Ops Lead",
        images: &[
            "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80",
            "https://images.unsplash.com/photo-1472851294608-062f824d29cc?w=800&q=80",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&q=80",
        ],
        tags: &["E-commerce", "Product Launch", "Growth"],
        links: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: &'static str,
        category: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.category
        }
    }

    fn item(id: &'static str, category: &'static str) -> Item {
        Item { id, category }
    }

    #[test]
    fn test_group_by_category_orders_by_first_occurrence() {
        let items = [item("a", "X"), item("b", "Y"), item("c", "X")];
        let groups = group_by_category(&items);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "X");
        assert_eq!(
            groups[0].1.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert_eq!(groups[1].0, "Y");
        assert_eq!(
            groups[1].1.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec!["b"]
        );
    }

    #[test]
    fn test_group_by_category_empty_input() {
        let items: [Item; 0] = [];
        assert!(group_by_category(&items).is_empty());
    }

    #[test]
    fn test_group_by_category_is_total() {
        let items = [
            item("a", "X"),
            item("b", "Y"),
            item("c", "X"),
            item("d", "Z"),
            item("e", "Y"),
        ];
        let groups = group_by_category(&items);

        let flattened: Vec<&str> = groups
            .iter()
            .flat_map(|(_, members)| members.iter().map(|i| i.id))
            .collect();
        // every item appears exactly once
        assert_eq!(flattened.len(), items.len());
        for it in &items {
            assert_eq!(flattened.iter().filter(|id| **id == it.id).count(), 1);
        }
    }

    #[test]
    fn test_group_by_category_idempotent_after_flatten() {
        let items = [
            item("a", "X"),
            item("b", "Y"),
            item("c", "X"),
            item("d", "Z"),
        ];
        let groups = group_by_category(&items);
        let flattened: Vec<Item> = groups
            .iter()
            .flat_map(|(_, members)| members.iter().map(|i| item(i.id, i.category)))
            .collect();
        let regrouped = group_by_category(&flattened);

        let as_ids = |gs: &[(&str, Vec<&Item>)]| {
            gs.iter()
                .map(|(c, ms)| (c.to_string(), ms.iter().map(|i| i.id).collect::<Vec<_>>()))
                .collect::<Vec<_>>()
        };
        assert_eq!(as_ids(&groups), as_ids(&regrouped));
    }

    #[test]
    fn test_find_project_known_id() {
        let project = find_project(FEATURED_PROJECTS, "mobile-redesign")
            .expect("project should exist");
        assert_eq!(project.title, "Mobile App Redesign");
    }

    #[test]
    fn test_find_project_unknown_id() {
        let err = find_project(FEATURED_PROJECTS, "bogus").unwrap_err();
        assert_eq!(err, PortfolioError::NotFound("bogus".to_string()));
    }

    #[test]
    fn test_static_collections_have_unique_ids() {
        for (i, p) in FEATURED_PROJECTS.iter().enumerate() {
            assert!(
                FEATURED_PROJECTS[i + 1..].iter().all(|other| other.id != p.id),
                "duplicate project id {}",
                p.id
            );
        }
        for (i, s) in TECHNICAL_SKILLS.iter().enumerate() {
            assert!(TECHNICAL_SKILLS[i + 1..].iter().all(|other| other.name != s.name));
        }
        for (i, s) in SOFT_SKILLS.iter().enumerate() {
            assert!(SOFT_SKILLS[i + 1..].iter().all(|other| other.name != s.name));
        }
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for skill in TECHNICAL_SKILLS.iter().chain(SOFT_SKILLS) {
            assert!(skill.level <= 100, "{} level out of range", skill.name);
        }
    }
}
