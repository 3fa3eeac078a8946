//! Built-in project catalog and quick-give presets.
//!
//! Pages turn these into [`ItemDraft`]s: project cards add a fixed default
//! amount keyed by the project id, while quick-give buttons mint a fresh id
//! per click so each gift becomes its own line item.

use serde::Serialize;
use ulid::Ulid;

use crate::types::ItemDraft;

/// Amount added by a project card's "Add to Donation Cart" button
pub const DEFAULT_PROJECT_AMOUNT: f64 = 50.0;

/// A fundraising project shown on the Projects page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub goal: u32,
    pub raised: u32,
    pub featured: bool,
}

impl Project {
    /// Funding progress as a whole percentage
    pub fn progress_percent(&self) -> u32 {
        if self.goal == 0 {
            return 0;
        }
        ((f64::from(self.raised) / f64::from(self.goal)) * 100.0).round() as u32
    }

    /// Draft for adding this project to the cart
    pub fn draft(&self, amount: f64) -> ItemDraft {
        ItemDraft::new(self.id, self.title, amount)
            .with_category(self.category)
            .with_image(self.image)
    }
}

const PROJECTS: &[Project] = &[
    Project {
        id: "water-well-somalia",
        title: "Water Well in Somalia",
        category: "water",
        description: "Provide clean drinking water to a village of 500 people in Somalia by building a deep water well.",
        image: "https://images.pexels.com/photos/2962405/pexels-photo-2962405.jpeg",
        goal: 5000,
        raised: 3750,
        featured: true,
    },
    Project {
        id: "orphan-care-syria",
        title: "Orphan Care in Syria",
        category: "orphans",
        description: "Support orphaned children in Syria with food, shelter, education, and psychological care.",
        image: "https://images.pexels.com/photos/1250452/pexels-photo-1250452.jpeg",
        goal: 10000,
        raised: 4200,
        featured: false,
    },
    Project {
        id: "food-packages-yemen",
        title: "Food Packages for Yemen",
        category: "food",
        description: "Provide emergency food packages to families suffering from famine in Yemen.",
        image: "https://images.pexels.com/photos/6647037/pexels-photo-6647037.jpeg",
        goal: 7500,
        raised: 6800,
        featured: false,
    },
    Project {
        id: "housing-gaza",
        title: "Housing Reconstruction in Gaza",
        category: "housing",
        description: "Help rebuild homes for families who lost their houses due to conflict in Gaza.",
        image: "https://images.pexels.com/photos/2219024/pexels-photo-2219024.jpeg",
        goal: 25000,
        raised: 12000,
        featured: false,
    },
    Project {
        id: "mosque-mali",
        title: "Mosque Construction in Mali",
        category: "mosques",
        description: "Build a mosque that will serve as a community center and place of worship for a village in Mali.",
        image: "https://images.pexels.com/photos/1537086/pexels-photo-1537086.jpeg",
        goal: 15000,
        raised: 9000,
        featured: false,
    },
    Project {
        id: "water-well-pakistan",
        title: "Water Well in Pakistan",
        category: "water",
        description: "Provide clean water access to a rural community in Pakistan through a sustainable well project.",
        image: "https://images.pexels.com/photos/1572386/pexels-photo-1572386.jpeg",
        goal: 4000,
        raised: 2800,
        featured: false,
    },
    Project {
        id: "food-bank-lebanon",
        title: "Food Bank in Lebanon",
        category: "food",
        description: "Establish a food bank to provide regular meals to refugees and vulnerable families in Lebanon.",
        image: "https://images.pexels.com/photos/6994982/pexels-photo-6994982.jpeg",
        goal: 12000,
        raised: 5500,
        featured: false,
    },
    Project {
        id: "orphan-education-bangladesh",
        title: "Orphan Education in Bangladesh",
        category: "orphans",
        description: "Provide educational scholarships and support for orphaned children in Bangladesh.",
        image: "https://images.pexels.com/photos/8363104/pexels-photo-8363104.jpeg",
        goal: 8000,
        raised: 3200,
        featured: false,
    },
    Project {
        id: "housing-indonesia",
        title: "Housing for Tsunami Victims",
        category: "housing",
        description: "Build sustainable housing for families affected by the tsunami in Indonesia.",
        image: "https://images.pexels.com/photos/2079246/pexels-photo-2079246.jpeg",
        goal: 20000,
        raised: 15000,
        featured: false,
    },
];

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Projects in a category; `"all"` returns every project
pub fn projects_in(category: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category.eq_ignore_ascii_case("all") || p.category.eq_ignore_ascii_case(category))
        .collect()
}

/// Distinct project categories in catalog order
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for project in PROJECTS {
        if !seen.contains(&project.category) {
            seen.push(project.category);
        }
    }
    seen
}

/// Quick-give buttons on the Donate page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GivingOption {
    OneTime,
    Monthly,
    Zakat,
    Sadaqah,
    Qurbani,
}

impl GivingOption {
    pub const ALL: [GivingOption; 5] = [
        GivingOption::OneTime,
        GivingOption::Monthly,
        GivingOption::Zakat,
        GivingOption::Sadaqah,
        GivingOption::Qurbani,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            GivingOption::OneTime => "General Donation",
            GivingOption::Monthly => "Monthly Donation",
            GivingOption::Zakat => "Zakat Donation",
            GivingOption::Sadaqah => "Sadaqah Donation",
            GivingOption::Qurbani => "Qurbani/Udhiyah",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            GivingOption::OneTime => "One-Time",
            GivingOption::Monthly => "Monthly",
            GivingOption::Zakat => "Zakat",
            GivingOption::Sadaqah => "Sadaqah",
            GivingOption::Qurbani => "Qurbani",
        }
    }

    fn id_prefix(&self) -> &'static str {
        match self {
            GivingOption::OneTime => "general",
            GivingOption::Monthly => "monthly",
            GivingOption::Zakat => "zakat",
            GivingOption::Sadaqah => "sadaqah",
            GivingOption::Qurbani => "qurbani",
        }
    }

    /// Amounts offered as buttons
    pub fn presets(&self) -> &'static [u32] {
        match self {
            GivingOption::OneTime => &[25, 50, 100, 250, 500],
            GivingOption::Monthly => &[10, 25, 50, 100, 200],
            GivingOption::Zakat => &[100],
            GivingOption::Sadaqah => &[25, 50, 100],
            GivingOption::Qurbani => &[150],
        }
    }

    /// Draft with a freshly minted id
    pub fn draft(&self, amount: f64) -> ItemDraft {
        ItemDraft::new(fresh_id(self.id_prefix()), self.title(), amount).with_category(self.category())
    }
}

impl std::str::FromStr for GivingOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one-time" | "general" => Ok(GivingOption::OneTime),
            "monthly" => Ok(GivingOption::Monthly),
            "zakat" => Ok(GivingOption::Zakat),
            "sadaqah" => Ok(GivingOption::Sadaqah),
            "qurbani" | "udhiyah" => Ok(GivingOption::Qurbani),
            other => Err(format!("unknown giving option '{}'", other)),
        }
    }
}

/// The pair added by the Donate page's "Add Demo Items" button
pub fn demo_drafts() -> Vec<ItemDraft> {
    vec![
        ItemDraft::new(fresh_id("demo-food"), "Food for Families", 50.0).with_category("Emergency Relief"),
        ItemDraft::new(fresh_id("demo-water"), "Clean Water Project", 75.0)
            .with_category("Water & Sanitation"),
    ]
}

fn fresh_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new().to_string().to_lowercase())
}
