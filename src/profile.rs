//! Page content for the portfolio sections: about, experience, projects,
//! publications and contact. Lives in `SiteConfig` so a page override can
//! swap it out together with the chat replies that point at it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Bar fill, 0..=100.
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub period: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub venue: String,
    pub date: String,
    pub location: String,
    pub status: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
    /// Plain text when absent.
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub about: Vec<String>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Role>,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
    pub contact: Vec<ContactLink>,
}

impl Default for Profile {
    fn default() -> Self {
        Self::portfolio()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn role(title: &str, period: &str, summary: &str) -> Role {
    Role {
        title: title.to_string(),
        period: period.to_string(),
        summary: summary.to_string(),
    }
}

fn project(title: &str, category: &str, summary: &str, tags: &[&str], status: &str) -> Project {
    Project {
        title: title.to_string(),
        category: category.to_string(),
        summary: summary.to_string(),
        tags: strings(tags),
        status: status.to_string(),
        link: None,
    }
}

impl Profile {
    pub fn portfolio() -> Self {
        let mut lens_guide = project(
            "Lens Studio Beginners' Guide",
            "Augmented Reality",
            "Tutorial repository for creating Snapchat AR lenses, with a public Headspin Tiara lens and Notion documentation.",
            &["Snapchat", "Lens Studio", "AR", "Tutorial"],
            "Live & Public",
        );
        lens_guide.link =
            Some("https://www.snapchat.com/lens/9cc9beb63b6a404583096ff3838a71d9".to_string());

        Self {
            about: strings(&[
                "My journey in Human-Computer Interaction began with a fascination for how technology can enhance human experiences. I'm pursuing an MSc in HCI at University College Dublin.",
                "With a background spanning AR/VR development, AI research and UX design, I bring a multidisciplinary approach to every project, with publications at IEEE and Springer venues.",
                "Whether it's healthcare solutions, immersive experiences or mentoring youth, I want technology to serve people.",
            ]),
            skills: vec![
                skill("AR/VR Development", 90),
                skill("Web Development", 85),
                skill("UX/UI Design", 88),
                skill("Research & Analysis", 92),
                skill("Graphic Design", 80),
                skill("Community Leadership", 85),
            ],
            experience: vec![
                role(
                    "MSc HCI - University College Dublin",
                    "Sept 2025 - Sept 2026",
                    "Design thinking, user research, AR/VR development and human-centered design for social impact.",
                ),
                role(
                    "Research Intern - Malaviya National Institute of Technology Jaipur",
                    "Jan 2024 - July 2024",
                    "AI-driven traffic and emergency healthcare prediction for the AMRUT government project.",
                ),
                role(
                    "Snapchat Opinion Leader - Under 25 Universe",
                    "Oct 2023 - Sept 2025",
                    "Social impact content and community conversations through creative storytelling.",
                ),
                role(
                    "Industrial Training - Mangalore Refinery & Petrochemicals LTD",
                    "June 2023 - July 2023",
                    "Built a web-based food order management system for business meetings.",
                ),
                role(
                    "General Secretary - Humans of Manipal Jaipur",
                    "Oct 2022 - April 2023",
                    "Led a storytelling initiative capturing human experiences across campus.",
                ),
                role(
                    "Design Internship - i3 minds LLP",
                    "Dec 2022 - Jan 2023",
                    "Visual redesign of company branding, website graphics and social media pages.",
                ),
                role(
                    "Transitional Readiness Wingman - Make A Difference",
                    "Nov 2021 - Sept 2025",
                    "Mentoring youth through personal growth and life challenges.",
                ),
            ],
            projects: vec![
                project(
                    "MemFusion-Tformer",
                    "AI Research",
                    "Memory-driven cross-attention transformer for dynamic congestion prediction in urban networks.",
                    &["Deep Learning", "Transformer Architecture", "Urban Analytics"],
                    "Accepted - IEEE iMETA2025",
                ),
                project(
                    "Mobile Health Apps & Network Integration",
                    "Healthcare Technology",
                    "Integrating mobile health applications with network systems to improve healthcare delivery.",
                    &["Mobile Health", "Network Integration", "Healthcare Systems"],
                    "Published - Springer RASESIA 2024",
                ),
                lens_guide,
                project(
                    "Blood-Organ Donation System",
                    "Healthcare Development",
                    "Web-based system coordinating blood and organ donors, recipients and healthcare organizations.",
                    &["PHP", "JavaScript", "MySQL"],
                    "Completed - July 2023",
                ),
                project(
                    "Web Vulnerability Analysis",
                    "Cybersecurity",
                    "Security risk identification in web applications with automated and manual tools.",
                    &["Nessus", "OWASP ZAP", "Burp Suite"],
                    "Ongoing Research",
                ),
                project(
                    "Sexual Harassment Awareness Campaign",
                    "Social Impact Design",
                    "A series of three digital artworks about trauma and resilience.",
                    &["Digital Art", "Social Impact", "Visual Storytelling"],
                    "Completed - 2022",
                ),
            ],
            publications: vec![
                Publication {
                    title: "MemFusion-Tformer: Memory-Driven Cross-Attention for Dynamic Congestion Prediction in Urban Networks".to_string(),
                    venue: "IEEE iMETA2025".to_string(),
                    date: "October 14-17, 2025".to_string(),
                    location: "Dubrovnik, Croatia".to_string(),
                    status: "Accepted".to_string(),
                    summary: "Selected through a highly competitive review process.".to_string(),
                },
                Publication {
                    title: "Mobile Health Apps and Network Integration: Transforming Healthcare Delivery".to_string(),
                    venue: "Springer RASESIA 2024".to_string(),
                    date: "June 14-15, 2024".to_string(),
                    location: "NIT Kurukshetra, India".to_string(),
                    status: "Published".to_string(),
                    summary: "Published in Springer Volume 2 and presented at the hybrid conference on Recent Advances in Smart Energy Systems.".to_string(),
                },
            ],
            contact: vec![
                ContactLink {
                    label: "Email".to_string(),
                    value: "ananyachandraker02@gmail.com".to_string(),
                    href: Some("mailto:ananyachandraker02@gmail.com".to_string()),
                },
                ContactLink {
                    label: "LinkedIn".to_string(),
                    value: "linkedin.com/in/ananya-chandraker".to_string(),
                    href: Some("https://www.linkedin.com/in/ananya-chandraker/".to_string()),
                },
                ContactLink {
                    label: "Location".to_string(),
                    value: "Dublin, Ireland".to_string(),
                    href: None,
                },
            ],
        }
    }

    /// Clamp skill bars so an override can't overflow the track.
    pub fn normalize(&mut self) {
        for s in &mut self.skills {
            s.level = s.level.min(100);
        }
    }
}
