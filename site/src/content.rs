//! Static site content: profile, skill pieces, projects, socials, labels.
//!
//! Everything the sections render comes from the constants here. Edit this
//! file to change photos, skills, projects, or links; no component holds its
//! own copy of the data.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use puzzle::board::PieceSpec;

pub const PROFILE_PHOTOS: &[&str] = &["/profile_pics/p1.jpeg", "/profile_pics/p2.jpeg"];

pub const GREETING_PREFIX: &str = "Hi, I'm ";
pub const GREETING_NAME: &str = "Anıl!";
pub const ALIAS_NAME: &str = "Moksha";
pub const ROLE: &str = "Developer & Designer";
pub const SUBTITLE: &str = "Cyber Security & Development";
pub const BIO: &str = "Coding, design, and art to create immersive digital experiences. \
From game development to 3D visualizations and modern web interfaces.";

pub const HOME_BADGES: &[&str] = &["Cyber Security", "Backend", "Frontend", "UI/UX", "Web", "3D"];

/// One skill on the jigsaw board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillPiece {
    pub id: &'static str,
    pub name: &'static str,
    /// `#RRGGBB` tint for the piece.
    pub color: &'static str,
    /// Two-letter mark drawn in the piece.
    pub icon: &'static str,
    pub row: usize,
    pub col: usize,
}

const fn skill(
    id: &'static str,
    name: &'static str,
    color: &'static str,
    icon: &'static str,
    row: usize,
    col: usize,
) -> SkillPiece {
    SkillPiece { id, name, color, icon, row, col }
}

impl SkillPiece {
    pub fn to_spec(&self) -> PieceSpec {
        PieceSpec::new(self.id, self.row, self.col)
    }
}

pub const DEVELOPMENT_SKILLS: &[SkillPiece] = &[
    skill("react", "React", "#61DAFB", "Re", 0, 0),
    skill("java", "Java", "#ED8B00", "Ja", 0, 1),
    skill("unity", "Unity", "#CCCCCC", "Un", 0, 2),
    skill("threejs", "Three.js", "#049EF4", "3D", 0, 3),
    skill("typescript", "TypeScript", "#3178C6", "TS", 1, 0),
    skill("nextjs", "Next.js", "#CCCCCC", "Nx", 1, 1),
    skill("nodejs", "Node.js", "#68A063", "No", 1, 2),
    skill("python", "Python", "#3776AB", "Py", 1, 3),
];

pub const DESIGN_SKILLS: &[SkillPiece] = &[
    skill("figma", "Figma", "#F24E1E", "Fi", 0, 0),
    skill("blender", "Blender", "#EA7600", "Bl", 0, 1),
    skill("photoshop", "Photoshop", "#31A8FF", "Ps", 0, 2),
    skill("krita", "Krita", "#3BABFF", "Kr", 1, 0),
    skill("illustrator", "Illustrator", "#FF9A00", "Ai", 1, 1),
    skill("substance", "Substance", "#82C800", "Su", 1, 2),
];

pub const CYBER_SKILLS: &[SkillPiece] = &[
    skill("kali", "Kali Linux", "#557C94", "Ka", 0, 0),
    skill("burp", "Burp Suite", "#FF6633", "Bu", 0, 1),
    skill("wireshark", "Wireshark", "#1679A7", "Ws", 0, 2),
    skill("nmap", "Nmap", "#4682B4", "Nm", 0, 3),
    skill("linux", "Linux", "#FCC624", "Li", 1, 0),
    skill("py-cyber", "Python", "#3776AB", "Py", 1, 1),
    skill("owasp", "OWASP", "#CC2222", "Ow", 1, 2),
    skill("metasploit", "Metasploit", "#2596CD", "Ms", 1, 3),
];

/// A portfolio project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Placeholder tint when there is no media.
    pub color: &'static str,
    pub thumbnail: Option<&'static str>,
    /// Several images/videos shown side by side; wins over `thumbnail`.
    pub gallery: &'static [&'static str],
    pub artstation: Option<&'static str>,
}

/// A titled, horizontally scrolling row of projects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRow {
    pub category: &'static str,
    pub projects: &'static [Project],
}

pub const PORTFOLIO_ROWS: &[ProjectRow] = &[ProjectRow {
    category: "3D / Design Projects",
    projects: &[
        Project {
            id: "d1",
            title: "3D Rick and Morty Lab",
            description: "A detailed 3D recreation of the iconic Rick and Morty lab, featuring realistic lighting and textures.",
            tags: &["Blender", "Eevee", "3D"],
            color: "#82E83A",
            thumbnail: Some("/portfolio/3D Rick and Morty Lab/rickandmorty_lab.jpg"),
            gallery: &[],
            artstation: Some("https://www.artstation.com/artwork/ZalXKZ"),
        },
        Project {
            id: "d2",
            title: "Abandoned Spaceship",
            description: "An eerie abandoned spaceship scene with volumetric fog, rust materials, and dramatic lighting.",
            tags: &["Blender", "Cycles", "Sci-Fi", "3D"],
            color: "#5B8FA8",
            thumbnail: Some("/portfolio/Abondoned Spaceship/abandoned_spaceship.jpg"),
            gallery: &[],
            artstation: Some("https://www.artstation.com/artwork/Ealok4"),
        },
        Project {
            id: "d3",
            title: "Desert Night",
            description: "A serene desert landscape at night with moonlit dunes, atmospheric haze, and starry skies.",
            tags: &["Blender", "Cycles", "Environment", "Lighting", "3D"],
            color: "#D4A84B",
            thumbnail: Some("/portfolio/Desert/desertnight.jpg"),
            gallery: &[],
            artstation: Some("https://www.artstation.com/artwork/14dPJe"),
        },
        Project {
            id: "d4",
            title: "Magic Forest",
            description: "A low-poly stylized magic forest with glowing flora, fairy lights, and enchanted atmosphere.",
            tags: &["Blender", "Low Poly", "Stylized", "Eevee", "3D"],
            color: "#4DD88A",
            thumbnail: Some("/portfolio/Magic Forest/lowpoly_magicforest.jpg"),
            gallery: &[],
            artstation: Some("https://www.artstation.com/artwork/xYW9gX"),
        },
        Project {
            id: "d5",
            title: "Modern Watch",
            description: "A photorealistic 3D render of a modern luxury watch with precise reflections and studio lighting.",
            tags: &["Blender", "Product", "Advertising", "3D"],
            color: "#C0C0C0",
            thumbnail: Some("/portfolio/Modern Watch/watch1.jpg"),
            gallery: &[
                "/portfolio/Modern Watch/watch1.jpg",
                "/portfolio/Modern Watch/watch_vid.mp4",
                "/portfolio/Modern Watch/watch2.jpg",
            ],
            artstation: Some("https://www.artstation.com/artwork/aoGqK9"),
        },
        Project {
            id: "d6",
            title: "Ocean",
            description: "A dynamic ocean simulation with realistic water shaders, foam, and atmospheric conditions.",
            tags: &["Blender", "Simulation", "VFX", "3D"],
            color: "#2196F3",
            thumbnail: Some("/portfolio/Ocean/ocean.mp4"),
            gallery: &[],
            artstation: Some("https://www.artstation.com/artwork/PezRdy"),
        },
        Project {
            id: "d7",
            title: "Statue of Fish",
            description: "A surreal artistic sculpture of a fish rendered with metallic materials and dramatic composition.",
            tags: &["Blender", "3D", "Art"],
            color: "#FF7043",
            thumbnail: Some("/portfolio/Statue Of Fish/statue_of_fish.jpg"),
            gallery: &[],
            artstation: Some("https://www.artstation.com/artwork/EvbqY0"),
        },
    ],
}];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    /// Short glyph shown in the link chip.
    pub glyph: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", glyph: "GH", href: "https://github.com/anlyetim" },
    SocialLink { name: "LinkedIn", glyph: "in", href: "https://www.linkedin.com/in/anl-yetim/" },
    SocialLink { name: "ArtStation", glyph: "AS", href: "https://anly05.artstation.com/" },
    SocialLink { name: "Instagram", glyph: "IG", href: "https://www.instagram.com/anl.y05/" },
];

// Fixed English labels.
pub const LABEL_CONTINUE: &str = "Continue";
pub const LABEL_BACK_TO_HOME: &str = "Back to Home";
pub const LABEL_SCATTER: &str = "Scatter";
pub const LABEL_COLLECT: &str = "Collect";
pub const LABEL_SOLVED: &str = "Solved!";
pub const LABEL_SKILL_SET: &str = "Skill Set";
pub const LABEL_SELECTED_WORK: &str = "Selected Work";
pub const LABEL_PORTFOLIO: &str = "Portfolio";
pub const LABEL_GET_IN_TOUCH: &str = "Get in Touch";
pub const LABEL_LETS_WORK: &str = "Let's work together";
pub const LABEL_VIEW: &str = "View";
pub const LABEL_ARTSTATION: &str = "ArtStation";
