//! Static category table and per-category content themes.
//!
//! Every code from 6 to 2736 belongs to exactly one category. The table is
//! ordered by range and scanned linearly; ranges are few and never change at
//! runtime. Titles, descriptions and subtype names come from fixed 5-entry
//! lists per category, so the synthesized metadata repeats every 5 codes.

/// Identifier for a themed code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    Games,
    Videos,
    Music,
    Horror,
    Tools,
    Art,
    ThreeD,
    Secret,
}

impl CategoryId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Videos => "videos",
            Self::Music => "music",
            Self::Horror => "horror",
            Self::Tools => "tools",
            Self::Art => "art",
            Self::ThreeD => "3d",
            Self::Secret => "secret",
        }
    }

    /// Position of this category in the table (and its theme list).
    const fn index(self) -> usize {
        match self {
            Self::Games => 0,
            Self::Videos => 1,
            Self::Music => 2,
            Self::Horror => 3,
            Self::Tools => 4,
            Self::Art => 5,
            Self::ThreeD => 6,
            Self::Secret => 7,
        }
    }
}

/// One row of the category table: a named, colored, inclusive code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub count: u16,
    pub start: u16,
    pub end: u16,
}

/// The full table, sorted ascending by range. Ranges are contiguous and
/// pairwise disjoint; together with the five reserved codes they cover
/// exactly 1..=2736.
pub static CATEGORIES: [Category; 8] = [
    Category {
        id: CategoryId::Games,
        name: "Games",
        description: "Assorted mini-games and diversions",
        color: "bg-violet-600",
        count: 500,
        start: 1,
        end: 500,
    },
    Category {
        id: CategoryId::Videos,
        name: "Videos",
        description: "Clips and animations",
        color: "bg-red-600",
        count: 400,
        start: 501,
        end: 900,
    },
    Category {
        id: CategoryId::Music,
        name: "Music",
        description: "Music tracks and sound effects",
        color: "bg-green-600",
        count: 300,
        start: 901,
        end: 1200,
    },
    Category {
        id: CategoryId::Horror,
        name: "Horror",
        description: "Scares, screamers and horror games",
        color: "bg-red-900",
        count: 300,
        start: 1201,
        end: 1500,
    },
    Category {
        id: CategoryId::Tools,
        name: "Tools",
        description: "Useful utilities and instruments",
        color: "bg-blue-600",
        count: 300,
        start: 1501,
        end: 1800,
    },
    Category {
        id: CategoryId::Art,
        name: "Art",
        description: "Digital art and visual effects",
        color: "bg-amber-500",
        count: 300,
        start: 1801,
        end: 2100,
    },
    Category {
        id: CategoryId::ThreeD,
        name: "3D",
        description: "3D models and interactive scenes",
        color: "bg-cyan-600",
        count: 300,
        start: 2101,
        end: 2400,
    },
    Category {
        id: CategoryId::Secret,
        name: "Secrets",
        description: "Hidden and special material",
        color: "bg-slate-800",
        count: 336,
        start: 2401,
        end: 2736,
    },
];

/// Find the table row containing `code`, if any.
#[must_use]
pub fn category_for(code: u16) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|cat| code >= cat.start && code <= cat.end)
}

/// Look up a category row by id.
#[must_use]
pub fn category_by_id(id: CategoryId) -> &'static Category {
    &CATEGORIES[id.index()]
}

/// Fixed lookup lists used to synthesize content metadata for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTheme {
    pub subtypes: [&'static str; 5],
    pub titles: [&'static str; 5],
    pub descriptions: [&'static str; 5],
}

impl CategoryTheme {
    /// Number of entries in each themed list.
    pub const LEN: usize = 5;
}

/// Themes in table order; a single mapping per category replaces scattered
/// per-field switch tables, so indices into the three lists always travel
/// together.
static THEMES: [CategoryTheme; 8] = [
    // games
    CategoryTheme {
        subtypes: ["arcade", "puzzle", "strategy", "adventure", "action"],
        titles: [
            "Space Shooter",
            "Brain Teaser",
            "Treasure Hunt",
            "Speed Racer",
            "Platform Jumper",
        ],
        descriptions: [
            "A fast arcade game with simple controls",
            "A logic puzzle to stretch your brain",
            "A strategy game with tactical choices",
            "An adventure across an open world",
            "Frantic action with endless enemies",
        ],
    },
    // videos
    CategoryTheme {
        subtypes: ["tutorial", "animation", "documentary", "clip", "trailer"],
        titles: [
            "Mystery Reel",
            "Quick Tutorial",
            "Short Film",
            "Music Video",
            "Fake Trailer",
        ],
        descriptions: [
            "An instructional clip full of useful tips",
            "An animated short with a twist",
            "A pocket-sized documentary",
            "A gripping short video",
            "A trailer for a film that does not exist",
        ],
    },
    // music
    CategoryTheme {
        subtypes: ["rock", "electronic", "ambient", "jazz", "lofi"],
        titles: [
            "Electro Track",
            "Rock Anthem",
            "Ambient Drift",
            "Jazz Improv",
            "Chillhop Loop",
        ],
        descriptions: [
            "An energetic electronic track for a party",
            "A calming ambient piece",
            "Melodic instrumental music",
            "A steady beat for getting work done",
            "An atmospheric soundscape",
        ],
    },
    // horror
    CategoryTheme {
        subtypes: [
            "jumpscare",
            "psychological",
            "monster",
            "ghost",
            "creepypasta",
        ],
        titles: [
            "Abandoned House",
            "Night Terror",
            "Monster Encounter",
            "Creepy Tale",
            "Paranormal File",
        ],
        descriptions: [
            "A scary story with a twist ending",
            "A sudden scare lying in wait",
            "Psychological horror that plays on your fears",
            "The dread of an abandoned place",
            "A brush with the paranormal",
        ],
    },
    // tools
    CategoryTheme {
        subtypes: ["calculator", "converter", "generator", "analyzer", "editor"],
        titles: [
            "Calculator",
            "Password Generator",
            "Scratch Pad",
            "Unit Converter",
            "Code Editor",
        ],
        descriptions: [
            "A handy tool for everyday tasks",
            "A generator of random values and data",
            "An interactive calculator for quick sums",
            "A convenient converter between units",
            "An efficient little work tool",
        ],
    },
    // art
    CategoryTheme {
        subtypes: ["painting", "animation", "pixel", "geometric", "abstract"],
        titles: [
            "Digital Painting",
            "Pixel Animation",
            "Geometric Shapes",
            "Abstract Piece",
            "Fractal Render",
        ],
        descriptions: [
            "A beautiful piece of digital art",
            "Animated graphics in vivid color",
            "An abstract composition of geometric forms",
            "Pixel art in retro style",
            "An experiment in color and form",
        ],
    },
    // 3d
    CategoryTheme {
        subtypes: ["model", "scene", "animation", "interactive", "gallery"],
        titles: [
            "3D Model",
            "Interactive Scene",
            "3D Animation",
            "Model Gallery",
            "3D Builder",
        ],
        descriptions: [
            "An interactive 3D model you can spin",
            "A three-dimensional scene with dynamic lighting",
            "An animated 3D composition",
            "A gallery of 3D objects to explore",
            "A virtual space to wander through",
        ],
    },
    // secret
    CategoryTheme {
        subtypes: ["easteregg", "message", "challenge", "reward", "story"],
        titles: [
            "Secret Message",
            "Easter Egg",
            "Hidden Reward",
            "Classified Content",
            "Riddle",
        ],
        descriptions: [
            "Hidden information for those who know the code",
            "A secret message from the developers",
            "An easter egg waiting to be found",
            "Private content for the chosen few",
            "A riddle that wants solving",
        ],
    },
];

/// Theme lookup for a category.
#[must_use]
pub fn theme(id: CategoryId) -> &'static CategoryTheme {
    &THEMES[id.index()]
}
