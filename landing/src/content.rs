//! Page copy.
//!
//! Every piece of text the sections render lives here as typed, static data.

/// Anchor ids of the in-page sections.
pub const SECTION_CONTEXT: &str = "context";
pub const SECTION_TECHNOLOGY: &str = "technology";
pub const SECTION_ECONOMICS: &str = "economics";
pub const SECTION_TEAM: &str = "team";

/// Section ids rendered by the home page, top to bottom.
pub const HOME_SECTIONS: &[&str] = &[
    SECTION_CONTEXT,
    SECTION_TECHNOLOGY,
    SECTION_ECONOMICS,
    SECTION_TEAM,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

impl NavItem {
    /// Fragment href on the home page, absolute link from anywhere else.
    pub fn href(&self, in_page: bool) -> String {
        if in_page {
            format!("#{}", self.section)
        } else {
            format!("/#{}", self.section)
        }
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Context",
        section: SECTION_CONTEXT,
    },
    NavItem {
        label: "Technology",
        section: SECTION_TECHNOLOGY,
    },
    NavItem {
        label: "Economics",
        section: SECTION_ECONOMICS,
    },
    NavItem {
        label: "Team",
        section: SECTION_TEAM,
    },
];

pub struct Hero {
    pub badge: &'static str,
    pub title_accent: &'static str,
    pub title_rest: &'static str,
    pub description: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "Seed round open",
    title_accent: "Buildings that",
    title_rest: "run themselves.",
    description: "TESSA retrofits existing buildings with low-cost IoT sensors and an AI \
                  control layer that learns how each building breathes, then cuts heating \
                  and cooling waste without touching the walls.",
    primary_cta: "See how it works",
    secondary_cta: "Talk to us",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub source: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "40%",
        label: "of EU energy consumption comes from buildings",
        source: "European Commission",
    },
    Stat {
        value: "36%",
        label: "of energy-related greenhouse gas emissions",
        source: "European Commission",
    },
    Stat {
        value: "75%",
        label: "of the building stock is energy inefficient",
        source: "EU Renovation Wave",
    },
    Stat {
        value: "85%",
        label: "of today's buildings will still stand in 2050",
        source: "EU Renovation Wave",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
}

pub const SOLUTION_STEPS: &[SolutionStep] = &[
    SolutionStep {
        number: "01",
        title: "Sense",
        description: "Battery-powered wireless sensors clip onto radiators, windows and \
                      vents. Installation takes an afternoon, not a renovation.",
        detail: "Temperature, humidity, CO2, occupancy",
    },
    SolutionStep {
        number: "02",
        title: "Analyse",
        description: "A per-building thermal model is trained on live readings and local \
                      weather forecasts, predicting demand hours ahead.",
        detail: "Edge gateway + cloud forecasting",
    },
    SolutionStep {
        number: "03",
        title: "Act",
        description: "Setpoints are pushed to existing heating and ventilation systems so \
                      rooms are comfortable exactly when people are in them.",
        detail: "Works with common BMS protocols",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketDriver {
    pub title: &'static str,
    pub summary: &'static str,
    pub citation: &'static str,
}

pub const MARKET_DRIVERS: &[MarketDriver] = &[
    MarketDriver {
        title: "Regulation",
        summary: "The recast Energy Performance of Buildings Directive sets a path to a \
                  zero-emission building stock by 2050 and minimum performance standards \
                  for the worst performers.",
        citation: "Directive (EU) 2024/1275",
    },
    MarketDriver {
        title: "Energy prices",
        summary: "Volatile gas and electricity prices have turned operating cost into a \
                  board-level topic for property owners.",
        citation: "IEA, World Energy Outlook 2023",
    },
    MarketDriver {
        title: "Cheap sensing",
        summary: "Sensor and connectivity costs keep falling, making room-level \
                  measurement viable for ordinary buildings.",
        citation: "IoT Analytics, State of IoT 2024",
    },
    MarketDriver {
        title: "Model predictive control",
        summary: "Studies report double-digit heating savings when predictive control \
                  replaces fixed schedules.",
        citation: "Drgoňa et al., Annual Reviews in Control, 2020",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueStream {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

pub const REVENUE_STREAMS: &[RevenueStream] = &[
    RevenueStream {
        name: "Hardware kit",
        price: "one-off per building",
        description: "Sensors and gateway sold at a small margin to keep the entry \
                      barrier low.",
    },
    RevenueStream {
        name: "Platform subscription",
        price: "monthly per m²",
        description: "Forecasting, control and reporting as a service. The recurring core \
                      of the business.",
    },
    RevenueStream {
        name: "Savings share",
        price: "performance based",
        description: "Optional contract where TESSA is paid a share of verified energy \
                      savings.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub initials: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Elena Marchetti",
        role: "CEO",
        bio: "Ten years in facility management for commercial real estate.",
        initials: "EM",
    },
    TeamMember {
        name: "Jonas Weber",
        role: "CTO",
        bio: "Embedded systems engineer, previously building smart-meter firmware.",
        initials: "JW",
    },
    TeamMember {
        name: "Amira Haddad",
        role: "Head of AI",
        bio: "PhD in control engineering, focused on predictive building control.",
        initials: "AH",
    },
];
