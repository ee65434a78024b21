//! Phase profiles and project notes used by the custom strategy.
//!
//! The catalog is built once at startup and handed to the renderer by
//! reference. Every lookup is total: unknown keys resolve to a documented
//! default instead of failing.

use std::collections::HashMap;

/// Fallback note for project/phase combinations without a dedicated entry.
pub const NOTE_FALLBACK: &str = "Custom strategy adaptation needed";

/// Development phase a strategy targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    MvpValidation,
    UserTesting,
    MarketProof,
    ProductionReady,
}

impl Phase {
    /// Selector order.
    pub const ALL: [Phase; 4] = [
        Phase::MvpValidation,
        Phase::UserTesting,
        Phase::MarketProof,
        Phase::ProductionReady,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::MvpValidation => "mvp_validation",
            Self::UserTesting => "user_testing",
            Self::MarketProof => "market_proof",
            Self::ProductionReady => "production_ready",
        }
    }

    /// Parse a phase id. Matching is exact; callers decide the fallback.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

/// Project a strategy is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Project {
    #[default]
    Aimastery,
    Scorescout,
    NewConcept,
    EnterpriseTool,
}

impl Project {
    /// Selector order.
    pub const ALL: [Project; 4] = [
        Project::Aimastery,
        Project::Scorescout,
        Project::NewConcept,
        Project::EnterpriseTool,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Aimastery => "aimastery",
            Self::Scorescout => "scorescout",
            Self::NewConcept => "new_concept",
            Self::EnterpriseTool => "enterprise_tool",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let index = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(index + step) % all.len()]
}

/// What faking buys in a phase and when to stop faking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseProfile {
    pub phase: Phase,
    pub fake_advantages: &'static [&'static str],
    pub fake_techniques: &'static [&'static str],
    pub real_trigger: &'static str,
    pub transition_signal: &'static str,
}

const MVP_VALIDATION: PhaseProfile = PhaseProfile {
    phase: Phase::MvpValidation,
    fake_advantages: &[
        "Demo impressionnante en 30 minutes",
        "User feedback immédiat sur concept",
        "Validation market-fit sans investment lourd",
        "Itération rapide sur UX/UI",
        "Proof of concept convaincant investors",
    ],
    fake_techniques: &[
        "Math.random() pour scores réalistes",
        "setTimeout() pour simulation processing",
        "Hardcoded insights pertinents au domaine",
        "Progress bars pour perception performance",
        "Mock APIs avec données plausibles",
    ],
    real_trigger: "10+ users demandent vraie analyse",
    transition_signal: "Willingness to pay confirmée",
};

const USER_TESTING: PhaseProfile = PhaseProfile {
    phase: Phase::UserTesting,
    fake_advantages: &[
        "A/B test multiple concepts rapidement",
        "User journey validation sans backend",
        "Interface testing avec dummy data réaliste",
        "Performance perception optimization",
        "Feature prioritization basée usage fake",
    ],
    fake_techniques: &[
        "Wizard of Oz testing avec fake backend",
        "Données générées intelligemment pour tests",
        "Simulations convincantes pour user interviews",
        "Prototypes interactifs sans vraie logique",
        "A/B testing avec results fake mais plausibles",
    ],
    real_trigger: "Pattern usage clair identifié",
    transition_signal: "User retention > 50% sur fake version",
};

const MARKET_PROOF: PhaseProfile = PhaseProfile {
    phase: Phase::MarketProof,
    fake_advantages: &[
        "Landing page conversion avec fake product",
        "Pricing validation sans développement",
        "Competitor response observation",
        "Market sizing avec simulated demand",
        "Press/media attention sur concept",
    ],
    fake_techniques: &[
        "Fake SaaS dashboard pour screenshots",
        "Demo videos avec simulated results",
        "Case studies avec hypothetical data",
        "Testimonials générés pour social proof",
        "Metrics dashboards impressionnants fake",
    ],
    real_trigger: "Pre-orders ou LOI signées",
    transition_signal: "Revenue potential > 10K€/mois confirmé",
};

const PROJECT_NOTES: &[(Project, Phase, &str)] = &[
    (
        Project::Aimastery,
        Phase::MvpValidation,
        "Fake Vincian analysis pour validation concept musical",
    ),
    (
        Project::Aimastery,
        Phase::UserTesting,
        "A/B test fake audio insights avec musicians",
    ),
    (
        Project::Aimastery,
        Phase::MarketProof,
        "Landing page fake premium features pricing",
    ),
    (
        Project::Aimastery,
        Phase::ProductionReady,
        "Real audio analysis mathematical implementation",
    ),
    (
        Project::Scorescout,
        Phase::MvpValidation,
        "Fake gaming predictions pour validation esports market",
    ),
    (
        Project::Scorescout,
        Phase::UserTesting,
        "Wizard of Oz gaming insights avec real gamers",
    ),
    (
        Project::Scorescout,
        Phase::MarketProof,
        "Fake ROI tracking pour bookmakers interest",
    ),
    (
        Project::Scorescout,
        Phase::ProductionReady,
        "Real ML algorithms gaming prediction accuracy",
    ),
    (
        Project::NewConcept,
        Phase::MvpValidation,
        "Rapid prototype fake pour concept validation",
    ),
    (
        Project::NewConcept,
        Phase::UserTesting,
        "User journey testing avec fake backend",
    ),
    (
        Project::NewConcept,
        Phase::MarketProof,
        "Fake case studies pour market interest",
    ),
    (
        Project::NewConcept,
        Phase::ProductionReady,
        "Full technical implementation post-validation",
    ),
];

/// Immutable lookup tables for phase profiles and project notes.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_profile: PhaseProfile,
    profiles: HashMap<Phase, PhaseProfile>,
    notes: HashMap<(Project, Phase), &'static str>,
}

impl Catalog {
    /// Build the catalog shipped with the tool.
    ///
    /// `production_ready` deliberately has no profile of its own.
    pub fn builtin() -> Self {
        let profiles = [MVP_VALIDATION, USER_TESTING, MARKET_PROOF]
            .into_iter()
            .map(|profile| (profile.phase, profile))
            .collect();

        let notes = PROJECT_NOTES
            .iter()
            .map(|&(project, phase, note)| ((project, phase), note))
            .collect();

        Self {
            default_profile: MVP_VALIDATION,
            profiles,
            notes,
        }
    }

    /// Resolve the profile for a phase id.
    ///
    /// Ids without a profile, including `production_ready` and anything
    /// unrecognised, resolve to the `mvp_validation` profile.
    pub fn lookup_phase(&self, phase_id: &str) -> &PhaseProfile {
        Phase::from_id(phase_id)
            .and_then(|phase| self.profiles.get(&phase))
            .unwrap_or(&self.default_profile)
    }

    /// Resolve the project-specific note for a project/phase pair.
    ///
    /// Returns [`NOTE_FALLBACK`] when either id is unknown or the pair has no entry.
    pub fn project_note(&self, project_id: &str, phase_id: &str) -> &'static str {
        let key = Project::from_id(project_id).zip(Phase::from_id(phase_id));
        key.and_then(|key| self.notes.get(&key).copied())
            .unwrap_or(NOTE_FALLBACK)
    }

    /// Whether the phase has its own profile rather than the fallback.
    pub fn has_profile(&self, phase: Phase) -> bool {
        self.profiles.contains_key(&phase)
    }
}
