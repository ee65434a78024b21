//! Strategy rendering.
//!
//! Four fixed strategies only substitute the concept. The custom strategy also
//! pulls the phase profile and project note from the [`Catalog`].

use chrono::{Local, NaiveDateTime};

use crate::catalog::Catalog;
use crate::templates::{self, fill};

/// Format of the timestamp embedded in custom strategies.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The five strategies a user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyKind {
    MvpSimulation,
    UserTest,
    MarketValidation,
    ProductionSwitch,
    Custom,
}

impl StrategyKind {
    /// Button order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::MvpSimulation,
        StrategyKind::UserTest,
        StrategyKind::MarketValidation,
        StrategyKind::ProductionSwitch,
        StrategyKind::Custom,
    ];

    /// Stable identifier used in logs.
    pub fn id(&self) -> &'static str {
        match self {
            Self::MvpSimulation => "mvp_simulation",
            Self::UserTest => "user_test",
            Self::MarketValidation => "market_validation",
            Self::ProductionSwitch => "production_switch",
            Self::Custom => "custom",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MvpSimulation => "🎯 MVP Simulation",
            Self::UserTest => "👥 User Test Fake",
            Self::MarketValidation => "📊 Market Validation",
            Self::ProductionSwitch => "🔥 Production Switch",
            Self::Custom => "🎭 Custom Strategy",
        }
    }

    /// Concept used when the user left the field blank.
    pub fn default_concept(&self) -> &'static str {
        match self {
            Self::MvpSimulation => "analyse audio intelligente",
            Self::UserTest => "outil productivité créative",
            Self::MarketValidation => "solution B2B innovative",
            Self::ProductionSwitch => "product validé par le marché",
            Self::Custom => "innovative solution",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Self::MvpSimulation => templates::MVP_SIMULATION,
            Self::UserTest => templates::USER_TEST,
            Self::MarketValidation => templates::MARKET_VALIDATION,
            Self::ProductionSwitch => templates::PRODUCTION_SWITCH,
            Self::Custom => templates::CUSTOM_STRATEGY,
        }
    }
}

/// Blank or whitespace-only input means "no concept".
/// Anything else is used as typed.
pub fn resolve_concept<'a>(input: &'a str, default: &'a str) -> &'a str {
    if input.trim().is_empty() {
        default
    } else {
        input
    }
}

/// Turn a phase id into a display title: `production_ready` -> `Production Ready`.
///
/// Works on arbitrary input so that ids the catalog does not know still render.
pub fn title_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut prev_alpha = false;
    for ch in id.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Fill one of the four concept-only templates.
fn render_fixed(kind: StrategyKind, concept: &str) -> String {
    let concept = resolve_concept(concept, kind.default_concept());
    fill(kind.template(), &[("concept", concept)])
}

fn bullet_list(marker: &str, items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("{} {}", marker, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders strategy documents against a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    catalog: &'a Catalog,
}

impl<'a> Renderer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Render any strategy. Phase and project only matter for [`StrategyKind::Custom`].
    pub fn render(
        &self,
        kind: StrategyKind,
        phase_id: &str,
        project_id: &str,
        concept: &str,
    ) -> String {
        match kind {
            StrategyKind::MvpSimulation => self.render_mvp_simulation(concept),
            StrategyKind::UserTest => self.render_user_test(concept),
            StrategyKind::MarketValidation => self.render_market_validation(concept),
            StrategyKind::ProductionSwitch => self.render_production_switch(concept),
            StrategyKind::Custom => self.render_custom(phase_id, project_id, concept),
        }
    }

    /// Same as [`Renderer::render`] with an explicit clock.
    pub fn render_at(
        &self,
        kind: StrategyKind,
        phase_id: &str,
        project_id: &str,
        concept: &str,
        now: NaiveDateTime,
    ) -> String {
        match kind {
            StrategyKind::MvpSimulation => self.render_mvp_simulation(concept),
            StrategyKind::UserTest => self.render_user_test(concept),
            StrategyKind::MarketValidation => self.render_market_validation(concept),
            StrategyKind::ProductionSwitch => self.render_production_switch(concept),
            StrategyKind::Custom => self.render_custom_at(phase_id, project_id, concept, now),
        }
    }

    pub fn render_mvp_simulation(&self, concept: &str) -> String {
        render_fixed(StrategyKind::MvpSimulation, concept)
    }

    pub fn render_user_test(&self, concept: &str) -> String {
        render_fixed(StrategyKind::UserTest, concept)
    }

    pub fn render_market_validation(&self, concept: &str) -> String {
        render_fixed(StrategyKind::MarketValidation, concept)
    }

    pub fn render_production_switch(&self, concept: &str) -> String {
        render_fixed(StrategyKind::ProductionSwitch, concept)
    }

    /// Render the catalog-driven strategy stamped with the current local time.
    pub fn render_custom(&self, phase_id: &str, project_id: &str, concept: &str) -> String {
        self.render_custom_at(phase_id, project_id, concept, Local::now().naive_local())
    }

    pub fn render_custom_at(
        &self,
        phase_id: &str,
        project_id: &str,
        concept: &str,
        now: NaiveDateTime,
    ) -> String {
        let profile = self.catalog.lookup_phase(phase_id);
        let note = self.catalog.project_note(project_id, phase_id);
        let concept = resolve_concept(concept, StrategyKind::Custom.default_concept());
        let phase_title = title_case(phase_id);
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        let advantages = bullet_list("✅", profile.fake_advantages);
        let techniques = bullet_list("🎭", profile.fake_techniques);

        fill(
            StrategyKind::Custom.template(),
            &[
                ("concept", concept),
                ("project", project_id),
                ("phase_title", phase_title.as_str()),
                ("timestamp", timestamp.as_str()),
                ("advantages", advantages.as_str()),
                ("techniques", techniques.as_str()),
                ("real_trigger", profile.real_trigger),
                ("transition_signal", profile.transition_signal),
                ("project_note", note),
            ],
        )
    }
}
