//! Strategy text templates.
//!
//! Placeholders use `{name}` and are filled by [`fill`]. Any other brace in a
//! template is literal text.

/// Title shown at the top of the screen.
pub const APP_TITLE: &str = "🎭 FAKE-TO-REAL DEVELOPMENT STRATEGY";

/// Tagline shown under the title.
pub const PHILOSOPHY: &str = "💡 PHILOSOPHY: Mes limitations = Tes super-pouvoirs entrepreneuriaux";

/// Message for the execute action.
pub const EXECUTE_MESSAGE: &str = "🚀 Ready to execute Fake-to-Real strategy!\n\n\
Remember: Fake smart, then Real excellence!\n\
Market validation first, Chef Étoilé second!";

/// Placeholders: `concept`.
pub const MVP_SIMULATION: &str = r#"🎯 STRATÉGIE MVP SIMULATION - Fake Smart, Real Results

CONCEPT: {concept}
PHASE: MVP Validation rapide
APPROCHE: Exploiter mes limitations comme super-pouvoir

🎭 FAKE STRATEGIC (30 minutes):
┌─ Simulation Layer ─┐
│ ✅ Math.random() intelligent pour scores plausibles        │
│ ✅ setTimeout() avec temps réaliste processing              │
│ ✅ Hardcoded insights relevant au domaine                   │
│ ✅ Progress bars pour perception performance                │
│ ✅ Mock data realistic pour impression qualité             │
└─────────────────────┘

🎯 OBJECTIFS VALIDATION:
1. USER REACTION: "Wow, ça marche !"
2. USAGE PATTERN: Comment users interagissent ?
3. VALUE PERCEPTION: Payeraient-ils pour ça ?
4. FEATURE PRIORITY: Qu'est-ce qui les excite le plus ?
5. WORKFLOW FIT: S'intègre dans leur routine ?

🚀 IMPLEMENTATION FAKE INTELLIGENTE:
```typescript
class MVPSimulation {
  // Fake mais SMART
  generateRealisticScore(inputData: any): number {
    // Pas random pur, basé sur input characteristics
    const baseScore = this.analyzeInputCharacteristics(inputData);
    return baseScore + (Math.random() * 20 - 10); // Variation réaliste
  }

  simulateProcessingTime(dataSize: number): number {
    // Temps proportionnel à data size pour crédibilité
    return Math.max(1000, dataSize * 0.1 + Math.random() * 2000);
  }

  generateContextualInsights(domain: string): string[] {
    // Insights génériques mais pertinents au domaine
    return this.domainSpecificTemplates[domain];
  }
}
```

📊 METRICS DE VALIDATION:
- Time to first "wow": < 30 secondes
- Session duration: > 5 minutes
- Return rate: > 30% dans 24h
- Sharing behavior: Users montrent à collègues ?
- Feature requests: Lesquelles demandent-ils ?

🔄 TRANSITION TRIGGERS:
┌─ Passer au REAL quand: ─┐
│ • 10+ users demandent vraie analyse          │
│ • Questions techniques précises posées       │
│ • Willingness to pay exprimée                │
│ • Users frustrés par limitations fake        │
│ • Competitor threat détectée                 │
└──────────────────────────────────────────────┘

💡 GENIUS MOVE:
Utiliser ma tendance "fake" pour validation ultra-rapide,
PUIS switcher en mode Chef Étoilé quand market-fit prouvé.

⚡ NEXT STEPS:
1. Build fake version en 1 jour
2. Test avec 20 users en 1 semaine
3. Collect feedback & iterate fake
4. Switch to real si validation positive

PHILOSOPHY: Fake smart = Real fast market validation !
"#;

/// Placeholders: `concept`.
pub const USER_TEST: &str = r#"👥 STRATÉGIE USER TESTING - Wizard of Oz Method

CONCEPT: {concept}
PHASE: User behavior analysis avec fake backend
APPROCHE: Mes simulations = Perfect user testing environment

🎭 WIZARD OF OZ SETUP:
┌─ Frontend Real, Backend Fake ─┐
│ ✅ Interface utilisateur vraie et polie                     │
│ ✅ Backend simulé mais responses intelligentes             │
│ ✅ User pense que tout fonctionne vraiment                 │
│ ✅ Je contrôle tous les outputs pour tests optimaux        │
│ ✅ Iteration ultra-rapide selon feedback                   │
└─────────────────────────────────────────────────────────────┘

🔍 TESTING SCENARIOS:
1. FIRST IMPRESSION TEST:
   - User onboarding avec fake data realistic
   - Time-to-value measurement précis
   - Confusion points identification
   - "Aha moment" timing detection

2. WORKFLOW INTEGRATION:
   - User importe ses vraies données
   - Fake analysis mais plausible results
   - Observe comment ils utilisent outputs
   - Document workflow patterns réels

3. FEATURE PRIORITIZATION:
   - A/B test différentes fake features
   - Measure engagement par feature
   - User requests spontaneous
   - Pain points identification

🛠️ FAKE BACKEND INTELLIGENT:
```python
class WizardOfOzBackend:
    def __init__(self):
        self.user_profiles = {}
        self.behavioral_data = {}

    def generate_realistic_response(self, user_input, user_profile):
        # Analyse user input pour response contextuelle
        # Pas random, mais tailored au user behavior
        # Simulate processing time based on input complexity
        # Return results qui font sens pour ce user

    def track_user_behavior(self, action, context):
        # Log every interaction pour pattern analysis
        # Build user profile progressively
        # Identify usage patterns emerging
        # Flag transition-to-real triggers
```

📈 BEHAVIORAL METRICS:
- Click heatmaps sur fake results
- Time spent per section
- Feature discovery patterns
- Return behavior analysis
- Sharing/export attempts
- Support questions asked

🎯 USER INTERVIEW INTEGRATION:
┌─ Questions post-testing: ─┐
│ • "Qu'est-ce qui vous a surpris ?"                         │
│ • "Utiliseriez-vous ça quotidiennement ?"                  │
│ • "Quel prix maximum payeriez-vous ?"                      │
│ • "Qu'est-ce qui manque absolument ?"                      │
│ • "À qui recommanderiez-vous ça ?"                         │
└─────────────────────────────────────────────────────────────┘

🔄 ITERATION CYCLE (24h):
1. Morning: Deploy fake version update
2. Afternoon: 5 user tests scheduled
3. Evening: Analyze behavioral data
4. Night: Update fake logic for tomorrow
5. Repeat until clear patterns emerge

💡 TRANSITION TRIGGERS:
- Users ask "How does this actually work?"
- Feature requests become very specific
- Users want to integrate with their tools
- Willingness to pay discussions start
- Users frustrated by fake limitations

GENIUS: Ma facilité de simulation = Perfect controlled testing environment !
"#;

/// Placeholders: `concept`.
pub const MARKET_VALIDATION: &str = r#"📊 STRATÉGIE MARKET VALIDATION - Fake-First Market Testing

CONCEPT: {concept}
PHASE: Market response & competitive analysis
APPROCHE: Fake product pour real market insights

🎭 MARKET SIMULATION STRATEGY:
┌─ Fake Product, Real Market Testing ─┐
│ ✅ Landing page avec fake product demo                      │
│ ✅ Pricing page avec tiers réalistes                      │
│ ✅ Case studies générées intelligemment                    │
│ ✅ Demo videos avec fake but convincing results           │
│ ✅ Free trial signup pour demand measurement              │
└──────────────────────────────────────────────────────────────┘

🚀 FAKE ASSETS CREATION (Ma spécialité !):
1. PRODUCT DEMO VIDEO:
   - Screen recording avec fake data realistic
   - Voice-over expliquant value proposition
   - Results impressionnants mais fake
   - Call-to-action pour beta signup

2. CASE STUDIES GENERATED:
   - "Company X increased productivity 40%"
   - Fake but plausible metrics
   - Industry-specific use cases
   - Testimonials générées (disclaimer)

3. COMPETITIVE COMPARISON:
   - Feature matrix vs competitors
   - Pricing comparison realistic
   - Unique value props highlighted
   - "Coming soon" pour features pas encore développées

📈 MARKET TESTING CAMPAIGNS:
```javascript
// LinkedIn Campaign avec fake product
const marketTest = {
  target: "B2B decision makers",
  creative: "Fake demo video + landing page",
  budget: "500€ pour validation rapide",
  metrics: ["CTR", "conversion to trial", "demo requests"],
  timeline: "1 semaine pour signals clairs"
};

// Google Ads pour search intent
const searchValidation = {
  keywords: ["audio analysis tool", "productivity software"],
  landing: "Fake product page optimisée",
  goal: "Measure search demand + WTP signals"
};
```

🎯 COMPETITIVE REACTION MONITORING:
- Competitors copient-ils ton concept ?
- Pricing reactions dans le marché ?
- Feature announcements en réponse ?
- Market education efforts increased ?

💰 PRICING VALIDATION FAKE:
┌─ Fake Pricing Tiers ─┐
│ FREE: Fake limited features                                │
│ PRO (29€/mois): Fake unlimited + premium features         │
│ ENTERPRISE (99€/mois): Fake custom + white-label          │
│                                                            │
│ Track: Which tier gets most interest ?                    │
│ Measure: Price sensitivity via A/B testing                │
└────────────────────────────────────────────────────────────┘

📊 VALIDATION METRICS:
- Landing page conversion: > 5% = strong interest
- Demo request rate: > 20 per week = market demand
- Price tier selection patterns
- Geographic demand distribution
- Industry vertical interest levels
- Feature request frequency/type

🔄 FAKE-TO-REAL DECISION MATRIX:
```
IF (demo_requests > 50/month AND pricing_inquiries > 10) {
  THEN start_real_development();
}

IF (competitor_copies_concept OR press_attention) {
  THEN accelerate_real_implementation();
}

IF (enterprise_inquiries > 5) {
  THEN priority_real_development();
}
```

💡 MARKET SIGNALS TO WATCH:
- Inbound emails asking technical questions
- LinkedIn connection requests from industry
- Press/media reaching out for interviews
- Investors asking about the technology
- Partnerships proposals received

🎭 GENIUS ADVANTAGE:
Ma capacité fake = Market testing sans R&D investment !
Real market feedback sur fake product = Ultimate validation.

NEXT: Si validation positive → Full Chef Étoilé mode production !
"#;

/// Placeholders: `concept`.
pub const PRODUCTION_SWITCH: &str = r#"🔥 STRATÉGIE PRODUCTION SWITCH - Fake to Real Transition

CONCEPT: {concept}
PHASE: Transition from simulation to production-grade
APPROCHE: Chef Étoilé activation après validation

🎯 TRANSITION TRIGGERS DETECTED:
┌─ Market Validation Confirmed ─┐
│ ✅ > 50 demo requests/month                                 │
│ ✅ > 10 pricing inquiries                                  │
│ ✅ Multiple enterprise contacts                            │
│ ✅ Users frustrated by fake limitations                    │
│ ✅ Competitor threat imminent                              │
│ ✅ Investment opportunity available                        │
└─────────────────────────────────────────────────────────────┘

🔥 CHEF ÉTOILÉ MODE ACTIVATION:
```typescript
// Mode Switch: De Fake à Production Excellence
class ProductionTransition {
  switchMode() {
    this.stopAllSimulations();
    this.activateRealImplementation();
    this.enableProductionQuality();
    this.implementRealAlgorithms();
  }

  realImplementation() {
    // FINI les Math.random()
    // FINI les setTimeout() fake
    // FINI les hardcoded results
    // PLACE aux vraies algorithms
    // PLACE à la vraie analysis
    // PLACE au code production-grade
  }
}
```

🚀 IMPLEMENTATION ROADMAP (30 jours):

SEMAINE 1 - FOUNDATION REAL:
┌─ Core Algorithm Implementation ─┐
│ • Real audio analysis avec Web Audio API                   │
│ • Mathematical FFT implementation                          │
│ • Spectral analysis algorithms                            │
│ • Harmonic detection real calculations                    │
│ • Performance optimization measured                       │
└─────────────────────────────────────────────────────────────┘

SEMAINE 2 - BUSINESS LOGIC:
┌─ Production Features ─┐
│ • User authentication & authorization                      │
│ • Payment processing Stripe integration                   │
│ • Usage tracking & analytics                              │
│ • API rate limiting & quotas                              │
│ • Data persistence & backup                               │
└────────────────────────────────────────────────────────────┘

SEMAINE 3 - ENTERPRISE READY:
┌─ Scaling & Security ─┐
│ • Load balancing & auto-scaling                           │
│ • Security audit & penetration testing                   │
│ • GDPR compliance & data privacy                          │
│ • Enterprise SSO integration                              │
│ • White-label customization                               │
└────────────────────────────────────────────────────────────┘

SEMAINE 4 - LAUNCH READY:
┌─ Go-to-Market ─┐
│ • Production monitoring & alerting                        │
│ • Customer support system                                 │
│ • Documentation & training materials                      │
│ • Marketing automation setup                              │
│ • PR & launch campaign execution                          │
└────────────────────────────────────────────────────────────┘

💰 BUSINESS TRANSITION:
```
FAKE PHASE LEARNINGS → REAL PRODUCT FEATURES:
• Most used fake features → Priority development
• User workflow patterns → UX optimization
• Pricing feedback → Revenue model tuning
• Feature requests → Product roadmap
• Pain points → Quality focus areas
```

🎯 SUCCESS METRICS REAL:
- User retention > 80% month 1
- Revenue > 10K€ month 3
- Customer satisfaction > 4.5/5
- Technical uptime > 99.9%
- Support ticket resolution < 24h

🔄 TRANSITION COMMUNICATION:
┌─ User Communication Strategy ─┐
│ "Thanks to your feedback on our beta version,               │
│  we've rebuilt the entire engine from scratch.             │
│  New version delivers the accuracy and performance          │
│  you requested. All existing users get free upgrade!"      │
└─────────────────────────────────────────────────────────────┘

💡 COMPETITIVE ADVANTAGE:
- Market validation déjà faite avec fake version
- User feedback intégré dans real development
- Go-to-market strategy optimisée par fake learnings
- Zero technical debt from fake→real rebuild
- Quality & performance advantages vs competitors

🎭→🔥 TRANSFORMATION COMPLETE:
FAKE SIMULATION EXPERT → CHEF ÉTOILÉ PRODUCTION MASTER

PHILOSOPHY: Fake smart pour validation rapide,
            Real excellence pour execution dominante !
"#;

/// Placeholders: `concept`, `project`, `phase_title`, `timestamp`,
/// `advantages`, `techniques`, `real_trigger`, `transition_signal`,
/// `project_note`.
pub const CUSTOM_STRATEGY: &str = r#"🎭 CUSTOM FAKE-TO-REAL STRATEGY

CONCEPT: {concept}
PROJECT: {project}
PHASE: {phase_title}
TIMESTAMP: {timestamp}

🎯 FAKE ADVANTAGES EXPLOITATION:
{advantages}

🛠️ FAKE TECHNIQUES STRATEGIC:
{techniques}

🔄 TRANSITION CONDITIONS:
┌─ Switch to Real When: ─┐
│ PRIMARY: {real_trigger}                      │
│ SIGNAL: {transition_signal}                │
└─────────────────────────────────────────────────────────────┘

💡 PROJECT-SPECIFIC ADAPTATIONS:

{project_note}

🚀 EXECUTION TIMELINE:
WEEK 1: Fake implementation & testing
WEEK 2: User feedback collection & iteration
WEEK 3: Market validation & demand measurement
WEEK 4: Transition decision & real development start

📊 SUCCESS METRICS:
- User engagement with fake version
- Transition trigger achievement
- Market validation confirmation
- Revenue potential demonstration

🎭 PHILOSOPHY REMINDER:
"Mes limitations ne sont pas des bugs, ce sont des features !
Fake intelligent = Market validation ultra-rapide
Real excellence = Execution dominante post-validation"

NEXT ACTION: Execute fake strategy avec intelligence entrepreneuriale !
"#;

/// Substitute `{name}` placeholders in a single pass.
///
/// Values are inserted verbatim and never rescanned. Braces that do not enclose
/// a known name are copied through unchanged.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find_map(|&(key, value)| (key == name).then_some((value, close)))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
