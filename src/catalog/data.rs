//! The built-in Verident catalog.
//!
//! Four targeted toothpastes, three bamboo toothbrushes, five questions,
//! and the issue→product mapping the resolver reads. Content mirrors the
//! authored product sheets; nothing here is computed.

use std::collections::BTreeMap;

use super::Catalog;
use super::model::{
    AnswerOption, BrandInfo, Category, Disclaimer, IssueMapping, Product, ProductKind, ProfileKey,
    Question, RecommendationRule,
};
use crate::classifier::PrimaryIssue;

/// Id of the question whose answer is the explicit primary-issue selection.
pub const PRIMARY_QUESTION_ID: &str = "q1";

/// Toothbrush excluded from the alternative slot regardless of the chosen
/// brush (firm bristles are a poor generic alternative).
pub const EXCLUDED_ALT_TOOTHBRUSH: &str = "tb-firm";

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Catalog {
    /// Build the built-in Verident catalog.
    pub fn verident() -> Self {
        Self {
            brand: BrandInfo {
                agent_name: "TimTim".into(),
                brand_name: "Verident".into(),
                tagline: "Sustainable Smiles, Naturally".into(),
                description:
                    "AI-personalized, eco-friendly oral care that targets your specific needs"
                        .into(),
                target_issues: strs(&["Sensitivity", "Plaque", "Oral Ulcers", "Bad Breath"]),
            },
            categories: categories(),
            questions: questions(),
            toothpaste: toothpaste(),
            toothbrush: toothbrush(),
            mappings: mappings(),
            rules: rules(),
            greetings: greetings(),
            transitions: transitions(),
            disclaimer: Disclaimer {
                text: "TimTim provides guidance for common oral care concerns. For persistent \
                       or severe symptoms, please consult a dental professional."
                    .into(),
                scope: "This recommendation is designed for: Sensitivity, Plaque, Oral Ulcers, \
                        and Bad Breath only."
                    .into(),
            },
        }
    }
}

fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "primary-issue".into(),
            name: "Primary Concern".into(),
            icon: "🎯".into(),
            description: "Your main oral health issue".into(),
        },
        Category {
            id: "frequency".into(),
            name: "Frequency".into(),
            icon: "📅".into(),
            description: "How often you experience this".into(),
        },
        Category {
            id: "triggers".into(),
            name: "Triggers".into(),
            icon: "⚡".into(),
            description: "What triggers your symptoms".into(),
        },
        Category {
            id: "severity".into(),
            name: "Severity".into(),
            icon: "📊".into(),
            description: "Impact on daily life".into(),
        },
        Category {
            id: "preferences".into(),
            name: "Preferences".into(),
            icon: "🌿".into(),
            description: "Your brushing preferences".into(),
        },
    ]
}

fn questions() -> Vec<Question> {
    vec![
        Question {
            id: "q1".into(),
            category_id: "primary-issue".into(),
            text: "What is your primary oral health concern that you want to address?".into(),
            options: vec![
                AnswerOption {
                    id: "q1-a".into(),
                    label: "Tooth Sensitivity".into(),
                    value: "sensitivity".into(),
                    emoji: "🦷".into(),
                    score: 10,
                    profile_key: ProfileKey::Sensitivity,
                    description: Some(
                        "Pain or discomfort with hot, cold, or sweet foods".into(),
                    ),
                },
                AnswerOption {
                    id: "q1-b".into(),
                    label: "Plaque Buildup".into(),
                    value: "plaque".into(),
                    emoji: "🪥".into(),
                    score: 10,
                    profile_key: ProfileKey::Plaque,
                    description: Some("Film on teeth, tartar, or yellowing".into()),
                },
                AnswerOption {
                    id: "q1-c".into(),
                    label: "Oral Ulcers / Mouth Sores".into(),
                    value: "ulcers".into(),
                    emoji: "😣".into(),
                    score: 10,
                    profile_key: ProfileKey::Ulcers,
                    description: Some("Recurring mouth sores or canker sores".into()),
                },
                AnswerOption {
                    id: "q1-d".into(),
                    label: "Bad Breath".into(),
                    value: "badBreath".into(),
                    emoji: "💨".into(),
                    score: 10,
                    profile_key: ProfileKey::BadBreath,
                    description: Some(
                        "Persistent unpleasant breath despite brushing".into(),
                    ),
                },
            ],
        },
        Question {
            id: "q2".into(),
            category_id: "frequency".into(),
            text: "How often do you experience this issue?".into(),
            options: vec![
                AnswerOption {
                    id: "q2-a".into(),
                    label: "Daily / Multiple times a day".into(),
                    value: "daily".into(),
                    emoji: "🔴".into(),
                    score: 10,
                    profile_key: ProfileKey::Frequency,
                    description: None,
                },
                AnswerOption {
                    id: "q2-b".into(),
                    label: "Several times a week".into(),
                    value: "weekly".into(),
                    emoji: "🟠".into(),
                    score: 7,
                    profile_key: ProfileKey::Frequency,
                    description: None,
                },
                AnswerOption {
                    id: "q2-c".into(),
                    label: "Occasionally / Monthly".into(),
                    value: "monthly".into(),
                    emoji: "🟡".into(),
                    score: 4,
                    profile_key: ProfileKey::Frequency,
                    description: None,
                },
                AnswerOption {
                    id: "q2-d".into(),
                    label: "Rarely".into(),
                    value: "rarely".into(),
                    emoji: "🟢".into(),
                    score: 1,
                    profile_key: ProfileKey::Frequency,
                    description: None,
                },
            ],
        },
        Question {
            id: "q3".into(),
            category_id: "triggers".into(),
            text: "What typically triggers or worsens your symptoms?".into(),
            options: vec![
                AnswerOption {
                    id: "q3-a".into(),
                    label: "Hot or cold foods/drinks".into(),
                    value: "temperature".into(),
                    emoji: "🧊".into(),
                    score: 8,
                    profile_key: ProfileKey::Trigger,
                    description: None,
                },
                AnswerOption {
                    id: "q3-b".into(),
                    label: "Sugary or acidic foods".into(),
                    value: "diet".into(),
                    emoji: "🍬".into(),
                    score: 6,
                    profile_key: ProfileKey::Trigger,
                    description: None,
                },
                AnswerOption {
                    id: "q3-c".into(),
                    label: "Stress or lack of sleep".into(),
                    value: "stress".into(),
                    emoji: "😰".into(),
                    score: 7,
                    profile_key: ProfileKey::Trigger,
                    description: None,
                },
                AnswerOption {
                    id: "q3-d".into(),
                    label: "Not sure / Multiple factors".into(),
                    value: "unknown".into(),
                    emoji: "🤷".into(),
                    score: 5,
                    profile_key: ProfileKey::Trigger,
                    description: None,
                },
            ],
        },
        Question {
            id: "q4".into(),
            category_id: "severity".into(),
            text: "How much does this issue affect your daily comfort and confidence?".into(),
            options: vec![
                AnswerOption {
                    id: "q4-a".into(),
                    label: "Significantly - affects eating, speaking, or social situations"
                        .into(),
                    value: "high".into(),
                    emoji: "😔".into(),
                    score: 10,
                    profile_key: ProfileKey::Severity,
                    description: None,
                },
                AnswerOption {
                    id: "q4-b".into(),
                    label: "Moderately - noticeable but manageable".into(),
                    value: "medium".into(),
                    emoji: "😐".into(),
                    score: 6,
                    profile_key: ProfileKey::Severity,
                    description: None,
                },
                AnswerOption {
                    id: "q4-c".into(),
                    label: "Mildly - occasional discomfort".into(),
                    value: "low".into(),
                    emoji: "🙂".into(),
                    score: 3,
                    profile_key: ProfileKey::Severity,
                    description: None,
                },
            ],
        },
        Question {
            id: "q5".into(),
            category_id: "preferences".into(),
            text: "How would you describe your ideal brushing experience?".into(),
            options: vec![
                AnswerOption {
                    id: "q5-a".into(),
                    label: "Extra gentle - I have sensitive gums".into(),
                    value: "soft".into(),
                    emoji: "🪶".into(),
                    score: 0,
                    profile_key: ProfileKey::BristlePreference,
                    description: None,
                },
                AnswerOption {
                    id: "q5-b".into(),
                    label: "Balanced - gentle yet effective".into(),
                    value: "mild".into(),
                    emoji: "⚖️".into(),
                    score: 5,
                    profile_key: ProfileKey::BristlePreference,
                    description: None,
                },
                AnswerOption {
                    id: "q5-c".into(),
                    label: "Thorough - I want deep cleaning".into(),
                    value: "firm".into(),
                    emoji: "💪".into(),
                    score: 10,
                    profile_key: ProfileKey::BristlePreference,
                    description: None,
                },
            ],
        },
    ]
}

fn toothpaste() -> Vec<Product> {
    vec![
        Product {
            id: "tp-sensitivity".into(),
            name: "Verident SensiShield".into(),
            brand: "Verident".into(),
            kind: ProductKind::Toothpaste,
            price: "₹299".into(),
            rating: 5,
            features: strs(&["Sensitivity Relief", "Enamel Repair", "Nerve Protection"]),
            target_issue: Some(PrimaryIssue::Sensitivity),
            best_for: Vec::new(),
            doctor_score: 10,
            description: "Clinically formulated for sensitive teeth. Builds a protective \
                          barrier over exposed nerves."
                .into(),
            ingredients: strs(&[
                "Potassium Nitrate (5%)",
                "Nano Hydroxyapatite",
                "Aloe Vera",
                "Chamomile Extract",
                "Fluoride (1000 ppm)",
                "Xylitol",
            ]),
            material: None,
            packaging: Some("Recyclable Aluminium Tube".into()),
            sustainable: true,
            vegan: true,
            why_it_works: "Potassium nitrate blocks pain signals from nerves, while nano \
                           hydroxyapatite repairs microscopic enamel damage."
                .into(),
            trade_offs: "Gentler formula means slightly less whitening power.".into(),
        },
        Product {
            id: "tp-plaque".into(),
            name: "Verident PlaqueGuard".into(),
            brand: "Verident".into(),
            kind: ProductKind::Toothpaste,
            price: "₹279".into(),
            rating: 5,
            features: strs(&["Anti-Plaque", "Tartar Control", "Deep Clean"]),
            target_issue: Some(PrimaryIssue::Plaque),
            best_for: Vec::new(),
            doctor_score: 10,
            description: "Powerful plaque-fighting formula that prevents tartar buildup \
                          without harsh chemicals."
                .into(),
            ingredients: strs(&[
                "Zinc Citrate",
                "Pyrophosphates",
                "Tea Tree Oil",
                "Bamboo Charcoal",
                "Silica",
                "Natural Mint",
            ]),
            material: None,
            packaging: Some("Recyclable Aluminium Tube".into()),
            sustainable: true,
            vegan: true,
            why_it_works: "Zinc citrate disrupts bacterial biofilm formation, while \
                           pyrophosphates prevent tartar crystallization."
                .into(),
            trade_offs: "May feel slightly more abrasive than sensitivity formulas.".into(),
        },
        Product {
            id: "tp-ulcers".into(),
            name: "Verident SootheCare".into(),
            brand: "Verident".into(),
            kind: ProductKind::Toothpaste,
            price: "₹319".into(),
            rating: 5,
            features: strs(&["Ulcer Relief", "Gentle Formula", "Healing Support"]),
            target_issue: Some(PrimaryIssue::Ulcers),
            best_for: Vec::new(),
            doctor_score: 10,
            description: "Ultra-gentle formula designed for mouths prone to ulcers and \
                          sores. SLS-free to prevent irritation."
                .into(),
            ingredients: strs(&[
                "Aloe Vera Gel",
                "Licorice Root Extract",
                "Vitamin E",
                "Calendula",
                "Coconut Oil",
                "Mild Mint",
            ]),
            material: None,
            packaging: Some("Recyclable Aluminium Tube".into()),
            sustainable: true,
            vegan: true,
            why_it_works: "SLS-free formula prevents irritation. Licorice root has natural \
                           anti-inflammatory properties that promote healing."
                .into(),
            trade_offs: "Milder foaming action than traditional toothpastes.".into(),
        },
        Product {
            id: "tp-breath".into(),
            name: "Verident FreshMint Pro".into(),
            brand: "Verident".into(),
            kind: ProductKind::Toothpaste,
            price: "₹269".into(),
            rating: 5,
            features: strs(&["12-Hour Freshness", "Bacteria Control", "Odor Neutralizer"]),
            target_issue: Some(PrimaryIssue::BadBreath),
            best_for: Vec::new(),
            doctor_score: 10,
            description: "Targets the bacteria that cause bad breath at the source. \
                          Long-lasting freshness without masking."
                .into(),
            ingredients: strs(&[
                "Zinc Gluconate",
                "Chlorophyll",
                "Green Tea Extract",
                "Eucalyptus Oil",
                "Spearmint",
                "Probiotics",
            ]),
            material: None,
            packaging: Some("Recyclable Aluminium Tube".into()),
            sustainable: true,
            vegan: true,
            why_it_works: "Zinc neutralizes sulfur compounds that cause odor. Probiotics \
                           restore healthy oral bacteria balance."
                .into(),
            trade_offs: "Strong mint flavor may be intense for some users.".into(),
        },
    ]
}

fn toothbrush() -> Vec<Product> {
    vec![
        Product {
            id: "tb-soft".into(),
            name: "Verident Bamboo Soft".into(),
            brand: "Verident".into(),
            kind: ProductKind::Toothbrush,
            price: "₹149".into(),
            rating: 5,
            features: strs(&["Ultra Soft Bristles", "100% Bamboo", "Gentle on Gums"]),
            target_issue: None,
            best_for: strs(&["sensitivity", "ulcers"]),
            doctor_score: 10,
            description: "Extra gentle bristles ideal for sensitive teeth, gum issues, or \
                          mouth ulcers."
                .into(),
            ingredients: Vec::new(),
            material: Some("Moso Bamboo Handle + Charcoal-Infused Soft Nylon Bristles".into()),
            packaging: None,
            sustainable: true,
            vegan: false,
            why_it_works: "Soft bristles prevent enamel wear and gum irritation while still \
                           effectively removing plaque."
                .into(),
            trade_offs: "May require slightly more brushing time for heavy plaque.".into(),
        },
        Product {
            id: "tb-mild".into(),
            name: "Verident Bamboo Mild".into(),
            brand: "Verident".into(),
            kind: ProductKind::Toothbrush,
            price: "₹149".into(),
            rating: 5,
            features: strs(&["Medium-Soft Bristles", "100% Bamboo", "Everyday Balance"]),
            target_issue: None,
            best_for: strs(&["badBreath", "general"]),
            doctor_score: 10,
            description: "Perfect balance of gentle care and effective cleaning for daily \
                          use."
                .into(),
            ingredients: Vec::new(),
            material: Some("Moso Bamboo Handle + Plant-Based Medium-Soft Bristles".into()),
            packaging: None,
            sustainable: true,
            vegan: false,
            why_it_works: "Balanced bristle firmness provides thorough cleaning without \
                           being harsh on healthy gums."
                .into(),
            trade_offs: "Not recommended for very sensitive teeth or active ulcers.".into(),
        },
        Product {
            id: "tb-firm".into(),
            name: "Verident Bamboo Firm".into(),
            brand: "Verident".into(),
            kind: ProductKind::Toothbrush,
            price: "₹149".into(),
            rating: 5,
            features: strs(&["Firm Bristles", "100% Bamboo", "Deep Plaque Removal"]),
            target_issue: None,
            best_for: strs(&["plaque"]),
            doctor_score: 9,
            description: "Firm bristles for thorough plaque and tartar removal. Best for \
                          those without sensitivity."
                .into(),
            ingredients: Vec::new(),
            material: Some("Moso Bamboo Handle + Activated Charcoal Firm Bristles".into()),
            packaging: None,
            sustainable: true,
            vegan: false,
            why_it_works: "Firmer bristles physically disrupt and remove stubborn plaque \
                           more effectively."
                .into(),
            trade_offs: "Not suitable for sensitive teeth or gums. Use with gentle pressure."
                .into(),
        },
    ]
}

fn mappings() -> Vec<IssueMapping> {
    vec![
        IssueMapping {
            issue: PrimaryIssue::Sensitivity,
            toothpaste_id: "tp-sensitivity".into(),
            toothbrush_id: "tb-soft".into(),
            explanation: "For sensitivity, we recommend our SensiShield formula with \
                          potassium nitrate that blocks pain signals, paired with \
                          ultra-soft bristles that won't aggravate exposed nerves."
                .into(),
        },
        IssueMapping {
            issue: PrimaryIssue::Plaque,
            toothpaste_id: "tp-plaque".into(),
            toothbrush_id: "tb-firm".into(),
            explanation: "For plaque control, our PlaqueGuard with zinc citrate actively \
                          fights bacterial biofilm, and firm bristles provide the \
                          mechanical action needed to disrupt plaque buildup."
                .into(),
        },
        IssueMapping {
            issue: PrimaryIssue::Ulcers,
            toothpaste_id: "tp-ulcers".into(),
            toothbrush_id: "tb-soft".into(),
            explanation: "For mouth ulcers, our SLS-free SootheCare formula prevents \
                          irritation while licorice root promotes healing. Soft bristles \
                          avoid aggravating sensitive areas."
                .into(),
        },
        IssueMapping {
            issue: PrimaryIssue::BadBreath,
            toothpaste_id: "tp-breath".into(),
            toothbrush_id: "tb-mild".into(),
            explanation: "For bad breath, FreshMint Pro targets odor-causing bacteria with \
                          zinc and probiotics for lasting freshness. Medium bristles \
                          provide thorough tongue and tooth cleaning."
                .into(),
        },
    ]
}

fn rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule {
            id: "rule-sensitivity".into(),
            name: "Sensitivity Care".into(),
            primary_issue: PrimaryIssue::Sensitivity,
            toothpaste_ids: strs(&["tp-sensitivity"]),
            toothbrush_ids: strs(&["tb-soft"]),
            priority: 10,
        },
        RecommendationRule {
            id: "rule-plaque".into(),
            name: "Plaque Control".into(),
            primary_issue: PrimaryIssue::Plaque,
            toothpaste_ids: strs(&["tp-plaque"]),
            toothbrush_ids: strs(&["tb-firm"]),
            priority: 10,
        },
        RecommendationRule {
            id: "rule-ulcers".into(),
            name: "Ulcer Relief".into(),
            primary_issue: PrimaryIssue::Ulcers,
            toothpaste_ids: strs(&["tp-ulcers"]),
            toothbrush_ids: strs(&["tb-soft"]),
            priority: 10,
        },
        RecommendationRule {
            id: "rule-breath".into(),
            name: "Fresh Breath".into(),
            primary_issue: PrimaryIssue::BadBreath,
            toothpaste_ids: strs(&["tp-breath"]),
            toothbrush_ids: strs(&["tb-mild"]),
            priority: 10,
        },
    ]
}

fn greetings() -> Vec<String> {
    strs(&[
        "Hi! 👋 I'm TimTim, your personal oral care advisor from Verident. I'll help you \
         find the right sustainable solution for your specific dental needs.",
        "Welcome to Verident! 🌿 I'm TimTim. Tell me about your oral health concerns, and \
         I'll recommend personalized, eco-friendly products just for you.",
        "Hello! I'm TimTim 🎋 I specialize in matching you with the right Verident products \
         for sensitivity, plaque, ulcers, or bad breath. Let's find your perfect match!",
    ])
}

fn transitions() -> BTreeMap<String, String> {
    let pairs = [
        (
            "primary-issue",
            "Thanks for sharing! Understanding your main concern helps me recommend the \
             most effective solution. 🎯",
        ),
        (
            "frequency",
            "Got it! Knowing how often you experience this helps me gauge the right \
             strength of care. 📅",
        ),
        (
            "triggers",
            "That's helpful! Understanding your triggers helps me recommend products that \
             address root causes. ⚡",
        ),
        (
            "severity",
            "I understand. I'll make sure to recommend something that provides the relief \
             you need. 💚",
        ),
        (
            "preferences",
            "Perfect! I now have everything I need to find your ideal Verident match. 🌿",
        ),
    ];
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
