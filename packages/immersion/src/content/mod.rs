//! Static mock content: immersive scenarios, vocabulary lists and cultural events.

use serde::Serialize;

use deutsch_algo::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tier: Tier,
    pub tags: &'static [&'static str],
    /// First line the conversation partner says
    pub opening_line: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub german: &'static str,
    pub english: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalEvent {
    pub id: &'static str,
    pub name: &'static str,
    pub month: u32,
    pub description: &'static str,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "cafe_ordering",
        title: "Im Café",
        description: "Order coffee and cake at a Berlin café.",
        tier: Tier::Beginner,
        tags: &["food", "everyday"],
        opening_line: "Guten Tag! Was darf ich Ihnen bringen?",
    },
    Scenario {
        id: "train_station",
        title: "Am Bahnhof",
        description: "Buy a ticket and find your platform at München Hauptbahnhof.",
        tier: Tier::Beginner,
        tags: &["travel"],
        opening_line: "Hallo! Wohin möchten Sie fahren?",
    },
    Scenario {
        id: "doctor_visit",
        title: "Beim Arzt",
        description: "Describe your symptoms to a doctor.",
        tier: Tier::Intermediate,
        tags: &["health"],
        opening_line: "Guten Morgen. Was fehlt Ihnen denn?",
    },
    Scenario {
        id: "job_interview",
        title: "Das Vorstellungsgespräch",
        description: "Introduce yourself in a job interview in Hamburg.",
        tier: Tier::Advanced,
        tags: &["business", "career"],
        opening_line: "Herzlich willkommen! Erzählen Sie doch etwas über sich.",
    },
    Scenario {
        id: "christmas_market",
        title: "Auf dem Weihnachtsmarkt",
        description: "Chat with stall owners at a Nuremberg Christmas market.",
        tier: Tier::Intermediate,
        tags: &["culture", "festivals", "food"],
        opening_line: "Frohe Weihnachten! Möchten Sie einen Glühwein probieren?",
    },
];

const CAFE_VOCABULARY: &[VocabularyItem] = &[
    VocabularyItem {
        german: "der Kaffee",
        english: "coffee",
        example: "Einen Kaffee, bitte.",
    },
    VocabularyItem {
        german: "der Kuchen",
        english: "cake",
        example: "Der Kuchen ist lecker.",
    },
    VocabularyItem {
        german: "die Rechnung",
        english: "the bill",
        example: "Die Rechnung, bitte.",
    },
    VocabularyItem {
        german: "bezahlen",
        english: "to pay",
        example: "Ich möchte bezahlen.",
    },
];

const STATION_VOCABULARY: &[VocabularyItem] = &[
    VocabularyItem {
        german: "die Fahrkarte",
        english: "ticket",
        example: "Eine Fahrkarte nach Berlin, bitte.",
    },
    VocabularyItem {
        german: "das Gleis",
        english: "platform",
        example: "Der Zug fährt von Gleis 5.",
    },
    VocabularyItem {
        german: "die Verspätung",
        english: "delay",
        example: "Der Zug hat Verspätung.",
    },
    VocabularyItem {
        german: "umsteigen",
        english: "to change trains",
        example: "Sie müssen in Köln umsteigen.",
    },
];

const DOCTOR_VOCABULARY: &[VocabularyItem] = &[
    VocabularyItem {
        german: "die Kopfschmerzen",
        english: "headache",
        example: "Ich habe Kopfschmerzen.",
    },
    VocabularyItem {
        german: "das Fieber",
        english: "fever",
        example: "Haben Sie Fieber?",
    },
    VocabularyItem {
        german: "das Rezept",
        english: "prescription",
        example: "Hier ist Ihr Rezept.",
    },
];

const INTERVIEW_VOCABULARY: &[VocabularyItem] = &[
    VocabularyItem {
        german: "die Erfahrung",
        english: "experience",
        example: "Ich habe fünf Jahre Erfahrung.",
    },
    VocabularyItem {
        german: "die Stärke",
        english: "strength",
        example: "Meine Stärke ist Teamarbeit.",
    },
    VocabularyItem {
        german: "das Gehalt",
        english: "salary",
        example: "Wie hoch ist das Gehalt?",
    },
];

const MARKET_VOCABULARY: &[VocabularyItem] = &[
    VocabularyItem {
        german: "der Glühwein",
        english: "mulled wine",
        example: "Ein Glühwein, bitte.",
    },
    VocabularyItem {
        german: "die Bratwurst",
        english: "grilled sausage",
        example: "Die Bratwurst schmeckt gut.",
    },
    VocabularyItem {
        german: "das Geschenk",
        english: "gift",
        example: "Ich suche ein Geschenk.",
    },
];

pub const CULTURAL_EVENTS: &[CulturalEvent] = &[
    CulturalEvent {
        id: "karneval",
        name: "Karneval",
        month: 2,
        description: "Street parades and costumes, especially in Cologne and Düsseldorf.",
    },
    CulturalEvent {
        id: "oktoberfest",
        name: "Oktoberfest",
        month: 9,
        description: "Munich's folk festival with beer tents and traditional dress.",
    },
    CulturalEvent {
        id: "tag_der_einheit",
        name: "Tag der Deutschen Einheit",
        month: 10,
        description: "National holiday on 3 October celebrating reunification.",
    },
    CulturalEvent {
        id: "weihnachtsmarkt",
        name: "Weihnachtsmarkt",
        month: 12,
        description: "Christmas markets with mulled wine, crafts and gingerbread.",
    },
];

pub fn scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

pub fn vocabulary(scenario_id: &str) -> &'static [VocabularyItem] {
    match scenario_id {
        "cafe_ordering" => CAFE_VOCABULARY,
        "train_station" => STATION_VOCABULARY,
        "doctor_visit" => DOCTOR_VOCABULARY,
        "job_interview" => INTERVIEW_VOCABULARY,
        "christmas_market" => MARKET_VOCABULARY,
        _ => &[],
    }
}

pub fn scenarios_for_tier(tier: Tier) -> impl Iterator<Item = &'static Scenario> {
    SCENARIOS.iter().filter(move |s| s.tier <= tier)
}

pub fn events_in_month(month: u32) -> impl Iterator<Item = &'static CulturalEvent> {
    CULTURAL_EVENTS.iter().filter(move |e| e.month == month)
}
