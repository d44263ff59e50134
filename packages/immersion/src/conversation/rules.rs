//! Ordered response rule table for the simulated conversation partner.

use crate::speech::pronunciation::normalize;

/// Keyword predicate over the normalized learner input.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Any keyword occurs as a substring
    Any(&'static [&'static str]),
    /// Every keyword occurs as a substring
    All(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, normalized_input: &str) -> bool {
        let hit = |kw: &&str| normalized_input.contains(&normalize(kw).join(" "));
        match self {
            Self::Any(keywords) => keywords.iter().any(hit),
            Self::All(keywords) => !keywords.is_empty() && keywords.iter().all(hit),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    pub id: &'static str,
    /// Restricts the rule to one scenario; `None` applies everywhere
    pub scenario: Option<&'static str>,
    pub matcher: Matcher,
    /// May contain `{name}`
    pub template: &'static str,
}

impl ResponseRule {
    pub fn applies(&self, scenario_id: &str, normalized_input: &str) -> bool {
        self.scenario.map_or(true, |s| s == scenario_id) && self.matcher.matches(normalized_input)
    }

    pub fn render(&self, learner_name: &str) -> String {
        self.template.replace("{name}", learner_name)
    }
}

const fn scoped(
    id: &'static str,
    scenario: &'static str,
    matcher: Matcher,
    template: &'static str,
) -> ResponseRule {
    ResponseRule {
        id,
        scenario: Some(scenario),
        matcher,
        template,
    }
}

const fn global(id: &'static str, matcher: Matcher, template: &'static str) -> ResponseRule {
    ResponseRule {
        id,
        scenario: None,
        matcher,
        template,
    }
}

/// Scenario rules come first so they win over the generic ones.
pub const DEFAULT_RULES: &[ResponseRule] = &[
    // Café
    scoped(
        "cafe_bill",
        "cafe_ordering",
        Matcher::Any(&["rechnung", "bezahlen", "zahlen"]),
        "Gern. Das macht 7,50 Euro. Zahlen Sie bar oder mit Karte?",
    ),
    scoped(
        "cafe_cake",
        "cafe_ordering",
        Matcher::Any(&["kuchen", "torte"]),
        "Wir haben heute Apfelstrudel und Schwarzwälder Kirschtorte. Was möchten Sie?",
    ),
    scoped(
        "cafe_coffee",
        "cafe_ordering",
        Matcher::Any(&["kaffee", "cappuccino", "espresso"]),
        "Sehr gern! Möchten Sie Milch und Zucker dazu?",
    ),
    // Bahnhof
    scoped(
        "station_platform",
        "train_station",
        Matcher::Any(&["gleis", "bahnsteig"]),
        "Der Zug fährt von Gleis 7 ab.",
    ),
    scoped(
        "station_ticket",
        "train_station",
        Matcher::Any(&["fahrkarte", "ticket"]),
        "Einfach oder hin und zurück?",
    ),
    scoped(
        "station_delay",
        "train_station",
        Matcher::Any(&["verspätung", "spät"]),
        "Leider hat der Zug zehn Minuten Verspätung.",
    ),
    // Arzt
    scoped(
        "doctor_pain",
        "doctor_visit",
        Matcher::Any(&["schmerzen", "weh"]),
        "Seit wann haben Sie die Schmerzen?",
    ),
    scoped(
        "doctor_fever",
        "doctor_visit",
        Matcher::Any(&["fieber"]),
        "Ich messe kurz Ihre Temperatur.",
    ),
    // Vorstellungsgespräch
    scoped(
        "interview_experience",
        "job_interview",
        Matcher::Any(&["erfahrung", "jahre"]),
        "Sehr interessant, {name}. Welche Projekte haben Sie geleitet?",
    ),
    scoped(
        "interview_strength",
        "job_interview",
        Matcher::Any(&["stärke", "teamarbeit"]),
        "Können Sie ein Beispiel dafür nennen?",
    ),
    // Weihnachtsmarkt
    scoped(
        "market_wine",
        "christmas_market",
        Matcher::Any(&["glühwein"]),
        "Mit oder ohne Schuss? Der Becher kostet 3 Euro Pfand.",
    ),
    scoped(
        "market_gift",
        "christmas_market",
        Matcher::Any(&["geschenk", "kaufen"]),
        "Wie wäre es mit handgemachten Holzfiguren aus dem Erzgebirge?",
    ),
    // Allgemein
    global(
        "greeting",
        Matcher::Any(&["hallo", "guten tag", "guten morgen", "servus", "moin"]),
        "Hallo {name}! Schön, Sie zu sehen.",
    ),
    global("name", Matcher::Any(&["ich heiße", "mein name"]), "Freut mich, {name}!"),
    global("thanks", Matcher::Any(&["danke"]), "Bitte schön!"),
    global(
        "not_understood",
        Matcher::Any(&["verstehe nicht", "wie bitte", "langsamer"]),
        "Kein Problem, ich spreche langsamer.",
    ),
    global(
        "goodbye",
        Matcher::Any(&["tschüss", "auf wiedersehen", "bis bald"]),
        "Auf Wiedersehen, {name}! Bis zum nächsten Mal.",
    ),
];

pub fn fallback(scenario_id: &str) -> &'static str {
    match scenario_id {
        "cafe_ordering" => "Entschuldigung, was möchten Sie bestellen?",
        "train_station" => "Wohin möchten Sie denn fahren?",
        "doctor_visit" => "Können Sie Ihre Beschwerden genauer beschreiben?",
        "job_interview" => "Erzählen Sie mir bitte mehr darüber.",
        "christmas_market" => "Schauen Sie sich gerne um!",
        _ => "Interessant! Können Sie das bitte anders sagen?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> String {
        normalize(text).join(" ")
    }

    #[test]
    fn test_any_and_all() {
        let any = Matcher::Any(&["kaffee", "tee"]);
        assert!(any.matches(&input("Einen Tee, bitte")));
        assert!(!any.matches(&input("Wasser")));

        let all = Matcher::All(&["guten", "tag"]);
        assert!(all.matches(&input("Guten Tag!")));
        assert!(!all.matches(&input("Guten Morgen")));
        assert!(!Matcher::All(&[]).matches("anything"));
    }

    #[test]
    fn test_umlaut_keywords_match_transliterations() {
        let rule = Matcher::Any(&["glühwein"]);
        assert!(rule.matches(&input("Einen Gluehwein bitte")));
        assert!(rule.matches(&input("Einen Glühwein bitte")));
    }

    #[test]
    fn test_scoped_rule_only_applies_in_scenario() {
        let rule = DEFAULT_RULES
            .iter()
            .find(|r| r.id == "cafe_coffee")
            .copied()
            .unwrap();
        assert!(rule.applies("cafe_ordering", &input("Kaffee")));
        assert!(!rule.applies("train_station", &input("Kaffee")));
    }

    #[test]
    fn test_rule_ids_unique() {
        let mut ids: Vec<_> = DEFAULT_RULES.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DEFAULT_RULES.len());
    }

    #[test]
    fn test_render_substitutes_name() {
        let rule = global("g", Matcher::Any(&["x"]), "Hallo {name}, {name}!");
        assert_eq!(rule.render("Lena"), "Hallo Lena, Lena!");
    }
}
