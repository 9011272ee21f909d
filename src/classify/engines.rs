//! Known engine packages detected by member cards.

use std::collections::BTreeMap;

/// An engine: a small package of cards splashed into other decks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    pub name: String,
    pub members: Vec<String>,
}

impl Engine {
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

fn default_engines() -> Vec<Engine> {
    vec![
        Engine::new(
            "adventurer",
            [
                "Water Enchantress of the Temple",
                "Rite of Aramesir",
                "Fateful Adventure",
                "Dracoback, the Rideable Dragon",
                "Illegal Knight",
            ],
        ),
        Engine::new(
            "branded",
            [
                "Fallen of Albaz",
                "Branded Fusion",
                "Lubellion the Searing Dragon",
                "Albion the Branded Dragon",
                "Mirrorjade the Iceblade Dragon",
            ],
        ),
        Engine::new(
            "dogmatika",
            [
                "Dogmatika Ecclesia, the Virtuous",
                "Nadir Servant",
                "Dogmatika Fleurdelis, the Knighted",
                "Dogmatika Maximus",
                "Titaniklad the Ash Dragon",
            ],
        ),
        Engine::new(
            "dpe",
            [
                "Destiny HERO - Destroyer Phoenix Enforcer",
                "Fusion Destiny",
                "Destiny HERO - Celestial",
                "Destiny HERO - Dasher",
            ],
        ),
        Engine::new(
            "tearlaments",
            [
                "Tearlaments Sulliek",
                "Tearlaments Scheiren",
                "Tearlaments Havnis",
                "Tearlaments Merrli",
                "Primeval Planet Perlereino",
            ],
        ),
        Engine::new(
            "spright",
            ["Spright Blue", "Spright Jet", "Spright Starter", "Spright Elf", "Gigantic Spright"],
        ),
        Engine::new(
            "swordsoul",
            [
                "Swordsoul of Mo Ye",
                "Swordsoul Strategist Longyuan",
                "Swordsoul Emergence",
                "Incredible Ecclesia, the Virtuous",
            ],
        ),
        Engine::new(
            "tenyi",
            [
                "Monk of the Tenyi",
                "Tenyi Spirit - Ashuna",
                "Tenyi Spirit - Vishuda",
                "Tenyi Spirit - Adhara",
                "Dragon Circle of the Tenyi",
            ],
        ),
    ]
}

/// Detects engines from the card names present in a deck.
#[derive(Clone, Debug)]
pub struct EngineDetector {
    engines: Vec<Engine>,
}

impl Default for EngineDetector {
    fn default() -> Self {
        Self {
            engines: default_engines(),
        }
    }
}

impl EngineDetector {
    #[must_use]
    pub fn new(engines: Vec<Engine>) -> Self {
        Self { engines }
    }

    #[must_use]
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engines.push(engine);
        self
    }

    #[must_use]
    pub fn engines(&self) -> &[Engine] {
        &self.engines
    }

    /// Engine name -> members present, in member-list order. Engines with
    /// no member present are omitted.
    pub fn detect<'a, I>(&self, names: I) -> BTreeMap<String, Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: Vec<&str> = names.into_iter().collect();
        self.engines
            .iter()
            .filter_map(|engine| {
                let found: Vec<String> = engine
                    .members
                    .iter()
                    .filter(|member| present.contains(&member.as_str()))
                    .cloned()
                    .collect();
                (!found.is_empty()).then(|| (engine.name.clone(), found))
            })
            .collect()
    }
}
