use rand::{Rng, seq::SliceRandom};

use crate::{
    cli::IconMode,
    domain::{
        metrics::{AdverseCondition, ProbabilityEntry, probability_of},
        observation::{Condition, WeatherObservation},
    },
};

pub const DEFAULT_RECOMMENDATION_COUNT: usize = 4;

type Predicate = fn(&WeatherObservation, &[ProbabilityEntry]) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationIcon {
    Droplets,
    Sun,
    Umbrella,
    Wind,
    Alert,
    Snowflake,
    Cloud,
    Shirt,
    Home,
}

impl RecommendationIcon {
    #[must_use]
    pub fn glyph(self, mode: IconMode) -> &'static str {
        let (ascii, emoji, unicode) = match self {
            Self::Droplets => ("H2O", "💧", "≈"),
            Self::Sun => ("SUN", "☀️", "☀"),
            Self::Umbrella => ("UMB", "☂️", "☂"),
            Self::Wind => ("WND", "💨", "≋"),
            Self::Alert => ("(!)", "⚠️", "⚠"),
            Self::Snowflake => ("SNW", "❄️", "❄"),
            Self::Cloud => ("CLD", "☁️", "☁"),
            Self::Shirt => ("TEE", "👕", "⌂"),
            Self::Home => ("CUP", "☕", "♨"),
        };
        match mode {
            IconMode::Ascii => ascii,
            IconMode::Emoji => emoji,
            IconMode::Unicode => unicode,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Recommendation {
    pub id: &'static str,
    pub icon: RecommendationIcon,
    pub title: &'static str,
    pub description: &'static str,
    applies: Predicate,
}

impl Recommendation {
    #[must_use]
    pub fn applies(&self, weather: &WeatherObservation, probabilities: &[ProbabilityEntry]) -> bool {
        (self.applies)(weather, probabilities)
    }
}

impl std::fmt::Debug for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommendation")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Recommendation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

fn prob(probabilities: &[ProbabilityEntry], condition: AdverseCondition) -> u8 {
    probability_of(probabilities, condition)
}

pub static CATALOG: [Recommendation; 12] = [
    Recommendation {
        id: "hot_hydration",
        icon: RecommendationIcon::Droplets,
        title: "Constant Hydration",
        description: "Drink water regularly, even if you don't feel thirsty. The heat increases the body's fluid loss.",
        applies: |w, p| prob(p, AdverseCondition::Hot) > 60 || w.temperature > 30.0,
    },
    Recommendation {
        id: "hot_sunscreen",
        icon: RecommendationIcon::Umbrella,
        title: "Use Sunscreen",
        description: "Apply sunscreen with a high SPF, especially between 10 AM and 4 PM. A hat and sunglasses are recommended.",
        applies: |w, _| w.condition == Condition::Sunny && w.temperature > 25.0,
    },
    Recommendation {
        id: "hot_light_clothes",
        icon: RecommendationIcon::Shirt,
        title: "Light and Light-Colored Clothing",
        description: "Opt for natural fabrics like cotton and light colors that reflect sunlight and help keep your body cool.",
        applies: |_, p| prob(p, AdverseCondition::Hot) > 50,
    },
    Recommendation {
        id: "hot_avoid_peak",
        icon: RecommendationIcon::Alert,
        title: "Avoid Peak Hours",
        description: "Reduce strenuous physical activities outdoors during the hottest hours of the day, typically between 11 AM and 4 PM.",
        applies: |_, p| prob(p, AdverseCondition::Hot) > 80,
    },
    Recommendation {
        id: "cold_layers",
        icon: RecommendationIcon::Shirt,
        title: "Dress in Layers",
        description: "Wearing multiple layers of clothing helps create thermal insulation and allows you to adapt to different environments.",
        applies: |w, _| w.temperature < 15.0,
    },
    Recommendation {
        id: "cold_extremities",
        icon: RecommendationIcon::Snowflake,
        title: "Protect Your Extremities",
        description: "Hands, feet, and your head lose heat quickly. Wear gloves, thick socks, and a hat if necessary.",
        applies: |w, _| w.temperature < 10.0,
    },
    Recommendation {
        id: "cold_warm_drinks",
        icon: RecommendationIcon::Home,
        title: "Warm Beverages",
        description: "Teas, hot chocolate, or soups help keep the body warm from the inside out.",
        applies: |w, _| w.temperature < 12.0,
    },
    Recommendation {
        id: "rain_umbrella",
        icon: RecommendationIcon::Umbrella,
        title: "Bring an Umbrella",
        description: "An umbrella or a raincoat is essential to stay dry and avoid catching a cold.",
        applies: |_, p| prob(p, AdverseCondition::Rain) > 40,
    },
    Recommendation {
        id: "rain_drive_careful",
        icon: RecommendationIcon::Alert,
        title: "Drive Carefully",
        description: "Wet roads increase the risk of accidents. Reduce your speed and maintain a safe distance from the vehicle in front of you.",
        applies: |_, p| prob(p, AdverseCondition::Rain) > 60,
    },
    Recommendation {
        id: "wind_secure_objects",
        icon: RecommendationIcon::Wind,
        title: "Secure Loose Objects",
        description: "Strong winds can knock over objects in outdoor areas. Secure or store items that could be blown away.",
        applies: |_, p| prob(p, AdverseCondition::Wind) > 50,
    },
    Recommendation {
        id: "wind_allergies",
        icon: RecommendationIcon::Cloud,
        title: "Allergy Alert",
        description: "The wind can spread pollen and dust, intensifying respiratory allergies. Keep windows closed if necessary.",
        applies: |_, p| prob(p, AdverseCondition::Wind) > 40,
    },
    Recommendation {
        id: "general_good_day",
        icon: RecommendationIcon::Sun,
        title: "Pleasant Day for Activities",
        description: "The temperature is mild and conditions are favorable for outdoor activities. Enjoy it!",
        applies: |w, p| {
            w.temperature > 18.0 && w.temperature < 26.0 && p.iter().all(|entry| entry.value < 40)
        },
    },
];

/// Catalogue entries whose predicate holds, in catalogue order.
#[must_use]
pub fn eligible(
    weather: &WeatherObservation,
    probabilities: &[ProbabilityEntry],
) -> Vec<&'static Recommendation> {
    if probabilities.is_empty() {
        return Vec::new();
    }
    CATALOG
        .iter()
        .filter(|rec| rec.applies(weather, probabilities))
        .collect()
}

/// Up to `count` eligible recommendations in uniformly shuffled order.
pub fn recommend<R: Rng + ?Sized>(
    weather: &WeatherObservation,
    probabilities: &[ProbabilityEntry],
    count: usize,
    rng: &mut R,
) -> Vec<&'static Recommendation> {
    let mut picks = eligible(weather, probabilities);
    picks.shuffle(rng);
    picks.truncate(count);
    picks
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::domain::metrics::compute_adverse_probabilities;

    fn weather(temperature: f64, humidity: f64, rainfall: f64, wind: f64) -> WeatherObservation {
        WeatherObservation::from_averages(temperature, humidity, rainfall, wind)
    }

    fn ids(recs: &[&Recommendation]) -> Vec<&'static str> {
        recs.iter().map(|rec| rec.id).collect()
    }

    #[test]
    fn empty_probabilities_yield_no_recommendations() {
        let cold = weather(2.0, 50.0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(recommend(&cold, &[], 4, &mut rng).is_empty());
        assert!(eligible(&cold, &[]).is_empty());
    }

    #[test]
    fn hot_sunny_day_eligibility() {
        let w = weather(32.0, 65.0, 0.0, 15.0);
        let probs = compute_adverse_probabilities(&w);
        insta::assert_debug_snapshot!(ids(&eligible(&w, &probs)), @r#"
        [
            "hot_hydration",
            "hot_sunscreen",
        ]
        "#);
    }

    #[test]
    fn cold_stormy_day_eligibility() {
        let w = weather(10.0, 50.0, 80.0, 70.0);
        let probs = compute_adverse_probabilities(&w);
        insta::assert_debug_snapshot!(ids(&eligible(&w, &probs)), @r#"
        [
            "cold_layers",
            "cold_warm_drinks",
            "rain_umbrella",
            "rain_drive_careful",
            "wind_secure_objects",
            "wind_allergies",
        ]
        "#);
    }

    #[test]
    fn mild_calm_day_is_pleasant() {
        let w = weather(22.0, 50.0, 10.0, 10.0);
        let probs = compute_adverse_probabilities(&w);
        assert_eq!(ids(&eligible(&w, &probs)), vec!["general_good_day"]);
    }

    #[test]
    fn recommend_truncates_to_count_and_keeps_only_eligible() {
        let w = weather(10.0, 50.0, 80.0, 70.0);
        let probs = compute_adverse_probabilities(&w);
        let all = ids(&eligible(&w, &probs));

        let mut rng = StdRng::seed_from_u64(42);
        let picked = recommend(&w, &probs, 4, &mut rng);
        assert_eq!(picked.len(), 4);
        assert!(picked.iter().all(|rec| all.contains(&rec.id)));

        let mut unique = ids(&picked);
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn recommend_with_large_count_returns_every_eligible_entry() {
        let w = weather(32.0, 65.0, 0.0, 15.0);
        let probs = compute_adverse_probabilities(&w);
        let mut rng = StdRng::seed_from_u64(1);
        let mut picked = ids(&recommend(&w, &probs, 50, &mut rng));
        picked.sort_unstable();
        assert_eq!(picked, vec!["hot_hydration", "hot_sunscreen"]);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let w = weather(10.0, 50.0, 80.0, 70.0);
        let probs = compute_adverse_probabilities(&w);
        let a = ids(&recommend(&w, &probs, 6, &mut StdRng::seed_from_u64(99)));
        let b = ids(&recommend(&w, &probs, 6, &mut StdRng::seed_from_u64(99)));
        assert_eq!(a, b);
    }

    #[test]
    fn catalogue_ids_are_unique() {
        let mut all: Vec<_> = CATALOG.iter().map(|rec| rec.id).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), CATALOG.len());
    }
}
