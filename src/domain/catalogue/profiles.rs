//! Result catalogue - descriptive content per category code.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use super::CategoryCode;

/// Display content for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultProfile {
    pub code: CategoryCode,
    pub nickname: &'static str,
    pub summary: &'static str,
    pub traits: &'static str,
    pub compatible_owner: &'static str,
    pub caution: &'static str,
    pub recommended_activity: &'static str,
    pub care: &'static str,
}

/// Read-only lookup from category code to profile.
pub struct ResultCatalogue;

impl ResultCatalogue {
    /// Looks up the profile for a code.
    ///
    /// Every valid code has an entry; `None` only signals a broken catalogue.
    pub fn get(code: &CategoryCode) -> Option<&'static ResultProfile> {
        INDEX.get(code)
    }

    /// All profiles in lexicographic code order.
    pub fn all() -> Vec<&'static ResultProfile> {
        CategoryCode::all().iter().filter_map(Self::get).collect()
    }
}

type Entry = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const ENTRIES: [Entry; 16] = [
    (
        "ESTJ",
        "The Patrol Captain",
        "Runs the household on a schedule and makes sure everyone follows it.",
        "Punctual, watchful, confident, loves clear rules.",
        "Owners with a steady daily routine who enjoy structured training.",
        "Can become bossy with other pets when rules are unclear.",
        "Obedience drills with a clear reward at the end.",
        "Keep meal and walk times fixed; announce changes early.",
    ),
    (
        "ESTP",
        "The Thrill Seeker",
        "Lives for action and tries everything at full speed.",
        "Bold, energetic, quick to react, easily bored.",
        "Active owners who run, hike or play fetch daily.",
        "Prone to bolting after anything that moves.",
        "Agility courses and fast-paced fetch.",
        "Use a secure harness and check the yard for escape routes.",
    ),
    (
        "ESFJ",
        "The Host",
        "Greets every guest and keeps track of how everyone is feeling.",
        "Friendly, attentive, people-oriented, eager to please.",
        "Social households with frequent visitors.",
        "Gets anxious when left alone for long stretches.",
        "Group walks and supervised play dates.",
        "Plan company during long absences; praise generously.",
    ),
    (
        "ESFP",
        "The Entertainer",
        "Turns every moment into a show and adores an audience.",
        "Playful, expressive, affectionate, spontaneous.",
        "Owners who enjoy laughter and can tolerate a little chaos.",
        "May steal food or toys for attention.",
        "Trick training with lots of applause.",
        "Rotate toys often and reward calm behaviour too.",
    ),
    (
        "ENTJ",
        "The Pack Leader",
        "Takes charge of every situation and expects to be followed.",
        "Strategic, determined, assertive, goal-driven.",
        "Experienced owners with a confident, consistent style.",
        "Tests boundaries when leadership feels weak.",
        "Advanced puzzle feeders and scent-tracking games.",
        "Be consistent with rules; give it a job to do.",
    ),
    (
        "ENTP",
        "The Inventor",
        "Finds a new way to open every door and cupboard.",
        "Curious, clever, mischievous, restless.",
        "Owners who enjoy problem-solving and novelty.",
        "Easily bored, which leads to creative destruction.",
        "Rotating puzzle toys and new walking routes.",
        "Child-proof cupboards; change enrichment weekly.",
    ),
    (
        "ENFJ",
        "The Cheerleader",
        "Keeps the whole family together and in good spirits.",
        "Warm, encouraging, sensitive to moods, loyal.",
        "Families with children or several pets.",
        "Takes household tension personally.",
        "Cooperative games that include everyone.",
        "Keep the atmosphere calm; include it in family time.",
    ),
    (
        "ENFP",
        "The Free Spirit",
        "Makes friends everywhere and follows every new smell.",
        "Enthusiastic, imaginative, sociable, easily distracted.",
        "Flexible owners who enjoy exploring together.",
        "Recall can be unreliable when something exciting appears.",
        "Off-route exploration walks on a long line.",
        "Practise recall often and keep ID tags current.",
    ),
    (
        "ISTJ",
        "The Guardian",
        "Quietly keeps watch and never misses a routine.",
        "Reliable, calm, orderly, reserved with strangers.",
        "Quiet owners with predictable schedules.",
        "Stressed by moves, renovations and new furniture.",
        "Familiar walking loops at the same time each day.",
        "Introduce changes gradually and keep its space untouched.",
    ),
    (
        "ISTP",
        "The Lone Explorer",
        "Investigates everything independently and on its own terms.",
        "Independent, observant, practical, self-reliant.",
        "Owners who respect personal space.",
        "Dislikes being handled or restrained for long.",
        "Solo foraging and sniffing games.",
        "Offer choices during grooming; avoid forced cuddles.",
    ),
    (
        "ISFJ",
        "The Caretaker",
        "Follows its favourite person from room to room.",
        "Gentle, devoted, patient, sensitive.",
        "Home-based owners who can offer steady companionship.",
        "Prone to separation anxiety.",
        "Calm walks and gentle brushing sessions.",
        "Build alone-time tolerance slowly with short absences.",
    ),
    (
        "ISFP",
        "The Artist",
        "Enjoys quiet beauty: sunny windowsills and soft blankets.",
        "Gentle, sensory, easy-going, shy at first.",
        "Calm owners in peaceful homes.",
        "Withdraws from loud noises and rough play.",
        "Sensory gardens and slow sniff walks.",
        "Provide a cosy hideaway and avoid loud surprises.",
    ),
    (
        "INTJ",
        "The Strategist",
        "Watches, calculates, then acts with precision.",
        "Intelligent, independent, reserved, determined.",
        "Patient owners who like teaching complex tasks.",
        "Can be aloof and selective with affection.",
        "Multi-step puzzle feeders and shaping exercises.",
        "Respect its pace; reward problem-solving.",
    ),
    (
        "INTP",
        "The Philosopher",
        "Stares thoughtfully at things nobody else notices.",
        "Curious, quirky, quiet, analytical.",
        "Relaxed owners who appreciate eccentric habits.",
        "Ignores commands that seem pointless to it.",
        "Hide-and-seek with treats around the house.",
        "Keep training short and interesting.",
    ),
    (
        "INFJ",
        "The Empath",
        "Senses your mood before you do and responds quietly.",
        "Intuitive, loyal, gentle, deeply attached.",
        "Owners looking for a close, quiet bond.",
        "Absorbs household stress and may hide.",
        "Calm one-on-one bonding time.",
        "Keep routines soothing and check in during stressful times.",
    ),
    (
        "INFP",
        "The Dreamer",
        "Spends long afternoons gazing out of the window.",
        "Gentle, imaginative, affectionate, shy.",
        "Kind, patient owners who move at a slow pace.",
        "Easily overwhelmed by crowds and scolding.",
        "Slow nature walks in quiet places.",
        "Use positive reinforcement only and give it quiet time.",
    ),
];

static INDEX: Lazy<HashMap<CategoryCode, ResultProfile>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .copied()
        .filter_map(
            |(code, nickname, summary, traits, compatible_owner, caution, recommended_activity, care)| {
                let code: CategoryCode = code.parse().ok()?;
                Some((
                    code,
                    ResultProfile {
                        code,
                        nickname,
                        summary,
                        traits,
                        compatible_owner,
                        caution,
                        recommended_activity,
                        care,
                    },
                ))
            },
        )
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_profile() {
        for code in CategoryCode::all() {
            assert!(ResultCatalogue::get(&code).is_some(), "missing {}", code);
        }
    }

    #[test]
    fn every_entry_parses() {
        assert_eq!(INDEX.len(), ENTRIES.len());
    }

    #[test]
    fn profile_is_keyed_by_its_own_code() {
        for profile in ResultCatalogue::all() {
            assert_eq!(ResultCatalogue::get(&profile.code), Some(profile));
        }
    }

    #[test]
    fn nicknames_are_unique() {
        let nicknames: std::collections::HashSet<_> =
            ResultCatalogue::all().iter().map(|p| p.nickname).collect();
        assert_eq!(nicknames.len(), 16);
    }

    #[test]
    fn looks_up_known_profile() {
        let code: CategoryCode = "ESFJ".parse().unwrap();
        assert_eq!(ResultCatalogue::get(&code).unwrap().nickname, "The Host");
    }
}
