// Prompt construction for the recommendation call.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::catalog::{DrumKit, Preferences};
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, TONE_INSTRUCTION};
use crate::llm_client::ChatMessage;

const ROLE_INSTRUCTION: &str = "You recommend drum kits.";
const SECTIONS_INSTRUCTION: &str =
    "Return sections: Best pick, Runner-up, Third option, What to buy, Setup tips.";

pub fn system_prompt() -> String {
    format!("{ROLE_INSTRUCTION} {GROUNDING_INSTRUCTION} {TONE_INSTRUCTION} {SECTIONS_INSTRUCTION}")
}

/// One line per kit: `- name | type | $min-$max | space:.. | skill:.. | notes:..`
pub fn shortlist_lines(kits: &[&DrumKit]) -> String {
    kits.iter()
        .map(|kit| {
            format!(
                "- {} | {} | ${}-${} | space:{} | skill:{} | notes:{}",
                kit.name, kit.kit_type, kit.price_min, kit.price_max, kit.space, kit.skill, kit.notes
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn user_prompt(prefs: &Preferences, kits: &[&DrumKit]) -> String {
    format!(
        "User preferences:\n\
         - type: {}\n\
         - budget: ${}\n\
         - space: {}\n\
         - skill: {}\n\
         - genre: {}\n\
         - quiet priority: {}\n\
         \n\
         Shortlist:\n{}",
        prefs.kit_type,
        prefs.budget,
        prefs.space,
        prefs.skill,
        prefs.genre,
        if prefs.quiet_priority { "yes" } else { "no" },
        shortlist_lines(kits)
    )
}

pub fn build_messages(prefs: &Preferences, kits: &[&DrumKit]) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt()),
        ChatMessage::user(user_prompt(prefs, kits)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{KitType, SkillLevel, Space, KITS};
    use crate::llm_client::Role;

    fn prefs() -> Preferences {
        Preferences {
            kit_type: KitType::Electronic,
            budget: 2000,
            space: Space::Apartment,
            skill: SkillLevel::Intermediate,
            genre: "rock".to_string(),
            quiet_priority: true,
        }
    }

    #[test]
    fn test_system_prompt_names_required_sections() {
        let system = system_prompt();
        assert!(system.starts_with("You recommend drum kits."));
        assert!(system.contains("Use ONLY the provided shortlist."));
        assert!(system.contains("Best pick, Runner-up, Third option, What to buy, Setup tips"));
    }

    #[test]
    fn test_shortlist_line_format() {
        let lines = shortlist_lines(&[&KITS[0]]);
        assert_eq!(
            lines,
            "- Roland TD-17KVX2 | electronic | $1700-$2300 | space:apartment | skill:intermediate | \
             notes:Solid pads, good module, quiet enough for most apartments with a mat."
        );
    }

    #[test]
    fn test_user_prompt_lists_preferences_then_shortlist() {
        let prompt = user_prompt(&prefs(), &[&KITS[0], &KITS[2]]);
        assert!(prompt.starts_with("User preferences:\n- type: electronic\n- budget: $2000\n"));
        assert!(prompt.contains("- quiet priority: yes\n"));
        let shortlist = prompt.split("Shortlist:\n").nth(1).unwrap();
        assert_eq!(shortlist.lines().count(), 2);
        assert!(shortlist.lines().next().unwrap().contains("Roland TD-17KVX2"));
    }

    #[test]
    fn test_build_messages_orders_system_then_user() {
        let messages = build_messages(&prefs(), &[]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.ends_with("Shortlist:\n"));
    }
}
