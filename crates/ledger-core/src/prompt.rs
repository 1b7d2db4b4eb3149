use crate::types::{OpponentRecord, ProfileRecord};

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Build the coaching prompt for one opponent.
///
/// Fields are interpolated verbatim. Empty fields fall back to a short
/// placeholder so the generator never sees a dangling label.
pub fn game_plan_prompt(profile: &ProfileRecord, opponent: &OpponentRecord) -> String {
    let strengths = opponent.strengths.join(", ");
    let weaknesses = opponent.weaknesses.join(", ");

    format!(
        "You are a world-class tennis coach creating a hyper-personalized game plan for me.\n\
         \n\
         First, here is my player profile:\n\
         - My Strengths: {my_strengths}\n\
         - My Weaknesses: {my_weaknesses}\n\
         \n\
         Now, here is the profile of my opponent, {name}:\n\
         - Their Playing Style: {style}\n\
         - Their Strengths: {strengths}\n\
         - Their Weaknesses: {weaknesses}\n\
         - Mental/Psychological Notes: {mental}\n\
         \n\
         Your task is to create a concise, actionable game plan using Markdown.\n\
         1.  Start with a brief strategic overview under a '### Strategic Overview' heading.\n\
         2.  Provide 3-5 key tactical bullet points under a '### Key Tactics' heading, with each point starting with '* '.\n\
         3.  Crucially, each tactic must explain HOW I can use MY STRENGTHS to exploit THEIR WEAKNESSES and MENTAL state.\n\
         4.  If there are mental notes, suggest specific ways to create psychological pressure.\n\
         5.  Be direct and use \"You should...\" or \"Your goal is to...\" language.\n",
        my_strengths = or_fallback(&profile.strengths, "Not specified."),
        my_weaknesses = or_fallback(&profile.weaknesses, "Not specified."),
        name = opponent.name,
        style = or_fallback(opponent.style_str(), "Unknown"),
        strengths = or_fallback(&strengths, "None listed."),
        weaknesses = or_fallback(&weaknesses, "None listed."),
        mental = or_fallback(opponent.mental_notes_str(), "None listed."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OpponentFields, OpponentId};

    #[test]
    fn prompt_interpolates_fields() {
        let profile = ProfileRecord {
            strengths: "big forehand".to_string(),
            weaknesses: String::new(),
        };
        let opp = OpponentRecord::new(
            OpponentId::new(3),
            OpponentFields::from_form("Robin", Some("Pusher"), "lob, retrieving", "", None),
        );
        let prompt = game_plan_prompt(&profile, &opp);
        assert!(prompt.contains("- My Strengths: big forehand\n"));
        assert!(prompt.contains("- My Weaknesses: Not specified.\n"));
        assert!(prompt.contains("profile of my opponent, Robin:"));
        assert!(prompt.contains("- Their Playing Style: Pusher\n"));
        assert!(prompt.contains("- Their Strengths: lob, retrieving\n"));
        assert!(prompt.contains("- Their Weaknesses: None listed.\n"));
        assert!(prompt.contains("- Mental/Psychological Notes: None listed.\n"));
        assert!(prompt.contains("'### Key Tactics'"));
    }

    #[test]
    fn missing_style_reads_unknown() {
        let opp = OpponentRecord::new(
            OpponentId::new(4),
            OpponentFields::from_form("Lee", None, "", "", Some("")),
        );
        let prompt = game_plan_prompt(&ProfileRecord::default(), &opp);
        assert!(prompt.contains("- Their Playing Style: Unknown\n"));
    }
}
