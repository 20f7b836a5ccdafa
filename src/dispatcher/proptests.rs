//! Property-based tests for scripted response selection
//!
//! - Every input yields exactly one reply from the table or the fallback
//! - Greeting keywords win whenever no contextual rule applies
//! - Input with no keyword always falls through to the catch-all
//! - Case and surrounding whitespace never change the selected rule

use super::{ResponseDispatcher, Topic, FALLBACK_RESPONSE};
use crate::session::{ConversationHistory, ConversationTurn, Speaker};
use proptest::prelude::*;

fn arb_speaker() -> impl Strategy<Value = Speaker> {
    prop_oneof![Just(Speaker::User), Just(Speaker::Assistant)]
}

/// Turn text that is sometimes a topic word, so contexts get exercised
fn arb_turn_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ?!.]{0,40}",
        Just("tell me about your experience".to_string()),
        Just("what are your skills".to_string()),
        Just("show me projects".to_string()),
        Just("how do I contact him".to_string()),
    ]
}

fn arb_history() -> impl Strategy<Value = ConversationHistory> {
    proptest::collection::vec((arb_speaker(), arb_turn_text()), 0..8).prop_map(|turns| {
        let mut history = ConversationHistory::new();
        for (speaker, text) in turns {
            history.push(ConversationTurn::new(speaker, text));
        }
        history
    })
}

/// Filler that cannot contain any keyword
fn arb_filler() -> impl Strategy<Value = String> {
    "[0-9 .,!?]{0,20}"
}

proptest! {
    #[test]
    fn prop_reply_always_comes_from_table(
        message in "\\PC{0,60}",
        history in arb_history(),
    ) {
        let dispatcher = ResponseDispatcher::portfolio();
        let reply = dispatcher.select_response(&message, &history);

        prop_assert!(!reply.is_empty());
        prop_assert!(
            reply == FALLBACK_RESPONSE
                || dispatcher.rules().iter().any(|rule| rule.response == reply)
        );
    }

    #[test]
    fn prop_greeting_wins_without_contextual_match(
        prefix in arb_filler(),
        keyword in prop_oneof![Just("hello"), Just("HI"), Just("Hey"), Just("greetings")],
        suffix in arb_filler(),
        history in arb_history(),
    ) {
        let dispatcher = ResponseDispatcher::portfolio();
        let message = format!("{prefix}{keyword}{suffix}");

        prop_assert_eq!(dispatcher.classify(&message, &history), Topic::Greeting);
    }

    #[test]
    fn prop_keywordless_input_falls_back(
        message in arb_filler(),
        history in arb_history(),
    ) {
        let dispatcher = ResponseDispatcher::portfolio();

        let first = dispatcher.select_response(&message, &history);
        let second = dispatcher.select_response(&message, &history);
        prop_assert_eq!(first, FALLBACK_RESPONSE);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_case_and_padding_do_not_matter(
        message in "[a-zA-Z ?!/]{0,40}",
        history in arb_history(),
    ) {
        let dispatcher = ResponseDispatcher::portfolio();
        let expected = dispatcher.classify(&message, &history);

        prop_assert_eq!(dispatcher.classify(&message.to_uppercase(), &history), expected);
        prop_assert_eq!(dispatcher.classify(&format!("  {message}\t"), &history), expected);
    }
}
