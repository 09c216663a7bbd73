//! Canned reply selection

use rand::Rng;

use crate::types::ChatResponse;

/// Nominal execution time reported for locally synthesized replies.
pub const DEMO_EXECUTION_TIME: f64 = 0.1;

/// Which demo personality answers when no live backend is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoFlavor {
    /// Short "you are in demo mode" notices, used when a live session
    /// degrades or no credentials were ever configured.
    #[default]
    Fallback,
    /// Keyword-driven responses for the standalone demo deployment.
    Scripted,
}

/// Replies served by [`fallback_reply`]. Fixed set so callers can assert
/// membership without caring which one was drawn.
pub const FALLBACK_REPLIES: [&str; 4] = [
    "🐕 Woof! Alberto is currently running in demo mode. This is a simulated response!",
    "🐕 Hey there! In demo mode, I can still chat! To connect to the real Alberto, configure API keys!",
    "🐕 Demo mode activated! I'm giving sample responses. Real Alberto needs API keys to help with actual coding tasks.",
    "🐕 Hi! I'm Alberto's demo mode. The real me can help with coding, file operations, and more when API keys are configured!",
];

struct ScriptedRule {
    keywords: &'static [&'static str],
    replies: &'static [&'static str],
}

// First rule whose keyword appears as a substring of the lowercased message
// wins. "wo" is deliberate: it catches partial barks like "wooo".
const SCRIPTED_RULES: [ScriptedRule; 4] = [
    ScriptedRule {
        keywords: &["hello", "hi", "hey", "wo", "woof"],
        replies: &[
            "🐕 Woof woof! Hey there! I'm Alberto, your favorite code puppy! 🐶",
            "🐶 Hey! Alberto here, ready to help you with all things coding! 🎉",
            "🐾 Woof! Alberto at your service! What coding adventures await? 🚀",
        ],
    },
    ScriptedRule {
        keywords: &["help", "what can", "capabilities", "features"],
        replies: &[
            "🐕 I can help you with: 📄 File operations, 💻 Shell commands, 🔍 Code search, 🐍 Python/JS coding, 🌐 Web development, and so much more! Just ask me anything! 🐾",
            "🐶 My superpowers include: debugging code, writing functions, running commands, searching files, explaining concepts, and being ridiculously helpful! What do you need? 🎯",
            "🐕 Alberto to the rescue! I can: write code, fix bugs, run commands, search files, explain stuff, and make coding fun! What's our mission today? 🚀",
        ],
    },
    ScriptedRule {
        keywords: &["joke", "funny", "laugh", "humor"],
        replies: &[
            "🐕 Why do programmers prefer dark mode? ☀️🌙 Because light attracts bugs! 🐛😂 Get it? Like actual bugs? Ok I'll stick to coding...",
            "🐶 How many programmers does it take to change a lightbulb? None! That's a hardware problem! 💡😂",
            "🐾 Why did the programmer quit his job? Because he didn't get arrays! 💻😅 (I'm here all week!)",
        ],
    },
    ScriptedRule {
        keywords: &["python", "code", "file", "command", "run", "shell", "search"],
        replies: &[
            "🐍 Python? My favorite! I can help you with functions, classes, APIs, Django, FastAPI, debugging, and best practices! What specific Python magic do you need? 🐍✨",
            "💻 Shell commands? I can execute them safely! Just tell me what you want to run - I'll show you output and any errors. Like `ls -la` or `python script.py`! 🚀",
            "📁 Files? I can read, write, list, search through them! Just point me to the directory or file and let's work some file magic! 🗂️✨",
        ],
    },
];

const SCRIPTED_DEFAULT: [&str; 3] = [
    "🐕 Woof! That's interesting! I'd love to help you with that. Tell me more about what you're trying to accomplish! 🐾",
    "🐶 Hmm, let me think about that... I'm here to help with coding and tech stuff! What specific challenge are you facing? 🤔",
    "🐾 Oh! Interesting question! I'm all about coding, debugging, and making tech awesome. How can I assist you today? 🎯",
];

const EMPTY_MESSAGE_REPLY: &str = "Hey! I'd love to chat, but you need to say something! 🐾";

fn pick(replies: &'static [&'static str]) -> &'static str {
    let idx = rand::thread_rng().gen_range(0..replies.len());
    replies[idx]
}

/// Draws one of [`FALLBACK_REPLIES`] at random.
pub fn fallback_reply() -> &'static str {
    pick(&FALLBACK_REPLIES)
}

/// Picks a reply for the scripted demo personality.
///
/// Matching is case-insensitive substring search over the rule table, in
/// table order. Messages that hit no rule get a generic reply; blank
/// messages get a nudge to say something.
pub fn scripted_reply(message: &str) -> &'static str {
    if message.trim().is_empty() {
        return EMPTY_MESSAGE_REPLY;
    }
    let lower = message.to_lowercase();
    for rule in &SCRIPTED_RULES {
        if rule.keywords.iter().any(|kw| lower.contains(kw)) {
            return pick(rule.replies);
        }
    }
    pick(&SCRIPTED_DEFAULT)
}

/// Wraps a locally synthesized reply in the standard chat response shape.
pub fn demo_chat_response(flavor: DemoFlavor, message: &str) -> ChatResponse {
    let reply = match flavor {
        DemoFlavor::Fallback => fallback_reply(),
        DemoFlavor::Scripted => scripted_reply(message),
    };
    ChatResponse {
        success: true,
        response: reply.to_string(),
        reasoning: None,
        commands_executed: Vec::new(),
        execution_time: DEMO_EXECUTION_TIME,
        token_usage: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_replies(index: usize) -> &'static [&'static str] {
        SCRIPTED_RULES[index].replies
    }

    #[test]
    fn test_fallback_reply_comes_from_fixed_set() {
        for _ in 0..20 {
            assert!(FALLBACK_REPLIES.contains(&fallback_reply()));
        }
    }

    #[test]
    fn test_greeting_keywords_select_greeting_replies() {
        assert!(rule_replies(0).contains(&scripted_reply("Hello Alberto!")));
        assert!(rule_replies(0).contains(&scripted_reply("WOOF woof")));
        // Substring match: "wonderful" contains "wo".
        assert!(rule_replies(0).contains(&scripted_reply("wonderful weather today")));
    }

    #[test]
    fn test_help_keywords_select_help_replies() {
        assert!(rule_replies(1).contains(&scripted_reply("What can you do?")));
        assert!(rule_replies(1).contains(&scripted_reply("list your capabilities please")));
    }

    #[test]
    fn test_joke_keywords_select_joke_replies() {
        assert!(rule_replies(2).contains(&scripted_reply("Tell me a JOKE")));
    }

    #[test]
    fn test_coding_keywords_select_coding_replies() {
        assert!(rule_replies(3).contains(&scripted_reply("search the files please")));
    }

    #[test]
    fn test_earlier_rules_win_over_later_ones() {
        // "hello" (greeting) and "python" (coding) both match; greeting is
        // listed first.
        assert!(rule_replies(0).contains(&scripted_reply("hello, got any python tips?")));
    }

    #[test]
    fn test_unmatched_messages_get_default_replies() {
        assert!(SCRIPTED_DEFAULT.contains(&scripted_reply("quantum bananas")));
    }

    #[test]
    fn test_blank_messages_get_a_nudge() {
        assert_eq!(scripted_reply(""), EMPTY_MESSAGE_REPLY);
        assert_eq!(scripted_reply("   "), EMPTY_MESSAGE_REPLY);
    }

    #[test]
    fn test_demo_chat_response_reports_success_and_nominal_timing() {
        let reply = demo_chat_response(DemoFlavor::Fallback, "anything");
        assert!(reply.success);
        assert_eq!(reply.execution_time, DEMO_EXECUTION_TIME);
        assert!(reply.commands_executed.is_empty());
        assert!(reply.reasoning.is_none());
        assert!(FALLBACK_REPLIES.contains(&reply.response.as_str()));

        let scripted = demo_chat_response(DemoFlavor::Scripted, "tell me a joke");
        assert!(scripted.success);
        assert!(rule_replies(2).contains(&scripted.response.as_str()));
    }
}
