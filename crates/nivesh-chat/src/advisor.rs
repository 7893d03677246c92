//! Scripted advisor: keyword classification and canned reply texts.
//!
//! Classification is substring containment over an ordered rule table.
//! The first category whose trigger set matches wins; rule order IS the
//! priority contract, so the table must stay a sequence, never a map.

// =============================================================================
// Categories and rules
// =============================================================================

/// Canned reply category for a user submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplyCategory {
    InvestmentAdvice,
    RiskGuidance,
    SavingsRule,
    PortfolioDiversification,
    SipGuidance,
    Fallback,
}

/// Trigger keywords per category, in priority order. Checked top to bottom;
/// `Fallback` has no triggers and is returned when nothing matches.
static RULES: &[(&[&str], ReplyCategory)] = &[
    (&["investment", "invest"], ReplyCategory::InvestmentAdvice),
    (&["risk", "safe"], ReplyCategory::RiskGuidance),
    (&["savings", "save"], ReplyCategory::SavingsRule),
    (&["portfolio", "stocks"], ReplyCategory::PortfolioDiversification),
    (&["mutual fund", "sip"], ReplyCategory::SipGuidance),
];

/// Classify free-text input into a reply category.
///
/// Input is lower-cased before matching; matching is plain substring
/// containment, first match wins. Deterministic: no state, no randomness.
pub fn classify(input: &str) -> ReplyCategory {
    let input = input.to_lowercase();
    for (triggers, category) in RULES {
        if triggers.iter().any(|t| input.contains(t)) {
            return *category;
        }
    }
    ReplyCategory::Fallback
}

// =============================================================================
// Canned texts
// =============================================================================

/// The advisor's fixed response for a category.
pub fn reply_text(category: ReplyCategory) -> &'static str {
    match category {
        ReplyCategory::InvestmentAdvice => {
            "Based on your profile, I recommend a diversified portfolio with 60% equity, 30% bonds, and 10% alternative investments. Consider starting with mutual funds or ETFs for broad market exposure."
        }
        ReplyCategory::RiskGuidance => {
            "Your risk tolerance appears to be moderate. I suggest a balanced approach with blue-chip stocks, government bonds, and some growth-oriented mutual funds. This provides stability while allowing for growth potential."
        }
        ReplyCategory::SavingsRule => {
            "Great question! I recommend the 50-30-20 rule: 50% for needs, 30% for wants, and 20% for savings and investments. Consider setting up automatic transfers to your investment accounts."
        }
        ReplyCategory::PortfolioDiversification => {
            "For portfolio diversification, consider investing across different sectors like technology, healthcare, finance, and consumer goods. Don't put all your eggs in one basket!"
        }
        ReplyCategory::SipGuidance => {
            "SIPs (Systematic Investment Plans) are excellent for beginners. They help with rupee cost averaging and discipline. I recommend starting with large-cap equity funds for stability."
        }
        ReplyCategory::Fallback => {
            "That's an interesting question! While I can provide general investment guidance, I recommend consulting with a certified financial advisor for personalized advice. What specific aspect of investing would you like to explore?"
        }
    }
}

/// Greeting seeded into an empty conversation log.
pub fn welcome_text() -> &'static str {
    "Hello! I'm your investment advisor. I can help you with investment strategies, portfolio analysis, and financial planning. How can I assist you today?"
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Single-trigger classification ----

    #[test]
    fn test_classify_investment() {
        assert_eq!(
            classify("should I make an investment now"),
            ReplyCategory::InvestmentAdvice
        );
    }

    #[test]
    fn test_classify_invest_short_form() {
        assert_eq!(
            classify("where do I invest"),
            ReplyCategory::InvestmentAdvice
        );
    }

    #[test]
    fn test_classify_risk() {
        assert_eq!(classify("is this high risk?"), ReplyCategory::RiskGuidance);
    }

    #[test]
    fn test_classify_safe() {
        assert_eq!(
            classify("give me something safe"),
            ReplyCategory::RiskGuidance
        );
    }

    #[test]
    fn test_classify_savings() {
        assert_eq!(
            classify("how are my savings doing"),
            ReplyCategory::SavingsRule
        );
    }

    #[test]
    fn test_classify_save() {
        assert_eq!(classify("help me save money"), ReplyCategory::SavingsRule);
    }

    #[test]
    fn test_classify_portfolio() {
        assert_eq!(
            classify("review my portfolio"),
            ReplyCategory::PortfolioDiversification
        );
    }

    #[test]
    fn test_classify_stocks() {
        assert_eq!(
            classify("which stocks to buy"),
            ReplyCategory::PortfolioDiversification
        );
    }

    #[test]
    fn test_classify_mutual_fund() {
        assert_eq!(
            classify("recommend a mutual fund"),
            ReplyCategory::SipGuidance
        );
    }

    #[test]
    fn test_classify_sip() {
        assert_eq!(classify("should I start a sip"), ReplyCategory::SipGuidance);
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(classify("what's the weather"), ReplyCategory::Fallback);
    }

    // ---- Priority order ----

    #[test]
    fn test_invest_beats_risk() {
        // "invest" is checked before "risk": first-match-wins, not best-match.
        assert_eq!(
            classify("I want to invest in risk-free options"),
            ReplyCategory::InvestmentAdvice
        );
    }

    #[test]
    fn test_sip_and_mutual_fund_same_category() {
        assert_eq!(
            classify("tell me about SIP and mutual fund"),
            ReplyCategory::SipGuidance
        );
    }

    #[test]
    fn test_risk_beats_savings() {
        assert_eq!(
            classify("is it safe to save like this"),
            ReplyCategory::RiskGuidance
        );
    }

    #[test]
    fn test_savings_beats_portfolio() {
        assert_eq!(
            classify("save more or buy stocks?"),
            ReplyCategory::SavingsRule
        );
    }

    #[test]
    fn test_portfolio_beats_sip() {
        assert_eq!(
            classify("add a sip to my portfolio"),
            ReplyCategory::PortfolioDiversification
        );
    }

    // ---- Normalization and determinism ----

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("INVEST"), ReplyCategory::InvestmentAdvice);
        assert_eq!(classify("Mutual Fund"), ReplyCategory::SipGuidance);
        assert_eq!(classify("StOcKs"), ReplyCategory::PortfolioDiversification);
    }

    #[test]
    fn test_classify_matches_inside_words() {
        // Substring containment by contract: "disinvestment" contains "invest".
        assert_eq!(classify("disinvestment"), ReplyCategory::InvestmentAdvice);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let input = "tell me about SIP and mutual fund";
        let first = classify(input);
        for _ in 0..10 {
            assert_eq!(classify(input), first);
        }
    }

    #[test]
    fn test_classify_unicode_falls_through() {
        assert_eq!(classify("\u{0cb9}\u{0ca3}"), ReplyCategory::Fallback);
    }

    // ---- Canned texts ----

    #[test]
    fn test_every_category_has_reply_text() {
        let categories = [
            ReplyCategory::InvestmentAdvice,
            ReplyCategory::RiskGuidance,
            ReplyCategory::SavingsRule,
            ReplyCategory::PortfolioDiversification,
            ReplyCategory::SipGuidance,
            ReplyCategory::Fallback,
        ];
        for category in categories {
            assert!(!reply_text(category).is_empty());
        }
    }

    #[test]
    fn test_reply_texts_are_distinct() {
        assert_ne!(
            reply_text(ReplyCategory::InvestmentAdvice),
            reply_text(ReplyCategory::RiskGuidance)
        );
        assert_ne!(
            reply_text(ReplyCategory::SipGuidance),
            reply_text(ReplyCategory::Fallback)
        );
    }

    #[test]
    fn test_welcome_text_mentions_advisor() {
        assert!(welcome_text().contains("investment advisor"));
    }
}
