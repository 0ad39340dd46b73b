//! Signal rule tables
//!
//! The risk and trust tables are declarative data: ordered lists of
//! (pattern, weight, reason) compiled once at startup and immutable after.

use regex::Regex;

/// A single weighted signal rule
#[derive(Debug, Clone)]
pub struct SignalRule {
    /// Compiled pattern, matched against the lower-cased text
    pub pattern: Regex,
    /// Score contribution when the pattern matches
    pub weight: i64,
    /// Human-readable reason reported on match
    pub reason: &'static str,
}

impl SignalRule {
    fn new(pattern: &str, weight: i64, reason: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("invalid built-in rule pattern"),
            weight,
            reason,
        }
    }
}

/// Ordered risk and trust rule tables
///
/// Order determines the order reasons are listed; every matching rule always
/// applies, so it never changes the score.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Fraud indicators; weights are added to the score
    pub risk: Vec<SignalRule>,
    /// Legitimacy counter-signals; weights are subtracted
    pub trust: Vec<SignalRule>,
}

impl RuleSet {
    /// The standard rule tables
    pub fn standard() -> Self {
        let risk = vec![
            SignalRule::new(
                r"(gift\s*card|apple\s*card|steam\s*card|google\s*play)",
                30,
                "Requests gift cards",
            ),
            SignalRule::new(
                r"\bwire\b|\bwestern\s+union\b|moneygram",
                22,
                "Asks for wire/money transfer",
            ),
            SignalRule::new(
                r"\bcrypto|bitcoin|usdt|wallet address|metamask|binance\b",
                22,
                "Requests crypto payment",
            ),
            SignalRule::new(
                r"(cashapp|venmo|zelle)\b.*(dm|pm|message)",
                16,
                "Peer-to-peer app via DM",
            ),
            SignalRule::new(
                r"\burgent|now|immediately|today only|last chance|deadline|within\s+\d+\s*(minutes?|hours?)\b",
                12,
                "High-pressure urgency",
            ),
            SignalRule::new(
                r"\bmatch(?:ed)?\s*\d{2,3}%|match\s*(\d+x|[2-9]00%)\b",
                12,
                "Unrealistic match promise",
            ),
            SignalRule::new(
                r"\bprivacy\b.*(cannot|can.?t)\s*(show|share|provide)\s*(receipts|proof)",
                18,
                "Claims privacy prevents receipts",
            ),
            SignalRule::new(
                r"\b(no|cannot|won'?t)\s*(provide|show)\s*(ein|receipt|501\(c\)3)\b",
                16,
                "Refuses EIN/receipts",
            ),
            SignalRule::new(
                r"\b(dm|pm|direct message|telegram|whatsapp)\b",
                10,
                "Moves to private messaging",
            ),
            SignalRule::new(
                r"(bit\.ly|tinyurl\.com|shorturl|goo\.gl|t\.co|is\.gd|ow\.ly|rb\.gy)",
                14,
                "Uses a URL shortener",
            ),
            SignalRule::new(
                r"\bimpersonat(e|ing)|official support team|admin team\b",
                12,
                "Possible impersonation",
            ),
            SignalRule::new(
                r"\bhelpless child|widow|war orphan|terminal\b",
                8,
                "Emotion bait",
            ),
        ];

        let trust = vec![
            SignalRule::new(
                r"\b(501\s*\(c\)\s*3|501c3|non[-\s]?profit)\b",
                12,
                "Mentions nonprofit status",
            ),
            SignalRule::new(
                r"\bein\b[:\s]*\d{2}-\d{7}\b",
                20,
                "Provides EIN format",
            ),
            SignalRule::new(
                r"\b(receipt|tax[-\s]?deductible|donation receipt)\b",
                10,
                "Mentions receipts/tax-deductible",
            ),
            SignalRule::new(
                r"\b(donate|giving|support)\b.*\b(portal|official site|website)\b",
                8,
                "Directs to official portal",
            ),
        ];

        Self { risk, trust }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
