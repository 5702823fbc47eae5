//! Validation engine - dispatches a rule to its strategy.
//!
//! Every strategy returns a [`ValidationVerdict`]; none of them can fail.
//! A malformed rule (bad pattern, empty keyword or option list) is logged as
//! a configuration defect and the input passes, so a broken gate never
//! wedges a conversation.

use regex::RegexBuilder;
use tracing::{debug, info, warn};

use crate::domain::foundation::ContextSnapshot;

use super::lexicon::ConfirmationLexicon;
use super::prompts::RecoveryPrompts;
use super::rule::ValidationRule;
use super::verdict::ValidationVerdict;

/// Context path the detected intent is read from unless a rule overrides it.
pub const DEFAULT_INTENT_PATH: &str = "nlu.intent";

/// Trims and lowercases raw input the way every strategy sees it.
pub fn normalize_input(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Stateless validator for flow-state input rules.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    prompts: RecoveryPrompts,
    intent_path: String,
    lexicon: &'static ConfirmationLexicon,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Creates an engine with default prompts and the bilingual lexicon.
    pub fn new() -> Self {
        Self {
            prompts: RecoveryPrompts::default(),
            intent_path: DEFAULT_INTENT_PATH.to_string(),
            lexicon: ConfirmationLexicon::bilingual(),
        }
    }

    /// Replaces the default recovery prompts.
    pub fn with_prompts(mut self, prompts: RecoveryPrompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Changes where intent gates look for the detected intent.
    pub fn with_intent_path(mut self, path: impl Into<String>) -> Self {
        self.intent_path = path.into();
        self
    }

    /// Validates input against an optional rule.
    ///
    /// A state with no rule accepts anything.
    pub fn gate(
        &self,
        rule: Option<&ValidationRule>,
        input: &str,
        context: &ContextSnapshot,
    ) -> ValidationVerdict {
        match rule {
            Some(rule) => self.validate(rule, input, context),
            None => ValidationVerdict::pass(normalize_input(input)),
        }
    }

    /// Validates input against a rule.
    pub fn validate(
        &self,
        rule: &ValidationRule,
        input: &str,
        context: &ContextSnapshot,
    ) -> ValidationVerdict {
        let normalized = normalize_input(input);
        debug!(strategy = rule.strategy(), input = %normalized, "Validating input");

        match rule {
            ValidationRule::Pattern {
                pattern,
                retry_prompt,
            } => self.check_pattern(pattern, retry_prompt.as_deref(), normalized),
            ValidationRule::IntentGate {
                allowed_intents,
                denied_intents,
                intent_path,
                retry_prompt,
            } => {
                let path = intent_path
                    .as_deref()
                    .filter(|p| !p.trim().is_empty())
                    .unwrap_or(&self.intent_path);
                let detected = context.get_str(path).map(normalize_input);
                self.check_intent(
                    allowed_intents,
                    denied_intents,
                    detected.as_deref(),
                    retry_prompt.as_deref(),
                    normalized,
                )
            }
            ValidationRule::Keyword {
                keywords,
                retry_prompt,
            } => self.check_keywords(keywords, retry_prompt.as_deref(), normalized),
            ValidationRule::Selection {
                options,
                retry_prompt,
            } => self.check_selection(options, retry_prompt.as_deref(), normalized),
            ValidationRule::Confirmation { retry_prompt } => {
                self.check_confirmation(retry_prompt.as_deref(), normalized)
            }
            ValidationRule::Custom { hook } => {
                info!(hook = %hook, "No custom validation hooks are registered; accepting input");
                ValidationVerdict::pass(normalized)
            }
        }
    }

    fn check_pattern(
        &self,
        pattern: &str,
        retry_prompt: Option<&str>,
        normalized: String,
    ) -> ValidationVerdict {
        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) if regex.is_match(&normalized) => ValidationVerdict::pass(normalized),
            Ok(_) => ValidationVerdict::fail(
                normalized,
                "Input does not match the expected format",
                retry_prompt.unwrap_or(&self.prompts.pattern),
            ),
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "Validation pattern does not compile; accepting input");
                ValidationVerdict::pass(normalized)
            }
        }
    }

    fn check_intent(
        &self,
        allowed: &[String],
        denied: &[String],
        detected: Option<&str>,
        retry_prompt: Option<&str>,
        normalized: String,
    ) -> ValidationVerdict {
        let prompt = retry_prompt.unwrap_or(&self.prompts.intent);
        let listed = |list: &[String], intent: &str| {
            list.iter().any(|entry| normalize_input(entry) == intent)
        };

        if let Some(intent) = detected {
            if listed(denied, intent) {
                return ValidationVerdict::fail(
                    normalized,
                    format!("Intent '{}' is not allowed here", intent),
                    prompt,
                );
            }
        }

        if allowed.is_empty() {
            return ValidationVerdict::pass(normalized);
        }

        match detected {
            Some(intent) if listed(allowed, intent) => ValidationVerdict::pass(normalized),
            Some(intent) => ValidationVerdict::fail(
                normalized,
                format!("Intent '{}' is not one of the expected intents", intent),
                prompt,
            ),
            None => ValidationVerdict::fail(normalized, "No intent was detected", prompt),
        }
    }

    fn check_keywords(
        &self,
        keywords: &[String],
        retry_prompt: Option<&str>,
        normalized: String,
    ) -> ValidationVerdict {
        let mut usable = 0;
        for keyword in keywords {
            let needle = normalize_input(keyword);
            if needle.is_empty() {
                continue;
            }
            usable += 1;
            if normalized.contains(&needle) {
                return ValidationVerdict::pass_with(normalized, keyword.clone());
            }
        }

        if usable == 0 {
            warn!("Keyword rule has no keywords; accepting input");
            return ValidationVerdict::pass(normalized);
        }

        ValidationVerdict::fail(
            normalized,
            "None of the expected keywords were found",
            retry_prompt.unwrap_or(&self.prompts.keyword),
        )
    }

    fn check_selection(
        &self,
        options: &[String],
        retry_prompt: Option<&str>,
        normalized: String,
    ) -> ValidationVerdict {
        if options.is_empty() {
            warn!("Selection rule has no options; accepting input");
            return ValidationVerdict::pass(normalized);
        }

        if let Some(option) = select_option(options, &normalized) {
            return ValidationVerdict::pass_with(normalized, option.clone());
        }

        let prompt = match retry_prompt {
            Some(prompt) => prompt.to_string(),
            None => RecoveryPrompts::with_numbered_options(&self.prompts.selection, options),
        };
        ValidationVerdict::fail(
            normalized,
            format!("Expected one of: {}", options.join(", ")),
            prompt,
        )
    }

    fn check_confirmation(&self, retry_prompt: Option<&str>, normalized: String) -> ValidationVerdict {
        match self.lexicon.classify(&normalized) {
            Some(answer) => ValidationVerdict::pass_with(normalized, answer.as_str()),
            None => ValidationVerdict::fail(
                normalized,
                "Could not tell whether the answer was yes or no",
                retry_prompt.unwrap_or(&self.prompts.confirmation),
            ),
        }
    }
}

/// Picks an option for normalized input.
///
/// Tiers, first hit wins: case-insensitive equality, then a 1-based index,
/// then containment in either direction. Returns the option as configured.
fn select_option<'a>(options: &'a [String], normalized: &str) -> Option<&'a String> {
    if normalized.is_empty() {
        return None;
    }

    let lowered: Vec<String> = options.iter().map(|o| normalize_input(o)).collect();

    if let Some(index) = lowered.iter().position(|o| o == normalized) {
        return Some(&options[index]);
    }

    if let Ok(n) = normalized.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return Some(&options[n - 1]);
        }
    }

    lowered
        .iter()
        .position(|o| !o.is_empty() && (o.contains(normalized) || normalized.contains(o.as_str())))
        .map(|index| &options[index])
}
