//! "Did you mean" suggestions for mistyped command names.
//!
//! A candidate is accepted when its Levenshtein distance to the token is at
//! most `threshold * token_len` edits (capped at [`MAX_ABSOLUTE_DISTANCE`]).
//! Ties go to the candidate listed first.

use strsim::levenshtein;

/// Fraction of the token length allowed as edits.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Hard cap on allowed edits regardless of token length.
pub const MAX_ABSOLUTE_DISTANCE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggester {
    threshold: f64,
    max_distance: usize,
    case_sensitive: bool,
}

impl Default for Suggester {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Suggester {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            max_distance: MAX_ABSOLUTE_DISTANCE,
            case_sensitive: false,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Number of edits a candidate may be away from `token`.
    pub fn allowed_distance(&self, token: &str) -> usize {
        let relative = (self.threshold * token.chars().count() as f64).floor();
        if relative.is_sign_negative() || relative.is_nan() {
            return 0;
        }
        (relative as usize).min(self.max_distance)
    }

    /// Return the closest candidate, or `None` if nothing is close enough.
    pub fn suggest<'a, I>(&self, token: &str, candidates: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if token.is_empty() {
            return None;
        }

        let allowed = self.allowed_distance(token);
        let token = self.fold(token);
        let mut best: Option<(&'a str, usize)> = None;

        for candidate in candidates {
            let distance = levenshtein(&token, &self.fold(candidate));
            if distance > allowed {
                continue;
            }
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((candidate, distance)),
            }
        }

        best.map(|(candidate, _)| candidate)
    }

    fn fold(&self, s: &str) -> String {
        if self.case_sensitive {
            s.to_string()
        } else {
            s.to_lowercase()
        }
    }
}

/// Suggest with the default 0.6 threshold.
pub fn suggest<'a, I>(token: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    Suggester::default().suggest(token, candidates)
}
