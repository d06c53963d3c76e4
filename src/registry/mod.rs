//! The built-in checks, in the order they run and are reported.

mod ai_act;
mod appi;
mod gdpr;
mod heuristics;
mod jis;
mod lgpd;
mod nis2;
mod pdpa;
mod pipa;
mod templates;

use std::sync::LazyLock;

use crate::checker::Check;

pub use heuristics::AI_LIBRARIES;

static REGISTRY: LazyLock<Vec<Check>> = LazyLock::new(|| {
    [
        gdpr::checks(),
        ai_act::checks(),
        nis2::checks(),
        pipa::checks(),
        appi::checks(),
        pdpa::checks(),
        lgpd::checks(),
        jis::checks(),
    ]
    .into_iter()
    .flatten()
    .collect()
});

/// Every built-in check: GDPR, AI Act, NIS2, PIPA, APPI, PDPA, LGPD, then JIS.
#[must_use]
pub fn registry() -> &'static [Check] {
    &REGISTRY
}

/// Look up a check by its code, ignoring case.
#[must_use]
pub fn find_check(code: &str) -> Option<&'static Check> {
    registry()
        .iter()
        .find(|check| check.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
