//! EU Network and Information Security Directive 2.

use crate::checker::{Category, Check, CheckResult, FixAction, Severity};
use crate::date::CalendarDate;
use crate::scanner::ScanContext;

use super::heuristics::{
    any_file_named, base_name, contains_any, file_contains, find_file, read_lowercase,
};
use super::templates::{self, write_template};

/// Config-like files inspected for cloud endpoints, at most this many.
const MAX_CONFIG_FILES: usize = 20;

struct CloudProvider {
    name: &'static str,
    patterns: &'static [&'static str],
}

const FOREIGN_CLOUD_PROVIDERS: &[CloudProvider] = &[
    CloudProvider {
        name: "AWS",
        patterns: &["amazonaws.com", "aws-sdk", "aws.amazon", "s3.amazonaws"],
    },
    CloudProvider {
        name: "Azure",
        patterns: &["azure.com", "microsoft.com", "azure-sdk", "blob.core.windows"],
    },
    CloudProvider {
        name: "Google Cloud",
        patterns: &["googleapis.com", "google-cloud", "gcp", "storage.cloud.google"],
    },
    CloudProvider {
        name: "Cloudflare (US)",
        patterns: &["cloudflare.com", "cloudflare-sdk"],
    },
    CloudProvider {
        name: "DigitalOcean",
        patterns: &["digitalocean.com", "digitaloceanspaces"],
    },
    CloudProvider {
        name: "Kyndryl/IBM",
        patterns: &["kyndryl.com", "ibm.com", "softlayer"],
    },
];

pub(super) fn checks() -> Vec<Check> {
    vec![
        risk_management(),
        incident_handling(),
        supply_chain(),
        business_continuity(),
        access_control(),
        encryption(),
        vulnerability_management(),
        digital_sovereignty(),
        security_training(),
        asset_management(),
    ]
}

fn is_config_like(name: &str) -> bool {
    name.contains(".env")
        || name.contains("config")
        || name.ends_with(".json")
        || name.ends_with(".yaml")
        || name.ends_with(".yml")
}

/// Names of foreign cloud providers referenced by the manifest or config files.
fn detect_foreign_cloud(ctx: &ScanContext) -> Vec<&'static str> {
    let mut found = Vec::new();
    let mut record = |content: &str| {
        for provider in FOREIGN_CLOUD_PROVIDERS {
            if !found.contains(&provider.name) && contains_any(content, provider.patterns) {
                found.push(provider.name);
            }
        }
    };

    if let Some(manifest) = &ctx.manifest {
        record(&manifest.to_lowercase_text());
    }

    let config_files = ctx
        .files
        .iter()
        .filter(|file| is_config_like(&base_name(file)))
        .take(MAX_CONFIG_FILES);
    for file in config_files {
        // unreadable files are skipped
        if let Ok(content) = read_lowercase(file) {
            record(&content);
        }
    }

    found
}

fn risk_management() -> Check {
    Check::new(
        "NIS2-001",
        "Risk Management Policy",
        Category::Nis2,
        Severity::Critical,
        15,
        "Check for risk management documentation (Article 21)",
        |check, ctx| {
            let found = find_file(ctx, &["risk", "security-policy", "isms", "risk-management"]);
            let keywords = ["risk", "threat", "vulnerability", "assessment"];
            if found.is_some_and(|path| file_contains(path, &keywords)) {
                return Ok(CheckResult::passed(check, "Risk management documentation found"));
            }

            Ok(CheckResult::failed(check, "No risk management policy found")
                .with_recommendation("Create risk management policy per NIS2 Article 21")
                .with_reference("NIS2 Article 21(2)(a)"))
        },
    )
}

fn incident_handling() -> Check {
    Check::new(
        "NIS2-002",
        "Incident Handling Procedure",
        Category::Nis2,
        Severity::Critical,
        15,
        "Check for incident response plan (24h notification)",
        |check, ctx| {
            let Some(found) = find_file(ctx, &["incident", "response", "breach", "csirt"]) else {
                return Ok(CheckResult::failed(check, "No incident handling procedure found")
                    .with_recommendation(
                        "Create incident response plan with 24h CSIRT notification",
                    )
                    .with_reference("NIS2 Article 23"));
            };

            if file_contains(found, &["24 hour", "24-hour", "24h", "within 24"]) {
                return Ok(CheckResult::passed(
                    check,
                    "Incident handling with 24h notification found",
                ));
            }

            Ok(CheckResult::warning(
                check,
                "Incident procedure found but no 24h notification mentioned",
                10,
            )
            .with_recommendation("Update procedure with 24-hour early warning requirement")
            .with_reference("NIS2 Article 23(4)(a)"))
        },
    )
}

fn supply_chain() -> Check {
    Check::new(
        "NIS2-003",
        "Supply Chain Security",
        Category::Nis2,
        Severity::High,
        12,
        "Check for supply chain security measures",
        |check, ctx| {
            let patterns = ["supply-chain", "vendor", "third-party", "supplier"];
            if find_file(ctx, &patterns).is_some() {
                return Ok(CheckResult::passed(
                    check,
                    "Supply chain security documentation found",
                ));
            }

            let has_lockfile = any_file_named(ctx, |name| {
                matches!(name, "package-lock.json" | "yarn.lock" | "pnpm-lock.yaml")
            });
            if has_lockfile {
                return Ok(
                    CheckResult::warning(check, "Lockfile found but no supply chain policy", 6)
                        .with_recommendation(
                            "Document supply chain security policy and vendor assessment process",
                        )
                        .with_reference("NIS2 Article 21(2)(d)"),
                );
            }

            Ok(CheckResult::failed(check, "No supply chain security measures found")
                .with_recommendation("Implement supply chain security per NIS2 requirements")
                .with_reference("NIS2 Article 21(2)(d)"))
        },
    )
}

fn business_continuity() -> Check {
    Check::new(
        "NIS2-004",
        "Business Continuity",
        Category::Nis2,
        Severity::High,
        12,
        "Check for business continuity / disaster recovery plan",
        |check, ctx| {
            let patterns = ["continuity", "disaster", "recovery", "backup", "bcp", "drp"];
            if find_file(ctx, &patterns).is_some() {
                return Ok(CheckResult::passed(check, "Business continuity plan found"));
            }

            Ok(CheckResult::failed(check, "No business continuity plan found")
                .with_recommendation("Create BCP/DRP documentation")
                .with_reference("NIS2 Article 21(2)(c)"))
        },
    )
}

fn access_control() -> Check {
    Check::new(
        "NIS2-005",
        "Access Control Policy",
        Category::Nis2,
        Severity::High,
        10,
        "Check for access control documentation",
        |check, ctx| {
            let patterns = ["access", "rbac", "authentication", "authorization"];
            if find_file(ctx, &patterns).is_some() {
                return Ok(CheckResult::passed(check, "Access control documentation found"));
            }

            Ok(
                CheckResult::warning(check, "No access control policy found", check.weight)
                    .with_recommendation("Document access control and authentication policies")
                    .with_reference("NIS2 Article 21(2)(i)"),
            )
        },
    )
}

fn encryption() -> Check {
    Check::new(
        "NIS2-006",
        "Encryption & Cryptography",
        Category::Nis2,
        Severity::High,
        10,
        "Check for encryption policy and implementation",
        |check, ctx| {
            let documented = find_file(ctx, &["encryption", "crypto", "tls", "certificate"]);
            let has_tls_config = any_file_named(ctx, |name| {
                name.contains("ssl") || name.contains("tls") || name.contains("cert")
            });
            if documented.is_some() || has_tls_config {
                return Ok(CheckResult::passed(check, "Encryption configuration found"));
            }

            Ok(
                CheckResult::warning(check, "No encryption policy found", check.weight)
                    .with_recommendation(
                        "Document cryptography policy and ensure TLS configuration",
                    )
                    .with_reference("NIS2 Article 21(2)(h)"),
            )
        },
    )
}

fn vulnerability_management() -> Check {
    Check::new(
        "NIS2-007",
        "Vulnerability Management",
        Category::Nis2,
        Severity::High,
        10,
        "Check for vulnerability disclosure and handling",
        |check, ctx| {
            // .well-known is hidden from the walker, so look there directly
            let target = ctx.root.join(".well-known").join("security.txt");
            let patterns = ["vulnerability", "security.md", "security.txt", "cve"];
            if target.is_file() || find_file(ctx, &patterns).is_some() {
                return Ok(CheckResult::passed(
                    check,
                    "Vulnerability handling documentation found",
                ));
            }

            let fix = FixAction::new("Create security.txt with contact info").with_remediation(
                move || write_template(&target, &templates::security_txt(CalendarDate::today())),
            );
            Ok(CheckResult::warning(
                check,
                "No vulnerability management process found",
                check.weight,
            )
            .with_recommendation("Add security.txt and vulnerability disclosure process")
            .with_reference("NIS2 Article 21(2)(e)")
            .with_fix(fix))
        },
    )
}

fn digital_sovereignty() -> Check {
    Check::new(
        "NIS2-008",
        "Digital Sovereignty (no-digid)",
        Category::Nis2,
        Severity::High,
        12,
        "Check for foreign cloud dependencies (US CLOUD Act risk)",
        |check, ctx| {
            let providers = detect_foreign_cloud(ctx);
            if providers.is_empty() {
                return Ok(CheckResult::passed(
                    check,
                    "No foreign cloud dependencies detected - Sovereign!",
                ));
            }

            let recommendation = if ctx.sovereign {
                "Sovereign mode: replace foreign cloud services with EU-sovereign alternatives. \
                 US CLOUD Act allows foreign access to data."
            } else {
                "Consider EU-sovereign alternatives. US CLOUD Act allows foreign access to data."
            };
            Ok(CheckResult::warning(
                check,
                format!("Foreign cloud detected: {}", providers.join(", ")),
                check.weight,
            )
            .with_recommendation(recommendation)
            .with_reference("NIS2 Recital 79 (supply chain), Schrems II"))
        },
    )
}

fn security_training() -> Check {
    Check::new(
        "NIS2-009",
        "Security Awareness Training",
        Category::Nis2,
        Severity::Medium,
        8,
        "Check for security training documentation",
        |check, ctx| {
            let patterns = ["training", "awareness", "onboarding", "security-guide"];
            if find_file(ctx, &patterns).is_some() {
                return Ok(CheckResult::passed(check, "Security training documentation found"));
            }

            Ok(
                CheckResult::warning(check, "No security awareness training found", check.weight)
                    .with_recommendation("Implement cyber hygiene and security training program")
                    .with_reference("NIS2 Article 21(2)(g)"),
            )
        },
    )
}

fn asset_management() -> Check {
    Check::new(
        "NIS2-010",
        "Asset Management",
        Category::Nis2,
        Severity::Medium,
        8,
        "Check for asset inventory",
        |check, ctx| {
            let patterns = ["asset", "inventory", "cmdb", "infrastructure"];
            if find_file(ctx, &patterns).is_some() {
                return Ok(CheckResult::passed(check, "Asset management documentation found"));
            }

            Ok(
                CheckResult::warning(check, "No asset inventory found", check.weight)
                    .with_recommendation("Create and maintain IT asset inventory")
                    .with_reference(
                        "NIS2 Article 21(2)(a) - risk analysis requires asset knowledge",
                    ),
            )
        },
    )
}
