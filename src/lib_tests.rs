use tempfile::TempDir;

use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_CHECKS_FAILED);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_CHECKS_FAILED, EXIT_CONFIG_ERROR);
}

#[test]
fn public_scan_and_fix_round() {
    let dir = TempDir::new().unwrap();

    let before = scan(dir.path(), &ScanOptions::default()).unwrap();
    let issues = get_fixable_issues(&before.results);
    assert_eq!(issues.len(), 3);

    let preview = apply_fixes(&issues, FixOptions { dry_run: true });
    assert_eq!(preview, FixTally { fixed: 3, failed: 0 });
    assert!(!dir.path().join("PRIVACY.md").exists());

    let tally = apply_fixes(&issues, FixOptions::default());
    assert_eq!(tally, FixTally { fixed: 3, failed: 0 });

    let after = scan(dir.path(), &ScanOptions::default()).unwrap();
    assert!(after.score > before.score);
    assert!(get_fixable_issues(&after.results).is_empty());
}
