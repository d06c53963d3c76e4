mod checks;
mod context;
mod fix;
mod init;
mod scan;

pub use checks::{
    format_check_detail, format_check_list, run_checks_list, run_checks_list_impl,
};
pub use context::{load_config, resolve_scan_options, scan_with_progress};
pub use fix::{run_fix, run_fix_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use scan::{exit_code_for, format_output, run_scan, run_scan_impl};
