use crate::Principal;

use std::path::PathBuf;

/// Import work handed to the execution engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportJob {
    /// Absolute path of the uploaded archive
    pub working_file: PathBuf,
    pub actor: Principal,
}
