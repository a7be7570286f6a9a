// Security module for tool ids and site paths
//
// Tool ids double as URL fragments and file name stems, and site paths are
// resolved against a root directory. Both are validated here before they
// reach the filesystem.

pub mod id_validator;
pub mod path_validator;

pub use id_validator::{IdError, validate_tool_id};
pub use path_validator::{PathSecurityError, validate_site_path};
