/// Defines the directory where the result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/keff/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/keff/test";

/// Defines the default file stem of the result files
pub const DEFAULT_FN_STEM: &str = "keff";
