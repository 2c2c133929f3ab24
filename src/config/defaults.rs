//! Default configuration values and fixed names

/// Project file extension (including the dot)
pub const PROJECT_FILE_EXT: &str = ".apf";

/// Root element of the project file
pub const PROJECT_FILE_ROOT: &str = "Armemus_Project_File";

/// Build output directory created inside every project
pub const BUILD_DIR: &str = "Build";

/// Support directory shipped with the Tiva template
pub const TIVA_FILES_DIR: &str = "Tiva Files";

/// Placeholder name renamed to the project name on copy
pub const TEMPLATE_MARKER: &str = "template";

/// Main source extension for Arduino-family boards
pub const ARDUINO_EXT: &str = ".ino";

/// Main source extension for Tiva boards
pub const TIVA_EXT: &str = ".cpp";

/// Template subtree for Arduino-family boards, relative to the templates root
pub const ARDUINO_TEMPLATE_SUBDIR: &str = "Arduino/Arduino";

/// Template subtree for Tiva boards, relative to the templates root
pub const TIVA_TEMPLATE_SUBDIR: &str = "Tiva/Tiva";

/// Default warning option written to new project files
pub const DEFAULT_WARNING: &str = "-W";

/// Default optimization option written to new project files
pub const DEFAULT_OPTIMIZATION: &str = "-O0";

/// Label of selection index 0
pub const NO_BOARD_LABEL: &str = "Select a board";
