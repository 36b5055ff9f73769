//! Constants used throughout the goo application

/// Package descriptor written by `npm init`
pub const PACKAGE_JSON: &str = "package.json";

/// TypeScript compiler configuration
pub const TSCONFIG_JSON: &str = "tsconfig.json";

/// Source directory of the generated project
pub const SOURCE_DIR: &str = "src";

/// Entry point created empty inside the source directory
pub const ENTRY_POINT: &str = "src/index.ts";

/// Glob the staged-lint runner applies its commands to
pub const LINT_STAGED_GLOB: &str = "*.ts";

/// Configuration files written by the feature installers
pub mod config_files {
    pub const ESLINT: &str = ".eslintrc.js";
    pub const PRETTIER: &str = ".prettierrc.js";
    pub const COMMITLINT: &str = "commitlint.config.js";
}

/// Package manager executables
pub mod package_manager {
    #[cfg(not(windows))]
    pub const NPM: &str = "npm";
    #[cfg(windows)]
    pub const NPM: &str = "npm.cmd";

    #[cfg(not(windows))]
    pub const NPX: &str = "npx";
    #[cfg(windows)]
    pub const NPX: &str = "npx.cmd";
}

/// Development dependencies installed by each stage
pub mod packages {
    pub const TYPESCRIPT: &[&str] = &["typescript"];
    pub const TYPES_NODE: &[&str] = &["@types/node"];
    pub const DEV_LOOP: &[&str] = &["ts-node-dev"];
    pub const ESLINT: &[&str] =
        &["eslint", "@typescript-eslint/parser", "@typescript-eslint/eslint-plugin"];
    pub const PRETTIER: &[&str] = &["prettier"];
    pub const COMMITLINT: &[&str] = &["@commitlint/cli", "@commitlint/config-conventional"];
    pub const HUSKY: &[&str] = &["husky", "lint-staged"];
}

/// Script names and commands registered in package.json
pub mod scripts {
    pub const DEV: &str = "dev";
    pub const DEV_COMMAND: &str = "ts-node-dev --respawn --transpile-only src/index.ts";
    pub const DEV_COMMENT: &str = "Start the development environment";

    pub const ESLINT: &str = "eslint";
    pub const ESLINT_COMMAND: &str = "eslint --fix src --ext .ts --max-warnings=0";
    pub const ESLINT_COMMENT: &str = "Lint and auto-fix every .ts file under src with ESLint";

    pub const PRETTIER: &str = "prettier";
    pub const PRETTIER_COMMAND: &str = "prettier --write \"src/**/*.ts\"";
    pub const PRETTIER_COMMENT: &str = "Format every .ts file under src";

    pub const COMMIT: &str = "commit";
    pub const COMMIT_COMMAND: &str = "cz";
    pub const COMMIT_COMMENT: &str = "Guided, conventional commit message";

    pub const BUILD: &str = "build";
    pub const BUILD_COMMENT: &str = "Build";
    pub const BUILD_TAIL: &str = "rm -rf lib && tsc --build";

    /// Suffix of the free-text key written next to each script
    pub const COMMENT_SUFFIX: &str = ":comment";
}

/// Git hook names and commands
pub mod hooks {
    pub const PRE_COMMIT: &str = "pre-commit";
    pub const PRE_COMMIT_COMMAND: &str = "lint-staged";
    pub const COMMIT_MSG: &str = "commit-msg";
    pub const COMMIT_MSG_COMMAND: &str = "commitlint -E HUSKY_GIT_PARAMS";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
