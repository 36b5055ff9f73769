//! Fixed configuration files emitted into the generated project.

use serde_json::{json, Value};

pub const ESLINTRC: &str = r#"module.exports = {
  env: {
    es2021: true,
    node: true,
  },
  extends: ['eslint:recommended', 'plugin:@typescript-eslint/recommended'],
  parser: '@typescript-eslint/parser',
  parserOptions: {
    ecmaVersion: 12,
    sourceType: 'module',
  },
  plugins: ['@typescript-eslint'],
  rules: {},
};
"#;

pub const PRETTIERRC: &str = r#"module.exports = {
  // at most 80 characters per line
  printWidth: 80,
  // indent with 2 spaces
  tabWidth: 2,
  useTabs: false,
  semi: true,
  singleQuote: true,
  // quote object keys only where required
  quoteProps: 'as-needed',
  jsxSingleQuote: false,
  trailingComma: 'all',
  // { foo: bar }
  bracketSpacing: true,
  jsxBracketSameLine: false,
  // parentheses even around a single arrow function parameter
  arrowParens: 'always',
  // format the whole file
  rangeStart: 0,
  rangeEnd: Infinity,
  requirePragma: false,
  insertPragma: false,
  proseWrap: 'preserve',
  htmlWhitespaceSensitivity: 'css',
  endOfLine: 'lf',
};
"#;

pub const COMMITLINT_CONFIG: &str = r#"module.exports = {
  extends: ['@commitlint/config-conventional'],
};
"#;

/// The `tsconfig.json` that replaces whatever `tsc --init` generated.
pub fn tsconfig() -> Value {
    json!({
        "compileOnSave": true,
        "compilerOptions": {
            "target": "ES2018",
            "module": "commonjs",
            "moduleResolution": "node",
            "experimentalDecorators": true,
            "emitDecoratorMetadata": true,
            "inlineSourceMap": true,
            "noImplicitThis": true,
            "noUnusedLocals": true,
            "stripInternal": true,
            "pretty": true,
            "declaration": true,
            "outDir": "lib",
            "baseUrl": "./",
            "paths": {
                "*": ["src/*"]
            }
        },
        "exclude": ["lib", "node_modules"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsconfig_maps_sources_and_excludes_output() {
        let config = tsconfig();
        assert_eq!(config["compilerOptions"]["outDir"], "lib");
        assert_eq!(config["compilerOptions"]["paths"]["*"], json!(["src/*"]));
        assert_eq!(config["exclude"], json!(["lib", "node_modules"]));
    }

    #[test]
    fn commitlint_extends_conventional_config() {
        assert!(COMMITLINT_CONFIG.contains("@commitlint/config-conventional"));
    }
}
