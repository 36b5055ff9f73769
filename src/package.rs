//! The generated project's `package.json`.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::{
    constants::{scripts::COMMENT_SUFFIX, PACKAGE_JSON},
    error::{Error, Result},
    ioutils::{read_json, write_json},
};

const SCRIPTS: &str = "scripts";

/// In-memory view of `package.json`, key order preserved.
///
/// Every stage loads it, mutates it and saves it straight away; nothing is
/// batched across stages.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDescriptor {
    fields: Map<String, Value>,
}

impl PackageDescriptor {
    pub fn path(root: &Path) -> PathBuf {
        root.join(PACKAGE_JSON)
    }

    pub fn load(root: &Path) -> Result<Self> {
        match read_json(Self::path(root))? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::PackageDescriptorError(format!(
                "expected an object at the top level, found {other}"
            ))),
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        write_json(Self::path(root), &Value::Object(self.fields.clone()))
    }

    /// Loads the descriptor, applies `f` and saves the result.
    pub fn update<F>(root: &Path, f: F) -> Result<()>
    where
        F: FnOnce(&mut PackageDescriptor) -> Result<()>,
    {
        let mut descriptor = Self::load(root)?;
        f(&mut descriptor)?;
        descriptor.save(root)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Sets a top-level key, replacing any previous value.
    pub fn set(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// Both fields receive the project name.
    pub fn set_name_and_description(&mut self, name: &str) {
        self.set("name", Value::String(name.to_string()));
        self.set("description", Value::String(name.to_string()));
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.fields.get(SCRIPTS)?.get(name)?.as_str()
    }

    /// Registers a run script, overwriting an existing one of the same name.
    pub fn set_script(&mut self, name: &str, command: &str) -> Result<()> {
        let scripts = self
            .fields
            .entry(SCRIPTS)
            .or_insert_with(|| Value::Object(Map::new()));

        match scripts {
            Value::Object(scripts) => {
                if let Some(previous) = scripts.get(name) {
                    log::debug!("Overwriting script '{name}' (was {previous})");
                }
                scripts.insert(name.to_string(), Value::String(command.to_string()));
                Ok(())
            }
            other => Err(Error::PackageDescriptorError(format!(
                "\"scripts\" must be an object, found {other}"
            ))),
        }
    }

    /// Registers `<name>:comment` followed by `<name>`.
    pub fn add_script_with_comment(
        &mut self,
        name: &str,
        comment: &str,
        command: &str,
    ) -> Result<()> {
        self.set_script(&format!("{name}{COMMENT_SUFFIX}"), comment)?;
        self.set_script(name, command)
    }
}
