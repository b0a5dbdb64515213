//! Rendering options for envelope fields.
//!
//! Each top-level field can be renamed or hidden. Options are read from the
//! environment by [`FormatOptions::from_env`]:
//!
//! | Env Var                        | Default                         |
//! |--------------------------------|---------------------------------|
//! | `PARCEL_FIELD_<NAME>_ALIAS`    | field name                      |
//! | `PARCEL_FIELD_<NAME>_SHOW`     | `true` (`false` for `STATUS`)   |
//! | `PARCEL_ITEMS_KEY`             | `items`                         |
//!
//! `<NAME>` is one of `STATUS`, `CODE`, `MESSAGE`, `DATA`, `ERRORS`.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::page::PAGE_META_KEYS;

/// Default key for paginated items inside `data`.
pub const DEFAULT_ITEMS_KEY: &str = "items";

/// A top-level envelope field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Status,
    Code,
    Message,
    Data,
    Errors,
}

impl Field {
    /// Fields in render order.
    pub const ALL: [Field; 5] = [
        Field::Status,
        Field::Code,
        Field::Message,
        Field::Data,
        Field::Errors,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Status => "status",
            Field::Code => "code",
            Field::Message => "message",
            Field::Data => "data",
            Field::Errors => "errors",
        }
    }

    fn env_name(self) -> &'static str {
        match self {
            Field::Status => "STATUS",
            Field::Code => "CODE",
            Field::Message => "MESSAGE",
            Field::Data => "DATA",
            Field::Errors => "ERRORS",
        }
    }
}

/// How a single field is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOptions {
    /// Key written to the wire.
    pub alias: String,
    pub show: bool,
}

/// Rendering options for every envelope field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub status: FieldOptions,
    pub code: FieldOptions,
    pub message: FieldOptions,
    pub data: FieldOptions,
    pub errors: FieldOptions,
    /// Key for the item list inside paginated `data`.
    pub items_key: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        let field = |f: Field, show: bool| FieldOptions {
            alias: f.name().to_string(),
            show,
        };

        Self {
            status: field(Field::Status, false),
            code: field(Field::Code, true),
            message: field(Field::Message, true),
            data: field(Field::Data, true),
            errors: field(Field::Errors, true),
            items_key: DEFAULT_ITEMS_KEY.to_string(),
        }
    }
}

impl FormatOptions {
    pub fn field(&self, field: Field) -> &FieldOptions {
        match field {
            Field::Status => &self.status,
            Field::Code => &self.code,
            Field::Message => &self.message,
            Field::Data => &self.data,
            Field::Errors => &self.errors,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FieldOptions {
        match field {
            Field::Status => &mut self.status,
            Field::Code => &mut self.code,
            Field::Message => &mut self.message,
            Field::Data => &mut self.data,
            Field::Errors => &mut self.errors,
        }
    }

    /// Rename a field.
    pub fn alias(mut self, field: Field, alias: impl Into<String>) -> Self {
        self.field_mut(field).alias = alias.into();
        self
    }

    /// Show or hide a field.
    pub fn show(mut self, field: Field, show: bool) -> Self {
        self.field_mut(field).show = show;
        self
    }

    /// Load options from environment variables, starting from the defaults.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load options through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        for field in Field::ALL {
            let prefix = format!("PARCEL_FIELD_{}", field.env_name());

            let alias_key = format!("{prefix}_ALIAS");
            if let Some(alias) = lookup(&alias_key) {
                let alias = alias.trim();
                if alias.is_empty() {
                    return Err(CoreError::InvalidArgument(format!(
                        "{alias_key} must not be empty"
                    )));
                }
                options.field_mut(field).alias = alias.to_string();
            }

            let show_key = format!("{prefix}_SHOW");
            if let Some(show) = lookup(&show_key) {
                options.field_mut(field).show = parse_bool(&show_key, &show)?;
            }
        }

        if let Some(items_key) = lookup("PARCEL_ITEMS_KEY") {
            let items_key = items_key.trim();
            if items_key.is_empty() {
                return Err(CoreError::InvalidArgument(
                    "PARCEL_ITEMS_KEY must not be empty".to_string(),
                ));
            }
            options.items_key = items_key.to_string();
        }

        options.validate()?;
        Ok(options)
    }

    /// Reject two visible fields rendered under the same key, and an items
    /// key that pagination metadata would overwrite.
    pub fn validate(&self) -> CoreResult<()> {
        if PAGE_META_KEYS.contains(&self.items_key.as_str()) {
            return Err(CoreError::InvalidArgument(format!(
                "items key `{}` collides with pagination metadata",
                self.items_key
            )));
        }

        let mut seen = HashSet::new();
        for field in Field::ALL {
            let opts = self.field(field);
            if opts.show && !seen.insert(opts.alias.as_str()) {
                return Err(CoreError::InvalidArgument(format!(
                    "field alias `{}` is used more than once",
                    opts.alias
                )));
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> CoreResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(CoreError::InvalidArgument(format!(
            "{key} must be a boolean, got `{other}`"
        ))),
    }
}
