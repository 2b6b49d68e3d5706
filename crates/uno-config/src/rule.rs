//! Custom static rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collection::Named;
use crate::declarations::Declarations;
use crate::error::IdentifierKind;

/// A custom utility rule: a class name mapped to a declaration set.
///
/// Serializes in the engine's tuple form, `["name", { "prop": "value" }]`.
///
/// # Example
///
/// ```rust
/// use uno_config::Rule;
///
/// let rule = Rule::new("scrollbar-w-none", [("scrollbar-width", "none")]);
/// assert_eq!(rule.to_css(), ".scrollbar-w-none{scrollbar-width:none;}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleRepr", into = "RuleRepr")]
pub struct Rule {
    name: String,
    declarations: Declarations,
}

#[derive(Serialize, Deserialize)]
struct RuleRepr(String, Declarations);

impl From<RuleRepr> for Rule {
    fn from(RuleRepr(name, declarations): RuleRepr) -> Self {
        Self { name, declarations }
    }
}

impl From<Rule> for RuleRepr {
    fn from(rule: Rule) -> Self {
        RuleRepr(rule.name, rule.declarations)
    }
}

impl Rule {
    pub fn new(name: impl Into<String>, declarations: impl Into<Declarations>) -> Self {
        Self {
            name: name.into(),
            declarations: declarations.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// Renders the rule as a single class selector block.
    ///
    /// The class name is escaped as a CSS identifier; values are written
    /// verbatim.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(".")?;
        cssparser::serialize_identifier(&self.name, f)?;
        f.write_str("{")?;
        for (property, value) in self.declarations.iter() {
            write!(f, "{}:{};", property, value)?;
        }
        f.write_str("}")
    }
}

impl Named for Rule {
    const KIND: IdentifierKind = IdentifierKind::Rule;

    fn name(&self) -> &str {
        &self.name
    }
}
