//! # Component Identification
//!
//! Every operator in the framework carries a [`ComponentId`]: a small record
//! naming the component, its kind, what it does, its version, and the problem
//! and solution representation it targets. Records are created with
//! [`ComponentIdBuilder`], so any subset of fields can be set in any order.
//!
//! ## Example
//!
//! ```rust
//! use onion::component::ComponentId;
//!
//! let id = ComponentId::builder()
//!     .name("CreateRandom")
//!     .kind("Create Operator")
//!     .description("Creates a random hamiltonian cycle.")
//!     .problem("TSP")
//!     .build();
//!
//! assert_eq!(id.name(), "CreateRandom");
//! assert_eq!(id.version(), "v0.1.0");
//! println!("{}", id);
//! ```

use std::fmt;

/// Identification record of a framework component.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId {
    name: String,
    kind: String,
    description: String,
    version: String,
    problem: String,
    solution_type: String,
}

impl ComponentId {
    /// Starts a builder with every field at its default.
    pub fn builder() -> ComponentIdBuilder {
        ComponentIdBuilder::new()
    }

    /// Name of the component, usually the type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Component kind, e.g. "Create Operator".
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The problem the component belongs to, e.g. "TSP".
    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// The solution representation the component works on.
    pub fn solution_type(&self) -> &str {
        &self.solution_type
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self {
            name: "Not set".to_string(),
            kind: "Onion Framework Component".to_string(),
            description: "Not set".to_string(),
            version: "v0.1.0".to_string(),
            problem: "Any".to_string(),
            solution_type: "Any".to_string(),
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name          : {}", self.name)?;
        writeln!(f, "Type          : {}", self.kind)?;
        writeln!(f, "Description   : {}", self.description)?;
        writeln!(f, "Version       : {}", self.version)?;
        writeln!(f, "Problem       : {}", self.problem)?;
        writeln!(f, "Solution type : {}", self.solution_type)
    }
}

/// Builder for [`ComponentId`].
#[derive(Debug, Clone, Default)]
pub struct ComponentIdBuilder {
    id: ComponentId,
}

impl ComponentIdBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.id.name = name.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.id.kind = kind.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.id.description = description.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.id.version = version.into();
        self
    }

    pub fn problem(mut self, problem: impl Into<String>) -> Self {
        self.id.problem = problem.into();
        self
    }

    pub fn solution_type(mut self, solution_type: impl Into<String>) -> Self {
        self.id.solution_type = solution_type.into();
        self
    }

    pub fn build(self) -> ComponentId {
        self.id
    }
}

/// Types that carry a [`ComponentId`].
pub trait Identified {
    fn id(&self) -> &ComponentId;
}
