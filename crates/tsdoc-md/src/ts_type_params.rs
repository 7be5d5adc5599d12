//! TypeScript type parameter definitions
//!
//! This module provides types for representing generic type parameters
//! like `<T extends string>` on methods and constructors.

/// Type parameter definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsTypeParamDef {
    /// Parameter name (e.g., "T")
    pub name: String,

    /// Constraint text (e.g., `string` in `T extends string`)
    pub constraint: Option<String>,
}

impl TsTypeParamDef {
    /// Create a new type parameter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }

    /// Add a constraint
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    /// Render as `name: Constraint`, or just `name` when unconstrained
    pub fn to_signature(&self) -> String {
        match &self.constraint {
            Some(constraint) => format!("{}: {}", self.name, constraint),
            None => self.name.clone(),
        }
    }
}

/// Render a type parameter list without the surrounding angle brackets
pub fn render_type_params(params: &[TsTypeParamDef]) -> String {
    params
        .iter()
        .map(TsTypeParamDef::to_signature)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_type_param() {
        assert_eq!(TsTypeParamDef::new("T").to_signature(), "T");
    }

    #[test]
    fn test_type_param_with_constraint() {
        let param = TsTypeParamDef::new("P").with_constraint("string");
        assert_eq!(param.to_signature(), "P: string");
    }

    #[test]
    fn test_render_type_params() {
        let params = vec![
            TsTypeParamDef::new("K").with_constraint("keyof T"),
            TsTypeParamDef::new("V"),
        ];
        assert_eq!(render_type_params(&params), "K: keyof T, V");
        assert_eq!(render_type_params(&[]), "");
    }
}
