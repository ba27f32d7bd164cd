/// Shape of a Go type as it appears in a function signature.
///
/// Decided once when the declaration is extracted, so translation only has
/// to match on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoType {
    /// Plain identifier: `int`, `string`, `float64`.
    Scalar(String),
    /// Slice or fixed array of a plain identifier: `[]int`, `[4]byte`.
    ArrayOf(String),
    /// Anything else (pointers, maps, qualified names, funcs...). Holds the
    /// source text.
    Unsupported(String),
}

impl GoType {
    pub fn source_text(&self) -> String {
        match self {
            Self::Scalar(name) => name.clone(),
            Self::ArrayOf(elem) => format!("[]{}", elem),
            Self::Unsupported(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: GoType,
}

/// A single function result. Go results carry no usable name here; the
/// reply field name is synthesized from the function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultField {
    pub ty: GoType,
}

/// Top-level Go function declaration reduced to what the proto generator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub is_exported: bool,
    pub parameters: Vec<Parameter>,
    pub results: Vec<ResultField>,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, results: Vec<ResultField>) -> Self {
        let name = name.into();
        let is_exported = is_exported(&name);
        Self {
            name,
            is_exported,
            parameters,
            results,
        }
    }
}

/// Go visibility rule: an identifier is exported when it starts with an
/// uppercase letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exported() {
        assert!(is_exported("Add"));
        assert!(is_exported("Über"));
        assert!(!is_exported("helper"));
        assert!(!is_exported("_Hidden"));
        assert!(!is_exported(""));
    }

    #[test]
    fn test_signature_new_sets_export_flag() {
        let sig = FunctionSignature::new("GetUser", Vec::new(), Vec::new());
        assert!(sig.is_exported);
        let sig = FunctionSignature::new("getUser", Vec::new(), Vec::new());
        assert!(!sig.is_exported);
    }

    #[test]
    fn test_go_type_source_text() {
        assert_eq!(GoType::Scalar("int".into()).source_text(), "int");
        assert_eq!(GoType::ArrayOf("string".into()).source_text(), "[]string");
        assert_eq!(GoType::Unsupported("*User".into()).source_text(), "*User");
    }
}
