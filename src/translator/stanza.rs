use super::naming::{derive_result_name, map_type};
use crate::error::{ProtogenError, Result};
use crate::models::{FunctionSignature, GoType};

/// Placeholder message for functions without parameters or results.
pub const EMPTY_TYPE: &str = "google.protobuf.Empty";

/// How reply fields are named when a function returns several values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultNaming {
    /// Every result field gets the same derived name, even if that makes the
    /// message invalid.
    #[default]
    Shared,
    /// Multi-result functions get `name1`, `name2`, ...
    Positional,
}

fn request_type_name(sig: &FunctionSignature) -> String {
    if sig.parameters.is_empty() {
        EMPTY_TYPE.to_string()
    } else {
        format!("{}Request", sig.name)
    }
}

fn reply_type_name(sig: &FunctionSignature) -> String {
    if sig.results.is_empty() {
        EMPTY_TYPE.to_string()
    } else {
        format!("{}Reply", sig.name)
    }
}

/// `rpc` line for the service block. Emitted for every function, exported or
/// not, so unexported functions may reference messages that never get
/// generated.
pub fn method_stanza(sig: &FunctionSignature) -> String {
    format!(
        "\t rpc {}({}) returns ({}) {{}}\n",
        sig.name,
        request_type_name(sig),
        reply_type_name(sig)
    )
}

/// `<Name>Request` message, only for exported functions with parameters.
pub fn request_message(sig: &FunctionSignature) -> Result<Option<String>> {
    if !sig.is_exported || sig.parameters.is_empty() {
        return Ok(None);
    }

    let mut out = format!("\n\nmessage {}Request {{\n", sig.name);
    for (index, param) in sig.parameters.iter().enumerate() {
        let ty = match &param.ty {
            GoType::Scalar(name) => map_type(name),
            other => return Err(unsupported(sig, other)),
        };
        out.push_str(&format!("\t{} {} = {};\n", ty, param.name, index + 1));
    }
    out.push('}');

    Ok(Some(out))
}

/// `<Name>Reply` message, only for exported functions with results.
pub fn reply_message(sig: &FunctionSignature, naming: ResultNaming) -> Result<Option<String>> {
    if !sig.is_exported || sig.results.is_empty() {
        return Ok(None);
    }

    let field_name = derive_result_name(&sig.name);
    let suffixed = naming == ResultNaming::Positional && sig.results.len() > 1;

    let mut out = format!("\n\nmessage {}Reply {{\n", sig.name);
    for (index, result) in sig.results.iter().enumerate() {
        let ty = match &result.ty {
            GoType::Scalar(name) => map_type(name).to_string(),
            GoType::ArrayOf(elem) => format!("repeated {}", map_type(elem)),
            other => return Err(unsupported(sig, other)),
        };
        let number = index + 1;
        if suffixed {
            out.push_str(&format!("\t{} {}{} = {};\n", ty, field_name, number, number));
        } else {
            out.push_str(&format!("\t{} {} = {};\n", ty, field_name, number));
        }
    }
    out.push('}');

    Ok(Some(out))
}

fn unsupported(sig: &FunctionSignature, ty: &GoType) -> ProtogenError {
    ProtogenError::UnsupportedType {
        function: sig.name.clone(),
        ty: ty.source_text(),
    }
}
