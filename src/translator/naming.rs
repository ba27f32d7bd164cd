// === Go -> proto3 type and field naming ===

/// Map a Go primitive to its proto3 scalar. Exact and case-sensitive; any
/// other name passes through unchanged.
pub fn map_type(go_type: &str) -> &str {
    match go_type {
        "float64" => "double",
        "float32" => "float",
        "int" | "int8" | "int16" => "int32",
        "uint" | "uint8" | "uint16" => "uint32",
        other => other,
    }
}

/// Reply field name synthesized from the function name.
/// "getUser" -> "user", "GetBalance" -> "balance", "Fetch" -> "fetch".
/// A bare "get"/"Get" keeps the whole name.
pub fn derive_result_name(function_name: &str) -> String {
    let stripped = function_name
        .strip_prefix("get")
        .or_else(|| function_name.strip_prefix("Get"))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(function_name);
    lower_first(stripped)
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
