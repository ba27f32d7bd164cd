//! Scanner -> Translator -> Assembler.

use std::path::PathBuf;

use crate::assembler::assemble;
use crate::error::Result;
use crate::models::FunctionSignature;
use crate::scanner::Scanner;
use crate::translator::{method_stanza, reply_message, request_message, ResultNaming};

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub result_naming: ResultNaming,
}

/// Scan `paths` and render a proto3 service named `service_name`.
pub fn generate(service_name: &str, paths: &[PathBuf], options: GenerateOptions) -> Result<String> {
    let mut scanner = Scanner::new()?;
    let signatures = scanner.scan(paths);

    tracing::info!(
        "{} function(s) from {} file(s) into service {}",
        signatures.len(),
        paths.len(),
        service_name
    );

    render(service_name, &signatures, options)
}

/// Translate already extracted signatures into the final document.
pub fn render(
    service_name: &str,
    signatures: &[FunctionSignature],
    options: GenerateOptions,
) -> Result<String> {
    let methods: Vec<String> = signatures.iter().map(method_stanza).collect();

    let mut messages = Vec::new();
    for sig in signatures {
        messages.extend(request_message(sig)?);
        messages.extend(reply_message(sig, options.result_naming)?);
    }

    Ok(assemble(service_name, &methods, &messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtogenError;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_go(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_generate_add_example() {
        let dir = TempDir::new().unwrap();
        let path = write_go(
            dir.path(),
            "calc.go",
            "package calc\n\nfunc Add(a int, b int) int {\n\treturn a + b\n}\n",
        );

        let doc = generate("Calc", &[path], GenerateOptions::default()).unwrap();
        assert_eq!(
            doc,
            "syntax = \"proto3\";\n\n\
             import \"google/protobuf/empty.proto\";\n\n\
             service Calc {\n\
             \t rpc Add(AddRequest) returns (AddReply) {}\n\
             }\n\n\
             message AddRequest {\n\
             \tint32 a = 1;\n\
             \tint32 b = 2;\n\
             }\n\n\
             message AddReply {\n\
             \tint32 add = 1;\n\
             }"
        );
    }

    #[test]
    fn test_generate_unexported_helper_dangles() {
        let dir = TempDir::new().unwrap();
        let path = write_go(
            dir.path(),
            "helper.go",
            "package p\n\nfunc helper() string {\n\treturn \"\"\n}\n",
        );

        let doc = generate("Svc", &[path], GenerateOptions::default()).unwrap();
        assert!(doc.contains("\t rpc helper(google.protobuf.Empty) returns (helperReply) {}\n"));
        assert!(!doc.contains("message"));
        assert!(doc.ends_with("}"));
    }

    #[test]
    fn test_generate_no_files() {
        let doc = generate("Empty", &[], GenerateOptions::default()).unwrap();
        assert!(doc.ends_with("service Empty {\n}"));
        assert!(!doc.contains("rpc"));
    }

    #[test]
    fn test_generate_messages_interleave_per_function() {
        let dir = TempDir::new().unwrap();
        let path = write_go(
            dir.path(),
            "svc.go",
            r#"package svc

func GetUser(id uint) string { return "" }

func Ping() {}

func Scores(n int8) []float64 { return nil }
"#,
        );

        let doc = generate("Users", &[path], GenerateOptions::default()).unwrap();
        assert_eq!(doc.matches("\t rpc ").count(), 3);

        let order: Vec<usize> = [
            "message GetUserRequest",
            "message GetUserReply",
            "message ScoresRequest",
            "message ScoresReply",
        ]
        .iter()
        .map(|m| doc.find(m).unwrap())
        .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));

        assert!(doc.contains("\tuint32 id = 1;\n"));
        assert!(doc.contains("\tstring user = 1;\n"));
        assert!(doc.contains("\tint32 n = 1;\n"));
        assert!(doc.contains("\trepeated double scores = 1;\n"));
        assert!(doc.contains("rpc Ping(google.protobuf.Empty) returns (google.protobuf.Empty) {}"));
    }

    #[test]
    fn test_generate_unsupported_type_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_go(dir.path(), "p.go", "package p\nfunc Load() *Thing { return nil }\n");

        let err = generate("Svc", &[path], GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, ProtogenError::UnsupportedType { .. }));
    }

    #[test]
    fn test_generate_unsupported_type_in_unexported_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_go(dir.path(), "p.go", "package p\nfunc load() *Thing { return nil }\n");

        let doc = generate("Svc", &[path], GenerateOptions::default()).unwrap();
        assert!(doc.contains("rpc load(google.protobuf.Empty) returns (loadReply) {}"));
    }

    #[test]
    fn test_render_positional_naming() {
        let sig = crate::models::FunctionSignature::new(
            "Divide",
            Vec::new(),
            vec![
                crate::models::ResultField { ty: crate::models::GoType::Scalar("int".into()) },
                crate::models::ResultField { ty: crate::models::GoType::Scalar("int".into()) },
            ],
        );
        let options = GenerateOptions {
            result_naming: ResultNaming::Positional,
        };
        let doc = render("Math", &[sig], options).unwrap();
        assert!(doc.contains("\tint32 divide1 = 1;\n\tint32 divide2 = 2;\n"));
    }
}
