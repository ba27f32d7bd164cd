//! Document assembly: preamble, service block, then message blocks.

const PREAMBLE: &str = "syntax = \"proto3\";\n\nimport \"google/protobuf/empty.proto\";\n\n";

/// Build the proto3 document. Method stanzas go inside the service block in
/// order, message stanzas follow it in order. No trailing newline is added.
pub fn assemble<M, S>(service_name: &str, method_stanzas: M, message_stanzas: S) -> String
where
    M: IntoIterator,
    M::Item: AsRef<str>,
    S: IntoIterator,
    S::Item: AsRef<str>,
{
    let mut out = String::from(PREAMBLE);

    out.push_str("service ");
    out.push_str(service_name);
    out.push_str(" {\n");
    for stanza in method_stanzas {
        out.push_str(stanza.as_ref());
    }
    out.push('}');

    for stanza in message_stanzas {
        out.push_str(stanza.as_ref());
    }

    out
}
