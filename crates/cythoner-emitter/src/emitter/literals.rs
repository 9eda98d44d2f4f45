use cythoner_syntax::Literal;

/// Literal form of a constant. Strings are single-quoted; every other kind
/// keeps its natural textual form.
pub(super) fn literal_text(literal: &Literal) -> String {
    match literal {
        Literal::Str(text) => {
            let mut out = String::with_capacity(text.len() + 2);
            out.push('\'');
            escape_into(&mut out, text);
            out.push('\'');
            out
        }
        Literal::Int(text)
        | Literal::Float(text)
        | Literal::Complex(text)
        | Literal::Bytes(text) => text.clone(),
        Literal::Bool(true) => "True".to_string(),
        Literal::Bool(false) => "False".to_string(),
        Literal::None => "None".to_string(),
        Literal::Ellipsis => "...".to_string(),
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            // Control characters are all in the Latin-1 range.
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
}
