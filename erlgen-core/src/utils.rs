//! Case conversion and character sanitizing shared by every naming pipeline.

/// Characters that split words when camel-casing.
fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.' | '/')
}

/// Convert a separated name to camel case (e.g., "pet_id" -> "PetId").
///
/// A separator followed by another character is dropped and that character is
/// upper-cased. A trailing separator is kept, so "end_" stays "End_". The rest
/// of each word keeps its original case ("HTTPStatus" -> "HTTPStatus").
///
/// With `lower_first` the first character is lower-cased ("pet_id" -> "petId").
pub fn camelize(s: &str, lower_first: bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    let mut upper_next = true;

    while let Some(c) = chars.next() {
        if is_separator(c) && chars.peek().is_some() {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    if lower_first {
        lowercase_first(&out)
    } else {
        out
    }
}

/// Convert a camel-cased name to lower snake case (e.g., "PetApi" -> "pet_api").
///
/// Acronym runs are kept together: "HTTPStatus" -> "http_status".
pub fn underscore(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        if c == '-' {
            out.push('_');
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Strip or replace every character that cannot appear in an identifier.
///
/// - `"$"` alone becomes `"value"`
/// - `"input[]"` becomes `"input"`
/// - `"input[a](b)"` becomes `"input_a_b"`
/// - `.`, `-` and spaces become `_`
/// - anything else outside `[A-Za-z0-9_]` is dropped
///
/// The result may be empty when the input held no legal characters.
pub fn sanitize_name(name: &str) -> String {
    if name == "$" {
        return "value".to_string();
    }

    let name = name.replace("[]", "");
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '[' | '(' | '.' | '-' | ' ' => out.push('_'),
            ']' | ')' => {}
            c if c.is_ascii_alphanumeric() || c == '_' => out.push(c),
            _ => {}
        }
    }
    out
}

/// Returns true if the name begins with an ASCII digit.
pub fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_upper() {
        assert_eq!(camelize("phone_number", false), "PhoneNumber");
        assert_eq!(camelize("pet", false), "Pet");
        assert_eq!(camelize("user/name", false), "UserName");
        assert_eq!(camelize("created-at", false), "CreatedAt");
        assert_eq!(camelize("", false), "");
    }

    #[test]
    fn test_camelize_lower() {
        assert_eq!(camelize("pet_id", true), "petId");
        assert_eq!(camelize("created_at", true), "createdAt");
        assert_eq!(camelize("call_receive", true), "callReceive");
        assert_eq!(camelize("PetId", true), "petId");
        assert_eq!(camelize("", true), "");
    }

    #[test]
    fn test_camelize_keeps_trailing_separator() {
        assert_eq!(camelize("end_", false), "End_");
        assert_eq!(camelize("end_", true), "end_");
        assert_eq!(camelize("a__", false), "A_");
    }

    #[test]
    fn test_camelize_collapses_separator_runs() {
        assert_eq!(camelize("a__b", true), "aB");
        assert_eq!(camelize("_private", true), "private");
        assert_eq!(camelize("pet_1", false), "Pet1");
    }

    #[test]
    fn test_camelize_keeps_inner_case() {
        assert_eq!(camelize("HTTPStatus", false), "HTTPStatus");
        assert_eq!(camelize("getHTTPStatus", true), "getHTTPStatus");
    }

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("PetApi"), "pet_api");
        assert_eq!(underscore("Pet"), "pet");
        assert_eq!(underscore("HTTPStatus"), "http_status");
        assert_eq!(underscore("ABCDef"), "abc_def");
        assert_eq!(underscore("order2Item"), "order2_item");
        assert_eq!(underscore("store-order"), "store_order");
        assert_eq!(underscore("model_catch"), "model_catch");
        assert_eq!(underscore(""), "");
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("created-at"), "created_at");
        assert_eq!(sanitize_name("input[]"), "input");
        assert_eq!(sanitize_name("input[a][b]"), "input_a_b");
        assert_eq!(sanitize_name("input(a)(b)"), "input_a_b");
        assert_eq!(sanitize_name("input.name"), "input_name");
        assert_eq!(sanitize_name("name and age"), "name_and_age");
        assert_eq!(sanitize_name("$php_variable"), "php_variable");
        assert_eq!(sanitize_name("caf\u{e9}"), "caf");
    }

    #[test]
    fn test_sanitize_name_degenerate() {
        assert_eq!(sanitize_name("$"), "value");
        assert_eq!(sanitize_name(""), "");
        assert_eq!(sanitize_name("@#!"), "");
    }

    #[test]
    fn test_starts_with_digit() {
        assert!(starts_with_digit("1pet"));
        assert!(!starts_with_digit("pet1"));
        assert!(!starts_with_digit(""));
    }
}
