pub const FIELD_DELIMITER: &str = ",";

// Fields are not quoted or escaped: a value containing the delimiter shifts
// every field after it when the line is read back.
pub fn join_fields(fields: &[&str]) -> String {
    fields.join(FIELD_DELIMITER)
}

// Splits a line on the delimiter, dropping trailing empty fields,
// so "a,b,," yields two fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    while fields.len() > 1 && fields.last().map_or(false, |f| f.is_empty()) {
        fields.pop();
    }
    if fields.len() == 1 && fields[0].is_empty() {
        fields.clear();
    }
    fields
}

// Anything other than "true" (ignoring case) reads as false.
pub fn parse_bool_field(field: &str) -> bool {
    field.eq_ignore_ascii_case("true")
}

pub fn bool_field(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
