use crate::testing::*;

/// Small rule set covering every matcher, with a few deliberate gaps: `COUNT`
/// is only a function name, `ASC` is nothing, `MAX` is both.
#[fixture]
pub fn rules() -> DialectRuleSet {
    common_init();
    DialectRuleSet::builder("test")
        .commands([
            "SELECT",
            "FROM",
            "WHERE",
            "CREATE TABLE",
            "CREATE TABLE AS",
            "INSERT",
            "INSERT INTO",
            "GROUP BY",
            "ORDER BY",
        ])
        .set_operators(["UNION", "UNION ALL"])
        .joins(["JOIN", "LEFT JOIN", "LEFT OUTER JOIN"])
        .dependent_clauses(["WHEN", "ELSE"])
        .keywords(["AS", "AND", "OR", "NOT", "NULL", "CASE", "END", "DISTINCT", "MAX"])
        .function_names(["COUNT", "MAX", "LOWER"])
        .operators(["=", "<", ">", "<=", ">=", "<>", "!=", "+", "-", "*", "/", "||", "::"])
        .paren_pair("(", ")")
        .paren_pair("[", "]")
        .string_style(QuoteStyle::symmetric("'"))
        .string_style(QuoteStyle::dollar_tagged())
        .identifier_style(QuoteStyle::symmetric("\"").with_prefixes(["U&"]))
        .identifier_style(QuoteStyle::symmetric("`"))
        .placeholder_prefixes(['$', ':'])
        .identifier_chars(['$'])
        .build()
        .unwrap()
}

#[fixture]
pub fn pg() -> DialectRuleSet {
    common_init();
    postgresql().unwrap()
}
