//! PostgreSQL rule set.
use crate::*;

// https://www.postgresql.org/docs/14/sql-commands.html
const COMMANDS: &[&str] = &[
    "ABORT",
    "ALTER AGGREGATE",
    "ALTER COLLATION",
    "ALTER CONVERSION",
    "ALTER DATABASE",
    "ALTER DEFAULT PRIVILEGES",
    "ALTER DOMAIN",
    "ALTER EVENT TRIGGER",
    "ALTER EXTENSION",
    "ALTER FOREIGN DATA WRAPPER",
    "ALTER FOREIGN TABLE",
    "ALTER FUNCTION",
    "ALTER GROUP",
    "ALTER INDEX",
    "ALTER LANGUAGE",
    "ALTER LARGE OBJECT",
    "ALTER MATERIALIZED VIEW",
    "ALTER OPERATOR",
    "ALTER OPERATOR CLASS",
    "ALTER OPERATOR FAMILY",
    "ALTER POLICY",
    "ALTER PROCEDURE",
    "ALTER PUBLICATION",
    "ALTER ROLE",
    "ALTER ROUTINE",
    "ALTER RULE",
    "ALTER SCHEMA",
    "ALTER SEQUENCE",
    "ALTER SERVER",
    "ALTER STATISTICS",
    "ALTER SUBSCRIPTION",
    "ALTER SYSTEM",
    "ALTER TABLE",
    "ALTER TABLESPACE",
    "ALTER TEXT SEARCH CONFIGURATION",
    "ALTER TEXT SEARCH DICTIONARY",
    "ALTER TEXT SEARCH PARSER",
    "ALTER TEXT SEARCH TEMPLATE",
    "ALTER TRIGGER",
    "ALTER TYPE",
    "ALTER USER",
    "ALTER USER MAPPING",
    "ALTER VIEW",
    "ANALYZE",
    "BEGIN",
    "CALL",
    "CHECKPOINT",
    "CLOSE",
    "CLUSTER",
    "COMMENT",
    "COMMIT",
    "COMMIT PREPARED",
    "COPY",
    "CREATE ACCESS METHOD",
    "CREATE AGGREGATE",
    "CREATE CAST",
    "CREATE COLLATION",
    "CREATE CONVERSION",
    "CREATE DATABASE",
    "CREATE DOMAIN",
    "CREATE EVENT TRIGGER",
    "CREATE EXTENSION",
    "CREATE FOREIGN DATA WRAPPER",
    "CREATE FOREIGN TABLE",
    "CREATE FUNCTION",
    "CREATE GROUP",
    "CREATE INDEX",
    "CREATE LANGUAGE",
    "CREATE MATERIALIZED VIEW",
    "CREATE OPERATOR",
    "CREATE OPERATOR CLASS",
    "CREATE OPERATOR FAMILY",
    "CREATE POLICY",
    "CREATE PROCEDURE",
    "CREATE PUBLICATION",
    "CREATE ROLE",
    "CREATE RULE",
    "CREATE SCHEMA",
    "CREATE SEQUENCE",
    "CREATE SERVER",
    "CREATE STATISTICS",
    "CREATE SUBSCRIPTION",
    "CREATE TABLE",
    "CREATE TABLE AS",
    "CREATE TABLESPACE",
    "CREATE TEXT SEARCH CONFIGURATION",
    "CREATE TEXT SEARCH DICTIONARY",
    "CREATE TEXT SEARCH PARSER",
    "CREATE TEXT SEARCH TEMPLATE",
    "CREATE TRANSFORM",
    "CREATE TRIGGER",
    "CREATE TYPE",
    "CREATE USER",
    "CREATE USER MAPPING",
    "CREATE VIEW",
    "DEALLOCATE",
    "DECLARE",
    "DELETE",
    "DELETE FROM",
    "DISCARD",
    "DO",
    "DROP ACCESS METHOD",
    "DROP AGGREGATE",
    "DROP CAST",
    "DROP COLLATION",
    "DROP CONVERSION",
    "DROP DATABASE",
    "DROP DOMAIN",
    "DROP EVENT TRIGGER",
    "DROP EXTENSION",
    "DROP FOREIGN DATA WRAPPER",
    "DROP FOREIGN TABLE",
    "DROP FUNCTION",
    "DROP GROUP",
    "DROP INDEX",
    "DROP LANGUAGE",
    "DROP MATERIALIZED VIEW",
    "DROP OPERATOR",
    "DROP OPERATOR CLASS",
    "DROP OPERATOR FAMILY",
    "DROP OWNED",
    "DROP POLICY",
    "DROP PROCEDURE",
    "DROP PUBLICATION",
    "DROP ROLE",
    "DROP ROUTINE",
    "DROP RULE",
    "DROP SCHEMA",
    "DROP SEQUENCE",
    "DROP SERVER",
    "DROP STATISTICS",
    "DROP SUBSCRIPTION",
    "DROP TABLE",
    "DROP TABLESPACE",
    "DROP TEXT SEARCH CONFIGURATION",
    "DROP TEXT SEARCH DICTIONARY",
    "DROP TEXT SEARCH PARSER",
    "DROP TEXT SEARCH TEMPLATE",
    "DROP TRANSFORM",
    "DROP TRIGGER",
    "DROP TYPE",
    "DROP USER",
    "DROP USER MAPPING",
    "DROP VIEW",
    "EXECUTE",
    "EXPLAIN",
    "FETCH",
    "GRANT",
    "IMPORT FOREIGN SCHEMA",
    "INSERT",
    "LISTEN",
    "LOAD",
    "LOCK",
    "MOVE",
    "NOTIFY",
    "PREPARE",
    "PREPARE TRANSACTION",
    "REASSIGN OWNED",
    "REFRESH MATERIALIZED VIEW",
    "REINDEX",
    "RELEASE SAVEPOINT",
    "RESET",
    "RETURNING",
    "REVOKE",
    "ROLLBACK",
    "ROLLBACK PREPARED",
    "ROLLBACK TO SAVEPOINT",
    "SAVEPOINT",
    "SECURITY LABEL",
    "SELECT",
    "SELECT INTO",
    "SET",
    "SET CONSTRAINTS",
    "SET ROLE",
    "SET SESSION AUTHORIZATION",
    "SET TRANSACTION",
    "SHOW",
    "START TRANSACTION",
    "TRUNCATE",
    "UNLISTEN",
    "UPDATE",
    "VACUUM",
    "VALUES",
    // clauses formatted like commands
    "ADD",
    "AFTER",
    "ALTER COLUMN",
    "INSERT INTO",
    "SET SCHEMA",
    "FROM",
    "GROUP BY",
    "HAVING",
    "LIMIT",
    "OFFSET",
    "ORDER BY",
    "WHERE",
    "WITH",
    "WINDOW",
    "PARTITION BY",
];

const SET_OPERATORS: &[&str] = &[
    "INTERSECT",
    "INTERSECT ALL",
    "INTERSECT DISTINCT",
    "UNION",
    "UNION ALL",
    "UNION DISTINCT",
    "EXCEPT",
    "EXCEPT ALL",
    "EXCEPT DISTINCT",
    "MINUS",
    "MINUS ALL",
    "MINUS DISTINCT",
];

const JOINS: &[&str] = &[
    "JOIN",
    "INNER JOIN",
    "LEFT JOIN",
    "LEFT OUTER JOIN",
    "RIGHT JOIN",
    "RIGHT OUTER JOIN",
    "FULL JOIN",
    "FULL OUTER JOIN",
    "CROSS JOIN",
    "NATURAL JOIN",
];

const DEPENDENT_CLAUSES: &[&str] = &["WHEN", "ELSE"];

// https://www.postgresql.org/docs/14/sql-keywords-appendix.html
// LEFT and RIGHT are left out so `left(s, n)` reads as a function call.
const KEYWORDS: &[&str] = &[
    "ALL",
    "ANALYSE",
    "AND",
    "ANY",
    "ARRAY",
    "AS",
    "ASC",
    "ASYMMETRIC",
    "BETWEEN",
    "BOTH",
    "BY",
    "CASCADE",
    "CASE",
    "CAST",
    "CHECK",
    "COLLATE",
    "COLUMN",
    "CONFLICT",
    "CONSTRAINT",
    "CURRENT_CATALOG",
    "CURRENT_DATE",
    "CURRENT_ROLE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT_USER",
    "DEFAULT",
    "DEFERRABLE",
    "DESC",
    "DISTINCT",
    "END",
    "EXISTS",
    "FALSE",
    "FILTER",
    "FOR",
    "FOREIGN",
    "GRANTED",
    "IF",
    "ILIKE",
    "IN",
    "INITIALLY",
    "INTERVAL",
    "INTO",
    "IS",
    "ISNULL",
    "KEY",
    "LATERAL",
    "LEADING",
    "LIKE",
    "LOCALTIME",
    "LOCALTIMESTAMP",
    "NOT",
    "NOTHING",
    "NOTNULL",
    "NULL",
    "NULLS",
    "ON",
    "ONLY",
    "OR",
    "OVER",
    "PARTITION",
    "PLACING",
    "PRIMARY",
    "RANGE",
    "RECURSIVE",
    "REFERENCES",
    "RESTRICT",
    "ROWS",
    "SESSION_USER",
    "SIMILAR",
    "SOME",
    "SYMMETRIC",
    "TABLE",
    "THEN",
    "TO",
    "TRAILING",
    "TRUE",
    "UNIQUE",
    "USER",
    "USING",
    "VARIADIC",
];

const FUNCTIONS: &[&str] = &[
    "ABS",
    "ARRAY_AGG",
    "ARRAY_LENGTH",
    "AVG",
    "CARDINALITY",
    "CEIL",
    "CEILING",
    "COALESCE",
    "CONCAT",
    "CONCAT_WS",
    "COUNT",
    "DATE_PART",
    "DATE_TRUNC",
    "DENSE_RANK",
    "EXTRACT",
    "FIRST_VALUE",
    "FLOOR",
    "FORMAT",
    "GENERATE_SERIES",
    "GREATEST",
    "JSON_AGG",
    "JSON_BUILD_OBJECT",
    "JSONB_AGG",
    "JSONB_BUILD_OBJECT",
    "LAG",
    "LAST_VALUE",
    "LEAD",
    "LEAST",
    "LEFT",
    "LENGTH",
    "LOWER",
    "MAX",
    "MD5",
    "MIN",
    "NOW",
    "NTILE",
    "NULLIF",
    "POSITION",
    "POWER",
    "RANDOM",
    "RANK",
    "REGEXP_MATCHES",
    "REGEXP_REPLACE",
    "REPLACE",
    "RIGHT",
    "ROUND",
    "ROW_NUMBER",
    "SPLIT_PART",
    "SQRT",
    "STRING_AGG",
    "SUBSTRING",
    "SUM",
    "TO_CHAR",
    "TO_DATE",
    "TO_TIMESTAMP",
    "UNNEST",
    "UPPER",
];

const OPERATORS: &[&str] = &[
    // arithmetic and comparison
    "+", "-", "*", "/", "%", "^", "@", "&", "|", "=", "<", ">", "<=", ">=", "<>", "!=",
    // math
    "<<", ">>", "|/", "||/", "!!",
    // string
    "||",
    // pattern matching
    "~~", "~~*", "!~~", "!~~*",
    // POSIX regexp
    "~", "~*", "!~", "!~*",
    // similarity
    "<%", "<<%", "%>", "%>>",
    // byte comparison
    "~>~", "~<~", "~>=~", "~<=~",
    // geometric
    "@-@", "@@", "#", "##", "<->", "&&", "&<", "&>", "<<|", "&<|", "|>>", "|&>", "<^", "^>",
    "?#", "?-", "?|", "?-|", "?||", "@>", "<@", "~=",
    // network address
    ">>=", "<<=",
    // text search
    "@@@",
    // JSON
    "?", "@?", "?&", "->", "->>", "#>", "#>>", "#-",
    // other
    ":=", "::", "=>", "-|-",
];

/// Rules for PostgreSQL 14.
///
/// Strings: `$tag$...$tag$`, `E'...'` with backslash escapes, and `'...'` with
/// optional `B`, `X` or `U&` prefixes. Identifiers: `"..."` with optional `U&`.
/// Placeholders: `$1`, `$2`, ... Block comments nest.
pub fn postgresql() -> Result<DialectRuleSet> {
    DialectRuleSet::builder("postgresql")
        .commands(COMMANDS.iter().copied())
        .set_operators(SET_OPERATORS.iter().copied())
        .joins(JOINS.iter().copied())
        .dependent_clauses(DEPENDENT_CLAUSES.iter().copied())
        .keywords(KEYWORDS.iter().copied())
        .function_names(FUNCTIONS.iter().copied())
        .operators(OPERATORS.iter().copied())
        .paren_pair("(", ")")
        .paren_pair("[", "]")
        .string_style(QuoteStyle::dollar_tagged())
        .string_style(
            QuoteStyle::symmetric("'")
                .with_prefixes(["E"])
                .prefix_required()
                .with_escape(Escape::DoubledOrBackslash),
        )
        .string_style(QuoteStyle::symmetric("'").with_prefixes(["B", "X", "U&"]))
        .identifier_style(QuoteStyle::symmetric("\"").with_prefixes(["U&"]))
        .identifier_chars(['$'])
        .placeholder_prefixes(['$'])
        .nested_block_comments(true)
        .build()
}
