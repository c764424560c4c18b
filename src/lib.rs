//! Dialect-configurable SQL tokenizer.
//!
//! Turns raw SQL into an ordered, lossless sequence of typed tokens. What counts
//! as a command, an operator, a quoted string or a placeholder is supplied per
//! dialect as a [`DialectRuleSet`] value; one scanner serves every dialect.
//!
//! ```rust
//! use sqlscan::{TokenKind, postgresql, tokenize};
//!
//! let rules = postgresql().unwrap();
//! let tokens = tokenize("select * from t LEFT  JOIN u", &rules);
//! assert_eq!(tokens[0].kind, TokenKind::Command);
//! assert_eq!(tokens[0].canonical, "SELECT");
//! assert!(tokens.iter().any(|t| t.kind == TokenKind::Join && t.canonical == "LEFT JOIN"));
//! ```
reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(dialect);
reexport!(sql);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
